use regex::Regex;
use std::sync::LazyLock;

/// Numeric-dotted prefix, optionally led by `v`/`V`, followed by a free-form suffix.
static TAG_VERSION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[vV]?(\d+(?:\.\d+)*)-?(.*)$").expect("tag version pattern is valid")
});

/// Version components extracted from a tag name
///
/// Components are kept as the literal strings found in the tag, so `"1.06"`
/// yields `["1", "06"]` rather than a normalized number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagVersion {
    pub components: Vec<String>,
    pub tag: String,
}

impl TagVersion {
    /// Split a tag name into its numeric components and trailing tag
    ///
    /// Returns `None` when the tag does not start with a numeric-dotted version
    /// (e.g. `"versionone"`).
    ///
    /// # Example
    /// ```ignore
    /// let v = TagVersion::parse("1.6-alpha").unwrap();
    /// assert_eq!(v.components, vec!["1", "6"]);
    /// assert_eq!(v.tag, "alpha");
    /// ```
    pub fn parse(tag_name: &str) -> Option<Self> {
        let captures = TAG_VERSION_RE.captures(tag_name)?;
        let numbers = captures.get(1)?.as_str();
        let suffix = captures.get(2).map(|m| m.as_str()).unwrap_or("");

        Some(TagVersion {
            components: numbers.split('.').map(str::to_string).collect(),
            tag: suffix.to_string(),
        })
    }

    /// Whether the trailing tag marks a release build
    pub fn is_stable_tag(&self) -> bool {
        self.tag.is_empty() || self.tag == "stable"
    }
}
