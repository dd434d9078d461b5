use regex::Regex;
use std::sync::LazyLock;

use crate::domain::VersionInfo;
use crate::error::{GitVersionError, Result};

/// Suffix appended by `git describe --dirty`.
pub const DIRTY_SUFFIX: &str = "-dirty";

/// `[<tag>-]<count>-[g]<hex id>`, with the tag itself allowed to contain dashes.
static DESCRIPTION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:(.*)-)?(\d+)-g?([0-9a-fA-F]+)$").expect("description pattern is valid")
});

/// Raw output of a describe query, as handed over by a repository
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DescribeOutput {
    /// Long-form description, e.g. `v1.0-2-g230a-dirty`
    pub description: String,
    /// Nearest tag, reported separately from the description
    pub tag_name: Option<String>,
}

impl DescribeOutput {
    pub fn new(description: impl Into<String>, tag_name: Option<String>) -> Self {
        DescribeOutput {
            description: description.into(),
            tag_name,
        }
    }

    /// Parse into a version record
    pub fn parse(&self) -> Result<VersionInfo> {
        parse(&self.description, self.tag_name.as_deref())
    }
}

/// Parses a describe string into a [`VersionInfo`].
///
/// The description must end in `<count>-<hex id>`, optionally followed by
/// `-dirty`. The `g` git puts in front of the id is dropped. The tag is taken
/// from `tag_name` when given, otherwise from whatever precedes the count; if
/// neither is present the record has no tag and the count is trusted as-is.
///
/// # Arguments
/// * `raw_description` - Output of a describe query (e.g. `"v1.0-2-g230a-dirty"`)
/// * `tag_name` - Tag reported separately by the repository, if any
///
/// # Returns
/// * `Ok(VersionInfo)` - Parsed version record
/// * `Err(MalformedDescription)` - If the trailing `<count>-<id>` shape is missing
///
/// # Example
/// ```ignore
/// let info = parse("v1.0-2-g230a-dirty", Some("v1.0")).unwrap();
/// assert_eq!(info.commits_since_tag(), 2);
/// assert_eq!(info.commit_id(), "230a");
/// assert!(info.is_dirty());
/// ```
pub fn parse(raw_description: &str, tag_name: Option<&str>) -> Result<VersionInfo> {
    let description = raw_description.trim();
    let (rest, is_dirty) = match description.strip_suffix(DIRTY_SUFFIX) {
        Some(rest) => (rest, true),
        None => (description, false),
    };

    let captures = DESCRIPTION_RE.captures(rest).ok_or_else(|| {
        GitVersionError::malformed(format!(
            "'{}' does not end in <count>-<commit id>",
            raw_description
        ))
    })?;

    let count = &captures[2];
    let commits_since_tag = count.parse::<u32>().map_err(|_| {
        GitVersionError::malformed(format!("commit count '{}' is out of range", count))
    })?;
    let commit_id = captures[3].to_string();

    let tag = tag_name
        .map(str::to_string)
        .or_else(|| captures.get(1).map(|m| m.as_str().to_string()))
        .filter(|t| !t.is_empty());

    VersionInfo::new(tag, commits_since_tag, commit_id, is_dirty)
}
