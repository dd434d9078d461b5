use crate::domain::tag::TagVersion;
use crate::error::{GitVersionError, Result};

/// Tag name reported when the repository has no reachable tag.
pub const NO_TAG_NAME: &str = "develop";

/// Version state of a repository at a single commit
///
/// Built once from a parsed description and consumed by the renderer.
/// A missing tag is stored as `None`; a tag literally named `develop` is
/// treated the same way so it never counts as a release.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionInfo {
    tag: Option<String>,
    commits_since_tag: u32,
    commit_id: String,
    is_dirty: bool,
}

impl VersionInfo {
    /// Create a version info, validating the commit id
    ///
    /// # Arguments
    /// * `tag` - Nearest tag, or `None` when no tag is reachable
    /// * `commits_since_tag` - Commits between the tag and HEAD
    /// * `commit_id` - Abbreviated commit id (must not be empty)
    /// * `is_dirty` - Whether the working tree had uncommitted changes
    pub fn new(
        tag: Option<String>,
        commits_since_tag: u32,
        commit_id: impl Into<String>,
        is_dirty: bool,
    ) -> Result<Self> {
        let commit_id = commit_id.into();
        if commit_id.is_empty() {
            return Err(GitVersionError::invalid("commit id must not be empty"));
        }

        Ok(VersionInfo {
            tag: tag.filter(|t| t != NO_TAG_NAME),
            commits_since_tag,
            commit_id,
            is_dirty,
        })
    }

    /// Shorthand for a clean working tree at a tagged history
    pub fn tagged(
        tag: impl Into<String>,
        commits_since_tag: u32,
        commit_id: impl Into<String>,
    ) -> Result<Self> {
        Self::new(Some(tag.into()), commits_since_tag, commit_id, false)
    }

    /// Shorthand for a clean working tree without any reachable tag
    pub fn untagged(commits_since_tag: u32, commit_id: impl Into<String>) -> Result<Self> {
        Self::new(None, commits_since_tag, commit_id, false)
    }

    /// Mark the working tree as dirty
    pub fn with_dirty(mut self, is_dirty: bool) -> Self {
        self.is_dirty = is_dirty;
        self
    }

    pub fn tag(&self) -> Option<&str> {
        self.tag.as_deref()
    }

    /// Tag name as written to generated files (`develop` when there is no tag)
    pub fn tag_name(&self) -> &str {
        self.tag.as_deref().unwrap_or(NO_TAG_NAME)
    }

    pub fn commits_since_tag(&self) -> u32 {
        self.commits_since_tag
    }

    pub fn commit_id(&self) -> &str {
        &self.commit_id
    }

    pub fn is_dirty(&self) -> bool {
        self.is_dirty
    }

    /// Anything past the tag, or local modifications, make a dev version
    pub fn is_dev_version(&self) -> bool {
        self.commits_since_tag > 0 || self.is_dirty
    }

    /// Full version string, e.g. `1.6-alpha-dev2-230a`
    pub fn version_string(&self) -> String {
        if self.is_dev_version() {
            format!(
                "{}-dev{}-{}",
                self.tag_name(),
                self.commits_since_tag,
                self.commit_id
            )
        } else {
            self.tag_name().to_string()
        }
    }

    /// Numeric components and trailing tag, if the tag looks like a version
    pub fn tag_version(&self) -> Option<TagVersion> {
        self.tag.as_deref().and_then(TagVersion::parse)
    }

    /// Stability of the build, or `None` when there is no tag to judge
    ///
    /// A non-dev build is stable unless its tag carries a pre-release suffix
    /// other than `stable`.
    pub fn is_stable_version(&self) -> Option<bool> {
        self.tag.as_ref()?;
        let stable_suffix = self
            .tag_version()
            .map(|v| v.is_stable_tag())
            .unwrap_or(true);
        Some(!self.is_dev_version() && stable_suffix)
    }
}
