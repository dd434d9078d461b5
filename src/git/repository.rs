use crate::describe::{DescribeOutput, DIRTY_SUFFIX};
use crate::error::Result;
use git2::{
    DescribeFormatOptions, DescribeOptions, ErrorClass, ErrorCode, Repository as Git2Repo,
    StatusOptions,
};
use std::path::Path;
use tracing::debug;

/// Shortest abbreviated commit id git accepts.
pub const MIN_ABBREV: u32 = 4;
/// Length of a full SHA-1 hex id.
pub const MAX_ABBREV: u32 = 40;

/// Wrapper around git2::Repository with our trait interface
pub struct Git2Repository {
    repo: Git2Repo,
}

impl Git2Repository {
    /// Open or discover a git repository
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = Git2Repo::discover(path)?;

        Ok(Git2Repository { repo })
    }

    /// Create from existing git2::Repository
    pub fn from_git2(repo: Git2Repo) -> Self {
        Git2Repository { repo }
    }

    /// Whether tracked files differ from HEAD; bare repositories are never dirty
    fn is_dirty(&self) -> Result<bool> {
        if self.repo.is_bare() {
            return Ok(false);
        }

        let mut options = StatusOptions::new();
        options
            .include_untracked(false)
            .include_ignored(false)
            .exclude_submodules(true);
        let statuses = self.repo.statuses(Some(&mut options))?;
        Ok(!statuses.is_empty())
    }

    /// Count every commit reachable from HEAD
    fn count_head_commits(&self) -> Result<u32> {
        let mut revwalk = self.repo.revwalk()?;
        revwalk.push_head()?;

        let mut count = 0u32;
        for oid in revwalk {
            oid?;
            count = count.saturating_add(1);
        }
        Ok(count)
    }

    /// Long-form description for a history without any reachable tag
    fn describe_untagged(&self, head_id: &str, abbrev: u32) -> Result<DescribeOutput> {
        let count = self.count_head_commits()?;
        let short_id = &head_id[..(abbrev as usize).min(head_id.len())];
        let dirty = if self.is_dirty()? { DIRTY_SUFFIX } else { "" };

        let description = format!("{}-g{}{}", count, short_id, dirty);
        debug!(%description, "no reachable tag, counted commits from root");
        Ok(DescribeOutput::new(description, None))
    }
}

/// libgit2 reports "no tag can describe this commit" as a describe-class error
fn is_missing_tag(err: &git2::Error) -> bool {
    err.code() == ErrorCode::NotFound || err.class() == ErrorClass::Describe
}

impl super::Repository for Git2Repository {
    fn describe_head(&self, abbrev: u32) -> Result<DescribeOutput> {
        let abbrev = abbrev.clamp(MIN_ABBREV, MAX_ABBREV);
        let head = self.repo.head()?.peel_to_commit()?;
        let head_id = head.id().to_string();

        let mut options = DescribeOptions::new();
        options.describe_tags();

        // Describe the commit rather than the workdir so dirtiness follows is_dirty()
        let describe = match head.as_object().describe(&options) {
            Ok(describe) => describe,
            Err(e) if is_missing_tag(&e) => {
                debug!(error = %e, "describe found no tag");
                return self.describe_untagged(&head_id, abbrev);
            }
            Err(e) => return Err(e.into()),
        };

        let mut long_format = DescribeFormatOptions::new();
        long_format
            .abbreviated_size(abbrev)
            .always_use_long_format(true);
        let mut description = describe.format(Some(&long_format))?;
        if self.is_dirty()? {
            description.push_str(DIRTY_SUFFIX);
        }

        // An abbreviation size of zero prints the bare tag name
        let mut tag_format = DescribeFormatOptions::new();
        tag_format.abbreviated_size(0);
        let tag_name = describe.format(Some(&tag_format))?;

        debug!(%description, %tag_name, "described HEAD");
        Ok(DescribeOutput::new(description, Some(tag_name)))
    }
}
