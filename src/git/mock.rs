use crate::describe::{DescribeOutput, DIRTY_SUFFIX};
use crate::error::{GitVersionError, Result};
use crate::git::Repository;

/// Mock repository for testing without actual git operations
pub struct MockRepository {
    tag: Option<String>,
    commits_since_tag: u32,
    head_id: String,
    dirty: bool,
    failure: Option<String>,
}

impl MockRepository {
    /// Create a mock whose HEAD sits `commits_since_tag` commits after `tag`
    pub fn tagged(
        tag: impl Into<String>,
        commits_since_tag: u32,
        head_id: impl Into<String>,
    ) -> Self {
        MockRepository {
            tag: Some(tag.into()),
            commits_since_tag,
            head_id: head_id.into(),
            dirty: false,
            failure: None,
        }
    }

    /// Create a mock without tags, with `commit_count` commits reachable from HEAD
    pub fn untagged(commit_count: u32, head_id: impl Into<String>) -> Self {
        MockRepository {
            tag: None,
            commits_since_tag: commit_count,
            head_id: head_id.into(),
            dirty: false,
            failure: None,
        }
    }

    /// Create a mock whose describe query always fails
    pub fn failing(message: impl Into<String>) -> Self {
        MockRepository {
            tag: None,
            commits_since_tag: 0,
            head_id: String::new(),
            dirty: false,
            failure: Some(message.into()),
        }
    }

    /// Mark the working tree as dirty
    pub fn set_dirty(&mut self, dirty: bool) {
        self.dirty = dirty;
    }
}

impl Repository for MockRepository {
    fn describe_head(&self, abbrev: u32) -> Result<DescribeOutput> {
        if let Some(message) = &self.failure {
            return Err(GitVersionError::Git(git2::Error::from_str(message)));
        }

        let short_id = &self.head_id[..(abbrev as usize).min(self.head_id.len())];
        let mut description = match &self.tag {
            Some(tag) => format!("{}-{}-g{}", tag, self.commits_since_tag, short_id),
            None => format!("{}-g{}", self.commits_since_tag, short_id),
        };
        if self.dirty {
            description.push_str(DIRTY_SUFFIX);
        }

        Ok(DescribeOutput::new(description, self.tag.clone()))
    }
}
