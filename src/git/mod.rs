//! Git operations abstraction layer
//!
//! This module provides a trait-based abstraction over the single git query
//! git-version needs: describing HEAD relative to its nearest tag.
//!
//! # Overview
//!
//! - [repository::Git2Repository]: A real implementation using the `git2` crate
//! - [mock::MockRepository]: A mock implementation for testing
//!
//! Code that generates version files should depend on the [Repository] trait
//! so it can be exercised without a real repository.
//!
//! ```rust
//! # use git_version_builder::git::Repository;
//! # fn example<R: Repository>(repo: &R) -> Result<(), Box<dyn std::error::Error>> {
//! let output = repo.describe_head(7)?;
//! let info = output.parse()?;
//! println!("{}", info.version_string());
//! # Ok(())
//! # }
//! ```

pub mod mock;
pub mod repository;

pub use mock::MockRepository;
pub use repository::Git2Repository;

use crate::describe::DescribeOutput;
use crate::error::Result;

/// Common git operation trait for abstraction
///
/// ## Thread Safety
///
/// Implementors must be `Send`; `git2::Repository` is not `Sync`, so a
/// repository handle may move between threads but not be shared.
///
/// ## Error Handling
///
/// Implementations map underlying errors (like `git2::Error`) to
/// [crate::error::GitVersionError] variants.
pub trait Repository: Send {
    /// Describe HEAD relative to the nearest reachable tag
    ///
    /// The description is always in long form, `[<tag>-]<count>-g<id>[-dirty]`.
    /// When no tag is reachable there is no tag prefix, `tag_name` is `None` and
    /// the count covers every commit reachable from HEAD.
    ///
    /// # Arguments
    /// * `abbrev` - Number of hex digits of the abbreviated commit id
    ///
    /// # Returns
    /// * `Ok(DescribeOutput)` - Description and separately reported tag name
    /// * `Err` - If HEAD cannot be resolved or a Git error occurs
    fn describe_head(&self, abbrev: u32) -> Result<DescribeOutput>;
}
