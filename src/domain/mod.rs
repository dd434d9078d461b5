//! Domain logic - pure version rules independent of git operations

pub mod tag;
pub mod version;

pub use tag::TagVersion;
pub use version::{VersionInfo, NO_TAG_NAME};
