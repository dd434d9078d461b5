use std::fmt;
use std::path::PathBuf;

/// Warnings that occur while deriving a version near repository boundaries.
/// These are non-fatal issues that should be reported to the user.
#[derive(Debug, Clone, PartialEq)]
pub enum BoundaryWarning {
    /// No tag is reachable from HEAD
    NoTagFound { commit_id: String },
    /// Working tree has uncommitted changes
    DirtyWorkingTree { commit_id: String },
    /// Tag exists but carries no numeric version
    UnparsableTagVersion { tag: String },
    /// Generated file already has the rendered content
    OutputUnchanged { path: PathBuf },
}

impl fmt::Display for BoundaryWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoundaryWarning::NoTagFound { commit_id } => {
                write!(
                    f,
                    "No tag reachable from HEAD ({}), versioning as 'develop'",
                    commit_id
                )
            }
            BoundaryWarning::DirtyWorkingTree { commit_id } => {
                write!(
                    f,
                    "Working tree has uncommitted changes on top of {}",
                    commit_id
                )
            }
            BoundaryWarning::UnparsableTagVersion { tag } => {
                write!(
                    f,
                    "Tag '{}' has no numeric version, VERSION_COMPONENTS will be omitted",
                    tag
                )
            }
            BoundaryWarning::OutputUnchanged { path } => {
                write!(f, "{} is up to date", path.display())
            }
        }
    }
}
