use thiserror::Error;

/// Unified error type for git-version operations
#[derive(Error, Debug)]
pub enum GitVersionError {
    #[error("Malformed description: {0}")]
    MalformedDescription(String),

    #[error("Unsupported output format: {0}")]
    UnsupportedFormat(String),

    #[error("Invalid version info: {0}")]
    InvalidVersionInfo(String),

    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in git-version
pub type Result<T> = std::result::Result<T, GitVersionError>;

impl GitVersionError {
    /// Create a malformed-description error with context
    pub fn malformed(msg: impl Into<String>) -> Self {
        GitVersionError::MalformedDescription(msg.into())
    }

    /// Create an unsupported-format error for the requested format name
    pub fn unsupported_format(name: impl Into<String>) -> Self {
        GitVersionError::UnsupportedFormat(name.into())
    }

    /// Create an invalid-version-info error with context
    pub fn invalid(msg: impl Into<String>) -> Self {
        GitVersionError::InvalidVersionInfo(msg.into())
    }

    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        GitVersionError::Config(msg.into())
    }
}
