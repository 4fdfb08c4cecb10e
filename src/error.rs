use thiserror::Error;

/// Unified error type for refsieve operations
#[derive(Error, Debug)]
pub enum RefSieveError {
    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Pattern error: {0}")]
    Pattern(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in refsieve
pub type Result<T> = std::result::Result<T, RefSieveError>;

impl RefSieveError {
    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        RefSieveError::Config(msg.into())
    }

    /// Create a pattern error with context
    pub fn pattern(msg: impl Into<String>) -> Self {
        RefSieveError::Pattern(msg.into())
    }
}
