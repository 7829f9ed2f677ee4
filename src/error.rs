use std::path::PathBuf;
use thiserror::Error;

/// Unified error type for bump-versions operations
#[derive(Error, Debug)]
pub enum BumpError {
    #[error("Invalid version component '{token}' in '{input}'")]
    Parse { token: String, input: String },

    #[error("Pattern not found: {0}")]
    NotFound(String),

    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Pattern error: {0}")]
    Pattern(String),
}

/// Convenience type alias for Results in bump-versions
pub type Result<T> = std::result::Result<T, BumpError>;

impl BumpError {
    /// Create a parse error for a single bad version token
    pub fn parse(token: impl Into<String>, input: impl Into<String>) -> Self {
        BumpError::Parse {
            token: token.into(),
            input: input.into(),
        }
    }

    /// Create a not-found error carrying the searched pattern
    pub fn not_found(pattern: impl Into<String>) -> Self {
        BumpError::NotFound(pattern.into())
    }

    /// Attach a path to an I/O failure
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        BumpError::Io {
            path: path.into(),
            source,
        }
    }

    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        BumpError::Config(msg.into())
    }

    /// Create a pattern error with context
    pub fn pattern(msg: impl Into<String>) -> Self {
        BumpError::Pattern(msg.into())
    }
}

impl From<regex::Error> for BumpError {
    fn from(err: regex::Error) -> Self {
        BumpError::Pattern(err.to_string())
    }
}
