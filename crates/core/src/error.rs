//! Error types for the symbpe crates.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type shared by the symbpe library crates.
#[derive(Error, Debug)]
pub enum BpeError {
    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// I/O error with file context
    #[error("I/O error for {path}: {err}")]
    Io {
        path: PathBuf,
        #[source]
        err: std::io::Error,
    },

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Malformed input at a given (1-based) line
    #[error("Parse error at line {line}: {message}")]
    Parse { line: usize, message: String },
}

impl BpeError {
    /// Wrap an I/O error together with the path it concerns.
    pub fn io(path: impl Into<PathBuf>, err: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            err,
        }
    }
}

/// Result type alias for symbpe operations.
pub type Result<T> = std::result::Result<T, BpeError>;
