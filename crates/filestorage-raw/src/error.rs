//! Error types for raw file storage operations.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur during raw file storage operations.
#[derive(Debug, Error)]
pub enum RawError {
    /// The root directory is missing or is not a directory.
    #[error("invalid root directory {path:?}: {reason}")]
    InvalidRoot { path: PathBuf, reason: String },

    /// No file is stored under the name.
    #[error("file not found: {name}")]
    NotFound { name: String },

    /// The name cannot be mapped to a file directly under the root.
    #[error("invalid file name {name:?}: {reason}")]
    InvalidName { name: String, reason: String },

    /// The content stream ended before the declared length.
    #[error("invalid size for {name}: expected {expected} bytes, got {actual}")]
    InvalidSize {
        name: String,
        expected: u64,
        actual: u64,
    },

    /// The configuration could not be parsed.
    #[error("config error: {0}")]
    Config(String),

    /// I/O error from the underlying filesystem.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for raw storage operations.
pub type RawResult<T> = std::result::Result<T, RawError>;
