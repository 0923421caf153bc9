use thiserror::Error;

/// Errors produced by record operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeError {
    #[error("missing checksum format for checksum {checksum:?}")]
    MissingChecksumFormat { checksum: String },
}

/// Result alias for record operations.
pub type TypeResult<T> = Result<T, TypeError>;
