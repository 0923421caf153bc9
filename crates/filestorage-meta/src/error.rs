/// Errors from metadata store operations.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum MetaError {
    /// The value is not the record type this store holds.
    #[error("invalid metadata type: expected {expected}")]
    InvalidType { expected: &'static str },

    /// No record is held under the identifier.
    #[error("metadata not found: {id:?}")]
    NotFound { id: String },

    /// The submitted record already carries an identifier.
    #[error("metadata ID already set: {id}")]
    IdAlreadySet { id: String },
}

/// Result alias for metadata store operations.
pub type MetaResult<T> = Result<T, MetaError>;
