//! Error types for the storage engine.

use thiserror::Error;

/// Result type for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// Errors that can occur in storage operations.
///
/// Collaborator failures are classified, never swallowed: an error from the
/// backend or the serializer fails the whole operation with no partial
/// write committed.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Database error from SQLite.
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// Serialization/deserialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A criterion referenced a field with no matching index declaration.
    #[error("unknown index field: {0}")]
    UnknownIndexField(String),

    /// A destructive operation was rejected by configuration.
    #[error("destructive operations are disabled for this store")]
    DestructiveOperationDenied,

    /// Invalid storage configuration.
    #[error("invalid options: {0}")]
    InvalidOptions(String),
}
