//! Error types and result types for employee store operations.
//!
//! Absence of a document is never represented here: lookups that find
//! nothing yield `Option::None` or an empty stream. Use [`StoreResult<T>`]
//! as the return type for fallible operations.

use bson::error::Error as BsonError;
use serde_json::Error as SerdeJsonError;
use thiserror::Error;

/// Represents all possible errors that can occur when interacting with an employee store.
///
/// This enum covers serialization errors, store initialization, and backend-specific
/// faults. Every variant is unrecoverable at this layer and propagates unchanged to
/// the caller.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Serialization/deserialization error when converting between document formats (BSON, JSON).
    #[error("Serialization error: {0}")]
    Serialization(String),
    /// Error during store initialization or connection setup.
    #[error("Initialization error: {0}")]
    Initialization(String),
    /// A stored value that was expected to be a BSON document is not one.
    #[error("Invalid document: {0}")]
    InvalidDocument(String),
    /// An error occurred in the underlying storage backend (connectivity, timeout, I/O).
    #[error("Backend error: {0}")]
    Backend(String),
}

/// A specialized `Result` type for employee store operations.
///
/// This type alias is used throughout the crate to indicate operations that may fail
/// with a [`StoreError`].
pub type StoreResult<T> = Result<T, StoreError>;

impl From<BsonError> for StoreError {
    fn from(err: BsonError) -> Self {
        StoreError::Serialization(err.to_string())
    }
}

impl From<SerdeJsonError> for StoreError {
    fn from(err: SerdeJsonError) -> Self {
        StoreError::Serialization(err.to_string())
    }
}
