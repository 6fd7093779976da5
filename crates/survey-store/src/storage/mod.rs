//! Result storage abstraction and implementations
//!
//! Trait-based storage for the completed-record collection with a local
//! single-file implementation. Persistence is synchronous: there is exactly
//! one writer per execution context, so the whole collection is
//! read-modify-written without further coordination.

mod local;

pub use local::LocalResultStorage;

use survey_core::AnswerRecord;
use thiserror::Error;

/// Storage operation errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Storage path not available")]
    PathUnavailable,
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Storage backend for the completed-record collection
pub trait ResultStorage {
    /// Load the whole stored collection. Absent or corrupt payloads read as
    /// empty, never as an error.
    fn load_all(&self) -> StorageResult<Vec<AnswerRecord>>;

    /// Persist the whole collection, replacing whatever was stored
    fn save_all(&self, records: &[AnswerRecord]) -> StorageResult<()>;
}
