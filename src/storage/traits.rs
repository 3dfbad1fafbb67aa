//! Storage trait definitions

use crate::metrics::{DateHistory, DocumentId};
use std::path::Path;
use thiserror::Error;

/// Errors that can occur during storage operations
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Persistent mapping from document identity to its writing history
///
/// Implementations must be thread-safe (Send + Sync). A saved date set
/// never shrinks: `save_history` merges with what is already stored.
pub trait HistoryStore: Send + Sync {
    /// Load a document's history, `None` if it was never observed
    fn load_history(&self, id: &DocumentId) -> StorageResult<Option<DateHistory>>;

    /// Save a document's history, merging with the stored date set
    fn save_history(&self, id: &DocumentId, history: &DateHistory) -> StorageResult<()>;

    /// List all documents with a stored history
    fn list_documents(&self) -> StorageResult<Vec<DocumentId>>;
}

/// Extension trait for opening stores from paths
pub trait OpenStore: HistoryStore + Sized {
    /// Open or create a store at the given path
    fn open(path: impl AsRef<Path>) -> StorageResult<Self>;

    /// Create an in-memory store (useful for testing)
    fn open_in_memory() -> StorageResult<Self>;
}
