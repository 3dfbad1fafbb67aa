//! Storage backends for writing histories
//!
//! Histories are persisted through the `HistoryStore` trait. The primary
//! implementation is `SqliteStore`.

mod sqlite;
mod traits;

pub use sqlite::SqliteStore;
pub use traits::{HistoryStore, OpenStore, StorageError, StorageResult};
