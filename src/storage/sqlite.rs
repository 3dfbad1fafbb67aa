//! SQLite storage backend for writing histories

use super::traits::{HistoryStore, OpenStore, StorageResult};
use crate::metrics::{DateHistory, DocumentId, DATE_FORMAT};
use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;
use std::sync::{Mutex, MutexGuard};

/// SQLite-backed history store
///
/// One row per document: the date set as a JSON array of `YYYY-MM-DD`
/// strings plus the last-opened date. Thread-safe via internal mutex on
/// the connection.
pub struct SqliteStore {
    conn: Mutex<Connection>,
}

impl SqliteStore {
    fn init_schema(conn: &Connection) -> StorageResult<()> {
        conn.execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS histories (
                document_id TEXT PRIMARY KEY,
                dates_json TEXT NOT NULL,
                last_opened TEXT
            );

            -- Enable WAL mode for concurrent reads during writes
            PRAGMA journal_mode = WAL;
            "#,
        )?;
        Ok(())
    }

    fn conn(&self) -> MutexGuard<'_, Connection> {
        // A panic while holding the lock leaves no partial write behind:
        // every write runs inside a transaction.
        self.conn.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn read_row(conn: &Connection, id: &DocumentId) -> StorageResult<Option<DateHistory>> {
        let row: Option<(String, Option<String>)> = conn
            .query_row(
                "SELECT dates_json, last_opened FROM histories WHERE document_id = ?1",
                params![id.as_str()],
                |row| Ok((row.get(0)?, row.get(1)?)),
            )
            .optional()?;

        Ok(row.map(|(dates_json, last_opened)| {
            let dates: Vec<String> = match serde_json::from_str(&dates_json) {
                Ok(dates) => dates,
                Err(e) => {
                    tracing::warn!(document = %id, error = %e, "malformed stored history, treating as empty");
                    Vec::new()
                }
            };
            DateHistory::from_raw(&dates, last_opened.as_deref())
        }))
    }
}

impl OpenStore for SqliteStore {
    fn open(path: impl AsRef<Path>) -> StorageResult<Self> {
        // Ensure parent directory exists
        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }

        let conn = Connection::open(path.as_ref())?;
        Self::init_schema(&conn)?;
        tracing::debug!(path = %path.as_ref().display(), "opened history store");

        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn open_in_memory() -> StorageResult<Self> {
        let conn = Connection::open_in_memory()?;
        Self::init_schema(&conn)?;

        Ok(Self {
            conn: Mutex::new(conn),
        })
    }
}

impl HistoryStore for SqliteStore {
    fn load_history(&self, id: &DocumentId) -> StorageResult<Option<DateHistory>> {
        let conn = self.conn();
        Self::read_row(&conn, id)
    }

    fn save_history(&self, id: &DocumentId, history: &DateHistory) -> StorageResult<()> {
        let mut conn = self.conn();
        let tx = conn.transaction()?;

        let mut merged = Self::read_row(&tx, id)?.unwrap_or_default();
        merged.merge(history);

        let dates_json = serde_json::to_string(&merged.to_raw())?;
        let last_opened = merged
            .last_opened()
            .map(|d| d.format(DATE_FORMAT).to_string());

        tx.execute(
            r#"
            INSERT INTO histories (document_id, dates_json, last_opened)
            VALUES (?1, ?2, ?3)
            ON CONFLICT(document_id) DO UPDATE SET
                dates_json = excluded.dates_json,
                last_opened = excluded.last_opened
            "#,
            params![id.as_str(), dates_json, last_opened],
        )?;
        tx.commit()?;

        tracing::debug!(document = %id, dates = merged.len(), "saved history");
        Ok(())
    }

    fn list_documents(&self) -> StorageResult<Vec<DocumentId>> {
        let conn = self.conn();
        let mut stmt = conn.prepare("SELECT document_id FROM histories ORDER BY document_id")?;
        let ids = stmt
            .query_map([], |row| row.get::<_, String>(0))?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(ids.into_iter().map(DocumentId::from).collect())
    }
}
