//! SQLite-backed key-value persistence.
//!
//! The timer persists very little: the daily completion record and the
//! mute flag. Both live in a single `kv` table keyed by string.

use rusqlite::{params, Connection};

use crate::error::StorageError;
use crate::traits::KeyValueStore;

use super::data_dir;

/// Handle to the on-disk (or in-memory) store.
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open the database at `~/.config/focusring/focusring.db`, creating
    /// the file and schema as needed.
    ///
    /// # Errors
    /// Returns an error if the data directory cannot be created or the
    /// database cannot be opened.
    pub fn open() -> Result<Self, StorageError> {
        let path = data_dir()?.join("focusring.db");
        let conn =
            Connection::open(&path).map_err(|source| StorageError::OpenFailed { path, source })?;
        let db = Self { conn };
        db.migrate()?;
        Ok(db)
    }

    /// Open an in-memory database. Used by tests.
    pub fn open_memory() -> Result<Self, StorageError> {
        let conn = Connection::open_in_memory()?;
        let db = Self { conn };
        db.migrate()?;
        Ok(db)
    }

    fn migrate(&self) -> Result<(), StorageError> {
        self.conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS kv (
                key   TEXT PRIMARY KEY,
                value TEXT NOT NULL
            );",
        )?;
        Ok(())
    }
}

impl KeyValueStore for Database {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let mut stmt = self.conn.prepare("SELECT value FROM kv WHERE key = ?1")?;
        match stmt.query_row(params![key], |row| row.get::<_, String>(0)) {
            Ok(value) => Ok(Some(value)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.conn.execute(
            "INSERT OR REPLACE INTO kv (key, value) VALUES (?1, ?2)",
            params![key, value],
        )?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_key_is_none() {
        let db = Database::open_memory().unwrap();
        assert_eq!(db.get("nope").unwrap(), None);
    }

    #[test]
    fn set_then_get() {
        let mut db = Database::open_memory().unwrap();
        db.set("daily_record", r#"{"date":"2026-08-24","count":1}"#)
            .unwrap();
        assert_eq!(
            db.get("daily_record").unwrap().as_deref(),
            Some(r#"{"date":"2026-08-24","count":1}"#)
        );
    }

    #[test]
    fn set_replaces_existing_value() {
        let mut db = Database::open_memory().unwrap();
        db.set("muted", "false").unwrap();
        db.set("muted", "true").unwrap();
        assert_eq!(db.get("muted").unwrap().as_deref(), Some("true"));
    }
}
