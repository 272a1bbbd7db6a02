//! SQLite-backed key-value store.

use std::path::Path;

use rusqlite::{params, Connection, OptionalExtension};

use super::KeyValueStore;
use crate::error::{Result, StoreResultExt};

const SELECT_VALUE_SQL: &str = "SELECT value FROM kv WHERE key = ?1";
const UPSERT_VALUE_SQL: &str =
    "INSERT INTO kv (key, value) VALUES (?1, ?2) ON CONFLICT(key) DO UPDATE SET value = excluded.value";
const DELETE_VALUE_SQL: &str = "DELETE FROM kv WHERE key = ?1";

/// Key-value store over a single SQLite file.
///
/// Connections are cheap to open, so callers open a store per operation
/// rather than holding one across await points.
pub struct SqliteStore {
    connection: Connection,
}

impl SqliteStore {
    /// Opens the store at the given path and initializes the schema.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection =
            Connection::open(path).store_context("Failed to open state store")?;

        let store = Self { connection };
        store.initialize_schema()?;
        Ok(store)
    }

    /// Initializes the store schema using the embedded SQL file.
    fn initialize_schema(&self) -> Result<()> {
        let schema_sql = include_str!("../../assets/schema.sql");
        self.connection
            .execute_batch(schema_sql)
            .store_context("Failed to initialize store schema")?;
        Ok(())
    }
}

impl KeyValueStore for SqliteStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        self.connection
            .query_row(SELECT_VALUE_SQL, params![key], |row| row.get(0))
            .optional()
            .store_context("Failed to read stored value")
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.connection
            .execute(UPSERT_VALUE_SQL, params![key, value])
            .store_context("Failed to write stored value")?;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.connection
            .execute(DELETE_VALUE_SQL, params![key])
            .store_context("Failed to remove stored value")?;
        Ok(())
    }
}
