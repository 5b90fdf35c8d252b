// src/repositories/key_value_repository.rs

use std::sync::Arc;

use rusqlite::{params, OptionalExtension};

use crate::db::{get_connection, ConnectionPool};
use crate::error::AppResult;

/// Named string slots that survive restarts
#[cfg_attr(test, mockall::automock)]
pub trait KeyValueRepository: Send + Sync {
    fn get(&self, key: &str) -> AppResult<Option<String>>;
    /// Overwrites whatever the slot held
    fn put(&self, key: &str, value: &str) -> AppResult<()>;
    fn delete(&self, key: &str) -> AppResult<()>;
}

pub struct SqliteKeyValueRepository {
    pool: Arc<ConnectionPool>,
}

impl SqliteKeyValueRepository {
    pub fn new(pool: Arc<ConnectionPool>) -> Self {
        Self { pool }
    }
}

impl KeyValueRepository for SqliteKeyValueRepository {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        let conn = get_connection(&self.pool)?;

        let value = conn
            .query_row(
                "SELECT value FROM kv_store WHERE key = ?1",
                params![key],
                |row| row.get::<_, String>(0),
            )
            .optional()?;

        Ok(value)
    }

    fn put(&self, key: &str, value: &str) -> AppResult<()> {
        let conn = get_connection(&self.pool)?;

        conn.execute(
            "INSERT INTO kv_store (key, value, updated_at)
             VALUES (?1, ?2, ?3)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
            params![key, value, chrono::Utc::now().to_rfc3339()],
        )?;

        Ok(())
    }

    fn delete(&self, key: &str) -> AppResult<()> {
        let conn = get_connection(&self.pool)?;
        conn.execute("DELETE FROM kv_store WHERE key = ?1", params![key])?;
        Ok(())
    }
}
