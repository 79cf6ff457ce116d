//! Flat key-value storage over sqlite, the stand-in for the browser's
//! localStorage: one string key, one string value, overwritten whole.

use crate::db::connection::Database;
use crate::errors::ServerError;
use chrono::Utc;
use rusqlite::{params, OptionalExtension};

pub fn get(db: &Database, key: &str) -> Result<Option<String>, ServerError> {
    db.with_conn(|conn| {
        conn.query_row(
            "SELECT value FROM kv_store WHERE key = ?1",
            params![key],
            |row| row.get::<_, String>(0),
        )
        .optional()
        .map_err(|e| ServerError::DbError(e.to_string()))
    })
}

pub fn set(db: &Database, key: &str, value: &str) -> Result<(), ServerError> {
    let now = Utc::now().naive_utc();

    db.with_conn(|conn| {
        conn.execute(
            r#"
            INSERT INTO kv_store (key, value, updated_at)
            VALUES (?1, ?2, ?3)
            ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at
            "#,
            params![key, value, now],
        )
        .map_err(|e| ServerError::DbError(e.to_string()))?;
        Ok(())
    })
}
