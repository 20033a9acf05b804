//! SQLite Config Store
//!
//! Persists the config table in a local SQLite file and runs migrations on open.

use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;

use crate::domain::{DomainError, DomainResult};
use super::traits::ConfigStore;

pub struct SqliteConfigStore {
    conn: Connection,
}

impl SqliteConfigStore {
    /// Open (or create) the database at `db_path`
    pub fn open(db_path: &Path) -> DomainResult<Self> {
        let conn = Connection::open(db_path)
            .map_err(|e| DomainError::Internal(format!("Failed to open {}: {}", db_path.display(), e)))?;
        Self::with_connection(conn)
    }

    pub fn open_in_memory() -> DomainResult<Self> {
        let conn = Connection::open_in_memory().map_err(|e| DomainError::Internal(e.to_string()))?;
        Self::with_connection(conn)
    }

    fn with_connection(conn: Connection) -> DomainResult<Self> {
        run_migrations(&conn)?;
        Ok(Self { conn })
    }
}

impl ConfigStore for SqliteConfigStore {
    fn get(&self, group: &str, key: &str) -> DomainResult<Option<String>> {
        self.conn
            .query_row(
                "SELECT value FROM config WHERE grp = ? AND key = ?",
                params![group, key],
                |row| row.get::<_, String>(0),
            )
            .optional()
            .map_err(|e| DomainError::Internal(e.to_string()))
    }

    fn set(&mut self, group: &str, key: &str, value: &str) -> DomainResult<()> {
        self.conn
            .execute(
                "INSERT INTO config (grp, key, value, updated_at) VALUES (?, ?, ?, ?)
                 ON CONFLICT(grp, key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
                params![group, key, value, chrono::Utc::now().timestamp_millis()],
            )
            .map_err(|e| DomainError::Internal(e.to_string()))?;
        Ok(())
    }

    fn unset(&mut self, group: &str, key: &str) -> DomainResult<()> {
        self.conn
            .execute("DELETE FROM config WHERE grp = ? AND key = ?", params![group, key])
            .map_err(|e| DomainError::Internal(e.to_string()))?;
        Ok(())
    }

    fn keys(&self, group: &str) -> DomainResult<Vec<String>> {
        let mut stmt = self
            .conn
            .prepare("SELECT key FROM config WHERE grp = ? ORDER BY key")
            .map_err(|e| DomainError::Internal(e.to_string()))?;

        let rows = stmt
            .query_map(params![group], |row| row.get::<_, String>(0))
            .map_err(|e| DomainError::Internal(e.to_string()))?;

        rows.collect::<Result<Vec<_>, _>>()
            .map_err(|e| DomainError::Internal(e.to_string()))
    }
}

/// Check if a column exists in a table
fn column_exists(conn: &Connection, table: &str, column: &str) -> DomainResult<bool> {
    let mut stmt = conn
        .prepare(&format!("PRAGMA table_info({})", table))
        .map_err(|e| DomainError::Internal(e.to_string()))?;
    let names = stmt
        .query_map([], |row| row.get::<_, String>(1))
        .map_err(|e| DomainError::Internal(e.to_string()))?;

    for name in names {
        if name.map_err(|e| DomainError::Internal(e.to_string()))? == column {
            return Ok(true);
        }
    }
    Ok(false)
}

/// Run database migrations
fn run_migrations(conn: &Connection) -> DomainResult<()> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS config (
            grp TEXT NOT NULL,
            key TEXT NOT NULL,
            value TEXT NOT NULL,
            PRIMARY KEY (grp, key)
        )",
        [],
    )
    .map_err(|e| DomainError::Internal(e.to_string()))?;

    // Older databases predate the modification timestamp
    if !column_exists(conn, "config", "updated_at")? {
        conn.execute("ALTER TABLE config ADD COLUMN updated_at INTEGER", [])
            .map_err(|e| DomainError::Internal(format!("Failed to add updated_at: {}", e)))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_overwrites() {
        let mut store = SqliteConfigStore::open_in_memory().unwrap();
        store.set("g", "k", "one").unwrap();
        store.set("g", "k", "two").unwrap();

        assert_eq!(store.get("g", "k").unwrap(), Some("two".to_string()));
        assert_eq!(store.keys("g").unwrap(), vec!["k".to_string()]);
    }

    #[test]
    fn test_unset_and_missing() {
        let mut store = SqliteConfigStore::open_in_memory().unwrap();
        store.set("g", "k", "v").unwrap();
        store.unset("g", "k").unwrap();
        store.unset("g", "never").unwrap();

        assert_eq!(store.get("g", "k").unwrap(), None);
        assert!(store.keys("g").unwrap().is_empty());
    }

    #[test]
    fn test_migrates_table_without_timestamp() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute(
            "CREATE TABLE config (grp TEXT NOT NULL, key TEXT NOT NULL, value TEXT NOT NULL, PRIMARY KEY (grp, key))",
            [],
        )
        .unwrap();
        conn.execute("INSERT INTO config (grp, key, value) VALUES ('g', 'k', 'v')", []).unwrap();

        let store = SqliteConfigStore::with_connection(conn).unwrap();
        assert!(column_exists(&store.conn, "config", "updated_at").unwrap());
        assert_eq!(store.get("g", "k").unwrap(), Some("v".to_string()));
    }
}
