use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use rusqlite::Connection;
use tracing::debug;

/// Open (or create) the SQLite file at `path` and make sure the key-value
/// table exists.
pub fn open_database(path: &Path) -> Result<Connection> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).with_context(|| {
            format!("failed to create database directory {}", parent.display())
        })?;
    }

    let conn = Connection::open(path)
        .with_context(|| format!("failed to open SQLite database {}", path.display()))?;
    ensure_schema(&conn)?;
    debug!(path = %path.display(), "database ready");
    Ok(conn)
}

/// Create the single `kv_store` table. Each row is one named slot; the menu
/// snapshot is one of them.
pub fn ensure_schema(conn: &Connection) -> Result<()> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS kv_store (
            key TEXT PRIMARY KEY,
            value TEXT NOT NULL
        )",
        [],
    )
    .context("failed to create kv_store table")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_database_creates_file_and_table() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("data").join("menu.sqlite");

        let conn = open_database(&path).unwrap();

        assert!(path.exists());
        let tables: i64 = conn
            .query_row(
                "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = 'kv_store'",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(tables, 1);
    }

    #[test]
    fn ensure_schema_is_idempotent() {
        let conn = Connection::open_in_memory().unwrap();
        ensure_schema(&conn).unwrap();
        ensure_schema(&conn).unwrap();
    }
}
