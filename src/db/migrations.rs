// src/db/migrations.rs
//
// Database schema initialization
//
// PRINCIPLES:
// - Explicit schema versions
// - No automatic migrations
// - Idempotent operations
//
// Each entity collection is a two-column table: an assigned id and the
// JSON document. Field-level queries go through json_extract, so no
// per-field columns exist. There are deliberately no unique indexes:
// name/title/email uniqueness is a validation rule, and a store-level
// constraint would turn a duplicate into a storage fault instead of the
// validation message the caller is owed.

use rusqlite::Connection;

use crate::error::{AppError, AppResult};

/// Current schema version
/// Increment this when adding migrations
const CURRENT_SCHEMA_VERSION: i32 = 1;

/// Initialize the database schema
///
/// Safe to call multiple times (idempotent).
pub fn initialize_database(conn: &Connection) -> AppResult<()> {
    let current_version = get_schema_version(conn)?;

    if current_version == 0 {
        apply_initial_schema(conn)?;
        set_schema_version(conn, 1)?;
        log::info!("database schema initialized at version {}", CURRENT_SCHEMA_VERSION);
    } else if current_version < CURRENT_SCHEMA_VERSION {
        return Err(AppError::Other(format!(
            "Schema version {} is outdated. Expected {}. Manual migration required.",
            current_version, CURRENT_SCHEMA_VERSION
        )));
    } else if current_version > CURRENT_SCHEMA_VERSION {
        return Err(AppError::Other(format!(
            "Schema version {} is newer than supported {}. Update the application.",
            current_version, CURRENT_SCHEMA_VERSION
        )));
    }

    Ok(())
}

/// Get current schema version
/// Returns 0 if schema_version table doesn't exist (fresh database)
fn get_schema_version(conn: &Connection) -> AppResult<i32> {
    let table_exists: bool = conn
        .query_row(
            "SELECT EXISTS(SELECT 1 FROM sqlite_master WHERE type='table' AND name='schema_version')",
            [],
            |row| row.get(0),
        )
        .map_err(AppError::Database)?;

    if !table_exists {
        return Ok(0);
    }

    let version: Option<i32> = conn
        .query_row("SELECT MAX(version) FROM schema_version", [], |row| row.get(0))
        .map_err(AppError::Database)?;

    Ok(version.unwrap_or(0))
}

/// Set schema version
fn set_schema_version(conn: &Connection, version: i32) -> AppResult<()> {
    conn.execute(
        "INSERT INTO schema_version (version) VALUES (?1)",
        [version],
    )
    .map_err(AppError::Database)?;

    Ok(())
}

/// Apply the version 1 schema: one document table per entity collection.
fn apply_initial_schema(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS schema_version (
             version INTEGER NOT NULL
         );

         CREATE TABLE IF NOT EXISTS genres (
             id  TEXT PRIMARY KEY,
             doc TEXT NOT NULL
         );

         CREATE TABLE IF NOT EXISTS streamings (
             id  TEXT PRIMARY KEY,
             doc TEXT NOT NULL
         );

         CREATE TABLE IF NOT EXISTS movies (
             id  TEXT PRIMARY KEY,
             doc TEXT NOT NULL
         );

         CREATE TABLE IF NOT EXISTS ratings (
             id  TEXT PRIMARY KEY,
             doc TEXT NOT NULL
         );

         CREATE TABLE IF NOT EXISTS users (
             id  TEXT PRIMARY KEY,
             doc TEXT NOT NULL
         );",
    )
    .map_err(AppError::Database)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open_conn() -> Connection {
        Connection::open_in_memory().unwrap()
    }

    #[test]
    fn test_initialize_creates_collections() {
        let conn = open_conn();
        initialize_database(&conn).unwrap();

        for table in ["genres", "streamings", "movies", "ratings", "users"] {
            let exists: bool = conn
                .query_row(
                    "SELECT EXISTS(SELECT 1 FROM sqlite_master WHERE type='table' AND name=?1)",
                    [table],
                    |row| row.get(0),
                )
                .unwrap();
            assert!(exists, "missing table {}", table);
        }
    }

    #[test]
    fn test_initialize_is_idempotent() {
        let conn = open_conn();
        initialize_database(&conn).unwrap();
        initialize_database(&conn).unwrap();

        let version: i32 = conn
            .query_row("SELECT MAX(version) FROM schema_version", [], |row| row.get(0))
            .unwrap();
        assert_eq!(version, 1);
    }
}
