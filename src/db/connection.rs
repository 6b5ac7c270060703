// src/db/connection.rs
//
// Database connection management
//
// PRINCIPLES:
// - Explicit connection pooling
// - No hidden connection creation
// - Clear error propagation
// - Thread-safe access

use r2d2::{Pool, PooledConnection};
use r2d2_sqlite::SqliteConnectionManager;
use std::path::PathBuf;

use crate::error::{AppError, AppResult};

/// Type alias for connection pool
pub type ConnectionPool = Pool<SqliteConnectionManager>;

/// Type alias for a pooled connection
pub type PooledConn = PooledConnection<SqliteConnectionManager>;

/// Get the database file path
///
/// Database is stored in the application data directory.
/// Path structure: {APP_DATA}/moviehub/moviehub.db
pub fn get_database_path() -> AppResult<PathBuf> {
    let app_data_dir = dirs::data_dir()
        .ok_or_else(|| AppError::Other("Could not determine app data directory".to_string()))?;

    let moviehub_dir = app_data_dir.join("moviehub");

    // Ensure directory exists
    std::fs::create_dir_all(&moviehub_dir).map_err(AppError::Io)?;

    Ok(moviehub_dir.join("moviehub.db"))
}

/// Create a connection pool
///
/// Pool configuration:
/// - Max 15 connections
/// - SQLite in WAL mode for better concurrency
/// - Busy timeout set to avoid immediate errors
pub fn create_connection_pool() -> AppResult<ConnectionPool> {
    let db_path = get_database_path()?;
    create_pool_at(&db_path)
}

/// Create a connection pool for an explicit database file
pub fn create_pool_at(db_path: &std::path::Path) -> AppResult<ConnectionPool> {
    let manager = SqliteConnectionManager::file(db_path).with_init(|conn| {
        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA synchronous = NORMAL;
             PRAGMA busy_timeout = 5000;",
        )?;
        Ok(())
    });

    let pool = Pool::builder()
        .max_size(15)
        .build(manager)
        .map_err(|e| AppError::Other(format!("Failed to create connection pool: {}", e)))?;

    Ok(pool)
}

/// Get a connection from the pool
///
/// This is a convenience wrapper that provides better error messages.
pub fn get_connection(pool: &ConnectionPool) -> AppResult<PooledConn> {
    pool.get()
        .map_err(|e| AppError::Other(format!("Failed to get database connection: {}", e)))
}

/// Create a single-connection in-memory pool (for testing)
///
/// The pool is capped at one connection: every in-memory SQLite connection
/// is its own database, so a larger pool would hand out empty databases.
#[cfg(test)]
pub fn create_test_pool() -> AppResult<ConnectionPool> {
    let manager = SqliteConnectionManager::memory();

    let pool = Pool::builder()
        .max_size(1)
        .build(manager)
        .map_err(|e| AppError::Other(format!("Failed to create test pool: {}", e)))?;

    crate::db::migrations::initialize_database(&*pool.get().map_err(AppError::from)?)?;

    Ok(pool)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_pool_creation() {
        let dir = tempfile::tempdir().unwrap();
        let pool = create_pool_at(&dir.path().join("moviehub.db")).unwrap();
        let conn = get_connection(&pool).unwrap();

        let result: i32 = conn.query_row("SELECT 1 + 1", [], |row| row.get(0)).unwrap();
        assert_eq!(result, 2);
    }

    #[test]
    fn test_test_pool_shares_one_database() {
        let pool = create_test_pool().unwrap();

        {
            let conn = pool.get().unwrap();
            conn.execute("INSERT INTO genres (id, doc) VALUES ('a', '{}')", [])
                .unwrap();
        }

        // A later checkout must see the same database
        let conn = pool.get().unwrap();
        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM genres", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 1);
    }
}
