// src/db/mod.rs
//
// Database module
//
// Provides:
// - Connection pooling
// - Schema initialization

pub mod connection;
pub mod migrations;

pub use connection::{
    create_connection_pool, get_connection, get_database_path, ConnectionPool, PooledConn,
};

pub use migrations::initialize_database;

#[cfg(test)]
pub use connection::create_test_pool;
