//! Pool construction. The pool is the one storage handle in the process:
//! opened at startup, passed into the repository layer, closed on shutdown.

use crate::error::AppError;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;

/// Connect a SQLite pool. Creates the database file if missing and enables
/// foreign-key enforcement on every connection.
///
/// For `sqlite::memory:` URLs use `max_connections = 1`: each in-memory
/// connection is its own database.
pub async fn connect_pool(url: &str, max_connections: u32) -> Result<SqlitePool, AppError> {
    let opts = SqliteConnectOptions::from_str(url)?
        .create_if_missing(true)
        .foreign_keys(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(opts)
        .await?;
    Ok(pool)
}
