use crate::errors::{DbError, DbResult};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;

/// Open a connection pool with foreign-key enforcement on every connection
pub async fn connect(database_url: &str, max_connections: u32) -> DbResult<SqlitePool> {
    let options = SqliteConnectOptions::from_str(database_url)
        .map_err(|e| DbError::ConnectionPool(format!("Invalid database URL: {}", e)))?
        .create_if_missing(true)
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await
        .map_err(|e| DbError::ConnectionPool(format!("Database connection failed: {}", e)))?;

    log::info!("Database connection established");
    Ok(pool)
}

/// Open a private in-memory database. Every connection to `:memory:` is a
/// separate database, so the pool holds exactly one connection for its
/// whole life.
pub async fn connect_in_memory() -> DbResult<SqlitePool> {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")
        .map_err(|e| DbError::ConnectionPool(format!("Invalid database URL: {}", e)))?
        .foreign_keys(true);

    SqlitePoolOptions::new()
        .max_connections(1)
        .min_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options)
        .await
        .map_err(|e| DbError::ConnectionPool(format!("Database connection failed: {}", e)))
}
