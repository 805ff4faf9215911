//! SQLite adapters - Database implementations for the preference ports.
//!
//! This module provides adapters for SQLite-backed persistence:
//! - `SqlitePreferenceSchema` - Table creation and seed inserts
//! - `SqlitePreferenceReader` - Definition, group, and value queries
//! - `SqlitePreferenceRepository` - Scoped value upserts
//!
//! All three share one `SqlitePool` owned by the composing application.

mod reader;
mod repository;
mod rows;
mod schema;

pub use reader::SqlitePreferenceReader;
pub use repository::SqlitePreferenceRepository;
pub use schema::SqlitePreferenceSchema;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;
use tracing::info;

use crate::config::DatabaseConfig;
use crate::domain::foundation::DomainError;

/// Opens the shared connection pool described by `config`.
///
/// An in-memory database only lives as long as its connection, so for
/// `:memory:` URLs the pool is pinned to a single connection that never
/// idles out.
pub async fn connect(config: &DatabaseConfig) -> Result<SqlitePool, DomainError> {
    let options = SqliteConnectOptions::from_str(&config.url)
        .map_err(|e| DomainError::database("Invalid database URL", e))?
        .create_if_missing(config.create_if_missing)
        .foreign_keys(true);

    let pool_options = if config.is_in_memory() {
        SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
    } else {
        SqlitePoolOptions::new().max_connections(config.max_connections)
    };

    let pool = pool_options
        .acquire_timeout(config.acquire_timeout())
        .connect_with(options)
        .await
        .map_err(|e| DomainError::database("Failed to open database", e))?;

    info!(url = %config.url, "Connected to preference database");
    Ok(pool)
}
