//! PostgreSQL persistence for the newsroom service.
//!
//! - [`create_pool`] builds the shared connection pool from a [`DbConfig`].
//! - [`health_check`] / [`run_migrations`] are called once at startup.
//! - [`repositories::PgNewsStore`] implements the repository traits from
//!   `newsroom_core::store`.

use std::time::Duration;

use sqlx::postgres::PgPoolOptions;

pub mod models;
pub mod repositories;

pub type DbPool = sqlx::PgPool;

/// Connection and pool sizing parameters.
#[derive(Debug, Clone)]
pub struct DbConfig {
    /// Full `postgres://` connection string.
    pub url: String,
    /// Upper bound on open connections.
    pub max_connections: u32,
    /// Connections kept open while idle.
    pub min_connections: u32,
    /// Connections older than this are closed and replaced.
    pub max_lifetime: Duration,
}

/// Create a connection pool from a [`DbConfig`].
pub async fn create_pool(config: &DbConfig) -> Result<DbPool, sqlx::Error> {
    tracing::debug!(
        max_connections = config.max_connections,
        min_connections = config.min_connections,
        max_lifetime_secs = config.max_lifetime.as_secs(),
        "Configuring database pool"
    );

    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .max_lifetime(config.max_lifetime)
        .connect(&config.url)
        .await
}

/// Round-trip a trivial query to confirm the database is reachable.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply the embedded migrations from `db/migrations`.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("../../db/migrations").run(pool).await
}
