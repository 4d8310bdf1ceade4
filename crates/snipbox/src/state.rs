//! Application state shared across all request handlers.

use std::sync::Arc;

use anyhow::Context;
use sqlx::SqlitePool;
use sqlx::sqlite::SqlitePoolOptions;

use crate::config::Config;
use crate::query;

/// Connection pool size. Every store operation is a single short
/// statement, so a small pool is plenty.
const POOL_SIZE: u32 = 5;

/// Shared application state available to all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// SQLite connection pool for the snippet store.
    pub db: SqlitePool,

    /// Application configuration.
    pub config: Arc<Config>,
}

impl AppState {
    /// Create the application state from configuration.
    ///
    /// Opens the store pool, verifies connectivity with a ping (fail fast
    /// if the store is unreachable, no retry loop), and ensures the schema
    /// exists.
    pub async fn new(config: Config) -> anyhow::Result<Self> {
        let db = SqlitePoolOptions::new()
            .max_connections(POOL_SIZE)
            .connect(&config.database_url)
            .await
            .with_context(|| format!("failed to open store at {}", config.database_url))?;

        sqlx::query("SELECT 1")
            .execute(&db)
            .await
            .context("store ping failed")?;

        query::migrate(&db)
            .await
            .context("schema migration failed")?;

        tracing::info!(
            database_url = %config.database_url,
            pool_size = POOL_SIZE,
            "store connection established"
        );

        Ok(Self {
            db,
            config: Arc::new(config),
        })
    }
}
