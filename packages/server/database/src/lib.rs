use anyhow::{Context, Result};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

pub use sqlx; // Re-export for convenience
pub mod error;
pub mod models;
pub mod repositories;

pub use error::StoreError;

#[derive(Clone)]
pub struct Database {
    pub pool: SqlitePool,
}

impl Database {
    /// Opens the SQLite database at `database_url`, creating the file if needed.
    pub async fn connect(database_url: &str, max_connections: u32) -> Result<Arc<Self>> {
        let options = SqliteConnectOptions::from_str(database_url)
            .with_context(|| format!("Invalid database url '{}'", database_url))?
            .create_if_missing(true);

        Self::connect_with(options, max_connections).await
    }

    pub async fn connect_with(
        options: SqliteConnectOptions,
        max_connections: u32,
    ) -> Result<Arc<Self>> {
        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections.max(1))
            .acquire_timeout(Duration::from_secs(3)) // Fail fast if the file is locked
            .idle_timeout(Duration::from_secs(60 * 5)) // Close idle connections after 5m
            .connect_with(options)
            .await
            .context("Failed to connect to the database")?;

        Ok(Arc::new(Self { pool }))
    }

    /// Creates the `risks` table if it does not exist yet.
    pub async fn migrate(&self) -> Result<()> {
        // Embed the migration files into the binary during compilation
        sqlx::migrate!("src/migrations")
            .run(&self.pool)
            .await
            .context("Failed to run database migrations")?;

        Ok(())
    }

    /// Health check for the database connection
    pub async fn health_check(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
