pub mod dto;
pub mod error;
pub mod models;
pub mod repository;
pub mod schema;

use std::time::Duration;

use sqlx::{PgPool, postgres::PgPoolOptions};

use crate::error::{Result, StorageError};

const SCHEMA_SQL: &str = include_str!("../migrations/20240101000000_create_schema.sql");

/// Process-wide handle to the PostgreSQL database.
///
/// Cloning is cheap and every clone shares the same pool, so a single
/// `Database` is created at startup and handed to every request handler.
#[derive(Debug, Clone)]
pub struct Database {
    pool: PgPool,
}

impl Database {
    /// Builds the pool without opening any connection.
    pub fn new(database_url: &str, max_connections: u32) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .acquire_timeout(Duration::from_secs(5))
            .connect_lazy(database_url)?;

        Ok(Self { pool })
    }

    pub fn from_pool(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// True while the pool is open and holds at least one connection.
    pub fn is_connected(&self) -> bool {
        !self.pool.is_closed() && self.pool.size() > 0
    }

    /// Opens the first connection. Calling it on a connected database is a no-op.
    pub async fn connect(&self) -> Result<()> {
        if self.is_connected() {
            tracing::debug!("Database already connected");
            return Ok(());
        }

        // The acquired connection goes back to the pool as soon as it is dropped.
        self.pool.acquire().await?;
        tracing::info!("Database connection established");

        Ok(())
    }

    /// Closes the pool. Calling it on a closed database is a no-op.
    pub async fn disconnect(&self) {
        if self.pool.is_closed() {
            tracing::debug!("Database already disconnected");
            return;
        }

        self.pool.close().await;
        tracing::info!("Database connection closed");
    }

    pub async fn run_migrations(&self) -> Result<()> {
        sqlx::migrate!("./migrations").run(&self.pool).await?;
        Ok(())
    }

    /// Creates every missing table, then checks that the full schema is present.
    ///
    /// Migrations run once per database. Tables dropped after that are
    /// recreated by re-applying the schema script, whose statements all
    /// tolerate objects that already exist.
    pub async fn ensure_schema(&self) -> Result<()> {
        self.run_migrations().await?;

        let missing = self.missing_tables().await?;
        if !missing.is_empty() {
            tracing::warn!(tables = %missing.join(", "), "Recreating missing tables");
            sqlx::raw_sql(SCHEMA_SQL).execute(&self.pool).await?;

            let still_missing = self.missing_tables().await?;
            if !still_missing.is_empty() {
                return Err(StorageError::MissingTables(still_missing.join(", ")));
            }
        }

        tracing::debug!(
            tables = schema::ENTITY_TABLES.len() + schema::JOIN_TABLES.len(),
            "Schema verified"
        );
        Ok(())
    }

    async fn missing_tables(&self) -> Result<Vec<&'static str>> {
        let existing: Vec<String> = sqlx::query_scalar(
            r#"
            SELECT table_name::text
            FROM information_schema.tables
            WHERE table_schema = current_schema()
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(schema::missing_tables(&existing))
    }
}
