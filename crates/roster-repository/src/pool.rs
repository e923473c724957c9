//! Database handle management.

use async_trait::async_trait;
use roster_config::DatabaseConfig;
use roster_core::{Interface, RosterError, RosterResult};
use shaku::Component;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;
use std::sync::Arc;
use tracing::{info, warn};

const MIGRATIONS: &[&str] = &[include_str!("../migrations/0001_create_users.sql")];

/// Interface for database handle operations.
///
/// This trait abstracts the store handle for dependency injection.
#[async_trait]
pub trait DatabasePoolInterface: Interface + Send + Sync {
    /// Returns a reference to the underlying SQLite pool.
    fn inner(&self) -> &SqlitePool;

    /// Checks if the database connection is healthy.
    async fn health_check(&self) -> RosterResult<()>;

    /// Creates the schema if it does not exist yet.
    async fn ensure_schema(&self) -> RosterResult<()>;

    /// Closes the database handle.
    async fn close(&self);
}

/// SQLite database handle.
#[derive(Component)]
#[shaku(interface = DatabasePoolInterface)]
pub struct DatabasePool {
    pool: SqlitePool,
}

impl DatabasePool {
    /// Opens the database described by `config`, creating the file if missing.
    pub async fn new(config: &DatabaseConfig) -> RosterResult<Self> {
        info!("Opening SQLite database at {}", config.url);

        let options = SqliteConnectOptions::from_str(&config.url)
            .map_err(|e| RosterError::Configuration(format!("Invalid database URL: {}", e)))?
            .create_if_missing(true)
            .busy_timeout(config.busy_timeout());

        let pool = SqlitePoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(config.connect_timeout())
            .connect_with(options)
            .await
            .map_err(|e| {
                warn!("Failed to open database: {}", e);
                RosterError::Database(format!("Failed to connect: {}", e))
            })?;

        info!("SQLite database ready");
        Ok(Self { pool })
    }
}

#[async_trait]
impl DatabasePoolInterface for DatabasePool {
    fn inner(&self) -> &SqlitePool {
        &self.pool
    }

    async fn health_check(&self) -> RosterResult<()> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(|e| RosterError::Database(format!("Health check failed: {}", e)))?;
        Ok(())
    }

    async fn ensure_schema(&self) -> RosterResult<()> {
        info!("Ensuring database schema...");
        for migration in MIGRATIONS {
            sqlx::query(migration)
                .execute(&self.pool)
                .await
                .map_err(|e| RosterError::Database(format!("Schema setup failed: {}", e)))?;
        }
        info!("Database schema ready");
        Ok(())
    }

    async fn close(&self) {
        info!("Closing database handle...");
        self.pool.close().await;
        info!("Database handle closed");
    }
}

impl std::fmt::Debug for DatabasePool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DatabasePool")
            .field("size", &self.pool.size())
            .field("num_idle", &self.pool.num_idle())
            .finish()
    }
}

/// Opens a shared database handle and makes sure the schema exists.
pub async fn create_pool(config: &DatabaseConfig) -> RosterResult<Arc<DatabasePool>> {
    let pool = DatabasePool::new(config).await?;
    pool.ensure_schema().await?;
    Ok(Arc::new(pool))
}
