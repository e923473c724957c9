//! Common test infrastructure for database integration tests.

use roster_config::DatabaseConfig;
use roster_repository::{create_pool, DatabasePool};
use std::sync::Arc;
use tempfile::TempDir;

/// Test database wrapper.
///
/// Owns a temporary directory holding a fresh SQLite file with the schema
/// already applied. The directory is removed when the wrapper is dropped.
pub struct TestDatabase {
    _dir: TempDir,
    config: DatabaseConfig,
    pool: Arc<DatabasePool>,
}

impl TestDatabase {
    /// Creates a new test database in a fresh temporary directory.
    pub async fn new() -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let url = format!("sqlite://{}", dir.path().join("users.db").display());
        let config = DatabaseConfig::with_url(url);

        let pool = create_pool(&config)
            .await
            .expect("Failed to open test database");

        Self {
            _dir: dir,
            config,
            pool,
        }
    }

    /// Returns a reference to the database handle.
    pub fn pool(&self) -> Arc<DatabasePool> {
        Arc::clone(&self.pool)
    }

    /// Returns the configuration used to open the database.
    #[allow(dead_code)]
    pub fn config(&self) -> &DatabaseConfig {
        &self.config
    }
}
