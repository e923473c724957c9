//! Dependency injection module using Shaku.
//!
//! `RosterModule` wires the SQLite handle into the repository and the
//! repository into the user service. Nothing is held in globals; every
//! component receives its collaborators at construction.

use roster_config::DatabaseConfig;
use roster_core::RosterResult;
use roster_repository::{
    create_pool, DatabasePool, DatabasePoolInterface, DatabasePoolParameters,
    SqliteUserRepository, UserRepository,
};
use roster_service::{UserService, UserServiceImpl};
use shaku::{module, HasComponent};
use std::sync::Arc;

// ============================================================================
// Shaku Module Definitions
// ============================================================================

// Single-process module backed by a local SQLite file.
module! {
    pub RosterModule {
        components = [
            DatabasePool,
            SqliteUserRepository,
            UserServiceImpl,
        ],
        providers = [],
    }
}

// ============================================================================
// Module Builders
// ============================================================================

/// Opens the database, makes sure the schema exists and builds the module.
pub async fn build_module(db_config: &DatabaseConfig) -> RosterResult<Arc<RosterModule>> {
    let db_pool = create_pool(db_config).await?;

    let module = RosterModule::builder()
        .with_component_parameters::<DatabasePool>(DatabasePoolParameters {
            pool: db_pool.inner().clone(),
        })
        .build();

    Ok(Arc::new(module))
}

// ============================================================================
// Module Resolution Helpers
// ============================================================================

/// Trait for resolving the user service from a module.
pub trait ServiceResolver {
    /// Resolves the user service from the module.
    fn user_service(&self) -> Arc<dyn UserService>;
}

impl ServiceResolver for RosterModule {
    fn user_service(&self) -> Arc<dyn UserService> {
        self.resolve()
    }
}

/// Trait for resolving the database handle from a module.
pub trait DatabaseResolver {
    /// Resolves the database handle from the module.
    fn database_pool(&self) -> Arc<dyn DatabasePoolInterface>;
}

impl DatabaseResolver for RosterModule {
    fn database_pool(&self) -> Arc<dyn DatabasePoolInterface> {
        self.resolve()
    }
}

/// Trait for resolving the repository from a module.
pub trait RepositoryResolver {
    /// Resolves the user repository from the module.
    fn user_repository(&self) -> Arc<dyn UserRepository>;
}

impl RepositoryResolver for RosterModule {
    fn user_repository(&self) -> Arc<dyn UserRepository> {
        self.resolve()
    }
}
