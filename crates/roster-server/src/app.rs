//! Application runner.

use crate::di::{build_module, DatabaseResolver, RosterModule, ServiceResolver};
use roster_config::AppConfig;
use roster_core::RosterResult;
use roster_grpc::GrpcServer;
use std::future::Future;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

/// A fully wired server, ready to accept requests.
pub struct Application {
    config: AppConfig,
    module: Arc<RosterModule>,
}

impl Application {
    /// Opens the database and wires every component.
    pub async fn build(config: AppConfig) -> RosterResult<Self> {
        let module = build_module(&config.database).await?;
        Ok(Self { config, module })
    }

    /// Returns the configuration the application was built with.
    #[must_use]
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Returns the DI module.
    #[must_use]
    pub fn module(&self) -> &Arc<RosterModule> {
        &self.module
    }

    /// Serves on the configured address until `signal` resolves.
    pub async fn run_until<F>(self, signal: F) -> RosterResult<()>
    where
        F: Future<Output = ()> + Send,
    {
        let server = GrpcServer::new(
            &self.config.server,
            self.module.user_service(),
            self.module.database_pool(),
        )?;
        let result = server.serve_with_shutdown(signal).await;
        self.shutdown().await;
        result
    }

    /// Serves on an already-bound listener until `signal` resolves.
    pub async fn run_with_listener<F>(self, listener: TcpListener, signal: F) -> RosterResult<()>
    where
        F: Future<Output = ()> + Send,
    {
        let server = GrpcServer::new(
            &self.config.server,
            self.module.user_service(),
            self.module.database_pool(),
        )?;
        let result = server.serve_with_listener(listener, signal).await;
        self.shutdown().await;
        result
    }

    async fn shutdown(&self) {
        self.module.database_pool().close().await;
        info!("Server shutdown complete");
    }
}

impl std::fmt::Debug for Application {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Application")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
