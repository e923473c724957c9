//! gRPC server setup.

use crate::proto::{health, user};
use crate::services::{HealthServiceImpl, UserGrpcService};
use roster_config::ServerConfig;
use roster_core::{RosterError, RosterResult};
use roster_repository::DatabasePoolInterface;
use roster_service::UserService;
use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio_stream::wrappers::TcpListenerStream;
use tonic::transport::server::Router;
use tonic::transport::Server;
use tracing::info;

/// gRPC server exposing the user service and the health service.
pub struct GrpcServer {
    addr: SocketAddr,
    user_service: Arc<dyn UserService>,
    database_pool: Arc<dyn DatabasePoolInterface>,
}

impl GrpcServer {
    /// Creates a new gRPC server.
    ///
    /// `database_pool` backs the health service.
    pub fn new(
        config: &ServerConfig,
        user_service: Arc<dyn UserService>,
        database_pool: Arc<dyn DatabasePoolInterface>,
    ) -> RosterResult<Self> {
        let addr = config
            .grpc_addr()
            .parse()
            .map_err(|e| RosterError::Configuration(format!("Invalid gRPC address: {}", e)))?;

        Ok(Self {
            addr,
            user_service,
            database_pool,
        })
    }

    fn router(self) -> Router {
        let health_service = HealthServiceImpl::new(self.database_pool);
        let user_grpc_service = UserGrpcService::new(self.user_service);

        Server::builder()
            .add_service(health::health_server::HealthServer::new(health_service))
            .add_service(user::user_service_server::UserServiceServer::new(user_grpc_service))
    }

    /// Starts the gRPC server and stops accepting requests once `signal`
    /// resolves. In-flight requests are allowed to finish.
    pub async fn serve_with_shutdown<F>(self, signal: F) -> RosterResult<()>
    where
        F: Future<Output = ()> + Send,
    {
        let addr = self.addr;
        info!("Starting gRPC server on {}", addr);

        self.router()
            .serve_with_shutdown(addr, signal)
            .await
            .map_err(|e| RosterError::Internal(format!("gRPC server error: {}", e)))?;

        info!("gRPC server stopped");
        Ok(())
    }

    /// Serves on an already-bound listener, ignoring the configured address.
    pub async fn serve_with_listener<F>(self, listener: TcpListener, signal: F) -> RosterResult<()>
    where
        F: Future<Output = ()> + Send,
    {
        let local_addr = listener
            .local_addr()
            .map_err(|e| RosterError::Internal(format!("Listener has no address: {}", e)))?;
        info!("Starting gRPC server on {}", local_addr);

        self.router()
            .serve_with_incoming_shutdown(TcpListenerStream::new(listener), signal)
            .await
            .map_err(|e| RosterError::Internal(format!("gRPC server error: {}", e)))?;

        info!("gRPC server stopped");
        Ok(())
    }
}

impl std::fmt::Debug for GrpcServer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GrpcServer")
            .field("addr", &self.addr)
            .finish_non_exhaustive()
    }
}
