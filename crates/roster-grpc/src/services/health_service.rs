//! gRPC health service implementation.

use crate::proto::health::{
    health_check_response::ServingStatus, health_server::Health, HealthCheckRequest,
    HealthCheckResponse,
};
use roster_repository::DatabasePoolInterface;
use std::sync::Arc;
use tokio_stream::wrappers::ReceiverStream;
use tonic::{Request, Response, Status};
use tracing::{debug, warn};

/// Fully-qualified name of the user service, as health clients ask for it.
pub const USER_SERVICE_NAME: &str = "user.UserService";

/// Health service backed by the user store.
///
/// The overall server (empty service name) and the user service are
/// SERVING while the store answers, NOT_SERVING otherwise. Any other name
/// is unknown.
pub struct HealthServiceImpl {
    database_pool: Arc<dyn DatabasePoolInterface>,
}

impl HealthServiceImpl {
    /// Creates a new health service.
    pub fn new(database_pool: Arc<dyn DatabasePoolInterface>) -> Self {
        Self { database_pool }
    }

    /// Gets the health status for a service.
    async fn get_status(&self, service: &str) -> ServingStatus {
        debug!("Health check for service: {:?}", service);

        match service {
            "" | USER_SERVICE_NAME => match self.database_pool.health_check().await {
                Ok(()) => ServingStatus::Serving,
                Err(e) => {
                    warn!("Store health check failed: {}", e);
                    ServingStatus::NotServing
                }
            },
            _ => ServingStatus::ServiceUnknown,
        }
    }
}

impl std::fmt::Debug for HealthServiceImpl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HealthServiceImpl").finish_non_exhaustive()
    }
}

#[tonic::async_trait]
impl Health for HealthServiceImpl {
    async fn check(
        &self,
        request: Request<HealthCheckRequest>,
    ) -> Result<Response<HealthCheckResponse>, Status> {
        let req = request.into_inner();
        let status = self.get_status(&req.service).await;

        Ok(Response::new(HealthCheckResponse {
            status: status.into(),
        }))
    }

    type WatchStream = ReceiverStream<Result<HealthCheckResponse, Status>>;

    async fn watch(
        &self,
        request: Request<HealthCheckRequest>,
    ) -> Result<Response<Self::WatchStream>, Status> {
        let req = request.into_inner();
        let status = self.get_status(&req.service).await;

        let (tx, rx) = tokio::sync::mpsc::channel(1);

        // Send initial status
        let _ = tx
            .send(Ok(HealthCheckResponse {
                status: status.into(),
            }))
            .await;

        Ok(Response::new(ReceiverStream::new(rx)))
    }
}
