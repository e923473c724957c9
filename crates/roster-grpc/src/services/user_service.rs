//! User gRPC service implementation.

use crate::proto::user;
use roster_core::{PageRequest, RosterError, UserId};
use roster_service::dto::{CreateUserRequest, UserResponse};
use roster_service::UserService;
use std::sync::Arc;
use tonic::{Request, Response, Status};
use tracing::{debug, error};

/// User gRPC service implementation.
pub struct UserGrpcService {
    user_service: Arc<dyn UserService>,
}

impl UserGrpcService {
    /// Creates a new user gRPC service.
    pub fn new(user_service: Arc<dyn UserService>) -> Self {
        Self { user_service }
    }
}

#[tonic::async_trait]
impl user::user_service_server::UserService for UserGrpcService {
    async fn get_user(
        &self,
        request: Request<user::GetUserRequest>,
    ) -> Result<Response<user::User>, Status> {
        let req = request.into_inner();
        debug!("gRPC GetUser: {}", req.id);

        let response = self
            .user_service
            .get_user(UserId::from(req.id))
            .await
            .map_err(to_status)?;

        Ok(Response::new(to_proto_user(response)))
    }

    async fn create_user(
        &self,
        request: Request<user::CreateUserRequest>,
    ) -> Result<Response<user::User>, Status> {
        let req = request.into_inner();
        debug!("gRPC CreateUser: {}", req.email);

        let response = self
            .user_service
            .create_user(CreateUserRequest::new(req.email, req.name))
            .await
            .map_err(to_status)?;

        Ok(Response::new(to_proto_user(response)))
    }

    async fn list_users(
        &self,
        request: Request<user::ListUsersRequest>,
    ) -> Result<Response<user::ListUsersResponse>, Status> {
        let req = request.into_inner();
        debug!("gRPC ListUsers: page {}, size {}", req.page, req.page_size);

        let response = self
            .user_service
            .list_users(PageRequest::new(req.page, req.page_size))
            .await
            .map_err(to_status)?;

        Ok(Response::new(user::ListUsersResponse {
            users: response.users.into_iter().map(to_proto_user).collect(),
            total: i64::try_from(response.total).unwrap_or(i64::MAX),
        }))
    }
}

/// Maps a domain error onto the status reported to the caller.
///
/// Storage and internal failures are logged here and reported without
/// their details.
pub fn to_status(err: RosterError) -> Status {
    match err {
        RosterError::NotFound { resource_type, .. } => {
            Status::not_found(format!("{resource_type} not found"))
        }
        RosterError::Conflict(msg) => Status::already_exists(msg),
        other => {
            error!("gRPC error: {:?}", other);
            Status::internal("Internal server error")
        }
    }
}

fn to_proto_user(user: UserResponse) -> user::User {
    user::User {
        id: user.id,
        email: user.email,
        name: user.name,
    }
}
