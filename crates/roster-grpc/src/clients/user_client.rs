//! Remote user service client via gRPC.

use crate::proto::user;
use async_trait::async_trait;
use roster_core::{PageRequest, RosterError, RosterResult, UserId};
use roster_service::dto::{CreateUserRequest, UserListResponse, UserResponse};
use roster_service::UserService;
use tonic::transport::Channel;
use tracing::debug;

/// Remote user service client that communicates via gRPC.
#[derive(Debug, Clone)]
pub struct RemoteUserServiceClient {
    client: user::user_service_client::UserServiceClient<Channel>,
}

impl RemoteUserServiceClient {
    /// Connects to a user service at `addr` (e.g. `http://127.0.0.1:50053`).
    pub async fn connect(addr: &str) -> RosterResult<Self> {
        let client = user::user_service_client::UserServiceClient::connect(addr.to_string())
            .await
            .map_err(|e| {
                RosterError::Internal(format!("Failed to connect to user service: {}", e))
            })?;

        Ok(Self { client })
    }
}

#[async_trait]
impl UserService for RemoteUserServiceClient {
    async fn get_user(&self, id: UserId) -> RosterResult<UserResponse> {
        debug!("Remote GetUser: {}", id);

        let response = self
            .client
            .clone()
            .get_user(user::GetUserRequest {
                id: id.as_str().to_string(),
            })
            .await
            .map_err(|status| match status.code() {
                tonic::Code::NotFound => RosterError::not_found("User", &id),
                _ => map_grpc_error(&status),
            })?;

        Ok(from_proto_user(response.into_inner()))
    }

    async fn create_user(&self, request: CreateUserRequest) -> RosterResult<UserResponse> {
        debug!("Remote CreateUser: {}", request.email);

        let response = self
            .client
            .clone()
            .create_user(user::CreateUserRequest {
                email: request.email,
                name: request.name,
            })
            .await
            .map_err(|status| map_grpc_error(&status))?;

        Ok(from_proto_user(response.into_inner()))
    }

    async fn list_users(&self, page: PageRequest) -> RosterResult<UserListResponse> {
        debug!("Remote ListUsers: page {}, size {}", page.page(), page.size());

        let response = self
            .client
            .clone()
            .list_users(user::ListUsersRequest {
                page: i32::try_from(page.page()).unwrap_or(i32::MAX),
                page_size: i32::try_from(page.size()).unwrap_or(i32::MAX),
            })
            .await
            .map_err(|status| map_grpc_error(&status))?;

        let inner = response.into_inner();

        Ok(UserListResponse {
            users: inner.users.into_iter().map(from_proto_user).collect(),
            page: page.page(),
            size: page.size(),
            total: u64::try_from(inner.total).unwrap_or_default(),
        })
    }
}

/// Maps a status returned by the remote service back onto a domain error.
fn map_grpc_error(status: &tonic::Status) -> RosterError {
    match status.code() {
        tonic::Code::NotFound => RosterError::NotFound {
            resource_type: "User",
            id: String::new(),
        },
        tonic::Code::AlreadyExists => RosterError::Conflict(status.message().to_string()),
        _ => RosterError::Internal(format!("gRPC error: {}", status.message())),
    }
}

fn from_proto_user(user: user::User) -> UserResponse {
    UserResponse {
        id: user.id,
        email: user.email,
        name: user.name,
    }
}
