//! # Roster gRPC
//!
//! gRPC service layer using Tonic for the Roster user service.
//! Provides the `user.UserService` endpoints and the standard health check.
//!
//! Also includes a gRPC client implementing the same `UserService` trait for
//! callers running in another process.

pub mod clients;
pub mod proto;
pub mod server;
pub mod services;

pub use clients::*;
pub use server::*;
pub use services::*;

#[cfg(test)]
mod tests {
    use super::proto::user;
    use super::services::UserGrpcService;
    use async_trait::async_trait;
    use roster_core::{Page, PageRequest, RosterError, RosterResult, User, UserId};
    use roster_service::{CreateUserRequest, UserListResponse, UserResponse, UserService};
    use std::collections::BTreeMap;
    use std::sync::{Arc, Mutex};
    use tonic::Request;

    // =============================================================================
    // Test Fixtures and Mocks
    // =============================================================================

    fn create_test_user(id: &str) -> User {
        User::with_id(
            UserId::new(id),
            format!("{id}@example.com"),
            "Test User".to_string(),
        )
    }

    /// Mock user service for gRPC tests.
    struct MockUserService {
        users: Arc<Mutex<BTreeMap<String, User>>>,
    }

    impl MockUserService {
        fn new() -> Self {
            Self {
                users: Arc::new(Mutex::new(BTreeMap::new())),
            }
        }

        fn with_users(ids: &[&str]) -> Self {
            let service = Self::new();
            {
                let mut users = service.users.lock().unwrap();
                for id in ids {
                    users.insert((*id).to_string(), create_test_user(id));
                }
            }
            service
        }
    }

    #[async_trait]
    impl UserService for MockUserService {
        async fn get_user(&self, id: UserId) -> RosterResult<UserResponse> {
            self.users
                .lock()
                .unwrap()
                .get(id.as_str())
                .map(UserResponse::from)
                .ok_or_else(|| RosterError::not_found("User", id))
        }

        async fn create_user(&self, request: CreateUserRequest) -> RosterResult<UserResponse> {
            let mut users = self.users.lock().unwrap();
            if users.values().any(|u| u.email == request.email) {
                return Err(RosterError::conflict("Email already exists"));
            }
            let user = User::new(request.email, request.name);
            users.insert(user.id.as_str().to_string(), user.clone());
            Ok(UserResponse::from(user))
        }

        async fn list_users(&self, page: PageRequest) -> RosterResult<UserListResponse> {
            let users = self.users.lock().unwrap();
            let total = users.len() as u64;
            let items = users
                .values()
                .skip(usize::try_from(page.offset()).unwrap())
                .take(page.limit() as usize)
                .cloned()
                .collect();
            Ok(UserListResponse::from(Page::new(items, page, total)))
        }
    }

    /// User service whose every call fails with a storage error.
    struct BrokenUserService;

    #[async_trait]
    impl UserService for BrokenUserService {
        async fn get_user(&self, _id: UserId) -> RosterResult<UserResponse> {
            Err(RosterError::Database("database is locked".to_string()))
        }

        async fn create_user(&self, _request: CreateUserRequest) -> RosterResult<UserResponse> {
            Err(RosterError::Database("database is locked".to_string()))
        }

        async fn list_users(&self, _page: PageRequest) -> RosterResult<UserListResponse> {
            Err(RosterError::Database("database is locked".to_string()))
        }
    }

    // =============================================================================
    // User gRPC Service Tests
    // =============================================================================

    #[tokio::test]
    async fn test_grpc_get_user_success() {
        let service = UserGrpcService::new(Arc::new(MockUserService::with_users(&["u1"])));

        let request = Request::new(user::GetUserRequest {
            id: "u1".to_string(),
        });

        let response = user::user_service_server::UserService::get_user(&service, request)
            .await
            .unwrap();
        let user = response.into_inner();
        assert_eq!(user.id, "u1");
        assert_eq!(user.email, "u1@example.com");
        assert_eq!(user.name, "Test User");
    }

    #[tokio::test]
    async fn test_grpc_get_user_not_found() {
        let service = UserGrpcService::new(Arc::new(MockUserService::new()));

        let request = Request::new(user::GetUserRequest {
            id: "does-not-exist".to_string(),
        });

        let status = user::user_service_server::UserService::get_user(&service, request)
            .await
            .unwrap_err();
        assert_eq!(status.code(), tonic::Code::NotFound);
        assert_eq!(status.message(), "User not found");
    }

    #[tokio::test]
    async fn test_grpc_get_user_empty_id_is_not_found() {
        let service = UserGrpcService::new(Arc::new(MockUserService::with_users(&["u1"])));

        let request = Request::new(user::GetUserRequest { id: String::new() });

        let status = user::user_service_server::UserService::get_user(&service, request)
            .await
            .unwrap_err();
        assert_eq!(status.code(), tonic::Code::NotFound);
    }

    #[tokio::test]
    async fn test_grpc_create_user() {
        let service = UserGrpcService::new(Arc::new(MockUserService::new()));

        let request = Request::new(user::CreateUserRequest {
            email: "a@x.com".to_string(),
            name: "A".to_string(),
        });

        let response = user::user_service_server::UserService::create_user(&service, request)
            .await
            .unwrap();
        let user = response.into_inner();
        assert!(!user.id.is_empty());
        assert_eq!(user.email, "a@x.com");
        assert_eq!(user.name, "A");
    }

    #[tokio::test]
    async fn test_grpc_create_user_duplicate_email() {
        let service = UserGrpcService::new(Arc::new(MockUserService::new()));

        for expected_ok in [true, false] {
            let request = Request::new(user::CreateUserRequest {
                email: "a@x.com".to_string(),
                name: "A".to_string(),
            });
            let result =
                user::user_service_server::UserService::create_user(&service, request).await;

            if expected_ok {
                assert!(result.is_ok());
            } else {
                let status = result.unwrap_err();
                assert_eq!(status.code(), tonic::Code::AlreadyExists);
                assert_eq!(status.message(), "Email already exists");
            }
        }
    }

    #[tokio::test]
    async fn test_grpc_list_users() {
        let service =
            UserGrpcService::new(Arc::new(MockUserService::with_users(&["c", "a", "b"])));

        let request = Request::new(user::ListUsersRequest {
            page: 1,
            page_size: 2,
        });

        let response = user::user_service_server::UserService::list_users(&service, request)
            .await
            .unwrap();
        let inner = response.into_inner();
        let ids: Vec<&str> = inner.users.iter().map(|u| u.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b"]);
        assert_eq!(inner.total, 3);
    }

    #[tokio::test]
    async fn test_grpc_list_users_clamps_out_of_range_values() {
        let service = UserGrpcService::new(Arc::new(MockUserService::with_users(&["a", "b"])));

        let request = Request::new(user::ListUsersRequest {
            page: -4,
            page_size: 0,
        });

        let response = user::user_service_server::UserService::list_users(&service, request)
            .await
            .unwrap();
        let inner = response.into_inner();
        assert_eq!(inner.users.len(), 1);
        assert_eq!(inner.users[0].id, "a");
        assert_eq!(inner.total, 2);
    }

    #[tokio::test]
    async fn test_grpc_storage_failure_is_internal() {
        let service = UserGrpcService::new(Arc::new(BrokenUserService));

        let request = Request::new(user::ListUsersRequest {
            page: 1,
            page_size: 10,
        });

        let status = user::user_service_server::UserService::list_users(&service, request)
            .await
            .unwrap_err();
        assert_eq!(status.code(), tonic::Code::Internal);
        assert!(!status.message().contains("locked"));
    }
}
