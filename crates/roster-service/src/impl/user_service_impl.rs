//! User service implementations.

use crate::dto::{CreateUserRequest, UserListResponse, UserResponse};
use crate::user_service::UserService;
use async_trait::async_trait;
use roster_core::{PageRequest, RosterError, RosterResult, User, UserId};
use roster_repository::UserRepository;
use shaku::Component;
use std::sync::Arc;
use tracing::{debug, info};

/// Message reported when a create collides with an existing email.
pub const EMAIL_EXISTS_MESSAGE: &str = "Email already exists";

/// User service component for Shaku DI.
#[derive(Component)]
#[shaku(interface = UserService)]
pub struct UserServiceImpl {
    #[shaku(inject)]
    user_repository: Arc<dyn UserRepository>,
}

impl UserServiceImpl {
    /// Creates a new user service.
    #[must_use]
    pub fn new(user_repository: Arc<dyn UserRepository>) -> Self {
        Self { user_repository }
    }
}

#[async_trait]
impl UserService for UserServiceImpl {
    async fn get_user(&self, id: UserId) -> RosterResult<UserResponse> {
        debug!("Getting user: {}", id);

        let user = self
            .user_repository
            .find_by_id(&id)
            .await?
            .ok_or_else(|| RosterError::not_found("User", &id))?;

        Ok(UserResponse::from(user))
    }

    async fn create_user(&self, request: CreateUserRequest) -> RosterResult<UserResponse> {
        debug!("Creating user: {}", request.email);

        let user = User::new(request.email, request.name);

        // Duplicates are detected by the unique constraint alone.
        let saved_user = self.user_repository.insert(&user).await.map_err(|e| {
            if e.is_conflict() {
                RosterError::conflict(EMAIL_EXISTS_MESSAGE)
            } else {
                e
            }
        })?;

        info!("User created: {}", saved_user.id);
        Ok(UserResponse::from(saved_user))
    }

    async fn list_users(&self, page: PageRequest) -> RosterResult<UserListResponse> {
        debug!("Listing users, page: {}, size: {}", page.page(), page.size());

        let users = self.user_repository.find_all(page).await?;
        Ok(UserListResponse::from(users))
    }
}

impl std::fmt::Debug for UserServiceImpl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserServiceImpl").finish_non_exhaustive()
    }
}
