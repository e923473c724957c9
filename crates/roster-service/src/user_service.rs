//! User service trait definition.

use crate::dto::{CreateUserRequest, UserListResponse, UserResponse};
use async_trait::async_trait;
use roster_core::{Interface, PageRequest, RosterResult, UserId};

/// User service trait.
#[async_trait]
pub trait UserService: Interface + Send + Sync {
    /// Gets a user by ID.
    ///
    /// Returns `RosterError::NotFound` when no user has that id.
    async fn get_user(&self, id: UserId) -> RosterResult<UserResponse>;

    /// Creates a new user with a freshly generated id.
    ///
    /// Returns `RosterError::Conflict("Email already exists")` when the
    /// email is already taken.
    async fn create_user(&self, request: CreateUserRequest) -> RosterResult<UserResponse>;

    /// Lists users ordered by id, one page at a time.
    async fn list_users(&self, page: PageRequest) -> RosterResult<UserListResponse>;
}
