//! User-related DTOs.

use roster_core::{Page, User};
use serde::{Deserialize, Serialize};

/// Request to create a new user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateUserRequest {
    pub email: String,
    pub name: String,
}

impl CreateUserRequest {
    /// Creates a new request.
    pub fn new(email: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            name: name.into(),
        }
    }
}

/// User response DTO.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: String,
    pub email: String,
    pub name: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id.into_inner(),
            email: user.email,
            name: user.name,
        }
    }
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.as_str().to_string(),
            email: user.email.clone(),
            name: user.name.clone(),
        }
    }
}

/// User list response with pagination.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserListResponse {
    pub users: Vec<UserResponse>,
    /// The page actually served, after clamping.
    pub page: u32,
    /// The page size actually served, after clamping.
    pub size: u32,
    /// Number of users in the whole store.
    pub total: u64,
}

impl From<Page<User>> for UserListResponse {
    fn from(page: Page<User>) -> Self {
        Self {
            page: page.request.page(),
            size: page.request.size(),
            total: page.total_elements,
            users: page.content.into_iter().map(UserResponse::from).collect(),
        }
    }
}
