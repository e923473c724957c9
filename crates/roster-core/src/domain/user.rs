//! User entity.

use crate::UserId;
use serde::{Deserialize, Serialize};

/// A user record.
///
/// The id is assigned by the service when the record is created and never
/// changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier for the user.
    pub id: UserId,

    /// User's email address, unique across all users.
    pub email: String,

    /// User's display name.
    pub name: String,
}

impl User {
    /// Creates a new user with a freshly generated id.
    #[must_use]
    pub fn new(email: String, name: String) -> Self {
        Self {
            id: UserId::generate(),
            email,
            name,
        }
    }

    /// Creates a user with a known id, as read back from storage.
    #[must_use]
    pub fn with_id(id: UserId, email: String, name: String) -> Self {
        Self { id, email, name }
    }
}
