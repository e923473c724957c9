//! Repository trait definitions.

use async_trait::async_trait;
use roster_core::{Interface, Page, PageRequest, RosterResult, User, UserId};

/// User repository trait.
#[async_trait]
pub trait UserRepository: Interface + Send + Sync {
    /// Finds a user by ID.
    async fn find_by_id(&self, id: &UserId) -> RosterResult<Option<User>>;

    /// Inserts a new user.
    ///
    /// Returns `RosterError::Conflict` when the email (or id) is already
    /// taken; nothing is written in that case.
    async fn insert(&self, user: &User) -> RosterResult<User>;

    /// Finds a page of users ordered by ascending id, along with the total
    /// number of users.
    async fn find_all(&self, page: PageRequest) -> RosterResult<Page<User>>;

    /// Counts all users.
    async fn count(&self) -> RosterResult<u64>;
}
