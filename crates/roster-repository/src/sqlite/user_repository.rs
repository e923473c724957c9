//! SQLite user repository implementation.

use crate::{traits::UserRepository, DatabasePoolInterface};
use async_trait::async_trait;
use roster_core::{Page, PageRequest, RosterResult, User, UserId};
use shaku::Component;
use sqlx::FromRow;
use std::sync::Arc;
use tracing::debug;

/// SQLite user repository implementation.
#[derive(Component, Clone)]
#[shaku(interface = UserRepository)]
pub struct SqliteUserRepository {
    #[shaku(inject)]
    pool: Arc<dyn DatabasePoolInterface>,
}

impl SqliteUserRepository {
    /// Creates a new SQLite user repository.
    #[must_use]
    pub fn new(pool: Arc<dyn DatabasePoolInterface>) -> Self {
        Self { pool }
    }
}

/// Database row representation of a user.
#[derive(Debug, FromRow)]
struct UserRow {
    id: String,
    email: String,
    name: String,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        User::with_id(UserId::from(row.id), row.email, row.name)
    }
}

#[async_trait]
impl UserRepository for SqliteUserRepository {
    async fn find_by_id(&self, id: &UserId) -> RosterResult<Option<User>> {
        debug!("Finding user by id: {}", id);

        let mut conn = self.pool.inner().acquire().await?;

        let row = sqlx::query_as::<_, UserRow>("SELECT id, email, name FROM users WHERE id = ?")
            .bind(id.as_str())
            .fetch_optional(&mut *conn)
            .await?;

        Ok(row.map(User::from))
    }

    async fn insert(&self, user: &User) -> RosterResult<User> {
        debug!("Inserting user: {}", user.id);

        // Dropping the transaction without commit rolls it back.
        let mut tx = self.pool.inner().begin().await?;

        sqlx::query("INSERT INTO users (id, email, name) VALUES (?, ?, ?)")
            .bind(user.id.as_str())
            .bind(&user.email)
            .bind(&user.name)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(user.clone())
    }

    async fn find_all(&self, page: PageRequest) -> RosterResult<Page<User>> {
        debug!("Finding all users, page: {}, size: {}", page.page(), page.size());

        // One read transaction so the rows and the total agree.
        let mut tx = self.pool.inner().begin().await?;

        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
            .fetch_one(&mut *tx)
            .await?;

        let rows = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, email, name
            FROM users
            ORDER BY id ASC
            LIMIT ? OFFSET ?
            "#,
        )
        .bind(i64::from(page.limit()))
        .bind(i64::try_from(page.offset()).unwrap_or(i64::MAX))
        .fetch_all(&mut *tx)
        .await?;

        tx.commit().await?;

        let users = rows.into_iter().map(User::from).collect();

        Ok(Page::new(users, page, u64::try_from(total).unwrap_or_default()))
    }

    async fn count(&self) -> RosterResult<u64> {
        let mut conn = self.pool.inner().acquire().await?;

        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
            .fetch_one(&mut *conn)
            .await?;

        Ok(u64::try_from(total).unwrap_or_default())
    }
}

impl std::fmt::Debug for SqliteUserRepository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SqliteUserRepository").finish_non_exhaustive()
    }
}
