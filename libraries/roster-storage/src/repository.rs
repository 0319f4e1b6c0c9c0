use crate::users;
use async_trait::async_trait;
use roster_core::{error::Result, types::User, UserRepository};
use sqlx::SqlitePool;

/// User repository backed by `SQLite`
///
/// Users are returned in ascending id order.
#[derive(Clone, Debug)]
pub struct SqliteUserRepository {
    pool: SqlitePool,
}

impl SqliteUserRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for SqliteUserRepository {
    async fn find_all(&self) -> Result<Vec<User>> {
        Ok(users::get_all(&self.pool).await?)
    }
}
