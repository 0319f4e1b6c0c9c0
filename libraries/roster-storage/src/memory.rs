use async_trait::async_trait;
use roster_core::{error::Result, types::User, UserRepository};
use std::sync::Arc;

/// Fixed, in-process list of users
///
/// `find_all` returns the users in the order they were given.
#[derive(Debug, Clone, Default)]
pub struct InMemoryUserRepository {
    users: Arc<Vec<User>>,
}

impl InMemoryUserRepository {
    pub fn new(users: Vec<User>) -> Self {
        Self {
            users: Arc::new(users),
        }
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_all(&self) -> Result<Vec<User>> {
        Ok(self.users.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn empty_repository_returns_no_users() {
        let repository = InMemoryUserRepository::default();
        assert!(repository.is_empty());
        assert!(repository.find_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn preserves_insertion_order() {
        let repository =
            InMemoryUserRepository::new(vec![User::new(3, "Carol"), User::new(1, "Alice")]);

        let users = repository.find_all().await.unwrap();
        assert_eq!(repository.len(), 2);
        assert_eq!(users[0].id, 3);
        assert_eq!(users[1].id, 1);
    }
}
