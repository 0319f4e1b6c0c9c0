//! Repository trait for user persistence

use crate::error::Result;
use crate::types::User;
use async_trait::async_trait;

/// Read access to persisted users
///
/// This trait abstracts the persistence collaborator so the HTTP layer can be
/// backed by `SQLite`, an in-memory list, or a test double. Implementations own
/// the users; callers only read.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Get all users
    ///
    /// Ordering is whatever the implementation documents. An empty store is
    /// `Ok(vec![])`, never an error.
    async fn find_all(&self) -> Result<Vec<User>>;
}
