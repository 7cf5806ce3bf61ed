//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation.

use async_trait::async_trait;

use crate::entities::{NewUser, User};
use crate::error::DomainError;
use crate::value_objects::UserId;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a new user record.
    ///
    /// Runs the full uniqueness workflow in one transactional session:
    /// existing email or canonical username yields
    /// [`DomainError::EmailAlreadyRegistered`] / [`DomainError::UsernameTaken`],
    /// with the storage-level unique constraints as the backstop for
    /// concurrent inserts.
    async fn create(&self, new_user: &NewUser) -> RepoResult<User>;

    /// Find user by ID
    async fn find_by_id(&self, id: UserId) -> RepoResult<Option<User>>;

    /// Find user by email address
    async fn find_by_email(&self, email: &str) -> RepoResult<Option<User>>;

    /// List users in insertion order, skipping `skip` and returning at most `limit`
    async fn list(&self, skip: i64, limit: i64) -> RepoResult<Vec<User>>;

    /// Permanently delete a user; `UserNotFound` when no row matches
    async fn delete(&self, id: UserId) -> RepoResult<()>;
}
