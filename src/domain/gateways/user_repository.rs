//! User Repository Gateway
//!
//! Abstract trait defining the contract for user persistence operations.

use async_trait::async_trait;

use crate::domain::models::{NewUser, User};
use crate::shared::errors::RepositoryError;

/// Repository trait for User persistence operations
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user by its (normalized) email
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepositoryError>;

    /// Check whether an email is already registered
    async fn exists_by_email(&self, email: &str) -> Result<bool, RepositoryError>;

    /// List all users, ordered by id
    async fn find_all(&self) -> Result<Vec<User>, RepositoryError>;

    /// Create a new user.
    ///
    /// Returns `RepositoryError::Conflict` if the email was taken concurrently.
    async fn create(&self, user: &NewUser) -> Result<User, RepositoryError>;
}
