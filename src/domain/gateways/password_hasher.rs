//! Password Hasher Gateway

use async_trait::async_trait;

use crate::shared::errors::SecurityError;

/// One-way password hashing
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PasswordHasher: Send + Sync {
    /// Hash a plaintext password
    async fn hash(&self, password: &str) -> Result<String, SecurityError>;

    /// Check a plaintext password against a stored hash
    async fn verify(&self, password: &str, hash: &str) -> Result<bool, SecurityError>;
}
