//! Bcrypt Password Hasher
//!
//! Hashing runs on the blocking thread pool so slow cost factors never stall
//! the async runtime.

use async_trait::async_trait;
use zeroize::Zeroizing;

use crate::domain::gateways::PasswordHasher;
use crate::shared::errors::SecurityError;

/// bcrypt implementation of PasswordHasher
pub struct BcryptPasswordHasher {
    cost: u32,
}

impl BcryptPasswordHasher {
    #[must_use]
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }
}

#[async_trait]
impl PasswordHasher for BcryptPasswordHasher {
    async fn hash(&self, password: &str) -> Result<String, SecurityError> {
        let password = Zeroizing::new(password.to_owned());
        let cost = self.cost;
        tokio::task::spawn_blocking(move || bcrypt::hash(password.as_str(), cost))
            .await
            .map_err(|e| SecurityError::Hashing(e.to_string()))?
            .map_err(|e| SecurityError::Hashing(e.to_string()))
    }

    async fn verify(&self, password: &str, hash: &str) -> Result<bool, SecurityError> {
        let password = Zeroizing::new(password.to_owned());
        let hash = hash.to_owned();
        let outcome = tokio::task::spawn_blocking(move || bcrypt::verify(password.as_str(), &hash))
            .await
            .map_err(|e| SecurityError::Hashing(e.to_string()))?;

        match outcome {
            Ok(matches) => Ok(matches),
            // A malformed stored hash can never match
            Err(e) => {
                tracing::warn!(error = %e, "Stored password hash could not be parsed");
                Ok(false)
            }
        }
    }
}
