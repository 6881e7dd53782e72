//! Token Service Gateway
//!
//! Issues and verifies the bearer tokens that carry a user's identity.

use crate::domain::models::Identity;
use crate::shared::errors::SecurityError;

#[cfg_attr(test, mockall::automock)]
pub trait TokenService: Send + Sync {
    /// Issue a signed access token for the identity
    fn issue(&self, identity: &Identity) -> Result<String, SecurityError>;

    /// Verify a token and return the identity it carries
    fn verify(&self, token: &str) -> Result<Identity, SecurityError>;
}
