//! Login User Use Case
//!
//! Exchanges valid credentials for a signed access token.

use std::sync::Arc;

use zeroize::Zeroizing;

use crate::domain::gateways::{PasswordHasher, TokenService, UserRepository};
use crate::domain::models::user::normalize_email;
use crate::shared::errors::UseCaseError;

const INVALID_CREDENTIALS: &str = "Invalid credentials";

/// Input for logging in
#[derive(Debug)]
pub struct LoginCommand {
    pub email: String,
    pub password: Zeroizing<String>,
}

/// Use case for logging in
pub struct LoginUserUseCase {
    user_repository: Arc<dyn UserRepository>,
    password_hasher: Arc<dyn PasswordHasher>,
    token_service: Arc<dyn TokenService>,
}

impl LoginUserUseCase {
    /// Create a new LoginUserUseCase
    #[must_use]
    pub fn new(
        user_repository: Arc<dyn UserRepository>,
        password_hasher: Arc<dyn PasswordHasher>,
        token_service: Arc<dyn TokenService>,
    ) -> Self {
        Self {
            user_repository,
            password_hasher,
            token_service,
        }
    }

    /// Execute the use case, returning an access token
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::Unauthorized` if the email is unknown or the
    /// password does not match.
    pub async fn execute(&self, command: LoginCommand) -> Result<String, UseCaseError> {
        let email = normalize_email(&command.email);
        tracing::info!(email = %email, "Login attempt");

        let Some(user) = self.user_repository.find_by_email(&email).await? else {
            tracing::warn!(email = %email, "Login failed: unknown email");
            return Err(UseCaseError::Unauthorized(INVALID_CREDENTIALS.to_string()));
        };

        if !self
            .password_hasher
            .verify(&command.password, user.password_hash())
            .await?
        {
            tracing::warn!(user_id = %user.id(), "Login failed: wrong password");
            return Err(UseCaseError::Unauthorized(INVALID_CREDENTIALS.to_string()));
        }

        let token = self.token_service.issue(&user.identity())?;

        tracing::info!(user_id = %user.id(), "User logged in");
        Ok(token)
    }
}
