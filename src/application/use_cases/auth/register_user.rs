//! Register User Use Case
//!
//! Creates a teacher or student account with a hashed password.

use std::sync::Arc;

use zeroize::Zeroizing;

use crate::domain::gateways::{PasswordHasher, UserRepository};
use crate::domain::models::user::normalize_email;
use crate::domain::models::{NewUser, User, UserRole};
use crate::shared::errors::{DomainError, RepositoryError, UseCaseError};

/// Input for registering a user
#[derive(Debug)]
pub struct RegisterUserCommand {
    pub name: String,
    pub email: String,
    pub password: Zeroizing<String>,
    pub role: UserRole,
}

/// Use case for registering a new user
pub struct RegisterUserUseCase {
    user_repository: Arc<dyn UserRepository>,
    password_hasher: Arc<dyn PasswordHasher>,
}

impl RegisterUserUseCase {
    /// Create a new RegisterUserUseCase
    #[must_use]
    pub fn new(user_repository: Arc<dyn UserRepository>, password_hasher: Arc<dyn PasswordHasher>) -> Self {
        Self {
            user_repository,
            password_hasher,
        }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `DomainError::EmailTaken` if the email is already registered.
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn execute(&self, command: RegisterUserCommand) -> Result<User, UseCaseError> {
        let email = normalize_email(&command.email);
        tracing::info!(email = %email, role = %command.role, "Registering new user");

        if self.user_repository.exists_by_email(&email).await? {
            tracing::warn!(email = %email, "Email already registered");
            return Err(DomainError::EmailTaken(email).into());
        }

        let password_hash = self.password_hasher.hash(&command.password).await?;

        let new_user = NewUser {
            name: command.name,
            email: email.clone(),
            password_hash,
            role: command.role,
        };

        let user = self.user_repository.create(&new_user).await.map_err(|e| match e {
            RepositoryError::Conflict(_) => UseCaseError::from(DomainError::EmailTaken(email.clone())),
            other => other.into(),
        })?;

        tracing::info!(user_id = %user.id(), role = %user.role(), "User registered successfully");
        Ok(user)
    }
}
