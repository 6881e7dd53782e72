//! Authentication DTOs
//!
//! Data transfer objects for registration, login and user listings.

use serde::{Deserialize, Serialize};
use validator::Validate;
use zeroize::Zeroizing;

use crate::application::use_cases::auth::{LoginCommand, RegisterUserCommand};
use crate::domain::models::{User, UserRole};

/// Validates that the user type names a known role
fn validate_user_type(user_type: &str) -> Result<(), validator::ValidationError> {
    if user_type.parse::<UserRole>().is_ok() {
        Ok(())
    } else {
        let mut error = validator::ValidationError::new("user_type");
        error.message = Some("type must be either 'teacher' or 'student'".into());
        Err(error)
    }
}

fn validate_not_blank(value: &str) -> Result<(), validator::ValidationError> {
    if value.trim().is_empty() {
        let mut error = validator::ValidationError::new("blank");
        error.message = Some("name must not be blank".into());
        return Err(error);
    }
    Ok(())
}

/// DTO for registering a user
///
/// Not `Debug`: the password must never reach the logs.
#[derive(Deserialize, Validate)]
pub struct RegisterUserDto {
    #[validate(length(min = 1, max = 100, message = "name must be between 1 and 100 characters"))]
    #[validate(custom(function = "validate_not_blank"))]
    pub name: String,

    #[validate(email(message = "email must be a valid email address"))]
    #[validate(length(max = 100, message = "email must be at most 100 characters"))]
    pub email: String,

    #[validate(length(min = 8, max = 128, message = "password must be between 8 and 128 characters"))]
    pub password: String,

    #[serde(rename = "type")]
    #[validate(custom(function = "validate_user_type"))]
    pub user_type: String,
}

impl TryFrom<RegisterUserDto> for RegisterUserCommand {
    type Error = crate::shared::errors::DomainError;

    fn try_from(dto: RegisterUserDto) -> Result<Self, Self::Error> {
        Ok(Self {
            role: dto.user_type.parse()?,
            name: dto.name,
            email: dto.email,
            password: Zeroizing::new(dto.password),
        })
    }
}

/// DTO for logging in
#[derive(Deserialize, Validate)]
pub struct LoginDto {
    #[validate(length(min = 1, message = "email is required"))]
    pub email: String,

    #[validate(length(min = 1, message = "password is required"))]
    pub password: String,
}

impl From<LoginDto> for LoginCommand {
    fn from(dto: LoginDto) -> Self {
        Self {
            email: dto.email,
            password: Zeroizing::new(dto.password),
        }
    }
}

/// Access token returned by a successful login
#[derive(Debug, Clone, Serialize)]
pub struct AccessTokenDto {
    pub access_token: String,
}

/// Public view of a user
#[derive(Debug, Clone, Serialize)]
pub struct UserResponseDto {
    pub id: i64,
    pub name: String,
    pub email: String,
    #[serde(rename = "type")]
    pub user_type: String,
}

impl From<&User> for UserResponseDto {
    fn from(user: &User) -> Self {
        Self {
            id: user.id().value(),
            name: user.name().to_string(),
            email: user.email().to_string(),
            user_type: user.role().as_str().to_string(),
        }
    }
}
