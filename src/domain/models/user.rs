//! User Domain Model
//!
//! Represents a registered teacher or student.

use std::str::FromStr;

use chrono::{DateTime, Utc};

use super::ids::UserId;
use crate::shared::errors::DomainError;

/// Kind of account, stored as the user's `type`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UserRole {
    Teacher,
    Student,
}

impl UserRole {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Teacher => "teacher",
            Self::Student => "student",
        }
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UserRole {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "teacher" => Ok(Self::Teacher),
            "student" => Ok(Self::Student),
            other => Err(DomainError::InvalidState(format!("unknown user type '{other}'"))),
        }
    }
}

/// Data required to persist a new user. The password is already hashed.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub role: UserRole,
}

/// Identity carried by a verified access token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub user_id: UserId,
    pub email: String,
    pub role: UserRole,
}

impl Identity {
    #[must_use]
    pub fn is_teacher(&self) -> bool {
        self.role == UserRole::Teacher
    }
}

/// User domain entity
#[derive(Debug, Clone)]
pub struct User {
    id: UserId,
    name: String,
    email: String,
    password_hash: String,
    role: UserRole,
    created_at: DateTime<Utc>,
}

impl User {
    /// Restore a User from persisted data
    #[must_use]
    pub fn restore(
        id: UserId,
        name: String,
        email: String,
        password_hash: String,
        role: UserRole,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            email,
            password_hash,
            role,
            created_at,
        }
    }

    /// Identity to embed in an access token for this user
    #[must_use]
    pub fn identity(&self) -> Identity {
        Identity {
            user_id: self.id,
            email: self.email.clone(),
            role: self.role,
        }
    }

    #[must_use]
    pub fn id(&self) -> UserId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    #[must_use]
    pub fn password_hash(&self) -> &str {
        &self.password_hash
    }

    #[must_use]
    pub fn role(&self) -> UserRole {
        self.role
    }

    #[must_use]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

/// Canonical form used to store and look up emails
#[must_use]
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}
