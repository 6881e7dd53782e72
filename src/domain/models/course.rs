//! Course Domain Model
//!
//! A course is owned by the teacher who created it.

use chrono::{DateTime, Utc};

use super::ids::{CourseId, UserId};
use crate::shared::errors::DomainError;

/// Data required to create a new Course
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCourse {
    pub title: String,
    pub description: Option<String>,
    pub teacher_id: UserId,
}

impl NewCourse {
    /// Build creation data, rejecting blank titles
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidState` if the title is blank.
    pub fn new(title: String, description: Option<String>, teacher_id: UserId) -> Result<Self, DomainError> {
        if title.trim().is_empty() {
            return Err(DomainError::InvalidState("course title must not be blank".to_string()));
        }
        Ok(Self {
            title,
            description,
            teacher_id,
        })
    }
}

/// Changes to apply to a course; absent fields keep their current value
#[derive(Debug, Clone, Default)]
pub struct CourseChanges {
    pub title: Option<String>,
    /// `Some(None)` clears the description
    #[allow(clippy::option_option)]
    pub description: Option<Option<String>>,
}

/// Course domain entity
#[derive(Debug, Clone)]
pub struct Course {
    id: CourseId,
    title: String,
    description: Option<String>,
    teacher_id: UserId,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Course {
    /// Restore a Course from persisted data
    #[must_use]
    pub fn restore(
        id: CourseId,
        title: String,
        description: Option<String>,
        teacher_id: UserId,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            title,
            description,
            teacher_id,
            created_at,
            updated_at,
        }
    }

    /// Apply changes to the course, returning a new instance
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidState` if the new title is blank.
    pub fn with_changes(self, changes: CourseChanges) -> Result<Self, DomainError> {
        if changes.title.as_deref().is_some_and(|t| t.trim().is_empty()) {
            return Err(DomainError::InvalidState("course title must not be blank".to_string()));
        }
        Ok(Self {
            title: changes.title.unwrap_or(self.title),
            description: changes.description.unwrap_or(self.description),
            updated_at: Utc::now(),
            ..self
        })
    }

    #[must_use]
    pub fn is_owned_by(&self, user_id: UserId) -> bool {
        self.teacher_id == user_id
    }

    #[must_use]
    pub fn id(&self) -> CourseId {
        self.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    #[must_use]
    pub fn teacher_id(&self) -> UserId {
        self.teacher_id
    }

    #[must_use]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    #[must_use]
    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}
