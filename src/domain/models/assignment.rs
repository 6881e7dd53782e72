//! Assignment Domain Model

use chrono::{DateTime, NaiveDateTime, SecondsFormat, Utc};

use super::ids::{AssignmentId, CourseId};
use crate::shared::errors::DomainError;

/// Wire format clients send due dates in, e.g. `2024-05-31T23:59:59Z`
pub const DUE_DATE_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Parse a due date in [`DUE_DATE_FORMAT`], falling back to any RFC 3339 timestamp
///
/// # Errors
///
/// Returns `DomainError::InvalidState` if the value matches neither format.
pub fn parse_due_date(value: &str) -> Result<DateTime<Utc>, DomainError> {
    if let Ok(naive) = NaiveDateTime::parse_from_str(value, DUE_DATE_FORMAT) {
        return Ok(naive.and_utc());
    }
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| DomainError::InvalidState(format!("due_date '{value}' is not a valid timestamp")))
}

/// Render a due date the way it is returned to clients
#[must_use]
pub fn format_due_date(value: DateTime<Utc>) -> String {
    value.to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Data required to create a new Assignment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAssignment {
    pub course_id: CourseId,
    pub name: String,
    pub due_date: DateTime<Utc>,
    pub description: Option<String>,
}

/// Assignment domain entity
#[derive(Debug, Clone)]
pub struct Assignment {
    id: AssignmentId,
    course_id: CourseId,
    name: String,
    due_date: DateTime<Utc>,
    description: Option<String>,
    created_at: DateTime<Utc>,
}

impl Assignment {
    /// Restore an Assignment from persisted data
    #[must_use]
    pub fn restore(
        id: AssignmentId,
        course_id: CourseId,
        name: String,
        due_date: DateTime<Utc>,
        description: Option<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            course_id,
            name,
            due_date,
            description,
            created_at,
        }
    }

    #[must_use]
    pub fn id(&self) -> AssignmentId {
        self.id
    }

    #[must_use]
    pub fn course_id(&self) -> CourseId {
        self.course_id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn due_date(&self) -> DateTime<Utc> {
        self.due_date
    }

    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    #[must_use]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
