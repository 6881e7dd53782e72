//! Submission Domain Model
//!
//! A student's work for an assignment, optionally marked by the teacher.

use chrono::{DateTime, Utc};

use super::ids::{AssignmentId, SubmissionId, UserId};
use crate::shared::errors::DomainError;

/// Highest mark a submission can receive
pub const MAX_MARKS: i32 = 100;

/// Data required to record a submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSubmission {
    pub assignment_id: AssignmentId,
    pub student_id: UserId,
    pub content: Option<String>,
}

/// Marks and feedback given by the teacher
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Grade {
    marks: Option<i32>,
    feedback: Option<String>,
}

impl Grade {
    /// # Errors
    ///
    /// Returns `DomainError::InvalidState` if marks fall outside `0..=MAX_MARKS`.
    pub fn new(marks: Option<i32>, feedback: Option<String>) -> Result<Self, DomainError> {
        if let Some(m) = marks {
            if !(0..=MAX_MARKS).contains(&m) {
                return Err(DomainError::InvalidState(format!(
                    "marks must be between 0 and {MAX_MARKS}, got {m}"
                )));
            }
        }
        Ok(Self { marks, feedback })
    }

    #[must_use]
    pub fn marks(&self) -> Option<i32> {
        self.marks
    }

    #[must_use]
    pub fn feedback(&self) -> Option<&str> {
        self.feedback.as_deref()
    }
}

/// Submission domain entity
#[derive(Debug, Clone)]
pub struct Submission {
    id: SubmissionId,
    assignment_id: AssignmentId,
    student_id: UserId,
    content: Option<String>,
    grade: Grade,
    submission_date: DateTime<Utc>,
}

impl Submission {
    /// Restore a Submission from persisted data
    #[must_use]
    pub fn restore(
        id: SubmissionId,
        assignment_id: AssignmentId,
        student_id: UserId,
        content: Option<String>,
        grade: Grade,
        submission_date: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            assignment_id,
            student_id,
            content,
            grade,
            submission_date,
        }
    }

    /// Replace marks and feedback
    #[must_use]
    pub fn graded(self, grade: Grade) -> Self {
        Self { grade, ..self }
    }

    #[must_use]
    pub fn id(&self) -> SubmissionId {
        self.id
    }

    #[must_use]
    pub fn assignment_id(&self) -> AssignmentId {
        self.assignment_id
    }

    #[must_use]
    pub fn student_id(&self) -> UserId {
        self.student_id
    }

    #[must_use]
    pub fn content(&self) -> Option<&str> {
        self.content.as_deref()
    }

    #[must_use]
    pub fn grade(&self) -> &Grade {
        &self.grade
    }

    #[must_use]
    pub fn submission_date(&self) -> DateTime<Utc> {
        self.submission_date
    }
}
