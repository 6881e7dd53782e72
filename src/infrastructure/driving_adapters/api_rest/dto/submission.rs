//! Submission DTOs

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::models::Submission;

/// DTO for submitting an assignment
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(default)]
pub struct SubmitAssignmentDto {
    pub content: Option<String>,
}

/// DTO for marking a submission; both values replace the stored ones
///
/// The marks range is checked once the caller's ownership of the course is known.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct MarkSubmissionDto {
    pub marks: Option<i32>,

    pub feedback: Option<String>,
}

/// Body returned after submitting an assignment
#[derive(Debug, Clone, Serialize)]
pub struct SubmissionCreatedDto {
    pub id: i64,
    pub assignment_id: i64,
    pub student_id: i64,
}

impl From<&Submission> for SubmissionCreatedDto {
    fn from(submission: &Submission) -> Self {
        Self {
            id: submission.id().value(),
            assignment_id: submission.assignment_id().value(),
            student_id: submission.student_id().value(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mark_dto_defaults_to_cleared_values() {
        let dto: MarkSubmissionDto = serde_json::from_str("{}").unwrap();
        assert!(dto.marks.is_none());
        assert!(dto.feedback.is_none());

        let dto: MarkSubmissionDto = serde_json::from_str(r#"{"marks": 95, "feedback": "Good job!"}"#).unwrap();
        assert_eq!(dto.marks, Some(95));
        assert_eq!(dto.feedback.as_deref(), Some("Good job!"));
    }
}
