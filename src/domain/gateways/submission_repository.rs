//! Submission Repository Gateway

use async_trait::async_trait;

use crate::domain::models::{AssignmentId, NewSubmission, Submission, UserId};
use crate::shared::errors::RepositoryError;

/// Repository trait for Submission persistence operations
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SubmissionRepository: Send + Sync {
    /// Find a student's submission for an assignment
    async fn find(
        &self,
        assignment_id: AssignmentId,
        student_id: UserId,
    ) -> Result<Option<Submission>, RepositoryError>;

    /// Record a submission, replacing the content of a previous one and clearing its grade
    async fn upsert(&self, submission: &NewSubmission) -> Result<Submission, RepositoryError>;

    /// Persist the grade of an existing submission
    async fn update_grade(&self, submission: &Submission) -> Result<Option<Submission>, RepositoryError>;
}
