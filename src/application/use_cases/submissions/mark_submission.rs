//! Mark Submission Use Case

use std::sync::Arc;

use crate::application::use_cases::access::require_owned_course;
use crate::application::use_cases::assignments::ASSIGNMENT_NOT_FOUND;
use crate::domain::gateways::{AssignmentRepository, CourseRepository, SubmissionRepository};
use crate::domain::models::{AssignmentId, CourseId, Grade, Identity, Submission, UserId};
use crate::shared::errors::UseCaseError;

const SUBMISSION_NOT_FOUND: &str = "Submission not found";

/// Input for marking a submission
#[derive(Debug, Clone)]
pub struct MarkSubmissionCommand {
    pub course_id: CourseId,
    pub assignment_id: AssignmentId,
    pub student_id: UserId,
    pub marks: Option<i32>,
    pub feedback: Option<String>,
}

/// Use case for a course owner marking a student's submission
pub struct MarkSubmissionUseCase {
    course_repository: Arc<dyn CourseRepository>,
    assignment_repository: Arc<dyn AssignmentRepository>,
    submission_repository: Arc<dyn SubmissionRepository>,
}

impl MarkSubmissionUseCase {
    #[must_use]
    pub fn new(
        course_repository: Arc<dyn CourseRepository>,
        assignment_repository: Arc<dyn AssignmentRepository>,
        submission_repository: Arc<dyn SubmissionRepository>,
    ) -> Self {
        Self {
            course_repository,
            assignment_repository,
            submission_repository,
        }
    }

    /// Execute the use case. Marks and feedback are both replaced; absent means cleared.
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::NotFound` if the course isn't owned by the caller, the
    /// assignment isn't part of it, or the student has not submitted.
    /// Returns `UseCaseError::Domain` if marks are out of range on an owned course.
    pub async fn execute(&self, caller: &Identity, command: MarkSubmissionCommand) -> Result<Submission, UseCaseError> {
        tracing::info!(
            course_id = %command.course_id,
            assignment_id = %command.assignment_id,
            student_id = %command.student_id,
            "Marking submission"
        );

        require_owned_course(self.course_repository.as_ref(), command.course_id, caller).await?;

        let grade = Grade::new(command.marks, command.feedback)?;

        if self
            .assignment_repository
            .find_in_course(command.course_id, command.assignment_id)
            .await?
            .is_none()
        {
            return Err(UseCaseError::NotFound(ASSIGNMENT_NOT_FOUND.to_string()));
        }

        let submission = self
            .submission_repository
            .find(command.assignment_id, command.student_id)
            .await?
            .ok_or_else(|| {
                tracing::warn!(
                    assignment_id = %command.assignment_id,
                    student_id = %command.student_id,
                    "Submission not found"
                );
                UseCaseError::NotFound(SUBMISSION_NOT_FOUND.to_string())
            })?;

        let saved = self
            .submission_repository
            .update_grade(&submission.graded(grade))
            .await?
            .ok_or_else(|| UseCaseError::NotFound(SUBMISSION_NOT_FOUND.to_string()))?;

        tracing::info!(submission_id = %saved.id(), marks = ?saved.grade().marks(), "Submission marked successfully");
        Ok(saved)
    }
}
