//! Submit Assignment Use Case

use std::sync::Arc;

use crate::application::use_cases::assignments::ASSIGNMENT_NOT_FOUND;
use crate::domain::gateways::{AssignmentRepository, EnrollmentRepository, SubmissionRepository};
use crate::domain::models::{AssignmentId, CourseId, Identity, NewSubmission, Submission};
use crate::shared::errors::UseCaseError;

/// Input for submitting work
#[derive(Debug, Clone)]
pub struct SubmitAssignmentCommand {
    pub course_id: CourseId,
    pub assignment_id: AssignmentId,
    pub content: Option<String>,
}

/// Use case for an enrolled student handing in an assignment
pub struct SubmitAssignmentUseCase {
    assignment_repository: Arc<dyn AssignmentRepository>,
    enrollment_repository: Arc<dyn EnrollmentRepository>,
    submission_repository: Arc<dyn SubmissionRepository>,
}

impl SubmitAssignmentUseCase {
    #[must_use]
    pub fn new(
        assignment_repository: Arc<dyn AssignmentRepository>,
        enrollment_repository: Arc<dyn EnrollmentRepository>,
        submission_repository: Arc<dyn SubmissionRepository>,
    ) -> Self {
        Self {
            assignment_repository,
            enrollment_repository,
            submission_repository,
        }
    }

    /// Execute the use case. Resubmitting replaces the content and clears any grade.
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::NotFound` if the assignment isn't part of the course.
    /// Returns `UseCaseError::Forbidden` if the caller isn't enrolled in the course.
    pub async fn execute(
        &self,
        caller: &Identity,
        command: SubmitAssignmentCommand,
    ) -> Result<Submission, UseCaseError> {
        tracing::info!(
            course_id = %command.course_id,
            assignment_id = %command.assignment_id,
            student_id = %caller.user_id,
            "Submitting assignment"
        );

        let assignment = self
            .assignment_repository
            .find_in_course(command.course_id, command.assignment_id)
            .await?
            .ok_or_else(|| UseCaseError::NotFound(ASSIGNMENT_NOT_FOUND.to_string()))?;

        if self
            .enrollment_repository
            .find(command.course_id, caller.user_id)
            .await?
            .is_none()
        {
            tracing::warn!(course_id = %command.course_id, student_id = %caller.user_id, "Submission from non-enrolled user");
            return Err(UseCaseError::Forbidden("Student not enrolled in the course".to_string()));
        }

        let submission = self
            .submission_repository
            .upsert(&NewSubmission {
                assignment_id: assignment.id(),
                student_id: caller.user_id,
                content: command.content,
            })
            .await?;

        tracing::info!(submission_id = %submission.id(), "Assignment submitted successfully");
        Ok(submission)
    }
}
