//! Get Assignment Use Case

use std::sync::Arc;

use super::ASSIGNMENT_NOT_FOUND;
use crate::domain::gateways::AssignmentRepository;
use crate::domain::models::{Assignment, AssignmentId, CourseId};
use crate::shared::errors::UseCaseError;

/// Use case for reading an assignment of a course
pub struct GetAssignmentUseCase {
    assignment_repository: Arc<dyn AssignmentRepository>,
}

impl GetAssignmentUseCase {
    #[must_use]
    pub fn new(assignment_repository: Arc<dyn AssignmentRepository>) -> Self {
        Self { assignment_repository }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::NotFound` if the assignment doesn't exist in that course.
    pub async fn execute(&self, course_id: CourseId, id: AssignmentId) -> Result<Assignment, UseCaseError> {
        self.assignment_repository
            .find_in_course(course_id, id)
            .await?
            .ok_or_else(|| {
                tracing::debug!(course_id = %course_id, assignment_id = %id, "Assignment not found");
                UseCaseError::NotFound(ASSIGNMENT_NOT_FOUND.to_string())
            })
    }
}
