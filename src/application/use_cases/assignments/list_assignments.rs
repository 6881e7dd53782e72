//! List Assignments Use Case

use std::sync::Arc;

use crate::domain::gateways::{AssignmentRepository, CourseRepository};
use crate::domain::models::{Assignment, CourseId};
use crate::shared::errors::UseCaseError;

/// Use case for listing the assignments of a course, soonest due first
pub struct ListAssignmentsUseCase {
    course_repository: Arc<dyn CourseRepository>,
    assignment_repository: Arc<dyn AssignmentRepository>,
}

impl ListAssignmentsUseCase {
    #[must_use]
    pub fn new(
        course_repository: Arc<dyn CourseRepository>,
        assignment_repository: Arc<dyn AssignmentRepository>,
    ) -> Self {
        Self {
            course_repository,
            assignment_repository,
        }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::NotFound` if the course doesn't exist.
    pub async fn execute(&self, course_id: CourseId) -> Result<Vec<Assignment>, UseCaseError> {
        if self.course_repository.find_by_id(course_id).await?.is_none() {
            return Err(UseCaseError::NotFound("Course not found".to_string()));
        }
        Ok(self.assignment_repository.find_by_course(course_id).await?)
    }
}
