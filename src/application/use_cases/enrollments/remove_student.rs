//! Remove Student Use Case

use std::sync::Arc;

use crate::application::use_cases::access::require_owned_course;
use crate::domain::gateways::{CourseRepository, EnrollmentRepository};
use crate::domain::models::{CourseId, Identity, UserId};
use crate::shared::errors::UseCaseError;

const NOT_ENROLLED: &str = "Student not enrolled in the course";

/// Use case for removing a student from a course the caller owns
pub struct RemoveStudentUseCase {
    course_repository: Arc<dyn CourseRepository>,
    enrollment_repository: Arc<dyn EnrollmentRepository>,
}

impl RemoveStudentUseCase {
    #[must_use]
    pub fn new(
        course_repository: Arc<dyn CourseRepository>,
        enrollment_repository: Arc<dyn EnrollmentRepository>,
    ) -> Self {
        Self {
            course_repository,
            enrollment_repository,
        }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::NotFound` if the course isn't owned by the caller
    /// or the student isn't enrolled.
    pub async fn execute(&self, caller: &Identity, course_id: CourseId, student_id: UserId) -> Result<(), UseCaseError> {
        tracing::info!(course_id = %course_id, student_id = %student_id, "Removing student from course");

        require_owned_course(self.course_repository.as_ref(), course_id, caller).await?;

        if !self.enrollment_repository.delete(course_id, student_id).await? {
            tracing::warn!(course_id = %course_id, student_id = %student_id, "Student not enrolled");
            return Err(UseCaseError::NotFound(NOT_ENROLLED.to_string()));
        }

        tracing::info!(course_id = %course_id, student_id = %student_id, "Student removed successfully");
        Ok(())
    }
}
