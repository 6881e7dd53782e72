//! List Course Students Use Case

use std::sync::Arc;

use crate::application::use_cases::access::require_owned_course;
use crate::domain::gateways::{CourseRepository, EnrollmentRepository};
use crate::domain::models::{CourseId, Enrollment, Identity};
use crate::shared::errors::UseCaseError;

/// Use case for listing the students enrolled in a course the caller owns
pub struct ListCourseStudentsUseCase {
    course_repository: Arc<dyn CourseRepository>,
    enrollment_repository: Arc<dyn EnrollmentRepository>,
}

impl ListCourseStudentsUseCase {
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
    /// Returns `UseCaseError::NotFound` if the course doesn't exist or isn't owned by the caller.
    pub async fn execute(&self, caller: &Identity, course_id: CourseId) -> Result<Vec<Enrollment>, UseCaseError> {
        require_owned_course(self.course_repository.as_ref(), course_id, caller).await?;

        let enrollments = self.enrollment_repository.find_by_course(course_id).await?;
        tracing::debug!(course_id = %course_id, count = enrollments.len(), "Listed course students");
        Ok(enrollments)
    }
}
