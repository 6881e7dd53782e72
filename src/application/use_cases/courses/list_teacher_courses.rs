//! List Teacher Courses Use Case

use std::sync::Arc;

use crate::domain::gateways::CourseRepository;
use crate::domain::models::{Course, Identity};
use crate::shared::errors::UseCaseError;

/// Use case for listing the courses the caller teaches
pub struct ListTeacherCoursesUseCase {
    course_repository: Arc<dyn CourseRepository>,
}

impl ListTeacherCoursesUseCase {
    #[must_use]
    pub fn new(course_repository: Arc<dyn CourseRepository>) -> Self {
        Self { course_repository }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn execute(&self, caller: &Identity) -> Result<Vec<Course>, UseCaseError> {
        let courses = self.course_repository.find_by_teacher(caller.user_id).await?;
        tracing::debug!(teacher_id = %caller.user_id, count = courses.len(), "Listed teacher courses");
        Ok(courses)
    }
}
