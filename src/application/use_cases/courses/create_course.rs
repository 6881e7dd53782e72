//! Create Course Use Case

use std::sync::Arc;

use crate::domain::gateways::CourseRepository;
use crate::domain::models::{Course, Identity, NewCourse};
use crate::shared::errors::UseCaseError;

/// Use case for creating a course taught by the caller
pub struct CreateCourseUseCase {
    course_repository: Arc<dyn CourseRepository>,
}

impl CreateCourseUseCase {
    /// Create a new CreateCourseUseCase
    #[must_use]
    pub fn new(course_repository: Arc<dyn CourseRepository>) -> Self {
        Self { course_repository }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::Forbidden` if the caller is not a teacher.
    /// Returns `UseCaseError::Domain` if the title is blank.
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn execute(
        &self,
        caller: &Identity,
        title: String,
        description: Option<String>,
    ) -> Result<Course, UseCaseError> {
        tracing::info!(teacher_id = %caller.user_id, title = %title, "Creating new course");

        if !caller.is_teacher() {
            tracing::warn!(user_id = %caller.user_id, role = %caller.role, "Non-teacher tried to create a course");
            return Err(UseCaseError::Forbidden("Only teachers can create courses".to_string()));
        }

        let new_course = NewCourse::new(title, description, caller.user_id)?;
        let course = self.course_repository.create(&new_course).await?;

        tracing::info!(course_id = %course.id(), teacher_id = %caller.user_id, "Course created successfully");
        Ok(course)
    }
}
