//! Get Course Use Case

use std::sync::Arc;

use crate::domain::gateways::CourseRepository;
use crate::domain::models::{Course, CourseId};
use crate::shared::errors::UseCaseError;

/// Use case for reading a single course. Courses are public.
pub struct GetCourseUseCase {
    course_repository: Arc<dyn CourseRepository>,
}

impl GetCourseUseCase {
    #[must_use]
    pub fn new(course_repository: Arc<dyn CourseRepository>) -> Self {
        Self { course_repository }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::NotFound` if the course doesn't exist.
    pub async fn execute(&self, id: CourseId) -> Result<Course, UseCaseError> {
        self.course_repository.find_by_id(id).await?.ok_or_else(|| {
            tracing::debug!(course_id = %id, "Course not found");
            UseCaseError::NotFound("Resource not found".to_string())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::use_cases::courses::fixtures::course;
    use crate::domain::gateways::course_repository::MockCourseRepository;

    #[tokio::test]
    async fn should_return_course_when_found() {
        let mut repo = MockCourseRepository::new();
        repo.expect_find_by_id().returning(|id| Ok(Some(course(id.value(), 1))));

        let use_case = GetCourseUseCase::new(Arc::new(repo));
        let found = use_case.execute(CourseId::new(4)).await.unwrap();

        assert_eq!(found.id(), CourseId::new(4));
    }

    #[tokio::test]
    async fn should_return_not_found_when_missing() {
        let mut repo = MockCourseRepository::new();
        repo.expect_find_by_id().returning(|_| Ok(None));

        let use_case = GetCourseUseCase::new(Arc::new(repo));
        let err = use_case.execute(CourseId::new(4)).await.unwrap_err();

        assert!(matches!(err, UseCaseError::NotFound(_)));
        assert_eq!(err.to_string(), "Resource not found");
    }
}
