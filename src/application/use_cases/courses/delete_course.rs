//! Delete Course Use Case

use std::sync::Arc;

use crate::application::use_cases::access::{require_owned_course, COURSE_NOT_OWNED};
use crate::domain::gateways::CourseRepository;
use crate::domain::models::{CourseId, Identity};
use crate::shared::errors::UseCaseError;

/// Use case for deleting a course the caller owns
pub struct DeleteCourseUseCase {
    course_repository: Arc<dyn CourseRepository>,
}

impl DeleteCourseUseCase {
    #[must_use]
    pub fn new(course_repository: Arc<dyn CourseRepository>) -> Self {
        Self { course_repository }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::NotFound` if the course doesn't exist or isn't owned by the caller.
    pub async fn execute(&self, caller: &Identity, id: CourseId) -> Result<(), UseCaseError> {
        tracing::info!(course_id = %id, teacher_id = %caller.user_id, "Deleting course");

        require_owned_course(self.course_repository.as_ref(), id, caller).await?;

        if !self.course_repository.delete(id).await? {
            return Err(UseCaseError::NotFound(COURSE_NOT_OWNED.to_string()));
        }

        tracing::info!(course_id = %id, "Course deleted successfully");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::use_cases::courses::fixtures::{course, teacher};
    use crate::domain::gateways::course_repository::MockCourseRepository;

    #[tokio::test]
    async fn should_delete_owned_course() {
        let mut repo = MockCourseRepository::new();
        repo.expect_find_owned().returning(|id, _| Ok(Some(course(id.value(), 1))));
        repo.expect_delete().times(1).returning(|_| Ok(true));

        let use_case = DeleteCourseUseCase::new(Arc::new(repo));
        assert!(use_case.execute(&teacher(1), CourseId::new(3)).await.is_ok());
    }

    #[tokio::test]
    async fn should_not_delete_foreign_course() {
        let mut repo = MockCourseRepository::new();
        repo.expect_find_owned().returning(|_, _| Ok(None));
        repo.expect_delete().never();

        let use_case = DeleteCourseUseCase::new(Arc::new(repo));
        let err = use_case.execute(&teacher(2), CourseId::new(3)).await.unwrap_err();

        assert!(matches!(err, UseCaseError::NotFound(_)));
    }
}
