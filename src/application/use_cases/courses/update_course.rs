//! Update Course Use Case

use std::sync::Arc;

use crate::application::use_cases::access::{require_owned_course, COURSE_NOT_OWNED};
use crate::domain::gateways::CourseRepository;
use crate::domain::models::{Course, CourseChanges, CourseId, Identity};
use crate::shared::errors::UseCaseError;

/// Use case for updating a course the caller owns
pub struct UpdateCourseUseCase {
    course_repository: Arc<dyn CourseRepository>,
}

impl UpdateCourseUseCase {
    #[must_use]
    pub fn new(course_repository: Arc<dyn CourseRepository>) -> Self {
        Self { course_repository }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::NotFound` if the course doesn't exist or isn't owned by the caller.
    /// Returns `UseCaseError::Domain` if the new title is blank.
    pub async fn execute(
        &self,
        caller: &Identity,
        id: CourseId,
        changes: CourseChanges,
    ) -> Result<Course, UseCaseError> {
        tracing::info!(course_id = %id, teacher_id = %caller.user_id, "Updating course");

        let existing = require_owned_course(self.course_repository.as_ref(), id, caller).await?;
        let updated = existing.with_changes(changes)?;

        let saved = self
            .course_repository
            .update(&updated)
            .await?
            .ok_or_else(|| UseCaseError::NotFound(COURSE_NOT_OWNED.to_string()))?;

        tracing::info!(course_id = %id, "Course updated successfully");
        Ok(saved)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::use_cases::courses::fixtures::{course, teacher};
    use crate::domain::gateways::course_repository::MockCourseRepository;

    #[tokio::test]
    async fn should_update_owned_course() {
        let mut repo = MockCourseRepository::new();
        repo.expect_find_owned()
            .returning(|id, teacher_id| Ok(Some(course(id.value(), teacher_id.value()))));
        repo.expect_update().returning(|c| Ok(Some(c.clone())));

        let use_case = UpdateCourseUseCase::new(Arc::new(repo));
        let changes = CourseChanges {
            title: Some("Advanced Math".to_string()),
            description: Some(Some("In-depth Math".to_string())),
        };
        let updated = use_case.execute(&teacher(1), CourseId::new(9), changes).await.unwrap();

        assert_eq!(updated.title(), "Advanced Math");
        assert_eq!(updated.description(), Some("In-depth Math"));
    }

    #[tokio::test]
    async fn should_return_not_found_for_foreign_course() {
        let mut repo = MockCourseRepository::new();
        repo.expect_find_owned().returning(|_, _| Ok(None));
        repo.expect_update().never();

        let use_case = UpdateCourseUseCase::new(Arc::new(repo));
        let err = use_case
            .execute(&teacher(2), CourseId::new(9), CourseChanges::default())
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), COURSE_NOT_OWNED);
    }
}
