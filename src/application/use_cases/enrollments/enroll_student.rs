//! Enroll Student Use Case
//!
//! Enrolls the caller in a course.

use std::sync::Arc;

use crate::domain::gateways::{CourseRepository, EnrollmentRepository};
use crate::domain::models::{CourseId, Enrollment, Identity};
use crate::shared::errors::{DomainError, RepositoryError, UseCaseError};

/// Use case for enrolling the caller in a course
pub struct EnrollStudentUseCase {
    course_repository: Arc<dyn CourseRepository>,
    enrollment_repository: Arc<dyn EnrollmentRepository>,
}

impl EnrollStudentUseCase {
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
    /// Returns `UseCaseError::NotFound` if the course doesn't exist.
    /// Returns `DomainError::AlreadyEnrolled` if the caller is already enrolled.
    pub async fn execute(&self, caller: &Identity, course_id: CourseId) -> Result<Enrollment, UseCaseError> {
        tracing::info!(course_id = %course_id, student_id = %caller.user_id, "Enrolling student");

        if self.course_repository.find_by_id(course_id).await?.is_none() {
            tracing::warn!(course_id = %course_id, "Cannot enroll: course not found");
            return Err(UseCaseError::NotFound("Course not found".to_string()));
        }

        if self.enrollment_repository.find(course_id, caller.user_id).await?.is_some() {
            tracing::warn!(course_id = %course_id, student_id = %caller.user_id, "Student already enrolled");
            return Err(DomainError::AlreadyEnrolled.into());
        }

        let enrollment = self
            .enrollment_repository
            .create(course_id, caller.user_id)
            .await
            .map_err(|e| match e {
                RepositoryError::Conflict(_) => UseCaseError::from(DomainError::AlreadyEnrolled),
                other => other.into(),
            })?;

        tracing::info!(enrollment_id = %enrollment.id(), "Student enrolled successfully");
        Ok(enrollment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::use_cases::courses::fixtures::{course, student};
    use crate::domain::gateways::course_repository::MockCourseRepository;
    use crate::domain::gateways::enrollment_repository::MockEnrollmentRepository;
    use crate::domain::models::EnrollmentId;
    use chrono::Utc;

    fn existing_course() -> MockCourseRepository {
        let mut repo = MockCourseRepository::new();
        repo.expect_find_by_id().returning(|id| Ok(Some(course(id.value(), 1))));
        repo
    }

    #[tokio::test]
    async fn should_enroll_caller() {
        let mut enrollments = MockEnrollmentRepository::new();
        enrollments.expect_find().returning(|_, _| Ok(None));
        enrollments
            .expect_create()
            .returning(|c, s| Ok(Enrollment::restore(EnrollmentId::new(1), c, s, Utc::now())));

        let use_case = EnrollStudentUseCase::new(Arc::new(existing_course()), Arc::new(enrollments));
        let enrollment = use_case.execute(&student(7), CourseId::new(2)).await.unwrap();

        assert_eq!(enrollment.student_id(), student(7).user_id);
        assert_eq!(enrollment.course_id(), CourseId::new(2));
    }

    #[tokio::test]
    async fn should_reject_duplicate_enrollment() {
        let mut enrollments = MockEnrollmentRepository::new();
        enrollments
            .expect_find()
            .returning(|c, s| Ok(Some(Enrollment::restore(EnrollmentId::new(1), c, s, Utc::now()))));
        enrollments.expect_create().never();

        let use_case = EnrollStudentUseCase::new(Arc::new(existing_course()), Arc::new(enrollments));
        let err = use_case.execute(&student(7), CourseId::new(2)).await.unwrap_err();

        assert!(matches!(err, UseCaseError::Domain(DomainError::AlreadyEnrolled)));
    }

    #[tokio::test]
    async fn should_return_not_found_for_missing_course() {
        let mut courses = MockCourseRepository::new();
        courses.expect_find_by_id().returning(|_| Ok(None));

        let use_case = EnrollStudentUseCase::new(Arc::new(courses), Arc::new(MockEnrollmentRepository::new()));
        let err = use_case.execute(&student(7), CourseId::new(2)).await.unwrap_err();

        assert!(matches!(err, UseCaseError::NotFound(_)));
    }
}
