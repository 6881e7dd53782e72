//! Enrollment Repository Gateway

use async_trait::async_trait;

use crate::domain::models::{CourseId, Enrollment, UserId};
use crate::shared::errors::RepositoryError;

/// Repository trait for Enrollment persistence operations
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EnrollmentRepository: Send + Sync {
    /// Find the enrollment of a student in a course
    async fn find(&self, course_id: CourseId, student_id: UserId) -> Result<Option<Enrollment>, RepositoryError>;

    /// List the enrollments of a course, ordered by enrollment date
    async fn find_by_course(&self, course_id: CourseId) -> Result<Vec<Enrollment>, RepositoryError>;

    /// Enroll a student.
    ///
    /// Returns `RepositoryError::Conflict` if the student is already enrolled.
    async fn create(&self, course_id: CourseId, student_id: UserId) -> Result<Enrollment, RepositoryError>;

    /// Remove a student from a course
    async fn delete(&self, course_id: CourseId, student_id: UserId) -> Result<bool, RepositoryError>;
}
