//! Course Repository Gateway

use async_trait::async_trait;

use crate::domain::models::{Course, CourseId, NewCourse, UserId};
use crate::shared::errors::RepositoryError;

/// Repository trait for Course persistence operations
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CourseRepository: Send + Sync {
    /// Find a course by its ID
    async fn find_by_id(&self, id: CourseId) -> Result<Option<Course>, RepositoryError>;

    /// Find a course by its ID only if it is owned by the given teacher
    async fn find_owned(&self, id: CourseId, teacher_id: UserId) -> Result<Option<Course>, RepositoryError>;

    /// List the courses taught by a teacher, ordered by id
    async fn find_by_teacher(&self, teacher_id: UserId) -> Result<Vec<Course>, RepositoryError>;

    /// Create a new course
    async fn create(&self, course: &NewCourse) -> Result<Course, RepositoryError>;

    /// Persist title/description changes of an existing course
    async fn update(&self, course: &Course) -> Result<Option<Course>, RepositoryError>;

    /// Delete a course together with its assignments, enrollments and materials
    async fn delete(&self, id: CourseId) -> Result<bool, RepositoryError>;
}
