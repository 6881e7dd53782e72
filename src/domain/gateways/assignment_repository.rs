//! Assignment Repository Gateway

use async_trait::async_trait;

use crate::domain::models::{Assignment, AssignmentId, CourseId, NewAssignment};
use crate::shared::errors::RepositoryError;

/// Repository trait for Assignment persistence operations
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AssignmentRepository: Send + Sync {
    /// Find an assignment that belongs to the given course
    async fn find_in_course(
        &self,
        course_id: CourseId,
        id: AssignmentId,
    ) -> Result<Option<Assignment>, RepositoryError>;

    /// List the assignments of a course, ordered by due date
    async fn find_by_course(&self, course_id: CourseId) -> Result<Vec<Assignment>, RepositoryError>;

    /// Create a new assignment
    async fn create(&self, assignment: &NewAssignment) -> Result<Assignment, RepositoryError>;
}
