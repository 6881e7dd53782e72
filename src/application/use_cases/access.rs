//! Course Access Checks
//!
//! Shared lookups used by every teacher-only course operation.

use crate::domain::gateways::CourseRepository;
use crate::domain::models::{Course, CourseId, Identity};
use crate::shared::errors::UseCaseError;

/// Returned both when the course is missing and when the caller does not own it
pub const COURSE_NOT_OWNED: &str = "Course not found or unauthorized access";

/// Load a course owned by the caller
///
/// # Errors
///
/// Returns `UseCaseError::NotFound` if the course does not exist or is not
/// taught by the caller.
pub async fn require_owned_course(
    courses: &dyn CourseRepository,
    course_id: CourseId,
    caller: &Identity,
) -> Result<Course, UseCaseError> {
    courses
        .find_owned(course_id, caller.user_id)
        .await?
        .ok_or_else(|| {
            tracing::warn!(course_id = %course_id, user_id = %caller.user_id, "Course not found or not owned by caller");
            UseCaseError::NotFound(COURSE_NOT_OWNED.to_string())
        })
}
