//! Enrollment Handlers

use axum::{
    extract::State,
    routing::{delete, get, post},
    Json, Router,
};

use crate::domain::models::{CourseId, UserId};
use crate::infrastructure::driving_adapters::api_rest::dto::{EnrolledStudentDto, MessageDto};
use crate::infrastructure::driving_adapters::api_rest::extractors::ApiPath;
use crate::infrastructure::driving_adapters::api_rest::middleware::auth::JwtAuth;
use crate::infrastructure::driving_adapters::api_rest::AppState;
use crate::shared::errors::ApiError;

/// Create the router for enrollment endpoints, nested under `/courses`
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/:course_id/enroll", post(enroll))
        .route("/:course_id/students", get(list_students))
        .route("/:course_id/students/:student_id", delete(remove_student))
}

/// POST /courses/:course_id/enroll - Enroll the caller in a course
///
/// # Responses
///
/// * 200 OK - Enrolled
/// * 401 Unauthorized - Missing or invalid JWT token
/// * 404 Not Found - Course does not exist
/// * 409 Conflict - Already enrolled
#[axum::debug_handler]
async fn enroll(
    JwtAuth(caller): JwtAuth,
    State(state): State<AppState>,
    ApiPath(course_id): ApiPath<i64>,
) -> Result<Json<MessageDto>, ApiError> {
    state
        .enroll_student_use_case
        .execute(&caller, CourseId::new(course_id))
        .await?;

    Ok(Json(MessageDto::new("Student enrolled successfully")))
}

/// GET /courses/:course_id/students - Class list of a course the caller owns
#[axum::debug_handler]
async fn list_students(
    JwtAuth(caller): JwtAuth,
    State(state): State<AppState>,
    ApiPath(course_id): ApiPath<i64>,
) -> Result<Json<Vec<EnrolledStudentDto>>, ApiError> {
    let enrollments = state
        .list_course_students_use_case
        .execute(&caller, CourseId::new(course_id))
        .await?;

    Ok(Json(enrollments.iter().map(EnrolledStudentDto::from).collect()))
}

/// DELETE /courses/:course_id/students/:student_id - Remove a student from a course the caller owns
///
/// # Responses
///
/// * 200 OK - Student removed
/// * 401 Unauthorized - Missing or invalid JWT token
/// * 404 Not Found - Course not owned, or student not enrolled
#[axum::debug_handler]
async fn remove_student(
    JwtAuth(caller): JwtAuth,
    State(state): State<AppState>,
    ApiPath((course_id, student_id)): ApiPath<(i64, i64)>,
) -> Result<Json<MessageDto>, ApiError> {
    state
        .remove_student_use_case
        .execute(&caller, CourseId::new(course_id), UserId::new(student_id))
        .await?;

    Ok(Json(MessageDto::new("Student removed successfully")))
}
