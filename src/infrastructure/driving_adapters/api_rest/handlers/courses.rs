//! Course Handlers
//!
//! HTTP handlers for course CRUD operations. Reading a single course is
//! public; everything else requires JWT authentication.

use axum::{
    extract::State,
    http::StatusCode,
    routing::get,
    Json, Router,
};
use validator::Validate;

use crate::domain::models::CourseId;
use crate::infrastructure::driving_adapters::api_rest::dto::{
    CourseCreatedDto, CourseResponseDto, CreateCourseDto, MessageDto, UpdateCourseDto,
};
use crate::infrastructure::driving_adapters::api_rest::extractors::{ApiJson, ApiPath};
use crate::infrastructure::driving_adapters::api_rest::middleware::auth::JwtAuth;
use crate::infrastructure::driving_adapters::api_rest::AppState;
use crate::shared::errors::ApiError;

/// Create the router for course endpoints, nested under `/courses`
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_courses).post(create_course))
        .route("/:course_id", get(get_course).put(update_course).delete(delete_course))
}

/// POST /courses - Create a course owned by the calling teacher
///
/// # Responses
///
/// * 201 Created - Course created
/// * 400 Bad Request - Validation error
/// * 401 Unauthorized - Missing or invalid JWT token
/// * 403 Forbidden - Caller is not a teacher
#[axum::debug_handler]
async fn create_course(
    JwtAuth(caller): JwtAuth,
    State(state): State<AppState>,
    ApiJson(dto): ApiJson<CreateCourseDto>,
) -> Result<(StatusCode, Json<CourseCreatedDto>), ApiError> {
    dto.validate()?;

    let course = state
        .create_course_use_case
        .execute(&caller, dto.title, dto.description)
        .await?;

    Ok((StatusCode::CREATED, Json(CourseCreatedDto::from(&course))))
}

/// GET /courses/:course_id - Get a course by ID
///
/// # Responses
///
/// * 200 OK - Course found
/// * 404 Not Found - Course does not exist
#[axum::debug_handler]
async fn get_course(
    State(state): State<AppState>,
    ApiPath(course_id): ApiPath<i64>,
) -> Result<Json<CourseResponseDto>, ApiError> {
    let course = state.get_course_use_case.execute(CourseId::new(course_id)).await?;

    Ok(Json(CourseResponseDto::from(&course)))
}

/// GET /courses - List the caller's own courses
#[axum::debug_handler]
async fn list_courses(
    JwtAuth(caller): JwtAuth,
    State(state): State<AppState>,
) -> Result<Json<Vec<CourseResponseDto>>, ApiError> {
    let courses = state.list_teacher_courses_use_case.execute(&caller).await?;

    Ok(Json(courses.iter().map(CourseResponseDto::from).collect()))
}

/// PUT /courses/:course_id - Update a course the caller owns
///
/// # Responses
///
/// * 200 OK - Course updated
/// * 400 Bad Request - Validation error
/// * 401 Unauthorized - Missing or invalid JWT token
/// * 404 Not Found - Course missing or owned by someone else
#[axum::debug_handler]
async fn update_course(
    JwtAuth(caller): JwtAuth,
    State(state): State<AppState>,
    ApiPath(course_id): ApiPath<i64>,
    ApiJson(dto): ApiJson<UpdateCourseDto>,
) -> Result<Json<CourseResponseDto>, ApiError> {
    dto.validate()?;

    let course = state
        .update_course_use_case
        .execute(&caller, CourseId::new(course_id), dto.into())
        .await?;

    Ok(Json(CourseResponseDto::from(&course)))
}

/// DELETE /courses/:course_id - Delete a course the caller owns
///
/// Assignments, enrollments, submissions and materials go with it.
#[axum::debug_handler]
async fn delete_course(
    JwtAuth(caller): JwtAuth,
    State(state): State<AppState>,
    ApiPath(course_id): ApiPath<i64>,
) -> Result<Json<MessageDto>, ApiError> {
    state
        .delete_course_use_case
        .execute(&caller, CourseId::new(course_id))
        .await?;

    Ok(Json(MessageDto::new("Course deleted successfully")))
}
