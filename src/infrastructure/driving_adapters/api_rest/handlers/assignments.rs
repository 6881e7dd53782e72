//! Assignment Handlers

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use validator::Validate;

use crate::application::use_cases::assignments::CreateAssignmentCommand;
use crate::domain::models::{AssignmentId, CourseId};
use crate::infrastructure::driving_adapters::api_rest::dto::{
    AssignmentCreatedDto, AssignmentResponseDto, CreateAssignmentDto,
};
use crate::infrastructure::driving_adapters::api_rest::extractors::{ApiJson, ApiPath};
use crate::infrastructure::driving_adapters::api_rest::middleware::auth::JwtAuth;
use crate::infrastructure::driving_adapters::api_rest::AppState;
use crate::shared::errors::ApiError;

/// Create the router for assignment endpoints, nested under `/courses`
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/:course_id/assignments", get(list_assignments).post(create_assignment))
        .route("/:course_id/assignments/:assignment_id", get(get_assignment))
}

/// POST /courses/:course_id/assignments - Add an assignment to a course the caller owns
///
/// # Responses
///
/// * 201 Created - Assignment created
/// * 400 Bad Request - Validation error or unparseable due date
/// * 401 Unauthorized - Missing or invalid JWT token
/// * 404 Not Found - Course missing or owned by someone else
#[axum::debug_handler]
async fn create_assignment(
    JwtAuth(caller): JwtAuth,
    State(state): State<AppState>,
    ApiPath(course_id): ApiPath<i64>,
    ApiJson(dto): ApiJson<CreateAssignmentDto>,
) -> Result<(StatusCode, Json<AssignmentCreatedDto>), ApiError> {
    dto.validate()?;

    let command = CreateAssignmentCommand {
        course_id: CourseId::new(course_id),
        name: dto.name,
        due_date: dto.due_date,
        description: dto.description,
    };
    let assignment = state.create_assignment_use_case.execute(&caller, command).await?;

    Ok((StatusCode::CREATED, Json(AssignmentCreatedDto::from(&assignment))))
}

/// GET /courses/:course_id/assignments/:assignment_id - Get an assignment of a course
#[axum::debug_handler]
async fn get_assignment(
    _auth: JwtAuth,
    State(state): State<AppState>,
    ApiPath((course_id, assignment_id)): ApiPath<(i64, i64)>,
) -> Result<Json<AssignmentResponseDto>, ApiError> {
    let assignment = state
        .get_assignment_use_case
        .execute(CourseId::new(course_id), AssignmentId::new(assignment_id))
        .await?;

    Ok(Json(AssignmentResponseDto::from(&assignment)))
}

/// GET /courses/:course_id/assignments - List a course's assignments by due date
#[axum::debug_handler]
async fn list_assignments(
    _auth: JwtAuth,
    State(state): State<AppState>,
    ApiPath(course_id): ApiPath<i64>,
) -> Result<Json<Vec<AssignmentResponseDto>>, ApiError> {
    let assignments = state
        .list_assignments_use_case
        .execute(CourseId::new(course_id))
        .await?;

    Ok(Json(assignments.iter().map(AssignmentResponseDto::from).collect()))
}
