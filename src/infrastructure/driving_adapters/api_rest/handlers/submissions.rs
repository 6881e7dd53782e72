//! Submission Handlers

use axum::{
    extract::State,
    http::StatusCode,
    routing::{post, put},
    Json, Router,
};
use validator::Validate;

use crate::application::use_cases::submissions::{MarkSubmissionCommand, SubmitAssignmentCommand};
use crate::domain::models::{AssignmentId, CourseId, UserId};
use crate::infrastructure::driving_adapters::api_rest::dto::{
    MarkSubmissionDto, MessageDto, SubmissionCreatedDto, SubmitAssignmentDto,
};
use crate::infrastructure::driving_adapters::api_rest::extractors::{ApiJson, ApiPath};
use crate::infrastructure::driving_adapters::api_rest::middleware::auth::JwtAuth;
use crate::infrastructure::driving_adapters::api_rest::AppState;
use crate::shared::errors::ApiError;

/// Create the router for submission endpoints, nested under `/courses`
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/:course_id/assignments/:assignment_id/submissions",
            post(submit_assignment),
        )
        .route(
            "/:course_id/assignments/:assignment_id/submissions/:student_id/mark",
            put(mark_submission),
        )
}

/// POST /courses/:course_id/assignments/:assignment_id/submissions - Hand in work
///
/// Resubmitting replaces the content and clears any previous marks.
///
/// # Responses
///
/// * 201 Created - Submission recorded
/// * 401 Unauthorized - Missing or invalid JWT token
/// * 403 Forbidden - Caller is not enrolled in the course
/// * 404 Not Found - Assignment not in the course
#[axum::debug_handler]
async fn submit_assignment(
    JwtAuth(caller): JwtAuth,
    State(state): State<AppState>,
    ApiPath((course_id, assignment_id)): ApiPath<(i64, i64)>,
    ApiJson(dto): ApiJson<SubmitAssignmentDto>,
) -> Result<(StatusCode, Json<SubmissionCreatedDto>), ApiError> {
    dto.validate()?;

    let command = SubmitAssignmentCommand {
        course_id: CourseId::new(course_id),
        assignment_id: AssignmentId::new(assignment_id),
        content: dto.content,
    };
    let submission = state.submit_assignment_use_case.execute(&caller, command).await?;

    Ok((StatusCode::CREATED, Json(SubmissionCreatedDto::from(&submission))))
}

/// PUT /courses/:course_id/assignments/:assignment_id/submissions/:student_id/mark - Mark a submission
///
/// # Responses
///
/// * 200 OK - Marks and feedback replaced
/// * 400 Bad Request - Marks outside 0..=100 on an owned course
/// * 401 Unauthorized - Missing or invalid JWT token
/// * 404 Not Found - Course not owned, assignment or submission missing
#[axum::debug_handler]
async fn mark_submission(
    JwtAuth(caller): JwtAuth,
    State(state): State<AppState>,
    ApiPath((course_id, assignment_id, student_id)): ApiPath<(i64, i64, i64)>,
    ApiJson(dto): ApiJson<MarkSubmissionDto>,
) -> Result<Json<MessageDto>, ApiError> {
    let command = MarkSubmissionCommand {
        course_id: CourseId::new(course_id),
        assignment_id: AssignmentId::new(assignment_id),
        student_id: UserId::new(student_id),
        marks: dto.marks,
        feedback: dto.feedback,
    };
    state.mark_submission_use_case.execute(&caller, command).await?;

    Ok(Json(MessageDto::new("Marks and feedback updated successfully")))
}
