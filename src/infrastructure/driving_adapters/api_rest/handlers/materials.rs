//! Teaching Material Handlers

use axum::{
    extract::{multipart::MultipartRejection, Multipart, State},
    http::StatusCode,
    routing::post,
    Json, Router,
};

use crate::application::use_cases::materials::UploadMaterialCommand;
use crate::domain::models::CourseId;
use crate::infrastructure::driving_adapters::api_rest::dto::{MaterialResponseDto, MessageDto};
use crate::infrastructure::driving_adapters::api_rest::extractors::ApiPath;
use crate::infrastructure::driving_adapters::api_rest::middleware::auth::JwtAuth;
use crate::infrastructure::driving_adapters::api_rest::AppState;
use crate::shared::errors::ApiError;

/// Name of the multipart part carrying the upload
const FILE_FIELD: &str = "file";

/// Create the router for material endpoints, nested under `/courses`
pub fn router() -> Router<AppState> {
    Router::new().route("/:course_id/materials", post(upload_material).get(list_materials))
}

/// POST /courses/:course_id/materials - Upload a file to a course the caller owns
///
/// # Responses
///
/// * 201 Created - File stored; a file with the same name is replaced
/// * 400 Bad Request - No `file` part, empty or unusable file name
/// * 401 Unauthorized - Missing or invalid JWT token
/// * 404 Not Found - Course missing or owned by someone else
/// * 413 Payload Too Large - Upload exceeds the configured limit
#[axum::debug_handler]
async fn upload_material(
    JwtAuth(caller): JwtAuth,
    State(state): State<AppState>,
    ApiPath(course_id): ApiPath<i64>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<(StatusCode, Json<MessageDto>), ApiError> {
    let mut multipart = multipart?;

    let mut upload = None;
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }
        let file_name = field.file_name().unwrap_or_default().to_string();
        let contents = field.bytes().await?;
        upload = Some((file_name, contents));
        break;
    }

    let Some((file_name, contents)) = upload else {
        return Err(ApiError::BadRequest("No file part found in the request".to_string()));
    };
    if file_name.trim().is_empty() {
        return Err(ApiError::BadRequest("No file selected".to_string()));
    }

    let command = UploadMaterialCommand {
        course_id: CourseId::new(course_id),
        file_name,
        contents: contents.to_vec(),
    };
    state.upload_material_use_case.execute(&caller, command).await?;

    Ok((StatusCode::CREATED, Json(MessageDto::new("File uploaded successfully"))))
}

/// GET /courses/:course_id/materials - List files uploaded to a course the caller owns
#[axum::debug_handler]
async fn list_materials(
    JwtAuth(caller): JwtAuth,
    State(state): State<AppState>,
    ApiPath(course_id): ApiPath<i64>,
) -> Result<Json<Vec<MaterialResponseDto>>, ApiError> {
    let materials = state
        .list_materials_use_case
        .execute(&caller, CourseId::new(course_id))
        .await?;

    Ok(Json(materials.iter().map(MaterialResponseDto::from).collect()))
}
