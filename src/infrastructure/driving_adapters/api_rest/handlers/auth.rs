//! Authentication Handlers
//!
//! Public endpoints for registering and logging in.

use axum::{extract::rejection::JsonRejection, extract::State, http::StatusCode, routing::post, Json, Router};
use validator::Validate;

use crate::application::use_cases::auth::RegisterUserCommand;
use crate::infrastructure::driving_adapters::api_rest::dto::{
    AccessTokenDto, LoginDto, RegisterUserDto, UserResponseDto,
};
use crate::infrastructure::driving_adapters::api_rest::extractors::ApiJson;
use crate::infrastructure::driving_adapters::api_rest::AppState;
use crate::shared::errors::ApiError;

const MISSING_REGISTRATION_DATA: &str = "Missing data for registration";

/// Create the router for authentication endpoints
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
}

/// POST /register - Create a teacher or student account
///
/// # Responses
///
/// * 201 Created - User registered
/// * 400 Bad Request - Missing fields or validation error
/// * 409 Conflict - Email already used
#[axum::debug_handler]
async fn register(
    State(state): State<AppState>,
    body: Result<Json<RegisterUserDto>, JsonRejection>,
) -> Result<(StatusCode, Json<UserResponseDto>), ApiError> {
    let Json(dto) = body.map_err(|_| ApiError::BadRequest(MISSING_REGISTRATION_DATA.to_string()))?;
    dto.validate()?;

    let command = RegisterUserCommand::try_from(dto).map_err(|e| ApiError::BadRequest(e.to_string()))?;
    let user = state.register_user_use_case.execute(command).await?;

    Ok((StatusCode::CREATED, Json(UserResponseDto::from(&user))))
}

/// POST /login - Exchange credentials for an access token
///
/// # Responses
///
/// * 200 OK - Token issued
/// * 400 Bad Request - Malformed body
/// * 401 Unauthorized - Invalid credentials
#[axum::debug_handler]
async fn login(
    State(state): State<AppState>,
    ApiJson(dto): ApiJson<LoginDto>,
) -> Result<Json<AccessTokenDto>, ApiError> {
    dto.validate()?;

    let access_token = state.login_user_use_case.execute(dto.into()).await?;

    Ok(Json(AccessTokenDto { access_token }))
}
