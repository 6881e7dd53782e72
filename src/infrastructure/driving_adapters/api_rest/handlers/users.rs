//! User Handlers

use axum::{extract::State, routing::get, Json, Router};

use crate::infrastructure::driving_adapters::api_rest::dto::UserResponseDto;
use crate::infrastructure::driving_adapters::api_rest::AppState;
use crate::shared::errors::ApiError;

/// Create the router for user endpoints
pub fn router() -> Router<AppState> {
    Router::new().route("/users", get(list_users))
}

/// GET /users - List registered users
#[axum::debug_handler]
async fn list_users(State(state): State<AppState>) -> Result<Json<Vec<UserResponseDto>>, ApiError> {
    let users = state.list_users_use_case.execute().await?;

    Ok(Json(users.iter().map(UserResponseDto::from).collect()))
}
