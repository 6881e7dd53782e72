//! HTTP Handlers
//!
//! One module per resource; each exposes a `router()` merged by `build_router`.

pub mod assignments;
pub mod auth;
pub mod courses;
pub mod enrollments;
pub mod materials;
pub mod submissions;
pub mod users;

use crate::shared::errors::ApiError;

/// Fallback for unknown routes
pub async fn not_found() -> ApiError {
    ApiError::NotFound
}
