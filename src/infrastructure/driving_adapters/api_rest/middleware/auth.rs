//! JWT Authentication Middleware
//!
//! Extracts and validates bearer tokens from requests.

use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    extract::{FromRequestParts, State},
    http::{header::AUTHORIZATION, request::Parts, StatusCode},
    response::{IntoResponse, Response},
    Json,
};

use crate::domain::gateways::TokenService;
use crate::domain::models::Identity;
use crate::infrastructure::driving_adapters::api_rest::AppState;
use crate::shared::errors::ErrorResponse;

/// Authenticated caller extracted from the bearer token
pub struct JwtAuth(pub Identity);

/// Error type for authentication failures
#[derive(Debug)]
pub struct AuthError {
    message: &'static str,
}

impl AuthError {
    const fn new(message: &'static str) -> Self {
        Self { message }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let body = ErrorResponse::new("UNAUTHORIZED", self.message);
        (StatusCode::UNAUTHORIZED, Json(body)).into_response()
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for JwtAuth
where
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let token_service = parts
            .extensions
            .get::<Arc<dyn TokenService>>()
            .cloned()
            .ok_or_else(|| {
                tracing::error!("Token service missing from request extensions");
                AuthError::new("Authentication not available")
            })?;

        let auth_header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|h| h.to_str().ok())
            .ok_or(AuthError::new("Missing Authorization header"))?;

        let token = auth_header
            .strip_prefix("Bearer ")
            .ok_or(AuthError::new("Invalid Authorization header format"))?;

        // Don't expose internal token validation details
        let identity = token_service.verify(token).map_err(|e| {
            tracing::debug!(error = %e, "Rejected bearer token");
            AuthError::new("Invalid or expired token")
        })?;

        Ok(JwtAuth(identity))
    }
}

/// Middleware that adds the token service to request extensions for `JwtAuth`
pub async fn add_token_service_extension(
    State(state): State<AppState>,
    mut request: axum::http::Request<axum::body::Body>,
    next: axum::middleware::Next,
) -> Response {
    request.extensions_mut().insert(state.token_service.clone());
    next.run(request).await
}
