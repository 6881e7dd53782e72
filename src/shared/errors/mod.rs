//! Error Types
//!
//! Layered error types with HTTP status code mapping at the edge.

use axum::extract::multipart::{MultipartError, MultipartRejection};
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;
use tower_governor::GovernorError;

/// Domain-level errors representing business rule violations
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Email already used")]
    EmailTaken(String),

    #[error("Student already enrolled in the course")]
    AlreadyEnrolled,

    #[error("Invalid file name: {0}")]
    InvalidFileName(String),

    #[error("Invalid state: {0}")]
    InvalidState(String),
}

/// Repository-level errors for data access failures
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Unique constraint violated: {0}")]
    Conflict(String),

    #[error("Data mapping error: {0}")]
    Mapping(String),
}

/// Errors raised while persisting uploaded files
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Refusing to store outside the upload directory: {0}")]
    PathEscape(String),
}

/// Errors raised by password hashing and token handling
#[derive(Debug, Error)]
pub enum SecurityError {
    #[error("Password hashing failed: {0}")]
    Hashing(String),

    #[error("Token encoding failed: {0}")]
    TokenEncoding(String),

    #[error("Invalid or expired token")]
    InvalidToken,
}

/// Use case-level errors for application logic failures
#[derive(Debug, Error)]
pub enum UseCaseError {
    #[error("Validation failed: {0:?}")]
    Validation(Vec<String>),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Unauthorized(String),

    #[error("{0}")]
    Forbidden(String),

    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error(transparent)]
    Security(#[from] SecurityError),
}

impl UseCaseError {
    /// Get the HTTP status code for this error
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_)
            | Self::Domain(DomainError::InvalidFileName(_) | DomainError::InvalidState(_)) => {
                StatusCode::BAD_REQUEST
            }
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Domain(DomainError::EmailTaken(_) | DomainError::AlreadyEnrolled)
            | Self::Repository(RepositoryError::Conflict(_)) => StatusCode::CONFLICT,
            Self::Unauthorized(_) | Self::Security(SecurityError::InvalidToken) => StatusCode::UNAUTHORIZED,
            Self::Forbidden(_) => StatusCode::FORBIDDEN,
            Self::Repository(_) | Self::Storage(_) | Self::Security(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error code for this error
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::NotFound(_) => "NOT_FOUND",
            Self::Domain(DomainError::EmailTaken(_) | DomainError::AlreadyEnrolled)
            | Self::Repository(RepositoryError::Conflict(_)) => "CONFLICT",
            Self::Unauthorized(_) | Self::Security(SecurityError::InvalidToken) => "UNAUTHORIZED",
            Self::Forbidden(_) => "FORBIDDEN",
            Self::Domain(DomainError::InvalidFileName(_)) => "INVALID_FILE_NAME",
            Self::Domain(DomainError::InvalidState(_)) => "INVALID_STATE",
            Self::Repository(_) | Self::Storage(_) | Self::Security(_) => "INTERNAL_ERROR",
        }
    }
}

/// API error response for HTTP responses
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    UseCase(#[from] UseCaseError),

    #[error("{0}")]
    BadRequest(String),

    #[error("Resource not found")]
    NotFound,

    #[error("{message}")]
    Upload { status: StatusCode, message: String },

    #[error("Too many requests, retry in {retry_after_secs}s")]
    TooManyRequests { retry_after_secs: u64 },

    #[error("Server error")]
    Internal(#[from] anyhow::Error),
}

/// Error response body structure
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub message: String,
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<FieldError>>,
    pub timestamp: String,
}

impl ErrorResponse {
    #[must_use]
    pub fn new(code: &str, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            code: code.to_string(),
            details: None,
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Field-level error for validation errors
#[derive(Debug, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code, message, details) = match &self {
            ApiError::UseCase(uc_error) => {
                let status = uc_error.status_code();
                if status.is_server_error() {
                    tracing::error!(error = %uc_error, "Request failed with an internal error");
                    (status, uc_error.error_code(), "Server error".to_string(), None)
                } else {
                    let details = if let UseCaseError::Validation(errors) = uc_error {
                        Some(
                            errors
                                .iter()
                                .map(|e| {
                                    let (field, message) = e.split_once(": ").unwrap_or(("", e.as_str()));
                                    FieldError {
                                        field: field.to_string(),
                                        message: message.to_string(),
                                    }
                                })
                                .collect(),
                        )
                    } else {
                        None
                    };
                    let message = match uc_error {
                        UseCaseError::Validation(_) => "Validation failed".to_string(),
                        other => other.to_string(),
                    };
                    (status, uc_error.error_code(), message, details)
                }
            }
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone(), None),
            ApiError::NotFound => (StatusCode::NOT_FOUND, "NOT_FOUND", self.to_string(), None),
            ApiError::Upload { status, message } => (*status, "UPLOAD_ERROR", message.clone(), None),
            ApiError::TooManyRequests { .. } => {
                (StatusCode::TOO_MANY_REQUESTS, "TOO_MANY_REQUESTS", self.to_string(), None)
            }
            ApiError::Internal(err) => {
                tracing::error!(error = %err, "Unexpected internal error");
                (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR", self.to_string(), None)
            }
        };

        let mut body = ErrorResponse::new(code, message);
        body.details = details;

        let mut response = (status, Json(body)).into_response();
        if let ApiError::TooManyRequests { retry_after_secs } = self {
            response
                .headers_mut()
                .insert(header::RETRY_AFTER, HeaderValue::from(retry_after_secs));
        }
        response
    }
}

impl From<validator::ValidationErrors> for ApiError {
    fn from(err: validator::ValidationErrors) -> Self {
        let messages: Vec<String> = err
            .field_errors()
            .iter()
            .flat_map(|(field, errors)| {
                errors.iter().map(move |e| {
                    format!(
                        "{}: {}",
                        field,
                        e.message.as_ref().map_or("invalid", |m| m.as_ref())
                    )
                })
            })
            .collect();
        ApiError::UseCase(UseCaseError::Validation(messages))
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(_: PathRejection) -> Self {
        // Non-numeric ids never match a resource
        ApiError::NotFound
    }
}

impl From<MultipartRejection> for ApiError {
    fn from(_: MultipartRejection) -> Self {
        ApiError::BadRequest("No file part found in the request".to_string())
    }
}

impl From<MultipartError> for ApiError {
    fn from(err: MultipartError) -> Self {
        ApiError::Upload {
            status: err.status(),
            message: err.body_text(),
        }
    }
}

impl From<GovernorError> for ApiError {
    fn from(err: GovernorError) -> Self {
        match err {
            GovernorError::TooManyRequests { wait_time, .. } => ApiError::TooManyRequests {
                retry_after_secs: wait_time,
            },
            other => ApiError::Internal(anyhow::anyhow!("rate limiter failed: {other}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_use_case_error_status_mapping() {
        assert_eq!(
            UseCaseError::NotFound("Submission not found".into()).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            UseCaseError::Domain(DomainError::EmailTaken("a@b.c".into())).status_code(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            UseCaseError::Repository(RepositoryError::Conflict("enrollments".into())).status_code(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            UseCaseError::Repository(RepositoryError::Mapping("bad role".into())).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            UseCaseError::Forbidden("Only teachers can create courses".into()).status_code(),
            StatusCode::FORBIDDEN
        );
    }

    #[test]
    fn test_error_messages_match_client_contract() {
        assert_eq!(
            UseCaseError::Domain(DomainError::EmailTaken("a@b.c".into())).to_string(),
            "Email already used"
        );
        assert_eq!(
            UseCaseError::Unauthorized("Invalid credentials".into()).to_string(),
            "Invalid credentials"
        );
    }

    #[tokio::test]
    async fn test_rate_limit_rejection_uses_error_body() {
        let error = ApiError::from(GovernorError::TooManyRequests {
            wait_time: 7,
            headers: None,
        });
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);
        assert_eq!(response.headers()[header::RETRY_AFTER], "7");

        let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["code"], "TOO_MANY_REQUESTS");
        assert_eq!(json["message"], "Too many requests, retry in 7s");
        assert!(json["timestamp"].is_string());
    }

    #[tokio::test]
    async fn test_internal_errors_are_not_leaked() {
        let error = ApiError::UseCase(UseCaseError::Repository(RepositoryError::Mapping(
            "secret detail".into(),
        )));
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["message"], "Server error");
        assert!(!body.windows(6).any(|w| w == b"secret"));
    }
}
