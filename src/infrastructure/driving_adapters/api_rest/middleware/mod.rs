//! API Middleware
//!
//! Authentication and request correlation for the REST API.

pub mod auth;
pub mod request_id;

pub use auth::{AuthError, JwtAuth};
pub use request_id::{RequestId, REQUEST_ID_HEADER};
