//! Request Extractors
//!
//! Wrappers around axum's extractors that reject with `ApiError`, so
//! malformed input gets the same JSON error body as everything else.

use axum::extract::{FromRequest, FromRequestParts};

use crate::shared::errors::ApiError;

/// JSON body extractor rejecting with `ApiError`
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct ApiJson<T>(pub T);

/// Path parameter extractor rejecting with `ApiError`
///
/// Parameters that fail to parse (for example a non-numeric id) yield 404.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(ApiError))]
pub struct ApiPath<T>(pub T);
