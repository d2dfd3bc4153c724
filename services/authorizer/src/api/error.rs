//! API error types and helpers.
//!
//! # Purpose and responsibility
//! Centralizes HTTP error response construction so every endpoint returns the
//! same error shape.
//!
//! # Key invariants and assumptions
//! - Error responses carry a stable `code` and a human-readable `message`.
//! - Every authorization denial maps to 403 `forbidden`, whatever rule
//!   produced it.
//! - Body rejections and unknown catalog names never fall through to axum's
//!   plain-text responses.
use crate::api::types::ErrorResponse;
use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use textura_rbac::{AuthorizationDenied, ParseError};

/// Structured API error returned by handlers.
///
/// # Example
/// ```rust
/// use authorizer::api::error::api_forbidden;
/// use axum::http::StatusCode;
///
/// let err = api_forbidden("missing permission: order:approve");
/// assert_eq!(err.status, StatusCode::FORBIDDEN);
/// ```
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub body: ErrorResponse,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        (self.status, Json(self.body)).into_response()
    }
}

fn api_error(status: StatusCode, code: &str, message: &str) -> ApiError {
    ApiError {
        status,
        body: ErrorResponse {
            code: code.to_string(),
            message: message.to_string(),
            request_id: None,
        },
    }
}

/// Build a 404 Not Found error.
pub fn api_not_found(message: &str) -> ApiError {
    api_error(StatusCode::NOT_FOUND, "not_found", message)
}

/// Build a 403 Forbidden error.
pub fn api_forbidden(message: &str) -> ApiError {
    api_error(StatusCode::FORBIDDEN, "forbidden", message)
}

/// Build a 400 Bad Request validation error.
pub fn api_validation_error(message: &str) -> ApiError {
    api_error(StatusCode::BAD_REQUEST, "validation_error", message)
}

impl From<AuthorizationDenied> for ApiError {
    fn from(err: AuthorizationDenied) -> Self {
        api_error(StatusCode::FORBIDDEN, err.code(), err.message())
    }
}

// Parse errors only come from catalog path segments, so every kind is a
// missing resource.
impl From<ParseError> for ApiError {
    fn from(err: ParseError) -> Self {
        api_not_found(&err.to_string())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(err: JsonRejection) -> Self {
        api_validation_error(&err.body_text())
    }
}
