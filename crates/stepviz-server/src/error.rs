//! API error types with HTTP status code mapping.
//!
//! [`ApiError`] is the unified error type for all API endpoints. It
//! implements `axum::response::IntoResponse` to produce structured JSON
//! error responses with appropriate HTTP status codes.
//!
//! Note that unknown algorithm ids are NOT errors anywhere in this API --
//! the tracers substitute their documented defaults. Errors here are about
//! malformed geometry: positions outside the grid or zero dimensions.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

/// Structured error detail in API responses.
#[derive(Debug, Clone, Serialize)]
pub struct ApiErrorDetail {
    /// Machine-readable error code (e.g., "BAD_REQUEST").
    pub code: String,
    /// Human-readable error message.
    pub message: String,
}

/// API errors with HTTP status code mapping.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Invalid request (400).
    #[error("bad request: {0}")]
    BadRequest(String),

    /// Internal server error (500).
    #[error("internal error: {0}")]
    InternalError(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, detail) = match &self {
            ApiError::BadRequest(msg) => (
                StatusCode::BAD_REQUEST,
                ApiErrorDetail {
                    code: "BAD_REQUEST".to_string(),
                    message: msg.clone(),
                },
            ),
            ApiError::InternalError(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiErrorDetail {
                    code: "INTERNAL_ERROR".to_string(),
                    message: msg.clone(),
                },
            ),
        };

        let body = serde_json::json!({
            "success": false,
            "error": detail,
        });

        (status, axum::Json(body)).into_response()
    }
}

impl From<stepviz_core::CoreError> for ApiError {
    fn from(err: stepviz_core::CoreError) -> Self {
        // Every core error is a caller-side geometry/syntax problem.
        ApiError::BadRequest(err.to_string())
    }
}
