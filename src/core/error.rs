//! Error types and handling for the commit-generation backend.
//!
//! This module provides a unified error type [`AppError`] that covers the
//! three failure classes the API exposes and implements proper HTTP response
//! conversion. Every error response carries a flat `{"error": "..."}` body.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Main error type for the application.
///
/// All route-level errors are converted to this type for consistent handling.
#[derive(Error, Debug)]
pub enum AppError {
    /// Client omitted or malformed a required input
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Authentication failure (missing, malformed, or mismatched token)
    #[error("Unauthorized")]
    Unauthorized,

    /// The completion service call failed, timed out, or returned an
    /// empty/unexpected result. The message is the generic user-facing text;
    /// provider detail is logged at the call site and never leaks here.
    #[error("Upstream error: {0}")]
    Upstream(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::Unauthorized => (StatusCode::UNAUTHORIZED, "Unauthorized".to_string()),
            AppError::Upstream(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        let body = Json(json!({ "error": error_message }));

        (status, body).into_response()
    }
}

/// Convenience type alias for Results using [`AppError`].
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = AppError::Unauthorized;
        assert_eq!(err.to_string(), "Unauthorized");

        let err = AppError::BadRequest("Missing required fields".to_string());
        assert_eq!(err.to_string(), "Bad request: Missing required fields");

        let err = AppError::Upstream("Failed to generate commit message".to_string());
        assert_eq!(
            err.to_string(),
            "Upstream error: Failed to generate commit message"
        );
    }

    #[test]
    fn test_unauthorized_response() {
        let err = AppError::Unauthorized;
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn test_bad_request_response() {
        let err = AppError::BadRequest("Missing required fields".to_string());
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_upstream_response() {
        let err = AppError::Upstream("Failed to generate commit message".to_string());
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn test_error_body_shape() {
        let err = AppError::BadRequest("Missing staged code diff".to_string());
        let response = err.into_response();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json, json!({ "error": "Missing staged code diff" }));
    }

    #[test]
    fn test_result_type_alias() {
        fn returns_result() -> Result<String> {
            Ok("success".to_string())
        }

        assert_eq!(returns_result().unwrap(), "success");
    }
}
