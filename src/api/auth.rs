//! Bearer-token authentication for the generation endpoints.
//!
//! A single stateless equality check per request: the token following the
//! `Bearer ` scheme prefix must exactly match the configured secret. No
//! hashing, no rate limiting, no session state.

use axum::{
    extract::{Request, State},
    http::HeaderMap,
    middleware::Next,
    response::Response,
};
use std::sync::Arc;

use crate::api::handlers::AppState;
use crate::core::error::Result;
use crate::core::AppError;

/// Extract the Bearer token from the Authorization header.
fn extract_bearer(headers: &HeaderMap) -> Option<&str> {
    headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .and_then(|s| s.strip_prefix("Bearer "))
}

/// Verify the bearer token against the configured secret.
///
/// An empty secret never authenticates anything; otherwise a missing header
/// would reduce to comparing two empty strings.
pub fn verify_auth(headers: &HeaderMap, secret: &str) -> Result<()> {
    if secret.is_empty() {
        return Err(AppError::Unauthorized);
    }

    match extract_bearer(headers) {
        Some(token) if token == secret => Ok(()),
        _ => Err(AppError::Unauthorized),
    }
}

/// Axum middleware that short-circuits unauthenticated requests with
/// `401 {"error": "Unauthorized"}` before the handler body runs.
pub async fn require_auth(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    request: Request,
    next: Next,
) -> Result<Response> {
    verify_auth(&headers, &state.config.auth_secret)?;
    Ok(next.run(request).await)
}
