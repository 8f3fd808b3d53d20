//! HTTP request handlers for the generation API.
//!
//! Each route follows the same shape: validate required fields, render the
//! prompt, make one completion-service call, and map the outcome to a JSON
//! response. Validation failures return before any upstream call is made.

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::api::models::{
    CommitMessageRequest, ErrorResponse, GenerateResponse, ModelsRequest, ReviewCommentRequest,
};
use crate::core::logging::{generate_request_id, REQUEST_ID};
use crate::core::{AppConfig, AppError, Result};
use crate::services::openai::CompletionClient;
use crate::services::prompt;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub client: CompletionClient,
}

/// Treat absent and empty strings alike when validating required fields.
fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

fn missing_fields() -> AppError {
    AppError::BadRequest("Missing required fields".to_string())
}

/// Handle `POST /generate/commit-messages`.
///
/// Accepts both body shapes: the presence of `commitType` selects the legacy
/// template, otherwise the current template (or `customPrompt`) is rendered
/// with the resolved per-line length limit.
#[utoipa::path(
    post,
    path = "/generate/commit-messages",
    request_body = CommitMessageRequest,
    responses(
        (status = 200, description = "Generated commit message", body = GenerateResponse),
        (status = 400, description = "Missing required fields", body = ErrorResponse),
        (status = 401, description = "Invalid or missing bearer token", body = ErrorResponse),
        (status = 500, description = "Completion service failure", body = ErrorResponse),
    ),
)]
pub async fn generate_commit_messages(
    State(state): State<Arc<AppState>>,
    payload: Option<Json<CommitMessageRequest>>,
) -> Result<Json<GenerateResponse>> {
    let payload = payload.map(|Json(p)| p).unwrap_or_default();
    let request_id = generate_request_id();

    REQUEST_ID
        .scope(request_id.clone(), async move {
            let diff = non_blank(&payload.diff).ok_or_else(missing_fields)?;
            let format = non_blank(&payload.format).ok_or_else(missing_fields)?;

            let rendered = if let Some(commit_type) = non_blank(&payload.commit_type) {
                let max_length = payload.max_length.as_ref().ok_or_else(missing_fields)?;
                prompt::legacy_commit_message_prompt(diff, commit_type, format, max_length)
            } else {
                // The current body shape requires a request-level apiKey
                non_blank(&payload.api_key).ok_or_else(missing_fields)?;
                let limit = prompt::resolve_max_length(payload.max_length_per_line.as_ref());
                prompt::commit_message_prompt(
                    diff,
                    format,
                    limit,
                    non_blank(&payload.custom_prompt),
                )
            };

            let api_key = state
                .client
                .resolve_credential(payload.api_key.as_deref())
                .ok_or_else(missing_fields)?;

            tracing::debug!(
                request_id = %request_id,
                model = payload.model.as_deref().unwrap_or("<default>"),
                "Generating commit message"
            );

            let message = state
                .client
                .complete(
                    prompt::COMMIT_SYSTEM_PROMPT,
                    &rendered,
                    payload.model.as_deref(),
                    &api_key,
                )
                .await
                .map_err(|err| {
                    tracing::error!(
                        request_id = %request_id,
                        error = %err,
                        "Commit message generation failed"
                    );
                    AppError::Upstream("Failed to generate commit message".to_string())
                })?;

            Ok(Json(GenerateResponse { message }))
        })
        .await
}

/// Handle `POST /generate/review-comments`.
#[utoipa::path(
    post,
    path = "/generate/review-comments",
    request_body = ReviewCommentRequest,
    responses(
        (status = 200, description = "Generated review comments", body = GenerateResponse),
        (status = 400, description = "Missing staged code diff", body = ErrorResponse),
        (status = 401, description = "Invalid or missing bearer token", body = ErrorResponse),
        (status = 500, description = "Completion service failure", body = ErrorResponse),
    ),
)]
pub async fn generate_review_comments(
    State(state): State<Arc<AppState>>,
    payload: Option<Json<ReviewCommentRequest>>,
) -> Result<Json<GenerateResponse>> {
    let payload = payload.map(|Json(p)| p).unwrap_or_default();
    let request_id = generate_request_id();

    REQUEST_ID
        .scope(request_id.clone(), async move {
            let diff = non_blank(&payload.diff)
                .ok_or_else(|| AppError::BadRequest("Missing staged code diff".to_string()))?;

            let api_key = state
                .client
                .resolve_credential(payload.api_key.as_deref())
                .ok_or_else(missing_fields)?;

            let rendered = prompt::review_comment_prompt(diff);

            tracing::debug!(request_id = %request_id, "Generating review comments");

            let message = state
                .client
                .complete(prompt::REVIEW_SYSTEM_PROMPT, &rendered, None, &api_key)
                .await
                .map_err(|err| {
                    tracing::error!(
                        request_id = %request_id,
                        error = %err,
                        "Review comment generation failed"
                    );
                    AppError::Upstream("Failed to generate review comments".to_string())
                })?;

            Ok(Json(GenerateResponse { message }))
        })
        .await
}

/// Handle `GET /models`.
///
/// The body may carry an `apiKey` override; otherwise the process-wide
/// credential is used. Whether the catalog is narrowed to chat-capable
/// identifiers is a configuration switch.
#[utoipa::path(
    get,
    path = "/models",
    responses(
        (status = 200, description = "Available model identifiers", body = Vec<String>),
        (status = 500, description = "Catalog fetch failure", body = ErrorResponse),
    ),
)]
pub async fn list_models(
    State(state): State<Arc<AppState>>,
    payload: Option<Json<ModelsRequest>>,
) -> Result<Json<Vec<String>>> {
    let payload = payload.map(|Json(p)| p).unwrap_or_default();
    let request_id = generate_request_id();

    REQUEST_ID
        .scope(request_id.clone(), async move {
            let api_key = state
                .client
                .resolve_credential(payload.api_key.as_deref())
                .ok_or_else(|| {
                    tracing::error!(request_id = %request_id, "No completion-service credential available");
                    AppError::Upstream("Failed to fetch models".to_string())
                })?;

            let models = state
                .client
                .list_models(&api_key, state.config.filter_chat_models_only)
                .await
                .map_err(|err| {
                    tracing::error!(
                        request_id = %request_id,
                        error = %err,
                        "Model catalog fetch failed"
                    );
                    AppError::Upstream("Failed to fetch models".to_string())
                })?;

            Ok(Json(models))
        })
        .await
}

/// Basic health check endpoint.
pub async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}
