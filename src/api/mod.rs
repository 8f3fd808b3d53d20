//! API layer for the commit-generation backend.
//!
//! This module contains the HTTP handlers, request/response models,
//! authentication middleware, and the router wiring them together.

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub mod auth;
pub mod handlers;
pub mod models;

// Re-export commonly used types
pub use auth::{require_auth, verify_auth};
pub use handlers::{
    generate_commit_messages, generate_review_comments, health, list_models, AppState,
};
pub use models::{
    CommitMessageRequest, ErrorResponse, GenerateResponse, LineLimit, ModelsRequest,
    ReviewCommentRequest,
};

/// OpenAPI documentation for the public surface.
#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::generate_commit_messages,
        handlers::generate_review_comments,
        handlers::list_models,
    ),
    components(schemas(
        models::CommitMessageRequest,
        models::ReviewCommentRequest,
        models::ModelsRequest,
        models::GenerateResponse,
        models::ErrorResponse,
        models::LineLimit,
    )),
    info(
        title = "commitgen-server",
        description = "Generates commit messages and review comments from staged diffs"
    )
)]
pub struct ApiDoc;

/// Build the application router.
///
/// The bearer-token gate applies to the two generation routes only; `/models`
/// and `/health` match the original public surface and stay open.
pub fn app_router(state: Arc<AppState>) -> Router {
    let generate_routes = Router::new()
        .route(
            "/generate/commit-messages",
            post(generate_commit_messages),
        )
        .route(
            "/generate/review-comments",
            post(generate_review_comments),
        )
        .route_layer(middleware::from_fn_with_state(state.clone(), require_auth));

    let api_routes = Router::new()
        .merge(generate_routes)
        .route("/models", get(list_models))
        .route("/health", get(health))
        .with_state(state);

    Router::new()
        .merge(api_routes)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
