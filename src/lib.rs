//! Commitgen Server - diffs in, commit messages out.
//!
//! A minimal HTTP backend that forwards staged code diffs to an
//! OpenAI-compatible completion service to produce commit messages and
//! code-review comments, plus a pass-through endpoint listing available
//! models.
//!
//! # Architecture
//!
//! The codebase is organized into three layers:
//!
//! - [`core`]: Configuration, error handling, request-scoped logging context
//! - [`api`]: HTTP handlers, authentication middleware, request/response models
//! - [`services`]: Prompt rendering and the completion-service adapter
//!
//! # Configuration
//!
//! The server requires the following environment variable:
//! - `AUTH_SECRET`: Shared bearer-token secret for the generation routes
//!
//! Optional environment variables:
//! - `OPENAI_API_KEY`: Process-wide completion-service credential
//! - `CHATGPT_MODEL`: Default model identifier (fallback: gpt-4o)
//! - `OPENAI_API_BASE`: Completion service base URL
//! - `HOST`: Server bind address (default: 0.0.0.0)
//! - `PORT`: Server port (default: 3001)
//! - `REQUEST_TIMEOUT_SECS`: Upstream request timeout (default: 60)
//! - `FILTER_CHAT_MODELS_ONLY`: Narrow /models to chat-capable identifiers (default: true)

pub mod api;
pub mod core;
pub mod services;

// Re-export commonly used types for convenience
pub use api::{app_router, ApiDoc, AppState};
pub use core::{AppConfig, AppError, Result};
pub use services::CompletionClient;
