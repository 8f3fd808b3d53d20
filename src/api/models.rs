//! API request and response models.
//!
//! All request bodies use camelCase field names to match the public API
//! surface. Every field of the generation requests is optional at the serde
//! level; required-field validation happens in the handlers so that a missing
//! field yields a `400 {"error": ...}` body instead of a deserialization
//! rejection.

use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;

/// Request body for `POST /generate/commit-messages`.
///
/// Two body shapes are accepted on the same route, discriminated by the
/// presence of `commitType`:
/// - legacy: `{diff, commitType, format, maxLength, apiKey}`
/// - current: `{diff, format, apiKey, maxLengthPerLine?, customPrompt?, model?}`
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CommitMessageRequest {
    /// Staged changes in unified-diff format
    pub diff: Option<String>,

    /// Legacy commit type (e.g. "feat", "fix"); its presence selects the
    /// legacy prompt template
    pub commit_type: Option<String>,

    /// Desired subject-line template
    pub format: Option<String>,

    /// Legacy overall length bound, rendered into the prompt as given
    pub max_length: Option<LineLimit>,

    /// Per-line length bound; numeric or numeric string, defaults to 100
    pub max_length_per_line: Option<LineLimit>,

    /// Full replacement for the built-in prompt rules
    pub custom_prompt: Option<String>,

    /// Model identifier override
    pub model: Option<String>,

    /// Per-request completion-service credential
    pub api_key: Option<String>,
}

/// Request body for `POST /generate/review-comments`.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReviewCommentRequest {
    /// Staged changes in unified-diff format
    pub diff: Option<String>,

    /// Per-request completion-service credential
    pub api_key: Option<String>,
}

/// Optional request body for `GET /models`.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ModelsRequest {
    /// Per-request completion-service credential
    pub api_key: Option<String>,
}

/// Success payload of both generation routes.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct GenerateResponse {
    /// The generated commit message or review comments
    pub message: String,
}

/// Error payload shared by all routes.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Human-readable error description
    pub error: String,
}

/// A length limit that clients send either as a JSON number or as a numeric
/// string (`42` or `"42"`).
#[derive(Debug, Clone, PartialEq, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum LineLimit {
    Number(i64),
    Text(String),
}

impl fmt::Display for LineLimit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LineLimit::Number(n) => write!(f, "{n}"),
            LineLimit::Text(s) => write!(f, "{s}"),
        }
    }
}
