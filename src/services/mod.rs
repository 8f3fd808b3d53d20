//! Business logic for the commit-generation backend.
//!
//! - [`prompt`]: deterministic prompt rendering
//! - [`openai`]: thin adapter over the completion service

pub mod openai;
pub mod prompt;

// Re-export commonly used types
pub use openai::{CompletionClient, CHAT_MODEL_PREFIX, FALLBACK_MODEL};
pub use prompt::{
    commit_message_prompt, legacy_commit_message_prompt, resolve_max_length, review_comment_prompt,
    COMMIT_SYSTEM_PROMPT, DEFAULT_MAX_LINE_LENGTH, REVIEW_SYSTEM_PROMPT,
};
