//! Configuration management for the commit-generation backend.
//!
//! All configuration comes from environment variables, optionally seeded from
//! a `.env` file at startup. The environment is read exactly once into an
//! [`AppConfig`] that is injected into the application state; nothing consults
//! ambient globals after startup.

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};

/// Default base URL of the OpenAI-compatible completion service.
pub const DEFAULT_API_BASE: &str = "https://api.openai.com/v1";

/// Main application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Shared secret expected as a bearer token on the generation routes.
    /// Must be non-empty; an unset secret would otherwise let an absent
    /// Authorization header authenticate trivially.
    pub auth_secret: String,

    /// Process-wide completion-service credential. A request-level `apiKey`
    /// always takes precedence over this value.
    pub openai_api_key: Option<String>,

    /// Default model identifier used when a request does not name one
    pub default_model: Option<String>,

    /// Base URL for the completion service API
    pub api_base: String,

    /// Server configuration (host, port)
    pub server: ServerConfig,

    /// Request timeout in seconds for upstream calls
    pub request_timeout_secs: u64,

    /// When true, `/models` only returns chat-capable identifiers
    /// (those with the `gpt-` prefix); when false, the catalog is relayed
    /// unfiltered.
    pub filter_chat_models_only: bool,
}

/// Server-specific configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to
    pub host: String,

    /// Port to bind to
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3001
}

fn default_request_timeout() -> u64 {
    60
}

impl AppConfig {
    /// Load configuration from environment variables.
    ///
    /// Required: `AUTH_SECRET` (non-empty).
    /// Optional: `OPENAI_API_KEY`, `CHATGPT_MODEL`, `OPENAI_API_BASE`,
    /// `HOST`, `PORT`, `REQUEST_TIMEOUT_SECS`, `FILTER_CHAT_MODELS_ONLY`.
    pub fn from_env() -> Result<Self> {
        let auth_secret = match env_opt("AUTH_SECRET") {
            Some(secret) => secret,
            None => bail!("AUTH_SECRET environment variable is required and must be non-empty"),
        };

        let mut server = ServerConfig::default();
        if let Some(host) = env_opt("HOST") {
            server.host = host;
        }
        if let Some(port) = env_opt("PORT") {
            server.port = port
                .parse()
                .map_err(|_| anyhow::anyhow!("PORT must be a valid port number, got '{port}'"))?;
        }

        let request_timeout_secs = env_opt("REQUEST_TIMEOUT_SECS")
            .and_then(|s| s.parse().ok())
            .unwrap_or_else(default_request_timeout);

        let filter_chat_models_only = env_opt("FILTER_CHAT_MODELS_ONLY")
            .map(|s| str_to_bool(&s))
            .unwrap_or(true);

        Ok(Self {
            auth_secret,
            openai_api_key: env_opt("OPENAI_API_KEY"),
            default_model: env_opt("CHATGPT_MODEL"),
            api_base: env_opt("OPENAI_API_BASE").unwrap_or_else(|| DEFAULT_API_BASE.to_string()),
            server,
            request_timeout_secs,
            filter_chat_models_only,
        })
    }
}

/// Read an environment variable, treating empty/blank values as unset.
fn env_opt(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Convert string to boolean.
///
/// Accepts: "true", "1", "yes", "on" (case-insensitive)
fn str_to_bool(value: &str) -> bool {
    matches!(value.to_lowercase().as_str(), "true" | "1" | "yes" | "on")
}
