//! Thin adapter over an OpenAI-compatible completion service.
//!
//! One-shot calls only: no retry, no backoff, no caching. Failures carry
//! provider detail for logging at the call site; handlers map them to generic
//! user-facing messages.

use anyhow::{anyhow, bail, Context, Result};
use serde::Deserialize;
use serde_json::json;

use crate::core::config::AppConfig;

/// Hardcoded fallback used when neither the request nor the configuration
/// names a model.
pub const FALLBACK_MODEL: &str = "gpt-4o";

/// Identifier prefix the provider uses for chat-capable models.
pub const CHAT_MODEL_PREFIX: &str = "gpt-";

/// Sampling temperature for all completions. Kept low to favor deterministic,
/// terse output.
const COMPLETION_TEMPERATURE: f64 = 0.3;

/// Client for the completion service, constructed once at startup and shared
/// across requests.
#[derive(Clone)]
pub struct CompletionClient {
    http: reqwest::Client,
    api_base: String,
    default_api_key: Option<String>,
    default_model: Option<String>,
}

// ============================================================================
// Upstream wire types
// ============================================================================

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ModelList {
    #[serde(default)]
    data: Vec<ModelInfo>,
}

#[derive(Debug, Deserialize)]
struct ModelInfo {
    id: String,
}

impl CompletionClient {
    /// Build a client from the application configuration.
    ///
    /// The explicit request timeout closes the hang-forever gap: a stalled
    /// upstream surfaces as an error instead of holding the request open.
    pub fn new(config: &AppConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.request_timeout_secs))
            .pool_max_idle_per_host(20)
            .pool_idle_timeout(std::time::Duration::from_secs(90))
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            http,
            api_base: config.api_base.trim_end_matches('/').to_string(),
            default_api_key: config.openai_api_key.clone(),
            default_model: config.default_model.clone(),
        })
    }

    /// Resolve the model identifier for a completion call.
    ///
    /// Precedence: request-supplied > configured default > [`FALLBACK_MODEL`].
    pub fn resolve_model<'a>(&'a self, requested: Option<&'a str>) -> &'a str {
        requested
            .map(str::trim)
            .filter(|m| !m.is_empty())
            .or(self.default_model.as_deref())
            .unwrap_or(FALLBACK_MODEL)
    }

    /// Resolve the credential for an outbound call.
    ///
    /// A request-level key always takes precedence over the process-wide
    /// default; blank values count as absent. Returns `None` when no
    /// credential is available anywhere.
    pub fn resolve_credential(&self, requested: Option<&str>) -> Option<String> {
        requested
            .map(str::trim)
            .filter(|k| !k.is_empty())
            .map(str::to_string)
            .or_else(|| self.default_api_key.clone())
    }

    /// Send a single chat-style completion request and return the trimmed
    /// text of the first choice.
    pub async fn complete(
        &self,
        system_prompt: &str,
        prompt: &str,
        requested_model: Option<&str>,
        api_key: &str,
    ) -> Result<String> {
        let model = self.resolve_model(requested_model);

        let payload = json!({
            "model": model,
            "messages": [
                { "role": "system", "content": system_prompt },
                { "role": "user", "content": prompt },
            ],
            "temperature": COMPLETION_TEMPERATURE,
        });

        let response = self
            .http
            .post(format!("{}/chat/completions", self.api_base))
            .bearer_auth(api_key)
            .json(&payload)
            .send()
            .await
            .context("completion request failed")?;

        let status = response.status();
        if !status.is_success() {
            bail!("completion service returned status {status}");
        }

        let completion: ChatCompletionResponse = response
            .json()
            .await
            .context("failed to parse completion response")?;

        let choice = completion
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| anyhow!("completion service returned no choices"))?;

        Ok(choice.message.content.unwrap_or_default().trim().to_string())
    }

    /// Fetch the provider's model catalog and return its identifiers.
    ///
    /// When `chat_only` is set, the list is narrowed to identifiers with the
    /// [`CHAT_MODEL_PREFIX`]; otherwise the catalog is relayed unfiltered.
    pub async fn list_models(&self, api_key: &str, chat_only: bool) -> Result<Vec<String>> {
        let response = self
            .http
            .get(format!("{}/models", self.api_base))
            .bearer_auth(api_key)
            .send()
            .await
            .context("model catalog request failed")?;

        let status = response.status();
        if !status.is_success() {
            bail!("model catalog request returned status {status}");
        }

        let catalog: ModelList = response
            .json()
            .await
            .context("failed to parse model catalog")?;

        let models = catalog
            .data
            .into_iter()
            .map(|m| m.id)
            .filter(|id| !chat_only || id.starts_with(CHAT_MODEL_PREFIX))
            .collect();

        Ok(models)
    }
}
