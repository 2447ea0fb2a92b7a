//! Non-streaming completion calls against the two external backends.
//!
//! Gemini takes the full prompt as one generateContent input; Qwen takes it
//! as a single user-role chat message through DashScope's OpenAI-compatible
//! API. Each request makes at most one backend call, no retries.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde_json::json;
use thiserror::Error;
use tracing::debug;

use crate::config::LlmConfig;
use crate::types::ModelBackend;

/// Transport default for the single model call; there is no per-call override.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// A model backend call that failed. Surfaced to the caller as a server error.
#[derive(Debug, Error)]
pub enum BackendError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API error {status}: {body}")]
    Api { status: StatusCode, body: String },

    #[error("missing API key for {0}")]
    MissingKey(ModelBackend),

    #[error("malformed response: {0}")]
    Malformed(String),
}

/// Seam for answer generation, so tests can substitute a fake backend.
#[async_trait]
pub trait CompletionBackend: Send + Sync {
    /// Send the prompt to the selected backend and return the plain-text answer.
    async fn complete(&self, prompt: &str, backend: ModelBackend) -> Result<String, BackendError>;
}

/// Production dispatcher holding one shared HTTP client and both credentials.
/// Constructed once at startup; stateless per call.
pub struct LlmClient {
    client: Client,
    config: LlmConfig,
}

impl LlmClient {
    pub fn new(config: LlmConfig) -> Self {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_else(|_| Client::new());
        Self { client, config }
    }

    pub fn gemini_configured(&self) -> bool {
        self.config.gemini_api_key.is_some()
    }

    pub fn qwen_configured(&self) -> bool {
        self.config.qwen_api_key.is_some()
    }

    /// Single-shot generateContent call; extracts the first candidate's text.
    async fn complete_gemini(&self, prompt: &str) -> Result<String, BackendError> {
        let api_key = self
            .config
            .gemini_api_key
            .as_deref()
            .ok_or(BackendError::MissingKey(ModelBackend::Gemini))?;

        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.config.gemini_base_url, self.config.gemini_model
        );

        debug!(model = %self.config.gemini_model, "dispatching to Gemini");

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", api_key)
            .header("Content-Type", "application/json")
            .json(&json!({
                "contents": [{ "parts": [{ "text": prompt }] }],
            }))
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(BackendError::Api { status, body });
        }

        let parsed: serde_json::Value = response.json().await?;
        parsed["candidates"][0]["content"]["parts"][0]["text"]
            .as_str()
            .map(|t| t.to_string())
            .ok_or_else(|| BackendError::Malformed("no candidate text in Gemini response".into()))
    }

    /// Chat completion with the prompt as one user message; extracts the
    /// first choice's message content.
    async fn complete_qwen(&self, prompt: &str) -> Result<String, BackendError> {
        let api_key = self
            .config
            .qwen_api_key
            .as_deref()
            .ok_or(BackendError::MissingKey(ModelBackend::Qwen))?;

        let url = format!("{}/chat/completions", self.config.qwen_base_url);

        debug!(model = %self.config.qwen_model, "dispatching to Qwen");

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", api_key))
            .header("Content-Type", "application/json")
            .json(&json!({
                "model": self.config.qwen_model,
                "messages": [{ "role": "user", "content": prompt }],
            }))
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(BackendError::Api { status, body });
        }

        let parsed: serde_json::Value = response.json().await?;
        parsed["choices"][0]["message"]["content"]
            .as_str()
            .map(|t| t.to_string())
            .ok_or_else(|| BackendError::Malformed("no choice content in Qwen response".into()))
    }
}

#[async_trait]
impl CompletionBackend for LlmClient {
    async fn complete(&self, prompt: &str, backend: ModelBackend) -> Result<String, BackendError> {
        match backend {
            ModelBackend::Gemini => self.complete_gemini(prompt).await,
            ModelBackend::Qwen => self.complete_qwen(prompt).await,
        }
    }
}
