//! Backend credentials and model selection from the environment.

use serde::{Deserialize, Serialize};

pub const DEFAULT_GEMINI_MODEL: &str = "gemini-1.5-flash";
pub const DEFAULT_QWEN_MODEL: &str = "qwen-plus";

pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com";
/// DashScope's OpenAI-compatible endpoint.
pub const DEFAULT_QWEN_BASE_URL: &str = "https://dashscope-intl.aliyuncs.com/compatible-mode/v1";

/// Credentials and endpoints for both backends.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmConfig {
    pub gemini_api_key: Option<String>,
    pub qwen_api_key: Option<String>,
    pub gemini_model: String,
    pub qwen_model: String,
    pub gemini_base_url: String,
    pub qwen_base_url: String,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            gemini_api_key: None,
            qwen_api_key: None,
            gemini_model: DEFAULT_GEMINI_MODEL.into(),
            qwen_model: DEFAULT_QWEN_MODEL.into(),
            gemini_base_url: DEFAULT_GEMINI_BASE_URL.into(),
            qwen_base_url: DEFAULT_QWEN_BASE_URL.into(),
        }
    }
}

impl LlmConfig {
    /// Read backend configuration from environment variables.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            gemini_api_key: std::env::var("GEMINI_API_KEY").ok().filter(|k| !k.is_empty()),
            qwen_api_key: std::env::var("QWEN_API_KEY").ok().filter(|k| !k.is_empty()),
            gemini_model: std::env::var("GEMINI_MODEL").unwrap_or(defaults.gemini_model),
            qwen_model: std::env::var("QWEN_MODEL").unwrap_or(defaults.qwen_model),
            gemini_base_url: std::env::var("GEMINI_BASE_URL").unwrap_or(defaults.gemini_base_url),
            qwen_base_url: std::env::var("QWEN_BASE_URL").unwrap_or(defaults.qwen_base_url),
        }
    }
}
