//! AskGate LLM — backend adapters for answer generation.
//!
//! Two non-streaming completion backends: Gemini (generateContent) and
//! Qwen (OpenAI-compatible chat completions). Selection is a closed enum
//! with Gemini as the default.

pub mod config;
pub mod providers;
pub mod types;

pub use config::LlmConfig;
pub use providers::{BackendError, CompletionBackend, LlmClient};
pub use types::ModelBackend;
