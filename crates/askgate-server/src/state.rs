//! Shared application state.

use std::sync::Arc;

use askgate_core::GatewayConfig;
use askgate_llm::CompletionBackend;

use crate::dataset::RecordSource;

/// Shared application state accessible from all route handlers.
///
/// The record source and completion backend are injected so tests can
/// substitute fakes without touching process-wide state.
pub struct AppState {
    pub config: GatewayConfig,
    pub records: Arc<dyn RecordSource>,
    pub llm: Arc<dyn CompletionBackend>,
    /// Credential presence, reported by the health probe.
    pub gemini_configured: bool,
    pub qwen_configured: bool,
}

impl AppState {
    pub fn new(
        config: GatewayConfig,
        records: Arc<dyn RecordSource>,
        llm: Arc<dyn CompletionBackend>,
    ) -> Self {
        Self {
            config,
            records,
            llm,
            gemini_configured: false,
            qwen_configured: false,
        }
    }

    pub fn with_backend_status(mut self, gemini: bool, qwen: bool) -> Self {
        self.gemini_configured = gemini;
        self.qwen_configured = qwen;
        self
    }
}
