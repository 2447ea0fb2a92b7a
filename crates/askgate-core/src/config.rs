//! Gateway configuration, read once from the environment at startup.

use serde::{Deserialize, Serialize};
use tracing::warn;

/// Default upstream dataset endpoint (JSON array of conference records).
pub const DEFAULT_DATASET_URL: &str = "https://api.rpa4edu.shop/api_research.php";

/// How many records the context builder embeds in a prompt. Bounds prompt
/// size against backend token limits; tunable via `CONTEXT_RECORD_CAP`.
pub const DEFAULT_CONTEXT_RECORD_CAP: usize = 10;

/// Origins the browser frontend is served from.
pub const DEFAULT_ALLOWED_ORIGINS: &[&str] = &[
    "http://localhost:5173",
    "https://research-frontend-henna.vercel.app",
    "https://research.neu.edu.vn",
];

/// Top-level gateway configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GatewayConfig {
    /// HTTP server port.
    pub port: u16,
    /// Upstream dataset endpoint.
    pub dataset_url: String,
    /// Origins allowed to make credentialed cross-origin calls.
    pub allowed_origins: Vec<String>,
    /// Max records embedded into a grounding prompt.
    pub context_record_cap: usize,
}

impl GatewayConfig {
    /// Create configuration from environment and defaults.
    pub fn from_env() -> Self {
        let port = std::env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(3000);

        let dataset_url =
            std::env::var("DATASET_URL").unwrap_or_else(|_| DEFAULT_DATASET_URL.to_string());

        let allowed_origins = match std::env::var("ALLOWED_ORIGINS") {
            Ok(raw) => {
                let origins: Vec<String> = raw
                    .split(',')
                    .map(|o| o.trim().to_string())
                    .filter(|o| !o.is_empty())
                    .collect();
                if origins.is_empty() {
                    warn!("ALLOWED_ORIGINS is set but empty; falling back to defaults");
                    default_origins()
                } else {
                    origins
                }
            }
            Err(_) => default_origins(),
        };

        let context_record_cap = std::env::var("CONTEXT_RECORD_CAP")
            .ok()
            .and_then(|c| c.parse().ok())
            .filter(|&c| c > 0)
            .unwrap_or(DEFAULT_CONTEXT_RECORD_CAP);

        Self {
            port,
            dataset_url,
            allowed_origins,
            context_record_cap,
        }
    }
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            port: 3000,
            dataset_url: DEFAULT_DATASET_URL.to_string(),
            allowed_origins: default_origins(),
            context_record_cap: DEFAULT_CONTEXT_RECORD_CAP,
        }
    }
}

fn default_origins() -> Vec<String> {
    DEFAULT_ALLOWED_ORIGINS
        .iter()
        .map(|o| o.to_string())
        .collect()
}
