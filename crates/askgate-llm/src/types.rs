//! Backend selection types.

use serde::{Deserialize, Serialize};

/// Identifier of the alternate backend in the request's `modelType` field.
pub const QWEN_SELECTOR: &str = "qwen";

/// Model backend identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelBackend {
    Gemini,
    Qwen,
}

impl ModelBackend {
    /// Resolve the caller-supplied selector. Only the exact alternate
    /// identifier routes to Qwen; anything else (absent, unrecognized)
    /// falls back to Gemini.
    pub fn from_selector(selector: Option<&str>) -> Self {
        match selector {
            Some(QWEN_SELECTOR) => ModelBackend::Qwen,
            _ => ModelBackend::Gemini,
        }
    }
}

impl std::fmt::Display for ModelBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ModelBackend::Gemini => write!(f, "gemini"),
            ModelBackend::Qwen => write!(f, "qwen"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selector_routes_qwen() {
        assert_eq!(ModelBackend::from_selector(Some("qwen")), ModelBackend::Qwen);
    }

    #[test]
    fn test_selector_defaults_to_gemini() {
        assert_eq!(ModelBackend::from_selector(None), ModelBackend::Gemini);
        assert_eq!(ModelBackend::from_selector(Some("")), ModelBackend::Gemini);
        assert_eq!(
            ModelBackend::from_selector(Some("gemini")),
            ModelBackend::Gemini
        );
        // Typos must not silently pick the alternate backend
        assert_eq!(ModelBackend::from_selector(Some("qwen ")), ModelBackend::Gemini);
        assert_eq!(ModelBackend::from_selector(Some("Qwen")), ModelBackend::Gemini);
    }
}
