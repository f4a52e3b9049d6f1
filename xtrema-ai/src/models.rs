use serde::{Deserialize, Serialize};

pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_MODEL: &str = "gemini-3-pro-preview";

/// Configuration for the Gemini vision provider
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GeminiConfig {
    /// API key for authentication. Empty means every request will be rejected
    /// upstream, which the gateway turns into its fallback result.
    pub api_key: String,

    /// Base URL for API requests
    pub api_base: String,

    /// Model used for image analysis
    pub model: String,

    /// Request timeout; `None` leaves the transport default in place
    pub timeout_secs: Option<u64>,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            api_base: DEFAULT_API_BASE.to_string(),
            model: DEFAULT_MODEL.to_string(),
            timeout_secs: None,
        }
    }
}

impl GeminiConfig {
    /// Reads `GEMINI_API_KEY` (or `API_KEY`), `GEMINI_API_BASE`,
    /// `GEMINI_MODEL` and `GEMINI_TIMEOUT_SECS` from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();

        let api_key = non_empty("GEMINI_API_KEY")
            .or_else(|| non_empty("API_KEY"))
            .unwrap_or_default();

        let timeout_secs = non_empty("GEMINI_TIMEOUT_SECS").and_then(|v| match v.trim().parse() {
            Ok(secs) => Some(secs),
            Err(e) => {
                tracing::warn!("Invalid GEMINI_TIMEOUT_SECS value '{}': {}", v, e);
                None
            }
        });

        Self {
            api_key,
            api_base: non_empty("GEMINI_API_BASE").unwrap_or(defaults.api_base),
            model: non_empty("GEMINI_MODEL").unwrap_or(defaults.model),
            timeout_secs,
        }
    }

    pub fn has_api_key(&self) -> bool {
        !self.api_key.is_empty()
    }

    /// Full `generateContent` endpoint for the configured model.
    pub fn endpoint(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.api_base.trim_end_matches('/'),
            self.model
        )
    }
}
