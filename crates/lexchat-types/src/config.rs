use serde::{Deserialize, Serialize};

/// Backend base URL, overridable at build time:
/// `LEXCHAT_API_BASE=https://api.example.com trunk build`
const DEFAULT_BASE_URL: &str = match option_env!("LEXCHAT_API_BASE") {
    Some(url) => url,
    None => "http://127.0.0.1:8000",
};

const DEFAULT_GREETING: &str = "Hello! I'm your Sri Lankan Legal LLM assistant. \
    Ask about Companies Act, Inland Revenue Act, or Labor/Labour Laws.";

/// Top-level application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub backend: BackendConfig,
    /// Synthetic bot message the log starts (and resets) with
    pub greeting: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            backend: BackendConfig::default(),
            greeting: DEFAULT_GREETING.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendConfig {
    pub base_url: String,
    /// Fire the one-time `/ingest` trigger on startup. Off by default:
    /// the index normally already exists server-side.
    pub auto_ingest: bool,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            auto_ingest: false,
        }
    }
}
