//! HTTP gateway to the legal-assistant backend.
//!
//! Two endpoints: `POST /chat` for one conversation turn and `POST /ingest`
//! as a one-time corpus-indexing trigger. Uses browser `fetch()` via
//! gloo-net for WASM compatibility. No timeout or retry logic: the
//! controller keeps a single request in flight.

use async_trait::async_trait;
use gloo_net::http::Request;
use serde::Deserialize;
use serde_json::json;

use lexchat_core::ports::ChatGateway;
use lexchat_types::{config::BackendConfig, message::ChatReply, GatewayError, Result};

/// Reply text when the backend omits or empties the `answer` field,
/// or when the body cannot be parsed at all.
const NO_RESPONSE: &str = "No response.";

pub struct LegalApiGateway {
    base_url: String,
}

impl LegalApiGateway {
    pub fn new(config: &BackendConfig) -> Self {
        Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait(?Send)]
impl ChatGateway for LegalApiGateway {
    async fn send_message(&self, session_id: &str, message: &str) -> Result<ChatReply> {
        let url = format!("{}/chat", self.base_url);
        let payload = json!({
            "session_id": session_id,
            "message": message,
        });

        let response = Request::post(&url)
            .header("Content-Type", "application/json")
            .json(&payload)
            .map_err(|e| GatewayError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| GatewayError::Transport(e.to_string()))?;

        if !response.ok() {
            let code = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(GatewayError::Status { code, body });
        }

        let raw = response
            .text()
            .await
            .map_err(|e| GatewayError::Transport(e.to_string()))?;

        let data = match serde_json::from_str::<ChatApiResponse>(&raw) {
            Ok(data) => data,
            Err(e) => {
                // Degrade to the default reply rather than failing the turn
                log::warn!("malformed /chat response ({}), using default", e);
                ChatApiResponse::default()
            }
        };

        Ok(build_reply(data))
    }

    async fn trigger_ingest(&self) -> Result<()> {
        let url = format!("{}/ingest", self.base_url);

        let response = Request::post(&url)
            .send()
            .await
            .map_err(|e| GatewayError::Transport(e.to_string()))?;

        if !response.ok() {
            return Err(GatewayError::Status {
                code: response.status(),
                body: response.text().await.unwrap_or_default(),
            });
        }

        Ok(())
    }
}

// ─── API response types ──────────────────────────────────────

/// Wire shape of a `/chat` reply. Every field is optional on the wire;
/// unknown fields (e.g. `used_k`) are ignored.
#[derive(Debug, Default, Deserialize)]
pub struct ChatApiResponse {
    #[serde(default)]
    pub answer: Option<String>,
    #[serde(default)]
    pub citations: Vec<String>,
    #[serde(default)]
    pub is_legal: bool,
    #[serde(default)]
    pub session_id: Option<String>,
}

/// Turn the wire response into displayable text: the answer (or the
/// default), then a blank line and a 1-indexed `Sources:` list when the
/// backend supplied citations.
pub fn build_reply(data: ChatApiResponse) -> ChatReply {
    let mut text = match data.answer {
        Some(answer) if !answer.is_empty() => answer,
        _ => NO_RESPONSE.to_string(),
    };

    if !data.citations.is_empty() {
        text.push_str("\n\nSources:");
        for (i, citation) in data.citations.iter().enumerate() {
            text.push_str(&format!("\n{}) {}", i + 1, citation));
        }
    }

    ChatReply {
        text,
        is_flagged: data.is_legal,
    }
}
