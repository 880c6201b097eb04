use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum GatewayError {
    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Backend returned HTTP {code}: {body}")]
    Status { code: u16, body: String },

    #[error("Storage error: {0}")]
    Storage(String),
}

impl From<serde_json::Error> for GatewayError {
    fn from(e: serde_json::Error) -> Self {
        GatewayError::Transport(e.to_string())
    }
}
