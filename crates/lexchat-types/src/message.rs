use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Who authored a conversation entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Origin {
    User,
    Bot,
}

/// A single entry in the conversation log
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    pub text: String,
    pub origin: Origin,
    /// RFC 3339 creation instant
    pub timestamp: String,
    /// Set when the backend could not be reached for this reply
    #[serde(default)]
    pub failed: bool,
}

impl Message {
    fn new(origin: Origin, text: impl Into<String>, failed: bool) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            text: text.into(),
            origin,
            timestamp: chrono::Utc::now().to_rfc3339(),
            failed,
        }
    }

    pub fn user(text: impl Into<String>) -> Self {
        Self::new(Origin::User, text, false)
    }

    pub fn bot(text: impl Into<String>) -> Self {
        Self::new(Origin::Bot, text, false)
    }

    /// A bot-origin entry standing in for a reply that never arrived
    pub fn failure(text: impl Into<String>) -> Self {
        Self::new(Origin::Bot, text, true)
    }
}

/// Parsed result of a successful `/chat` call, ready for display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatReply {
    /// Answer text, with the numbered `Sources:` block already appended
    pub text: String,
    /// Whether the backend classified the question as in-domain
    pub is_flagged: bool,
}
