use serde::{Deserialize, Serialize};
use crate::message::Message;

/// Events emitted by the conversation state.
/// The UI drains these each frame for reactive updates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ConversationEvent {
    /// A message was appended to the log; the view should scroll to it
    MessageAppended { message: Message },

    /// The single-flight busy flag changed
    PendingChanged { pending: bool },

    /// The log was reset; a fresh greeting append follows immediately
    Cleared,
}
