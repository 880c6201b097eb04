//! UI-level state that drives rendering.
//! This is a read-only projection of the conversation state, updated each
//! frame by draining the EventBus.

use lexchat_types::event::ConversationEvent;
use lexchat_types::message::{Message, Origin};

/// State visible to UI panels
pub struct UiState {
    /// Displayed messages, in insertion order
    pub entries: Vec<ChatEntry>,
    /// True while a request is outstanding; disables the input surface
    /// and shows the typing indicator
    pub pending: bool,
    /// Input field content
    pub input_text: String,
}

/// A chat entry for display
#[derive(Clone)]
pub struct ChatEntry {
    pub id: String,
    pub origin: Origin,
    pub text: String,
    pub failed: bool,
}

impl From<Message> for ChatEntry {
    fn from(message: Message) -> Self {
        Self {
            id: message.id,
            origin: message.origin,
            text: message.text,
            failed: message.failed,
        }
    }
}

impl UiState {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            pending: false,
            input_text: String::new(),
        }
    }

    /// Fold one conversation event into the display projection.
    /// Fed by `EventBus::drain_into` once per frame.
    pub fn apply_event(&mut self, event: ConversationEvent) {
        match event {
            ConversationEvent::MessageAppended { message } => {
                self.entries.push(message.into());
            }
            ConversationEvent::PendingChanged { pending } => {
                self.pending = pending;
            }
            ConversationEvent::Cleared => {
                self.entries.clear();
            }
        }
    }
}

impl Default for UiState {
    fn default() -> Self {
        Self::new()
    }
}
