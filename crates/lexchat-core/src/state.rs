//! Conversation state — the append-only message log and the single-flight
//! busy flag. Every mutation is mirrored onto the event bus so the UI can
//! re-render and scroll the newest entry into view.

use lexchat_types::event::ConversationEvent;
use lexchat_types::message::Message;
use crate::event_bus::EventBus;

pub struct ConversationState {
    messages: Vec<Message>,
    pending: bool,
    greeting: String,
    event_bus: EventBus,
}

impl ConversationState {
    /// Create the state with the synthetic greeting already in the log.
    pub fn new(greeting: impl Into<String>, event_bus: EventBus) -> Self {
        let mut state = Self {
            messages: Vec::new(),
            pending: false,
            greeting: greeting.into(),
            event_bus,
        };
        let greeting = state.greeting.clone();
        state.append(Message::bot(greeting));
        state
    }

    /// Append a message at the end of the log. Existing entries are never
    /// touched; insertion order is display order.
    pub fn append(&mut self, message: Message) {
        self.event_bus.emit(ConversationEvent::MessageAppended {
            message: message.clone(),
        });
        self.messages.push(message);
    }

    /// Replace the log with a single fresh greeting (new id/timestamp).
    /// `pending` is left untouched: an in-flight reply lands after the
    /// greeting.
    pub fn reset(&mut self) {
        self.messages.clear();
        self.event_bus.emit(ConversationEvent::Cleared);
        let greeting = self.greeting.clone();
        self.append(Message::bot(greeting));
    }

    pub fn set_pending(&mut self, pending: bool) {
        if self.pending != pending {
            self.pending = pending;
            self.event_bus
                .emit(ConversationEvent::PendingChanged { pending });
        }
    }

    pub fn pending(&self) -> bool {
        self.pending
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }
}
