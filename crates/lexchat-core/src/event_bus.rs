//! Event feed between the conversation state and the UI.
//!
//! Single-threaded (WASM constraint): mutations buffer their events via
//! RefCell, and the UI consumes the whole buffer once per frame through
//! `drain_into`, folding each event into its display projection.

use std::cell::RefCell;
use std::rc::Rc;
use lexchat_types::event::ConversationEvent;

/// Shared event buffer — clone-cheap via Rc.
#[derive(Clone)]
pub struct EventBus {
    buffer: Rc<RefCell<Vec<ConversationEvent>>>,
}

impl EventBus {
    pub fn new() -> Self {
        Self {
            buffer: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// Buffer an event. Called by the conversation state on every mutation.
    pub fn emit(&self, event: ConversationEvent) {
        self.buffer.borrow_mut().push(event);
    }

    /// Feed every buffered event, in emission order, into `apply` and
    /// empty the buffer. Returns how many events were consumed so the
    /// caller knows whether a repaint is due.
    pub fn drain_into(&self, mut apply: impl FnMut(ConversationEvent)) -> usize {
        let events: Vec<ConversationEvent> = self.buffer.borrow_mut().drain(..).collect();
        let count = events.len();
        for event in events {
            apply(event);
        }
        count
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}
