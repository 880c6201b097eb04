//! Session controller — the composition point for one conversation turn.
//!
//! Two phases, Idle and Awaiting, expressed through the `pending` flag:
//! 1. `submit` appends the user message synchronously (visible immediately)
//! 2. pending goes up, the gateway call is awaited
//! 3. the reply (or a fixed apology on failure) is appended
//! 4. pending goes down
//!
//! At most one gateway request is in flight: the input surface is disabled
//! while pending, and `submit` guards against re-entry anyway.
//!
//! The state lives behind `Rc<RefCell<...>>` and is only borrowed across
//! synchronous sections, never across the gateway await. That keeps
//! `clear()` callable while a request is outstanding; the late reply is
//! then appended after the fresh greeting.

use std::cell::RefCell;
use std::rc::Rc;

use lexchat_types::message::Message;
use crate::ports::ChatGateway;
use crate::state::ConversationState;

/// Shown in place of a reply when the backend cannot be reached.
const APOLOGY: &str = "Sorry, I couldn't reach the legal assistant service. \
    Check that the backend server is running and try again.";

pub struct ChatController {
    session_id: String,
    state: Rc<RefCell<ConversationState>>,
}

impl ChatController {
    pub fn new(session_id: String, state: ConversationState) -> Self {
        Self {
            session_id,
            state: Rc::new(RefCell::new(state)),
        }
    }

    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    pub fn state(&self) -> &Rc<RefCell<ConversationState>> {
        &self.state
    }

    /// Run one conversation turn. Blank input and re-entrant calls while a
    /// request is outstanding are no-ops.
    ///
    /// The gateway call is the sole suspension point; on WASM this must be
    /// driven via `wasm_bindgen_futures::spawn_local`.
    pub async fn submit(&self, text: &str, gateway: &dyn ChatGateway) {
        // Whitespace only gates submission; the logged text stays verbatim
        if text.trim().is_empty() {
            return;
        }

        {
            let mut state = self.state.borrow_mut();
            if state.pending() {
                return;
            }
            state.append(Message::user(text));
            state.set_pending(true);
        }

        let result = gateway.send_message(&self.session_id, text).await;

        let mut state = self.state.borrow_mut();
        match result {
            Ok(reply) => {
                if reply.is_flagged {
                    log::debug!("backend classified the question as in-domain");
                }
                state.append(Message::bot(reply.text));
            }
            Err(e) => {
                log::error!("chat request failed: {}", e);
                state.append(Message::failure(APOLOGY));
            }
        }
        state.set_pending(false);
    }

    /// Reset the conversation to a single fresh greeting. Allowed in either
    /// phase; an in-flight request is not cancelled and its reply will be
    /// appended after the new greeting.
    pub fn clear(&self) {
        self.state.borrow_mut().reset();
    }
}
