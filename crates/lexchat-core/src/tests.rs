#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};
    use std::collections::HashMap;

    use async_trait::async_trait;
    use futures::executor::block_on;

    use lexchat_types::event::ConversationEvent;
    use lexchat_types::message::{ChatReply, Message, Origin};
    use lexchat_types::{GatewayError, Result};

    use crate::controller::ChatController;
    use crate::event_bus::EventBus;
    use crate::identity::get_or_create_session_id;
    use crate::ports::{ChatGateway, StoragePort};
    use crate::state::ConversationState;

    const GREETING: &str = "Hello! How can I help?";

    // ─── Test doubles ────────────────────────────────────────

    struct FakeGateway {
        outcome: std::result::Result<ChatReply, GatewayError>,
        calls: Cell<usize>,
    }

    impl FakeGateway {
        fn replying(text: &str) -> Self {
            Self {
                outcome: Ok(ChatReply {
                    text: text.to_string(),
                    is_flagged: false,
                }),
                calls: Cell::new(0),
            }
        }

        fn failing(err: GatewayError) -> Self {
            Self {
                outcome: Err(err),
                calls: Cell::new(0),
            }
        }
    }

    #[async_trait(?Send)]
    impl ChatGateway for FakeGateway {
        async fn send_message(&self, _session_id: &str, _message: &str) -> Result<ChatReply> {
            self.calls.set(self.calls.get() + 1);
            self.outcome.clone()
        }

        async fn trigger_ingest(&self) -> Result<()> {
            Ok(())
        }
    }

    #[derive(Default)]
    struct FakeStorage {
        data: RefCell<HashMap<String, String>>,
        broken: bool,
    }

    #[async_trait(?Send)]
    impl StoragePort for FakeStorage {
        async fn get(&self, key: &str) -> Result<Option<String>> {
            if self.broken {
                return Err(GatewayError::Storage("denied".to_string()));
            }
            Ok(self.data.borrow().get(key).cloned())
        }

        async fn set(&self, key: &str, value: &str) -> Result<()> {
            if self.broken {
                return Err(GatewayError::Storage("denied".to_string()));
            }
            self.data
                .borrow_mut()
                .insert(key.to_string(), value.to_string());
            Ok(())
        }

        async fn delete(&self, key: &str) -> Result<()> {
            self.data.borrow_mut().remove(key);
            Ok(())
        }

        fn backend_name(&self) -> &str {
            "fake"
        }
    }

    fn controller() -> ChatController {
        let state = ConversationState::new(GREETING, EventBus::new());
        ChatController::new("sess_test".to_string(), state)
    }

    fn texts(ctl: &ChatController) -> Vec<String> {
        ctl.state()
            .borrow()
            .messages()
            .iter()
            .map(|m| m.text.clone())
            .collect()
    }

    fn collect(bus: &EventBus) -> Vec<ConversationEvent> {
        let mut events = Vec::new();
        bus.drain_into(|event| events.push(event));
        events
    }

    // ─── EventBus Tests ──────────────────────────────────────

    #[test]
    fn test_event_bus_emit_and_drain_into() {
        let bus = EventBus::new();
        bus.emit(ConversationEvent::Cleared);
        bus.emit(ConversationEvent::PendingChanged { pending: true });

        let mut seen = Vec::new();
        let count = bus.drain_into(|event| seen.push(event));
        assert_eq!(count, 2);
        assert_eq!(seen.len(), 2);

        // Buffer is empty after a drain
        assert_eq!(bus.drain_into(|_| {}), 0);
    }

    #[test]
    fn test_event_bus_clones_share_buffer() {
        let bus = EventBus::new();
        let other = bus.clone();
        bus.emit(ConversationEvent::Cleared);
        assert_eq!(other.drain_into(|_| {}), 1);
    }

    // ─── ConversationState Tests ─────────────────────────────

    #[test]
    fn test_state_starts_with_greeting() {
        let state = ConversationState::new(GREETING, EventBus::new());
        assert_eq!(state.messages().len(), 1);
        assert_eq!(state.messages()[0].origin, Origin::Bot);
        assert_eq!(state.messages()[0].text, GREETING);
        assert!(!state.pending());
    }

    #[test]
    fn test_state_append_preserves_order() {
        let mut state = ConversationState::new(GREETING, EventBus::new());
        state.append(Message::user("first"));
        state.append(Message::bot("second"));

        let texts: Vec<&str> = state.messages().iter().map(|m| m.text.as_str()).collect();
        assert_eq!(texts, vec![GREETING, "first", "second"]);
    }

    #[test]
    fn test_state_reset_leaves_single_fresh_greeting() {
        let mut state = ConversationState::new(GREETING, EventBus::new());
        let original_greeting_id = state.messages()[0].id.clone();

        state.append(Message::user("question"));
        state.append(Message::bot("answer"));
        state.reset();

        assert_eq!(state.messages().len(), 1);
        assert_eq!(state.messages()[0].origin, Origin::Bot);
        assert_eq!(state.messages()[0].text, GREETING);
        assert_ne!(state.messages()[0].id, original_greeting_id);
    }

    #[test]
    fn test_state_reset_keeps_pending() {
        let mut state = ConversationState::new(GREETING, EventBus::new());
        state.set_pending(true);
        state.reset();
        assert!(state.pending());
    }

    #[test]
    fn test_state_emits_events_on_mutation() {
        let bus = EventBus::new();
        let mut state = ConversationState::new(GREETING, bus.clone());
        bus.drain_into(|_| {}); // discard the construction-time greeting event

        state.append(Message::user("hi"));
        state.set_pending(true);
        state.set_pending(true); // no change, no event
        state.reset();

        let events = collect(&bus);
        assert_eq!(events.len(), 4);
        assert!(matches!(
            events[0],
            ConversationEvent::MessageAppended { .. }
        ));
        assert!(matches!(
            events[1],
            ConversationEvent::PendingChanged { pending: true }
        ));
        assert!(matches!(events[2], ConversationEvent::Cleared));
        assert!(matches!(
            events[3],
            ConversationEvent::MessageAppended { .. }
        ));
    }

    // ─── Controller Tests ────────────────────────────────────

    #[test]
    fn test_submit_appends_user_then_bot() {
        let ctl = controller();
        let gw = FakeGateway::replying("The Companies Act says...");

        block_on(ctl.submit("What does the Companies Act say?", &gw));

        let state = ctl.state().borrow();
        let msgs = state.messages();
        assert_eq!(msgs.len(), 3); // greeting + user + bot
        assert_eq!(msgs[1].origin, Origin::User);
        assert_eq!(msgs[1].text, "What does the Companies Act say?");
        assert_eq!(msgs[2].origin, Origin::Bot);
        assert_eq!(msgs[2].text, "The Companies Act says...");
        assert!(!msgs[2].failed);
        assert!(!state.pending());
    }

    #[test]
    fn test_submit_preserves_raw_text() {
        // Whitespace is only the blank guard; the logged entry is verbatim
        let ctl = controller();
        let gw = FakeGateway::replying("ok");
        block_on(ctl.submit("  hello  ", &gw));
        assert_eq!(texts(&ctl)[1], "  hello  ");
    }

    #[test]
    fn test_submit_blank_is_noop() {
        let ctl = controller();
        let gw = FakeGateway::replying("ok");

        block_on(ctl.submit("", &gw));
        block_on(ctl.submit("   \t\n", &gw));

        let state = ctl.state().borrow();
        assert_eq!(state.messages().len(), 1);
        assert!(!state.pending());
        assert_eq!(gw.calls.get(), 0);
    }

    #[test]
    fn test_submit_while_pending_is_noop() {
        let ctl = controller();
        let gw = FakeGateway::replying("ok");

        // Simulate an outstanding request
        ctl.state().borrow_mut().set_pending(true);
        block_on(ctl.submit("second question", &gw));

        assert_eq!(ctl.state().borrow().messages().len(), 1);
        assert_eq!(gw.calls.get(), 0);

        // Once the flag drops, submission works again
        ctl.state().borrow_mut().set_pending(false);
        block_on(ctl.submit("second question", &gw));
        assert_eq!(ctl.state().borrow().messages().len(), 3);
        assert_eq!(gw.calls.get(), 1);
    }

    #[test]
    fn test_submit_failure_appends_apology() {
        let ctl = controller();
        let gw = FakeGateway::failing(GatewayError::Status {
            code: 500,
            body: "internal server error".to_string(),
        });

        block_on(ctl.submit("hello", &gw));

        let state = ctl.state().borrow();
        let msgs = state.messages();
        assert_eq!(msgs.len(), 3);
        assert_eq!(msgs[2].origin, Origin::Bot);
        assert!(msgs[2].failed);
        assert!(msgs[2].text.starts_with("Sorry"));
        // Raw status/body never reaches the log
        assert!(!msgs[2].text.contains("500"));
        assert!(!state.pending());
    }

    #[test]
    fn test_submit_transport_failure_appends_apology() {
        let ctl = controller();
        let gw = FakeGateway::failing(GatewayError::Transport("connection refused".to_string()));

        block_on(ctl.submit("hello", &gw));

        assert!(ctl.state().borrow().messages()[2].failed);
        assert!(!ctl.state().borrow().pending());
    }

    #[test]
    fn test_clear_resets_to_greeting() {
        let ctl = controller();
        let gw = FakeGateway::replying("answer");
        block_on(ctl.submit("question", &gw));

        ctl.clear();

        let state = ctl.state().borrow();
        assert_eq!(state.messages().len(), 1);
        assert_eq!(state.messages()[0].origin, Origin::Bot);
        assert_eq!(state.messages()[0].text, GREETING);
    }

    #[test]
    fn test_clear_while_pending_keeps_flag() {
        let ctl = controller();
        ctl.state().borrow_mut().set_pending(true);

        ctl.clear();

        let state = ctl.state().borrow();
        assert_eq!(state.messages().len(), 1);
        assert!(state.pending());
    }

    #[test]
    fn test_late_reply_lands_after_fresh_greeting() {
        // clear() does not cancel in-flight work; a reply arriving
        // afterwards is simply appended behind the new greeting.
        let ctl = controller();
        ctl.clear();
        ctl.state().borrow_mut().append(Message::bot("late reply"));

        assert_eq!(texts(&ctl), vec![GREETING.to_string(), "late reply".to_string()]);
    }

    // ─── Session Identity Tests ──────────────────────────────

    #[test]
    fn test_session_id_created_and_persisted() {
        let storage = FakeStorage::default();
        let first = block_on(get_or_create_session_id(&storage));
        let second = block_on(get_or_create_session_id(&storage));

        assert!(first.starts_with("sess_"));
        assert_eq!(first, second);
    }

    #[test]
    fn test_session_id_reuses_existing_value() {
        let storage = FakeStorage::default();
        block_on(storage.set("lexchat:session_id", "sess_preexisting")).unwrap();

        let id = block_on(get_or_create_session_id(&storage));
        assert_eq!(id, "sess_preexisting");
    }

    #[test]
    fn test_session_id_falls_back_when_storage_broken() {
        let storage = FakeStorage {
            broken: true,
            ..FakeStorage::default()
        };
        let id = block_on(get_or_create_session_id(&storage));
        assert!(id.starts_with("sess_"));
    }

    #[test]
    fn test_session_ids_are_distinct_across_profiles() {
        let a = block_on(get_or_create_session_id(&FakeStorage::default()));
        let b = block_on(get_or_create_session_id(&FakeStorage::default()));
        assert_ne!(a, b);
    }
}
