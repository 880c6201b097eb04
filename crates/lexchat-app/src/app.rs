//! Main egui application — owns the controller and drives the chat panel.

use std::rc::Rc;

use egui::{self, CentralPanel};

use lexchat_core::controller::ChatController;
use lexchat_core::event_bus::EventBus;
use lexchat_core::ports::ChatGateway;
use lexchat_core::state::ConversationState;
use lexchat_platform::gateway::LegalApiGateway;
use lexchat_platform::ingest;
use lexchat_types::config::AppConfig;
use lexchat_ui::panels::chat::{self, ChatAction};
use lexchat_ui::state::UiState;
use lexchat_ui::theme;

/// The main application state
pub struct LexChatApp {
    ui_state: UiState,
    event_bus: EventBus,
    controller: Rc<ChatController>,
    gateway: Rc<dyn ChatGateway>,
    first_frame: bool,
}

impl LexChatApp {
    pub fn new(
        _cc: &eframe::CreationContext<'_>,
        config: AppConfig,
        session_id: String,
    ) -> Self {
        let event_bus = EventBus::new();
        let state = ConversationState::new(config.greeting.clone(), event_bus.clone());
        let controller = Rc::new(ChatController::new(session_id, state));
        let gateway: Rc<dyn ChatGateway> = Rc::new(LegalApiGateway::new(&config.backend));

        if config.backend.auto_ingest {
            ingest::trigger_ingest_once(gateway.clone());
        }

        Self {
            ui_state: UiState::new(),
            event_bus,
            controller,
            gateway,
            first_frame: true,
        }
    }

    /// Dispatch a user message to the controller (async, single-flight)
    fn dispatch_message(&self, text: String, ctx: &egui::Context) {
        let controller = self.controller.clone();
        let gateway = self.gateway.clone();
        let ctx = ctx.clone();

        wasm_bindgen_futures::spawn_local(async move {
            controller.submit(&text, gateway.as_ref()).await;
            ctx.request_repaint();
        });
    }
}

impl eframe::App for LexChatApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.first_frame {
            theme::apply_theme(ctx);
            self.first_frame = false;
        }

        // Fold events from the conversation state into the display projection
        let ui_state = &mut self.ui_state;
        let applied = self.event_bus.drain_into(|event| ui_state.apply_event(event));
        if applied > 0 {
            ctx.request_repaint();
        }

        // Keep the spinner animating while a request is outstanding
        if self.ui_state.pending {
            ctx.request_repaint();
        }

        CentralPanel::default().show(ctx, |ui| {
            match chat::chat_panel(ui, &mut self.ui_state) {
                Some(ChatAction::Submit(text)) => self.dispatch_message(text, ctx),
                Some(ChatAction::Clear) => self.controller.clear(),
                None => {}
            }
        });
    }
}
