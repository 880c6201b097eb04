//! Chat panel — conversation thread, typing indicator, and input field.

use egui::{self, Align, Layout, RichText, ScrollArea, Vec2};
use lexchat_types::message::Origin;
use crate::state::{ChatEntry, UiState};
use crate::theme::*;

/// Something the user asked for that the app layer must act on.
pub enum ChatAction {
    /// Send this message to the backend
    Submit(String),
    /// Reset the conversation to the greeting
    Clear,
}

/// Render the chat panel. Returns Some(action) when the user submits
/// input or clears the conversation.
pub fn chat_panel(ui: &mut egui::Ui, state: &mut UiState) -> Option<ChatAction> {
    let mut action = None;

    egui::Frame::default()
        .fill(BG_PRIMARY)
        .inner_margin(PANEL_PADDING)
        .show(ui, |ui| {
            ui.vertical(|ui| {
                // Header
                ui.horizontal(|ui| {
                    ui.heading(
                        RichText::new("Legal Assistant")
                            .color(TEXT_PRIMARY)
                            .strong(),
                    );
                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        if ui
                            .button(RichText::new("Clear chat").color(TEXT_SECONDARY))
                            .clicked()
                        {
                            action = Some(ChatAction::Clear);
                        }
                        let (status, color) = if state.pending {
                            ("Waiting for reply...", WARNING)
                        } else {
                            ("Ready", SUCCESS)
                        };
                        ui.label(RichText::new(status).color(color).small());
                    });
                });

                ui.separator();

                // Messages area — stick_to_bottom keeps the newest entry
                // in view on every append
                let available_height = (ui.available_height() - 60.0).max(0.0);
                ScrollArea::vertical()
                    .max_height(available_height)
                    .auto_shrink([false, false])
                    .stick_to_bottom(true)
                    .show(ui, |ui| {
                        for entry in &state.entries {
                            render_message(ui, entry);
                            ui.add_space(4.0);
                        }

                        if state.pending {
                            egui::Frame::default()
                                .fill(BG_SECONDARY)
                                .corner_radius(PANEL_ROUNDING)
                                .inner_margin(8.0)
                                .show(ui, |ui| {
                                    ui.horizontal(|ui| {
                                        ui.add(egui::Spinner::new().color(ACCENT));
                                        ui.label(
                                            RichText::new("Thinking...")
                                                .color(TEXT_SECONDARY)
                                                .small(),
                                        );
                                    });
                                });
                        }
                    });

                ui.add_space(8.0);

                // Input area — disabled while a request is outstanding
                ui.horizontal(|ui| {
                    let input = egui::TextEdit::singleline(&mut state.input_text)
                        .hint_text("Ask a legal question...")
                        .desired_width(ui.available_width() - 70.0)
                        .font(egui::FontId::proportional(14.0));

                    let response = ui.add_enabled(!state.pending, input);

                    let send_enabled = !state.input_text.trim().is_empty() && !state.pending;
                    let send_btn = ui.add_enabled(
                        send_enabled,
                        egui::Button::new(RichText::new("Send").color(TEXT_PRIMARY))
                            .fill(if send_enabled { ACCENT } else { BG_SURFACE })
                            .corner_radius(PANEL_ROUNDING)
                            .min_size(Vec2::new(60.0, 0.0)),
                    );

                    // Submit on Enter or button click
                    if (response.lost_focus()
                        && ui.input(|i| i.key_pressed(egui::Key::Enter))
                        && send_enabled)
                        || send_btn.clicked()
                    {
                        let text = state.input_text.clone();
                        action = Some(ChatAction::Submit(text));
                        state.input_text.clear();
                        response.request_focus();
                    }
                });
            });
        });

    action
}

fn render_message(ui: &mut egui::Ui, entry: &ChatEntry) {
    let (label, label_color, bg) = match (entry.origin, entry.failed) {
        (Origin::User, _) => ("You", ACCENT, BG_USER),
        (Origin::Bot, false) => ("Assistant", SUCCESS, BG_SECONDARY),
        (Origin::Bot, true) => ("Assistant", ERROR, BG_ERROR),
    };

    egui::Frame::default()
        .fill(bg)
        .corner_radius(PANEL_ROUNDING)
        .inner_margin(8.0)
        .show(ui, |ui| {
            ui.label(RichText::new(label).color(label_color).strong().small());
            ui.label(RichText::new(&entry.text).color(TEXT_PRIMARY));
        });
}
