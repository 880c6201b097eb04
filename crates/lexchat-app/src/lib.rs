//! LexChat App — WASM entry point.
//!
//! This crate is the composition root (DI wiring layer).
//! It resolves the session identity, assembles the platform adapters,
//! and hands everything to the egui UI.

mod app;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use lexchat_core::identity::get_or_create_session_id;
use lexchat_platform::storage::auto_detect_storage;
use lexchat_types::config::AppConfig;

/// WASM entry point — called from index.html
#[wasm_bindgen(start)]
pub async fn main() {
    // Initialize logging
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("LexChat WASM starting...");

    let config = AppConfig::default();

    // Resolve the durable per-browser session id before the UI starts
    let storage = auto_detect_storage();
    let session_id = get_or_create_session_id(storage.as_ref()).await;
    log::info!("Session id: {}", session_id);

    // Launch the egui application
    let web_options = eframe::WebOptions::default();

    // Get the canvas element by ID
    let document = web_sys::window()
        .expect("No window")
        .document()
        .expect("No document");
    let canvas = document
        .get_element_by_id("lexchat_canvas")
        .expect("No canvas element with id 'lexchat_canvas'")
        .dyn_into::<web_sys::HtmlCanvasElement>()
        .expect("Element is not a canvas");

    wasm_bindgen_futures::spawn_local(async move {
        eframe::WebRunner::new()
            .start(
                canvas,
                web_options,
                Box::new(move |cc| Ok(Box::new(app::LexChatApp::new(cc, config, session_id)))),
            )
            .await
            .expect("Failed to start eframe");
    });
}
