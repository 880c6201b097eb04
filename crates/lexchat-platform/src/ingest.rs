//! One-time corpus ingest trigger.
//!
//! The backend indexes its corpus on `POST /ingest`. The frontend may kick
//! this off once per tab session; the guard flag lives in sessionStorage so
//! a reload within the same tab does not re-trigger a completed ingest.
//! Failures are logged only — chat still works if the index already exists.

use std::rc::Rc;

use lexchat_core::ports::ChatGateway;

const INGESTED_FLAG_KEY: &str = "lexchat:ingested_once";

/// Fire the ingest trigger unless it already succeeded in this tab session.
/// Fire-and-forget: returns immediately, never retries.
pub fn trigger_ingest_once(gateway: Rc<dyn ChatGateway>) {
    if already_ingested() {
        log::debug!("ingest already triggered this tab session, skipping");
        return;
    }

    wasm_bindgen_futures::spawn_local(async move {
        match gateway.trigger_ingest().await {
            Ok(()) => {
                mark_ingested();
                log::info!("ingest triggered");
            }
            Err(e) => {
                log::warn!("ingest failed (chat still works if index exists): {}", e);
            }
        }
    });
}

fn session_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.session_storage().ok().flatten()
}

fn already_ingested() -> bool {
    session_storage()
        .and_then(|s| s.get_item(INGESTED_FLAG_KEY).ok().flatten())
        .is_some()
}

fn mark_ingested() {
    if let Some(storage) = session_storage() {
        let _ = storage.set_item(INGESTED_FLAG_KEY, "true");
    }
}
