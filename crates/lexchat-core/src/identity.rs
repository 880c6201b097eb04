//! Session identity — one durable, opaque id per browser profile so the
//! backend can associate turns with a conversation. This is a correlation
//! key, not a security token: storage failures silently degrade to a
//! transient id for the current page load.

use uuid::Uuid;
use crate::ports::StoragePort;

const SESSION_ID_KEY: &str = "lexchat:session_id";

/// Read the persisted session id, or create and persist a new one.
/// Repeated calls against the same storage return the same value.
pub async fn get_or_create_session_id(storage: &dyn StoragePort) -> String {
    match storage.get(SESSION_ID_KEY).await {
        Ok(Some(id)) if !id.is_empty() => id,
        Ok(_) => {
            let id = fresh_session_id();
            if let Err(e) = storage.set(SESSION_ID_KEY, &id).await {
                log::warn!("session id not persisted ({}), using transient id", e);
            }
            id
        }
        Err(e) => {
            log::warn!("storage unavailable ({}), using transient id", e);
            fresh_session_id()
        }
    }
}

fn fresh_session_id() -> String {
    // `sess_` prefix is part of the wire convention the backend expects
    format!("sess_{}", Uuid::new_v4().simple())
}
