//! Port traits — the hexagonal architecture boundary.
//!
//! These traits are defined here in `lexchat-core` (pure Rust).
//! Implementations live in `lexchat-platform` (browser adapters).
//! The core never imports platform code; it only depends on these traits.

use async_trait::async_trait;
use lexchat_types::{message::ChatReply, Result};

// ─── Chat Gateway Port ───────────────────────────────────────

#[async_trait(?Send)]
pub trait ChatGateway {
    /// Send one user message to the backend `/chat` endpoint and return
    /// the displayable reply. Non-2xx statuses and transport failures
    /// surface as `GatewayError`; malformed bodies do not (they degrade
    /// to a default reply inside the adapter).
    async fn send_message(&self, session_id: &str, message: &str) -> Result<ChatReply>;

    /// Fire the backend `/ingest` indexing trigger. Response body is
    /// ignored; only success/failure matters. Callers treat this as
    /// fire-and-forget and never retry.
    async fn trigger_ingest(&self) -> Result<()>;
}

// ─── Storage Port ────────────────────────────────────────────

/// String key-value storage. Backed by localStorage in the browser,
/// with an in-memory fallback when storage access is denied.
#[async_trait(?Send)]
pub trait StoragePort {
    /// Get a value by key
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Set a value
    async fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Delete a value
    async fn delete(&self, key: &str) -> Result<()>;

    /// Name of this backend (for logging/debug)
    fn backend_name(&self) -> &str;
}
