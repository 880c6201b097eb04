//! localStorage backend.
//! Durable across page reloads within the same browser profile, which is
//! exactly the lifetime the session id needs.

use async_trait::async_trait;
use lexchat_core::ports::StoragePort;
use lexchat_types::{GatewayError, Result};

pub struct LocalStorage {
    storage: web_sys::Storage,
}

impl LocalStorage {
    /// Open window.localStorage. Fails when there is no window (worker
    /// context) or when the browser denies storage access.
    pub fn open() -> Result<Self> {
        let window = web_sys::window()
            .ok_or_else(|| GatewayError::Storage("No window object".to_string()))?;

        let storage = window
            .local_storage()
            .map_err(|e| GatewayError::Storage(format!("{:?}", e)))?
            .ok_or_else(|| GatewayError::Storage("localStorage not available".to_string()))?;

        Ok(Self { storage })
    }
}

#[async_trait(?Send)]
impl StoragePort for LocalStorage {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        self.storage
            .get_item(key)
            .map_err(|e| GatewayError::Storage(format!("{:?}", e)))
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        self.storage
            .set_item(key, value)
            .map_err(|e| GatewayError::Storage(format!("{:?}", e)))
    }

    async fn delete(&self, key: &str) -> Result<()> {
        self.storage
            .remove_item(key)
            .map_err(|e| GatewayError::Storage(format!("{:?}", e)))
    }

    fn backend_name(&self) -> &str {
        "localStorage"
    }
}
