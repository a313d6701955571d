//! `window.localStorage` backend.
//! Persistent across page reloads, scoped to the page origin.

use async_trait::async_trait;
use wasm_bindgen::JsValue;
use web_sys::Storage;

use chatbot_core::ports::KeyValueStore;
use chatbot_types::{ChatError, Result};

pub struct LocalStorageStore {
    storage: Storage,
}

impl LocalStorageStore {
    /// Fails outside a window context or when storage access is blocked.
    pub fn open() -> Result<Self> {
        let window = web_sys::window()
            .ok_or_else(|| ChatError::Storage("No window object".to_string()))?;

        let storage = window
            .local_storage()
            .map_err(js_error)?
            .ok_or_else(|| ChatError::Storage("localStorage not available".to_string()))?;

        Ok(Self { storage })
    }
}

#[async_trait(?Send)]
impl KeyValueStore for LocalStorageStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        self.storage.get_item(key).map_err(js_error)
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        self.storage.set_item(key, value).map_err(js_error)
    }

    fn backend_name(&self) -> &str {
        "localstorage"
    }
}

fn js_error(e: JsValue) -> ChatError {
    ChatError::Storage(format!("{:?}", e))
}
