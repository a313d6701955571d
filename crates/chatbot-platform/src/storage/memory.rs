//! In-memory key-value store.
//! Not persistent across page reloads; used when localStorage is unavailable.

use std::cell::RefCell;
use std::collections::HashMap;
use async_trait::async_trait;
use chatbot_core::ports::KeyValueStore;
use chatbot_types::Result;

#[derive(Default)]
pub struct MemoryStore {
    data: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait(?Send)]
impl KeyValueStore for MemoryStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.data.borrow().get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        self.data
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn backend_name(&self) -> &str {
        "memory"
    }
}
