//! Pick the best available store.
//!
//! Priority: localStorage → Memory (fallback)

use std::rc::Rc;
use chatbot_core::ports::KeyValueStore;
use super::{LocalStorageStore, MemoryStore};

/// Returns a trait object so callers are backend-agnostic.
pub fn auto_detect_store() -> Rc<dyn KeyValueStore> {
    match LocalStorageStore::open() {
        Ok(store) => {
            log::info!("Settings store: localStorage");
            Rc::new(store)
        }
        Err(e) => {
            log::warn!("localStorage unavailable ({}), settings will not persist", e);
            Rc::new(MemoryStore::new())
        }
    }
}
