#[cfg(test)]
mod tests {
    use crate::storage::MemoryStore;
    use chatbot_core::ports::KeyValueStore;
    use futures::executor::block_on;

    // ─── MemoryStore Tests ───────────────────────────────────

    #[test]
    fn test_memory_store_backend_name() {
        assert_eq!(MemoryStore::new().backend_name(), "memory");
    }

    #[test]
    fn test_memory_store_set_get() {
        let store = MemoryStore::new();
        block_on(async {
            assert!(store.get("chatbot_api_key").await.unwrap().is_none());
            store.set("chatbot_api_key", "sk-1").await.unwrap();
            assert_eq!(store.get("chatbot_api_key").await.unwrap().as_deref(), Some("sk-1"));
        });
    }

    #[test]
    fn test_memory_store_overwrite() {
        let store = MemoryStore::new();
        block_on(async {
            store.set("k", "v1").await.unwrap();
            store.set("k", "v2").await.unwrap();
            assert_eq!(store.get("k").await.unwrap().as_deref(), Some("v2"));
        });
    }

    #[test]
    fn test_memory_store_empty_value_is_present() {
        let store = MemoryStore::new();
        block_on(async {
            store.set("chatbot_api_endpoint", "").await.unwrap();
            assert_eq!(store.get("chatbot_api_endpoint").await.unwrap().as_deref(), Some(""));
        });
    }
}
