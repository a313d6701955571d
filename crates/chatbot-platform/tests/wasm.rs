//! WASM-target tests for chatbot-platform (Node.js runtime).
//!
//! Tests MemoryStore under wasm32-unknown-unknown via `wasm-pack test --node`.
//! localStorage needs a browser and is exercised through the app.

use wasm_bindgen_test::*;

use std::rc::Rc;
use chatbot_core::controller::ConversationController;
use chatbot_core::event_bus::EventBus;
use chatbot_core::ports::KeyValueStore;
use chatbot_platform::http::FetchHttp;
use chatbot_platform::storage::MemoryStore;
use chatbot_types::config::*;

// ─── MemoryStore Tests ───────────────────────────────────

#[wasm_bindgen_test]
async fn memory_store_get_missing() {
    let store = MemoryStore::new();
    assert!(store.get("nonexistent").await.unwrap().is_none());
}

#[wasm_bindgen_test]
async fn memory_store_set_and_get() {
    let store = MemoryStore::new();
    store.set(KEY_PROVIDER, "huggingface").await.unwrap();
    assert_eq!(store.get(KEY_PROVIDER).await.unwrap().as_deref(), Some("huggingface"));
}

// ─── Controller wiring ───────────────────────────────────

#[wasm_bindgen_test]
async fn controller_persists_into_memory_store() {
    let store = Rc::new(MemoryStore::new());
    let controller = ConversationController::new(
        ChatbotConfig::default(),
        store.clone(),
        Rc::new(FetchHttp::new()),
        EventBus::new(),
    );

    controller
        .configure(Settings::new(Provider::OpenAi, "sk-wasm", None))
        .await
        .unwrap();

    assert_eq!(store.get(KEY_API_KEY).await.unwrap().as_deref(), Some("sk-wasm"));
    assert_eq!(store.get(KEY_PROVIDER).await.unwrap().as_deref(), Some("openai"));
    assert_eq!(store.get(KEY_ENDPOINT).await.unwrap().as_deref(), Some(""));
}
