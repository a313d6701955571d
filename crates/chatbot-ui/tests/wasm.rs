//! WASM-target tests for chatbot-ui.
//!
//! Drives `UiState` from a real controller and event bus under
//! wasm32-unknown-unknown via `wasm-pack test --node`.

use wasm_bindgen_test::*;

use std::rc::Rc;
use chatbot_core::controller::ConversationController;
use chatbot_core::event_bus::EventBus;
use chatbot_platform::http::FetchHttp;
use chatbot_platform::storage::MemoryStore;
use chatbot_types::config::*;
use chatbot_ui::state::{UiState, GREETING};

fn controller() -> ConversationController {
    ConversationController::new(
        ChatbotConfig::default(),
        Rc::new(MemoryStore::new()),
        Rc::new(FetchHttp::new()),
        EventBus::new(),
    )
}

#[wasm_bindgen_test]
async fn unconfigured_submit_shows_error_bubble() {
    let controller = controller();
    let mut state = UiState::new(&controller.config().settings());

    assert!(controller.submit("Hello").await.is_err());
    state.process_events(controller.event_bus().drain());

    assert_eq!(state.entries.len(), 2);
    assert!(state.entries[1].message.is_error);
    assert_eq!(state.entries[1].message.content, SETUP_REQUIRED);
    assert!(!state.is_busy());
}

#[wasm_bindgen_test]
async fn saved_settings_close_panel() {
    let controller = controller();
    let mut state = UiState::new(&controller.config().settings());
    state.open_settings(&controller.config().settings());
    state.settings_draft.api_key = "sk-wasm".to_string();

    controller
        .configure(state.settings_draft.to_settings())
        .await
        .unwrap();
    state.process_events(controller.event_bus().drain());

    assert!(!state.show_settings);
    assert!(state.save_feedback.as_ref().is_some_and(|fb| fb.success));
}

#[wasm_bindgen_test]
fn reset_leaves_only_greeting() {
    let controller = controller();
    let mut state = UiState::new(&controller.config().settings());

    controller.reset().unwrap();
    state.process_events(controller.event_bus().drain());

    assert_eq!(state.entries.len(), 1);
    assert_eq!(state.entries[0].message.content, GREETING);
}
