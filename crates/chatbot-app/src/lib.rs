//! Chatbot App: WASM entry point.
//!
//! Composition root: restores the saved configuration, assembles the
//! browser adapters around a `ConversationController` and hands it to egui.

mod app;

use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use chatbot_core::controller::ConversationController;
use chatbot_core::event_bus::EventBus;
use chatbot_platform::http::FetchHttp;
use chatbot_platform::storage::auto_detect_store;
use chatbot_types::config::ChatbotConfig;

const CANVAS_ID: &str = "chatbot_canvas";

/// WASM entry point, called from the host page
#[wasm_bindgen(start)]
pub async fn main() -> Result<(), JsValue> {
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("Chatbot WASM starting...");

    let canvas = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(CANVAS_ID))
        .ok_or_else(|| JsValue::from_str(&format!("No canvas element with id '{}'", CANVAS_ID)))?
        .dyn_into::<web_sys::HtmlCanvasElement>()
        .map_err(|_| JsValue::from_str("Element is not a canvas"))?;

    let controller = ConversationController::load(
        ChatbotConfig::default(),
        auto_detect_store(),
        Rc::new(FetchHttp::new()),
        EventBus::new(),
    )
    .await;
    let controller = Rc::new(controller);

    wasm_bindgen_futures::spawn_local(async move {
        let result = eframe::WebRunner::new()
            .start(
                canvas,
                eframe::WebOptions::default(),
                Box::new(move |_cc| Ok(Box::new(app::ChatbotApp::new(controller)))),
            )
            .await;
        if let Err(e) = result {
            log::error!("Failed to start eframe: {:?}", e);
        }
    });

    Ok(())
}
