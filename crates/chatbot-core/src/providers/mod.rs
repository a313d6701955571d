//! Provider adapters.
//!
//! All three speak JSON over `HttpPort` and differ only in URL, payload
//! shape and where the reply (or the error) lives in the response.

mod openai;
mod huggingface;
mod custom;

pub use openai::OpenAiProvider;
pub use huggingface::HuggingFaceProvider;
pub use custom::CustomProvider;

use std::rc::Rc;
use serde::Deserialize;
use chatbot_types::config::{ChatbotConfig, Provider};
use crate::ports::{ChatProvider, HttpPort};

/// Build the adapter selected by `config.provider`.
pub fn provider_for(config: &ChatbotConfig, http: Rc<dyn HttpPort>) -> Box<dyn ChatProvider> {
    match config.provider {
        Provider::OpenAi => Box::new(OpenAiProvider::new(http, config.api_key.clone())),
        Provider::HuggingFace => Box::new(HuggingFaceProvider::new(http, config.api_key.clone())),
        Provider::Custom => Box::new(CustomProvider::new(
            http,
            config.api_key.clone(),
            config.endpoint.clone().unwrap_or_default(),
        )),
    }
}

// ─── Chat-completions response shape (OpenAI and HuggingFace) ─

#[derive(Deserialize)]
struct CompletionResponse {
    choices: Vec<CompletionChoice>,
}

#[derive(Deserialize)]
struct CompletionChoice {
    message: CompletionMessage,
}

#[derive(Deserialize)]
struct CompletionMessage {
    content: Option<String>,
}

/// `choices[0].message.content`, or None when the body has another shape.
fn completion_content(body: &str) -> Option<String> {
    let data: CompletionResponse = serde_json::from_str(body).ok()?;
    data.choices.into_iter().next()?.message.content
}
