//! HuggingFace inference adapter, pinned to one hosted instruct model.

use std::rc::Rc;
use async_trait::async_trait;
use serde_json::{json, Value};

use chatbot_types::{ChatError, Result, config::HUGGINGFACE_CHAT_URL};
use crate::ports::{ChatProvider, ChatRequest, HttpPort, HttpRequest};
use super::completion_content;

const GENERIC_ERROR: &str = "Hugging Face API error";

pub struct HuggingFaceProvider {
    http: Rc<dyn HttpPort>,
    api_key: String,
}

impl HuggingFaceProvider {
    pub fn new(http: Rc<dyn HttpPort>, api_key: String) -> Self {
        Self { http, api_key }
    }

    /// The model is part of the URL, so the body carries none.
    pub fn build_request_body(req: &ChatRequest) -> Value {
        json!({
            "messages": req.messages(),
            "temperature": req.temperature,
            "max_tokens": req.max_tokens,
        })
    }
}

#[async_trait(?Send)]
impl ChatProvider for HuggingFaceProvider {
    async fn send(&self, req: &ChatRequest) -> Result<String> {
        let body = Self::build_request_body(req);
        log::debug!("POST {} ({} context messages)", HUGGINGFACE_CHAT_URL, req.context.len());

        let response = self
            .http
            .post_json(HttpRequest::new(HUGGINGFACE_CHAT_URL, &self.api_key, body))
            .await?;

        if !response.ok() {
            let message = error_message(&response.body)
                .unwrap_or_else(|| GENERIC_ERROR.to_string());
            return Err(ChatError::Adapter(message));
        }

        completion_content(&response.body)
            .ok_or_else(|| ChatError::Adapter(GENERIC_ERROR.to_string()))
    }

    fn name(&self) -> &str {
        "huggingface"
    }
}

/// First element of the `error` array; the inference API also sends a bare string.
fn error_message(body: &str) -> Option<String> {
    let data: Value = serde_json::from_str(body).ok()?;
    let text = match &data["error"] {
        Value::Array(items) => items.first()?.as_str()?,
        Value::String(s) => s.as_str(),
        _ => return None,
    };
    (!text.is_empty()).then(|| text.to_string())
}
