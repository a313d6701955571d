//! OpenAI chat-completions adapter.

use std::rc::Rc;
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{json, Value};

use chatbot_types::{ChatError, Result, config::OPENAI_CHAT_URL};
use crate::ports::{ChatProvider, ChatRequest, HttpPort, HttpRequest};
use super::completion_content;

const GENERIC_ERROR: &str = "OpenAI API error";

pub struct OpenAiProvider {
    http: Rc<dyn HttpPort>,
    api_key: String,
}

impl OpenAiProvider {
    pub fn new(http: Rc<dyn HttpPort>, api_key: String) -> Self {
        Self { http, api_key }
    }

    pub fn build_request_body(req: &ChatRequest) -> Value {
        json!({
            "model": req.model,
            "messages": req.messages(),
            "temperature": req.temperature,
            "max_tokens": req.max_tokens,
        })
    }
}

#[async_trait(?Send)]
impl ChatProvider for OpenAiProvider {
    async fn send(&self, req: &ChatRequest) -> Result<String> {
        let body = Self::build_request_body(req);
        log::debug!("POST {} ({} context messages)", OPENAI_CHAT_URL, req.context.len());

        let response = self
            .http
            .post_json(HttpRequest::new(OPENAI_CHAT_URL, &self.api_key, body))
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
        "openai"
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    error: Option<ErrorDetail>,
}

#[derive(Deserialize)]
struct ErrorDetail {
    message: Option<String>,
}

/// `error.message` from an OpenAI error payload
fn error_message(body: &str) -> Option<String> {
    let data: ErrorBody = serde_json::from_str(body).ok()?;
    data.error?.message.filter(|m| !m.is_empty())
}
