//! Adapter for a user-supplied endpoint.
//!
//! Sends `{message, history}` and reads the first non-empty of `response`
//! and `message`, falling back to the raw payload.

use std::rc::Rc;
use async_trait::async_trait;
use serde_json::{json, Value};

use chatbot_types::{ChatError, Result};
use crate::ports::{ChatProvider, ChatRequest, HttpPort, HttpRequest};

const GENERIC_ERROR: &str = "Custom API error";

pub struct CustomProvider {
    http: Rc<dyn HttpPort>,
    api_key: String,
    endpoint: String,
}

impl CustomProvider {
    pub fn new(http: Rc<dyn HttpPort>, api_key: String, endpoint: String) -> Self {
        Self { http, api_key, endpoint }
    }

    pub fn build_request_body(req: &ChatRequest) -> Value {
        json!({
            "message": req.latest,
            "history": req.history,
        })
    }
}

#[async_trait(?Send)]
impl ChatProvider for CustomProvider {
    async fn send(&self, req: &ChatRequest) -> Result<String> {
        if self.endpoint.is_empty() {
            return Err(ChatError::Adapter(
                "Custom endpoint URL not configured".to_string(),
            ));
        }

        let body = Self::build_request_body(req);
        log::debug!("POST {} ({} history messages)", self.endpoint, req.history.len());

        let response = self
            .http
            .post_json(HttpRequest::new(&self.endpoint, &self.api_key, body))
            .await?;

        if !response.ok() {
            let status = if response.status_text.is_empty() {
                format!("HTTP {}", response.status)
            } else {
                response.status_text.clone()
            };
            return Err(ChatError::Adapter(format!("{}: {}", GENERIC_ERROR, status)));
        }

        let data: Value = serde_json::from_str(&response.body)
            .map_err(|_| ChatError::Adapter(GENERIC_ERROR.to_string()))?;

        Ok(reply_text(&data))
    }

    fn name(&self) -> &str {
        "custom"
    }
}

fn reply_text(data: &Value) -> String {
    ["response", "message"]
        .iter()
        .map(|field| &data[*field])
        .find(|value| is_truthy(value))
        .map(|value| match value {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        })
        .unwrap_or_else(|| data.to_string())
}

/// Null, false, zero and the empty string count as absent.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
