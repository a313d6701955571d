//! Port traits: the hexagonal architecture boundary.
//!
//! These traits are defined here in `chatbot-core` (pure Rust).
//! Browser implementations live in `chatbot-platform`.
//! The core never imports platform code; it only depends on these traits.

use async_trait::async_trait;
use serde_json::Value;
use chatbot_types::{Result, message::Message};

// ─── Provider Port ───────────────────────────────────────────

/// Everything a provider may need to answer one user message
#[derive(Debug, Clone)]
pub struct ChatRequest {
    pub system_prompt: String,
    /// Trailing window of history, oldest first, ending with `latest`
    pub context: Vec<Message>,
    /// The user text being answered
    pub latest: String,
    /// Full retained history, for providers that take it untrimmed
    pub history: Vec<Message>,
    pub model: String,
    pub max_tokens: u32,
    pub temperature: f32,
}

impl ChatRequest {
    /// System prompt followed by the context window
    pub fn messages(&self) -> Vec<Message> {
        let mut messages = Vec::with_capacity(self.context.len() + 1);
        messages.push(Message::system(&self.system_prompt));
        messages.extend(self.context.iter().cloned());
        messages
    }
}

/// One chat backend. Fails with `ChatError::Adapter` carrying a readable message.
#[async_trait(?Send)]
pub trait ChatProvider {
    async fn send(&self, req: &ChatRequest) -> Result<String>;

    /// Name of this provider (for logging/debug)
    fn name(&self) -> &str;
}

// ─── HTTP Port ───────────────────────────────────────────────

/// A JSON POST with bearer authorization
#[derive(Debug, Clone, PartialEq)]
pub struct HttpRequest {
    pub url: String,
    pub bearer: String,
    pub body: Value,
}

impl HttpRequest {
    pub fn new(url: impl Into<String>, bearer: impl Into<String>, body: Value) -> Self {
        Self {
            url: url.into(),
            bearer: bearer.into(),
            body,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub status_text: String,
    pub body: String,
}

impl HttpResponse {
    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[async_trait(?Send)]
pub trait HttpPort {
    /// Send the request. Transport failures map to `ChatError::Adapter`;
    /// non-success statuses are returned as responses, not errors.
    async fn post_json(&self, req: HttpRequest) -> Result<HttpResponse>;
}

// ─── Storage Port ────────────────────────────────────────────

/// Durable string key-value store
#[async_trait(?Send)]
pub trait KeyValueStore {
    /// Get a value by key
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Set a value
    async fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Name of this backend (for logging/debug)
    fn backend_name(&self) -> &str;
}
