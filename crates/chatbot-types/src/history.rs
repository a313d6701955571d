//! Bounded conversation history.
//!
//! Append-only, oldest entries evicted first once the bound is exceeded.
//! The context window handed to providers is a read-only view over the tail.

use std::collections::VecDeque;
use serde::{Deserialize, Serialize};
use crate::message::Message;

/// Maximum number of retained messages
pub const MAX_HISTORY: usize = 50;

/// Number of trailing messages sent as provider context
pub const CONTEXT_WINDOW: usize = 10;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversationHistory {
    messages: VecDeque<Message>,
    limit: usize,
}

impl ConversationHistory {
    pub fn new() -> Self {
        Self::with_limit(MAX_HISTORY)
    }

    /// A limit of zero is bumped to one so the latest message is always kept.
    pub fn with_limit(limit: usize) -> Self {
        Self {
            messages: VecDeque::new(),
            limit: limit.max(1),
        }
    }

    /// Append a message, then evict from the front down to the limit.
    pub fn push(&mut self, message: Message) {
        self.messages.push_back(message);
        while self.messages.len() > self.limit {
            self.messages.pop_front();
        }
    }

    /// The trailing `n` messages, oldest first.
    pub fn window(&self, n: usize) -> Vec<Message> {
        let skip = self.messages.len().saturating_sub(n);
        self.messages.iter().skip(skip).cloned().collect()
    }

    /// The default provider context window.
    pub fn context(&self) -> Vec<Message> {
        self.window(CONTEXT_WINDOW)
    }

    pub fn to_vec(&self) -> Vec<Message> {
        self.messages.iter().cloned().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Message> {
        self.messages.iter()
    }

    pub fn last(&self) -> Option<&Message> {
        self.messages.back()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    pub fn clear(&mut self) {
        self.messages.clear();
    }
}

impl Default for ConversationHistory {
    fn default() -> Self {
        Self::new()
    }
}
