use serde::{Deserialize, Serialize};
use crate::config::Provider;

/// Events emitted by the conversation controller.
/// UI subscribes to these for reactive updates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ChatEvent {
    /// A user message was accepted and is being sent
    TurnStart { turn_id: u64, text: String },

    /// The provider answered
    Reply { turn_id: u64, text: String },

    /// A submit failed; the message is meant for display
    Error { message: String },

    /// The controller is idle again
    TurnEnd { turn_id: u64 },

    /// The conversation was cleared; only the greeting remains on screen
    Cleared,

    /// Settings were validated, persisted and applied
    ConfigUpdated { provider: Provider },

    /// Settings were rejected or could not be persisted
    ConfigRejected { message: String },
}
