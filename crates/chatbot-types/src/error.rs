use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChatError {
    /// Missing credential or endpoint; carries a setup instruction for the user
    #[error("{0}")]
    Configuration(String),

    /// Transport failure, non-success status or unreadable provider reply
    #[error("{0}")]
    Adapter(String),

    /// Rejected `configure` input
    #[error("{0}")]
    Validation(String),

    #[error("A message is already being sent")]
    Busy,

    #[error("Storage error: {0}")]
    Storage(String),
}

impl ChatError {
    /// Short kind name, used for logging
    pub fn kind(&self) -> &'static str {
        match self {
            ChatError::Configuration(_) => "configuration",
            ChatError::Adapter(_) => "adapter",
            ChatError::Validation(_) => "validation",
            ChatError::Busy => "busy",
            ChatError::Storage(_) => "storage",
        }
    }
}
