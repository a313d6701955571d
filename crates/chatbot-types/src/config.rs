use std::fmt;
use std::str::FromStr;
use serde::{Deserialize, Serialize};
use crate::{ChatError, Result};

/// Storage key for the provider credential
pub const KEY_API_KEY: &str = "chatbot_api_key";
/// Storage key for the selected provider
pub const KEY_PROVIDER: &str = "chatbot_api_provider";
/// Storage key for the custom endpoint override
pub const KEY_ENDPOINT: &str = "chatbot_api_endpoint";

pub const OPENAI_CHAT_URL: &str = "https://api.openai.com/v1/chat/completions";
pub const HUGGINGFACE_CHAT_URL: &str =
    "https://api-inference.huggingface.co/models/mistralai/Mistral-7B-Instruct-v0.1/v1/chat/completions";

pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";
pub const DEFAULT_TEMPERATURE: f32 = 0.7;
pub const DEFAULT_MAX_TOKENS: u32 = 500;

pub const SETUP_REQUIRED: &str =
    "Please configure your API key first. Open Setup API to get started.";
pub const ENDPOINT_REQUIRED: &str =
    "Custom endpoint URL not configured. Open Setup API to add one.";

/// Session configuration of the chatbot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatbotConfig {
    pub provider: Provider,
    pub api_key: String,
    /// Only consulted when provider == Custom
    pub endpoint: Option<String>,
    pub model: String,
    pub system_prompt: String,
    pub temperature: f32,
    pub max_tokens: u32,
}

impl Default for ChatbotConfig {
    fn default() -> Self {
        Self {
            provider: Provider::OpenAi,
            api_key: String::new(),
            endpoint: None,
            model: DEFAULT_MODEL.to_string(),
            system_prompt: DEFAULT_SYSTEM_PROMPT.to_string(),
            temperature: DEFAULT_TEMPERATURE,
            max_tokens: DEFAULT_MAX_TOKENS,
        }
    }
}

impl ChatbotConfig {
    /// Fails with a user-facing setup instruction when a dispatch
    /// could not possibly succeed.
    pub fn ensure_ready(&self) -> Result<()> {
        if self.api_key.is_empty() {
            return Err(ChatError::Configuration(SETUP_REQUIRED.to_string()));
        }
        if self.provider == Provider::Custom
            && self.endpoint.as_deref().map_or(true, str::is_empty)
        {
            return Err(ChatError::Configuration(ENDPOINT_REQUIRED.to_string()));
        }
        Ok(())
    }

    /// Overwrite the user-editable fields with already-validated settings.
    pub fn apply(&mut self, settings: Settings) {
        self.provider = settings.provider;
        self.api_key = settings.api_key;
        self.endpoint = settings.endpoint;
    }

    /// Snapshot of the user-editable fields, e.g. to seed a settings form.
    pub fn settings(&self) -> Settings {
        Settings {
            provider: self.provider,
            api_key: self.api_key.clone(),
            endpoint: self.endpoint.clone(),
        }
    }
}

/// User-editable part of the configuration, as submitted by a settings form
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Settings {
    pub provider: Provider,
    pub api_key: String,
    pub endpoint: Option<String>,
}

impl Settings {
    pub fn new(provider: Provider, api_key: impl Into<String>, endpoint: Option<String>) -> Self {
        Self {
            provider,
            api_key: api_key.into(),
            endpoint,
        }
    }

    /// Trim the fields and check the invariants; an empty endpoint becomes `None`.
    pub fn validate(self) -> Result<Settings> {
        let api_key = self.api_key.trim().to_string();
        let endpoint = self
            .endpoint
            .map(|e| e.trim().to_string())
            .filter(|e| !e.is_empty());

        if api_key.is_empty() {
            return Err(ChatError::Validation("Please enter an API key.".to_string()));
        }
        if self.provider == Provider::Custom && endpoint.is_none() {
            return Err(ChatError::Validation(
                "Please enter a custom endpoint URL.".to_string(),
            ));
        }

        Ok(Settings {
            provider: self.provider,
            api_key,
            endpoint,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    #[default]
    #[serde(rename = "openai")]
    OpenAi,
    #[serde(rename = "huggingface")]
    HuggingFace,
    Custom,
}

impl Provider {
    pub fn all() -> &'static [Provider] {
        &[Provider::OpenAi, Provider::HuggingFace, Provider::Custom]
    }

    /// Identifier used in persisted settings
    pub fn as_str(&self) -> &'static str {
        match self {
            Provider::OpenAi => "openai",
            Provider::HuggingFace => "huggingface",
            Provider::Custom => "custom",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Provider::OpenAi => "OpenAI (GPT-3.5/GPT-4)",
            Provider::HuggingFace => "Hugging Face",
            Provider::Custom => "Custom Endpoint",
        }
    }

    /// Where to obtain a credential, if the provider publishes one
    pub fn key_url(&self) -> Option<&'static str> {
        match self {
            Provider::OpenAi => Some("https://platform.openai.com/api-keys"),
            Provider::HuggingFace => Some("https://huggingface.co/settings/tokens"),
            Provider::Custom => None,
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Provider {
    type Err = ChatError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "openai" => Ok(Provider::OpenAi),
            "huggingface" => Ok(Provider::HuggingFace),
            "custom" => Ok(Provider::Custom),
            other => Err(ChatError::Validation(format!("Unknown API provider: {}", other))),
        }
    }
}

const DEFAULT_SYSTEM_PROMPT: &str = r#"You are the AI assistant on a personal portfolio website.
The site owner is a data analyst and engineer working across:
- Data analytics and visualization (Power BI, Excel, SQL)
- AI/ML integration and automation
- Cyber security, GDPR compliance and privacy
- IoT solutions and embedded systems
- Full-stack development

Be helpful, professional and concise. Point visitors to the owner's projects when relevant.
"#;
