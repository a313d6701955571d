//! UI-level state that drives rendering.
//! This is a read-only projection of the controller, updated each frame
//! by draining the EventBus.

use chatbot_core::controller::ControllerState;
use chatbot_types::config::{Provider, Settings};
use chatbot_types::event::ChatEvent;
use chatbot_types::message::Message;

pub const GREETING: &str = "Hi! I'm the site's AI assistant. Ask me about data analytics, AI, \
    cyber security, or the projects on this page. How can I help you today?";

/// State visible to UI panels
pub struct UiState {
    /// Displayed bubbles, including the greeting and error bubbles
    pub entries: Vec<ChatEntry>,
    /// Mirrors the controller; drives the busy indicator
    pub status: ControllerState,
    /// Input field content
    pub input_text: String,
    /// Whether the settings panel is open
    pub show_settings: bool,
    /// Status line text
    pub status_text: String,
    /// Unsaved settings form content
    pub settings_draft: SettingsDraft,
    /// Outcome of the last save, if any
    pub save_feedback: Option<SaveFeedback>,
}

/// A chat bubble for display
#[derive(Clone)]
pub struct ChatEntry {
    pub message: Message,
    /// Local wall-clock time, `HH:MM`
    pub timestamp: String,
}

impl ChatEntry {
    pub fn new(message: Message) -> Self {
        Self {
            message,
            timestamp: chrono::Local::now().format("%H:%M").to_string(),
        }
    }
}

/// Settings form fields
#[derive(Clone, Default)]
pub struct SettingsDraft {
    pub provider: Provider,
    pub api_key: String,
    pub endpoint: String,
    /// Reveal the API key in the form
    pub show_key: bool,
}

impl SettingsDraft {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            provider: settings.provider,
            api_key: settings.api_key.clone(),
            endpoint: settings.endpoint.clone().unwrap_or_default(),
            show_key: false,
        }
    }

    pub fn to_settings(&self) -> Settings {
        let endpoint = (!self.endpoint.trim().is_empty()).then(|| self.endpoint.clone());
        Settings::new(self.provider, self.api_key.clone(), endpoint)
    }
}

/// Save feedback shown next to the save button
#[derive(Clone, Debug, PartialEq)]
pub struct SaveFeedback {
    pub message: String,
    pub success: bool,
}

impl UiState {
    pub fn new(settings: &Settings) -> Self {
        Self {
            entries: vec![ChatEntry::new(Message::assistant(GREETING))],
            status: ControllerState::Idle,
            input_text: String::new(),
            show_settings: false,
            status_text: "Ready".to_string(),
            settings_draft: SettingsDraft::from_settings(settings),
            save_feedback: None,
        }
    }

    /// Process events from the EventBus and update UI state
    pub fn process_events(&mut self, events: Vec<ChatEvent>) {
        for event in events {
            match event {
                ChatEvent::TurnStart { text, .. } => {
                    self.status = ControllerState::Sending;
                    self.status_text = "Thinking...".to_string();
                    self.entries.push(ChatEntry::new(Message::user(text)));
                }
                ChatEvent::Reply { text, .. } => {
                    self.entries.push(ChatEntry::new(Message::assistant(text)));
                }
                ChatEvent::Error { message } => {
                    self.entries.push(ChatEntry::new(Message::error(message)));
                }
                ChatEvent::TurnEnd { .. } => {
                    self.status = ControllerState::Idle;
                    self.status_text = "Ready".to_string();
                }
                ChatEvent::Cleared => {
                    self.entries = vec![ChatEntry::new(Message::assistant(GREETING))];
                }
                ChatEvent::ConfigUpdated { provider } => {
                    log::debug!("settings applied for {}", provider);
                    let message = "API configuration saved ✓".to_string();
                    if !self.is_busy() {
                        self.status_text = message.clone();
                    }
                    self.save_feedback = Some(SaveFeedback {
                        message,
                        success: true,
                    });
                    self.settings_draft.show_key = false;
                    self.show_settings = false;
                }
                ChatEvent::ConfigRejected { message } => {
                    self.save_feedback = Some(SaveFeedback {
                        message,
                        success: false,
                    });
                }
            }
        }
    }

    /// Open the settings panel with a draft of the active settings.
    pub fn open_settings(&mut self, active: &Settings) {
        self.settings_draft = SettingsDraft::from_settings(active);
        self.save_feedback = None;
        self.show_settings = true;
    }

    pub fn is_busy(&self) -> bool {
        self.status == ControllerState::Sending
    }

    /// Take the trimmed input for sending; None while busy or blank.
    pub fn take_input(&mut self) -> Option<String> {
        let text = self.input_text.trim();
        if text.is_empty() || self.is_busy() {
            return None;
        }
        let text = text.to_string();
        self.input_text.clear();
        Some(text)
    }
}
