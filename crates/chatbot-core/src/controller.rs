//! Conversation controller: the chatbot's only stateful component.
//!
//! Owns the configuration and the bounded history, and runs one turn per
//! `submit`:
//! 1. Validate the input and the configuration
//! 2. Append the user message
//! 3. Send system prompt + trailing context window to the selected provider
//! 4. Append the reply, or surface the adapter error
//!
//! Single-flight: a `submit` issued while another is in flight is rejected
//! with `ChatError::Busy`. Borrows of the shared state are never held across
//! an await, so the controller can be shared through an `Rc`.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use chatbot_types::{
    ChatError, Result,
    config::{ChatbotConfig, Provider, Settings, KEY_API_KEY, KEY_ENDPOINT, KEY_PROVIDER},
    event::ChatEvent,
    history::ConversationHistory,
    message::Message,
};
use crate::event_bus::EventBus;
use crate::ports::{ChatRequest, HttpPort, KeyValueStore};
use crate::providers::provider_for;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControllerState {
    Idle,
    Sending,
}

/// Successful result of `submit`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The input was blank; nothing happened
    Ignored,
    /// The provider's answer, already appended to history
    Reply(String),
}

pub struct ConversationController {
    config: RefCell<ChatbotConfig>,
    history: RefCell<ConversationHistory>,
    state: Cell<ControllerState>,
    turn_counter: Cell<u64>,
    store: Rc<dyn KeyValueStore>,
    http: Rc<dyn HttpPort>,
    event_bus: EventBus,
}

impl ConversationController {
    pub fn new(
        config: ChatbotConfig,
        store: Rc<dyn KeyValueStore>,
        http: Rc<dyn HttpPort>,
        event_bus: EventBus,
    ) -> Self {
        Self {
            config: RefCell::new(config),
            history: RefCell::new(ConversationHistory::new()),
            state: Cell::new(ControllerState::Idle),
            turn_counter: Cell::new(0),
            store,
            http,
            event_bus,
        }
    }

    /// Construct a controller, seeding the configuration from the store.
    /// Keys that are missing or unreadable keep their value from `defaults`.
    pub async fn load(
        defaults: ChatbotConfig,
        store: Rc<dyn KeyValueStore>,
        http: Rc<dyn HttpPort>,
        event_bus: EventBus,
    ) -> Self {
        let config = restore_config(store.as_ref(), defaults).await;
        Self::new(config, store, http, event_bus)
    }

    /// Send one user message and wait for the provider's answer.
    pub async fn submit(&self, message: &str) -> Result<SubmitOutcome> {
        let text = message.trim();
        if text.is_empty() {
            return Ok(SubmitOutcome::Ignored);
        }

        if self.is_busy() {
            log::warn!("submit rejected: a message is already in flight");
            return Err(ChatError::Busy);
        }

        if let Err(e) = self.config.borrow().ensure_ready() {
            self.event_bus.emit(ChatEvent::Error {
                message: e.to_string(),
            });
            return Err(e);
        }

        let _sending = SendingGuard::enter(&self.state);
        let turn_id = self.turn_counter.get() + 1;
        self.turn_counter.set(turn_id);
        self.event_bus.emit(ChatEvent::TurnStart {
            turn_id,
            text: text.to_string(),
        });

        self.history.borrow_mut().push(Message::user(text));

        let (provider, request) = {
            let config = self.config.borrow();
            let history = self.history.borrow();
            let request = ChatRequest {
                system_prompt: config.system_prompt.clone(),
                context: history.context(),
                latest: text.to_string(),
                history: history.to_vec(),
                model: config.model.clone(),
                max_tokens: config.max_tokens,
                temperature: config.temperature,
            };
            (provider_for(&config, self.http.clone()), request)
        };

        log::debug!("turn {} dispatched to {}", turn_id, provider.name());

        let outcome = match provider.send(&request).await {
            Ok(reply) => {
                self.history.borrow_mut().push(Message::assistant(&reply));
                self.event_bus.emit(ChatEvent::Reply {
                    turn_id,
                    text: reply.clone(),
                });
                Ok(SubmitOutcome::Reply(reply))
            }
            Err(e) => {
                log::warn!("{} provider failed on turn {}: {}", provider.name(), turn_id, e);
                self.event_bus.emit(ChatEvent::Error {
                    message: e.to_string(),
                });
                Err(e)
            }
        };

        self.event_bus.emit(ChatEvent::TurnEnd { turn_id });
        outcome
    }

    /// Validate, persist and apply new settings.
    /// On any failure the active configuration is left untouched.
    pub async fn configure(&self, settings: Settings) -> Result<()> {
        let result = match settings.validate() {
            Ok(settings) => self.persist(&settings).await.map(|()| settings),
            Err(e) => Err(e),
        };

        match result {
            Ok(settings) => {
                let provider = settings.provider;
                self.config.borrow_mut().apply(settings);
                log::info!("Chatbot configuration saved (provider: {})", provider);
                self.event_bus.emit(ChatEvent::ConfigUpdated { provider });
                Ok(())
            }
            Err(e) => {
                log::warn!("Configuration rejected ({}): {}", e.kind(), e);
                self.event_bus.emit(ChatEvent::ConfigRejected {
                    message: e.to_string(),
                });
                Err(e)
            }
        }
    }

    async fn persist(&self, settings: &Settings) -> Result<()> {
        self.store.set(KEY_API_KEY, &settings.api_key).await?;
        self.store.set(KEY_PROVIDER, settings.provider.as_str()).await?;
        self.store
            .set(KEY_ENDPOINT, settings.endpoint.as_deref().unwrap_or(""))
            .await
    }

    /// Drop the conversation, keeping the configuration.
    pub fn reset(&self) -> Result<()> {
        if self.is_busy() {
            return Err(ChatError::Busy);
        }
        self.history.borrow_mut().clear();
        log::debug!("conversation cleared");
        self.event_bus.emit(ChatEvent::Cleared);
        Ok(())
    }

    pub fn config(&self) -> ChatbotConfig {
        self.config.borrow().clone()
    }

    /// Snapshot of the history, oldest first
    pub fn history(&self) -> Vec<Message> {
        self.history.borrow().to_vec()
    }

    pub fn history_len(&self) -> usize {
        self.history.borrow().len()
    }

    pub fn state(&self) -> ControllerState {
        self.state.get()
    }

    pub fn is_busy(&self) -> bool {
        self.state.get() == ControllerState::Sending
    }

    pub fn event_bus(&self) -> &EventBus {
        &self.event_bus
    }
}

/// Holds the controller in `Sending`; back to `Idle` on drop, including when
/// the caller drops the in-flight future.
struct SendingGuard<'a> {
    state: &'a Cell<ControllerState>,
}

impl<'a> SendingGuard<'a> {
    fn enter(state: &'a Cell<ControllerState>) -> Self {
        state.set(ControllerState::Sending);
        Self { state }
    }
}

impl Drop for SendingGuard<'_> {
    fn drop(&mut self) {
        self.state.set(ControllerState::Idle);
    }
}

async fn restore_config(store: &dyn KeyValueStore, mut config: ChatbotConfig) -> ChatbotConfig {
    if let Some(api_key) = read_key(store, KEY_API_KEY).await {
        config.api_key = api_key;
    }

    if let Some(raw) = read_key(store, KEY_PROVIDER).await {
        match raw.parse::<Provider>() {
            Ok(provider) => config.provider = provider,
            Err(e) => log::warn!("Ignoring stored provider: {}", e),
        }
    }

    if let Some(endpoint) = read_key(store, KEY_ENDPOINT).await {
        config.endpoint = Some(endpoint);
    }

    log::info!(
        "Configuration restored from {} (provider: {}, credential set: {})",
        store.backend_name(),
        config.provider,
        !config.api_key.is_empty()
    );
    config
}

/// Non-empty value for `key`; read failures are logged and treated as absent.
async fn read_key(store: &dyn KeyValueStore, key: &str) -> Option<String> {
    match store.get(key).await {
        Ok(value) => value.filter(|v| !v.is_empty()),
        Err(e) => {
            log::warn!("Failed to read {} from {}: {}", key, store.backend_name(), e);
            None
        }
    }
}
