#[cfg(test)]
mod tests {
    use crate::message::*;
    use crate::history::*;
    use crate::event::*;
    use crate::config::*;
    use crate::error::*;

    // ─── Message Tests ───────────────────────────────────────

    #[test]
    fn test_message_constructors() {
        let msg = Message::user("Hello");
        assert_eq!(msg.role, Role::User);
        assert_eq!(msg.content, "Hello");
        assert!(!msg.is_error);

        let msg = Message::assistant("Hi there");
        assert_eq!(msg.role, Role::Assistant);
        assert!(!msg.is_error);

        let msg = Message::system("prompt");
        assert_eq!(msg.role, Role::System);
    }

    #[test]
    fn test_message_error_flag() {
        let msg = Message::error("invalid key");
        assert_eq!(msg.role, Role::Assistant);
        assert!(msg.is_error);
    }

    #[test]
    fn test_message_wire_shape_omits_error_flag() {
        let json = serde_json::to_value(Message::user("hi")).unwrap();
        assert_eq!(json, serde_json::json!({"role": "user", "content": "hi"}));

        let json = serde_json::to_value(Message::error("boom")).unwrap();
        assert_eq!(json["is_error"], serde_json::json!(true));
    }

    #[test]
    fn test_message_deserialize_defaults_error_flag() {
        let msg: Message =
            serde_json::from_str(r#"{"role":"assistant","content":"ok"}"#).unwrap();
        assert_eq!(msg, Message::assistant("ok"));
    }

    #[test]
    fn test_role_serialization() {
        assert_eq!(serde_json::to_string(&Role::System).unwrap(), r#""system""#);
        assert_eq!(serde_json::to_string(&Role::User).unwrap(), r#""user""#);
        assert_eq!(serde_json::to_string(&Role::Assistant).unwrap(), r#""assistant""#);
    }

    // ─── History Tests ───────────────────────────────────────

    #[test]
    fn test_history_starts_empty() {
        let history = ConversationHistory::new();
        assert!(history.is_empty());
        assert_eq!(history.limit(), MAX_HISTORY);
        assert!(history.context().is_empty());
    }

    #[test]
    fn test_history_preserves_insertion_order() {
        let mut history = ConversationHistory::new();
        history.push(Message::user("a"));
        history.push(Message::assistant("b"));
        history.push(Message::user("c"));
        let contents: Vec<_> = history.iter().map(|m| m.content.as_str()).collect();
        assert_eq!(contents, vec!["a", "b", "c"]);
        assert_eq!(history.last().unwrap().content, "c");
    }

    #[test]
    fn test_history_never_exceeds_limit() {
        let mut history = ConversationHistory::new();
        for i in 0..MAX_HISTORY * 3 {
            history.push(Message::user(format!("m{}", i)));
            assert!(history.len() <= MAX_HISTORY);
        }
        assert_eq!(history.len(), MAX_HISTORY);
    }

    #[test]
    fn test_history_evicts_oldest_first() {
        let mut history = ConversationHistory::new();
        for i in 0..MAX_HISTORY + 3 {
            history.push(Message::user(format!("m{}", i)));
        }
        let first = history.iter().next().unwrap();
        assert_eq!(first.content, "m3");
        assert_eq!(history.last().unwrap().content, format!("m{}", MAX_HISTORY + 2));
    }

    #[test]
    fn test_history_small_limit() {
        let mut history = ConversationHistory::with_limit(2);
        history.push(Message::user("1"));
        history.push(Message::user("2"));
        history.push(Message::user("3"));
        assert_eq!(history.to_vec(), vec![Message::user("2"), Message::user("3")]);
    }

    #[test]
    fn test_history_zero_limit_keeps_latest() {
        let mut history = ConversationHistory::with_limit(0);
        history.push(Message::user("only"));
        assert_eq!(history.len(), 1);
    }

    #[test]
    fn test_context_is_trailing_window_oldest_first() {
        let mut history = ConversationHistory::new();
        for i in 0..25 {
            history.push(Message::user(format!("m{}", i)));
        }
        let context = history.context();
        assert_eq!(context.len(), CONTEXT_WINDOW);
        assert_eq!(context[0].content, "m15");
        assert_eq!(context[CONTEXT_WINDOW - 1].content, "m24");
    }

    #[test]
    fn test_context_shorter_than_window() {
        let mut history = ConversationHistory::new();
        history.push(Message::user("a"));
        history.push(Message::assistant("b"));
        assert_eq!(history.context(), history.to_vec());
    }

    #[test]
    fn test_history_clear() {
        let mut history = ConversationHistory::new();
        history.push(Message::user("a"));
        history.clear();
        assert!(history.is_empty());
    }

    // ─── Config Tests ────────────────────────────────────────

    #[test]
    fn test_default_config() {
        let config = ChatbotConfig::default();
        assert_eq!(config.provider, Provider::OpenAi);
        assert!(config.api_key.is_empty());
        assert!(config.endpoint.is_none());
        assert_eq!(config.model, "gpt-3.5-turbo");
        assert_eq!(config.max_tokens, 500);
        assert!((config.temperature - 0.7).abs() < f32::EPSILON);
        assert!(!config.system_prompt.is_empty());
    }

    #[test]
    fn test_ensure_ready_requires_credential() {
        let config = ChatbotConfig::default();
        let err = config.ensure_ready().unwrap_err();
        assert_eq!(err, ChatError::Configuration(SETUP_REQUIRED.to_string()));
    }

    #[test]
    fn test_ensure_ready_custom_requires_endpoint() {
        let config = ChatbotConfig {
            provider: Provider::Custom,
            api_key: "k".to_string(),
            endpoint: Some(String::new()),
            ..Default::default()
        };
        assert!(matches!(config.ensure_ready(), Err(ChatError::Configuration(_))));
    }

    #[test]
    fn test_ensure_ready_ok() {
        let config = ChatbotConfig {
            api_key: "sk-test".to_string(),
            ..Default::default()
        };
        assert!(config.ensure_ready().is_ok());
    }

    #[test]
    fn test_settings_validate_trims() {
        let settings = Settings::new(
            Provider::Custom,
            "  key  ",
            Some("  https://example.com/chat ".to_string()),
        )
        .validate()
        .unwrap();
        assert_eq!(settings.api_key, "key");
        assert_eq!(settings.endpoint.as_deref(), Some("https://example.com/chat"));
    }

    #[test]
    fn test_settings_validate_empty_key() {
        let result = Settings::new(Provider::OpenAi, "   ", None).validate();
        assert!(matches!(result, Err(ChatError::Validation(_))));
    }

    #[test]
    fn test_settings_validate_custom_without_endpoint() {
        let result = Settings::new(Provider::Custom, "key", Some("  ".to_string())).validate();
        assert!(matches!(result, Err(ChatError::Validation(_))));
    }

    #[test]
    fn test_settings_blank_endpoint_becomes_none() {
        let settings = Settings::new(Provider::OpenAi, "key", Some(" ".to_string()))
            .validate()
            .unwrap();
        assert!(settings.endpoint.is_none());
    }

    #[test]
    fn test_config_apply_keeps_session_fields() {
        let mut config = ChatbotConfig::default();
        let prompt = config.system_prompt.clone();
        config.apply(Settings::new(Provider::HuggingFace, "hf_x", None));
        assert_eq!(config.provider, Provider::HuggingFace);
        assert_eq!(config.api_key, "hf_x");
        assert_eq!(config.system_prompt, prompt);
        assert_eq!(config.settings(), Settings::new(Provider::HuggingFace, "hf_x", None));
    }

    #[test]
    fn test_provider_parse() {
        assert_eq!("openai".parse::<Provider>().unwrap(), Provider::OpenAi);
        assert_eq!("huggingface".parse::<Provider>().unwrap(), Provider::HuggingFace);
        assert_eq!(" custom ".parse::<Provider>().unwrap(), Provider::Custom);
        assert!("anthropic".parse::<Provider>().is_err());
    }

    #[test]
    fn test_provider_identifiers_roundtrip() {
        for p in Provider::all() {
            assert_eq!(p.as_str().parse::<Provider>().unwrap(), *p);
            assert_eq!(p.to_string(), p.as_str());
            let json = serde_json::to_string(p).unwrap();
            assert_eq!(json, format!("\"{}\"", p.as_str()));
        }
    }

    #[test]
    fn test_provider_key_urls() {
        assert!(Provider::OpenAi.key_url().unwrap().contains("openai.com"));
        assert!(Provider::HuggingFace.key_url().unwrap().contains("huggingface.co"));
        assert!(Provider::Custom.key_url().is_none());
    }

    // ─── Event Tests ─────────────────────────────────────────

    #[test]
    fn test_chat_event_serialization() {
        let event = ChatEvent::Reply { turn_id: 1, text: "Hi there".to_string() };
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("Reply"));
        assert!(json.contains("Hi there"));
    }

    #[test]
    fn test_config_event_carries_provider() {
        let event = ChatEvent::ConfigUpdated { provider: Provider::Custom };
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("custom"));
    }

    // ─── Error Tests ─────────────────────────────────────────

    #[test]
    fn test_error_display() {
        let err = ChatError::Adapter("invalid key".to_string());
        assert_eq!(err.to_string(), "invalid key");

        let err = ChatError::Storage("quota exceeded".to_string());
        assert_eq!(err.to_string(), "Storage error: quota exceeded");

        assert_eq!(ChatError::Busy.to_string(), "A message is already being sent");
    }

    #[test]
    fn test_error_kind() {
        assert_eq!(ChatError::Configuration(String::new()).kind(), "configuration");
        assert_eq!(ChatError::Validation(String::new()).kind(), "validation");
        assert_eq!(ChatError::Busy.kind(), "busy");
        assert_eq!(ChatError::Storage(String::new()).kind(), "storage");
    }
}
