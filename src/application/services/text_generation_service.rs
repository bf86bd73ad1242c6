//! Text Generation Service - Narrative prose from world data
//!
//! Wraps the LLM port with the world-building prompts used across the
//! engine. Every method degrades to [`FALLBACK_TEXT`] instead of failing:
//! an unreachable or misbehaving server must never abort the caller.

use serde::Serialize;
use tracing::{debug, instrument, warn};

use crate::application::ports::outbound::{
    ChatMessage, ConfigurationError, LlmHealth, LlmPort, LlmRequest, TextGenerationConfig,
};

/// Returned whenever the text-generation server cannot produce a reply
pub const FALLBACK_TEXT: &str =
    "Unable to generate text at this time. Please check the LLM server connection.";

const SYSTEM_PROMPT: &str = "You are a creative writer specializing in fantasy and sci-fi world building. Generate vivid, engaging descriptions based on the provided JSON data.";

const TEMPERATURE: f32 = 0.8;
const MAX_TOKENS: u32 = 1000;

const WORLD_PROMPT: &str = "Create a compelling narrative description of this fantasy/sci-fi world. Include details about the setting, atmosphere, key locations, and what makes this world unique. Write in an engaging, immersive style that would draw readers into this world.";

const CHARACTER_PROMPT: &str = "Create a detailed character description based on the provided data. Include their physical appearance, personality traits, background, and what makes them memorable. Write in a narrative style that brings this character to life.";

const LOCATION_PROMPT: &str = "Create an immersive description of this location. Include sensory details about what someone would see, hear, smell, and feel when visiting this place. Describe the atmosphere, architecture, inhabitants, and any unique features that make this location special.";

const EVENT_PROMPT: &str = "Create a compelling narrative description of this event. Tell the story of what happened, who was involved, and the impact it had. Write in an engaging storytelling style that captures the drama and significance of the event.";

/// Service for generating descriptive text from JSON-serializable data
pub struct TextGenerationService<L: LlmPort> {
    llm: L,
}

impl<L: LlmPort> TextGenerationService<L> {
    pub fn new(llm: L) -> Self {
        Self { llm }
    }

    /// Generate prose about `data` guided by `prompt`
    #[instrument(skip(self, data, prompt))]
    pub async fn generate_text_from_json<T: Serialize + ?Sized + Sync>(
        &self,
        data: &T,
        prompt: &str,
    ) -> String {
        let json = serde_json::to_string_pretty(data).unwrap_or_else(|e| {
            warn!(error = %e, "Could not serialize generation context");
            "{}".to_string()
        });

        let full_prompt = format!(
            "{}\n\nJSON Data:\n{}\n\nPlease generate a descriptive narrative based on this data:",
            prompt, json
        );

        let request = LlmRequest::new(vec![ChatMessage::user(full_prompt)])
            .with_system_prompt(SYSTEM_PROMPT)
            .with_temperature(TEMPERATURE)
            .with_max_tokens(Some(MAX_TOKENS));

        match self.llm.generate(request).await {
            Ok(response) => {
                debug!(length = response.content.len(), "Generated text");
                response.content
            }
            Err(e) => {
                warn!(error = %e, "Text generation failed, using fallback text");
                FALLBACK_TEXT.to_string()
            }
        }
    }

    pub async fn world_narrative<T: Serialize + ?Sized + Sync>(&self, world: &T) -> String {
        self.generate_text_from_json(world, WORLD_PROMPT).await
    }

    pub async fn character_description<T: Serialize + ?Sized + Sync>(&self, data: &T) -> String {
        self.generate_text_from_json(data, CHARACTER_PROMPT).await
    }

    pub async fn location_description<T: Serialize + ?Sized + Sync>(&self, data: &T) -> String {
        self.generate_text_from_json(data, LOCATION_PROMPT).await
    }

    pub async fn event_narrative<T: Serialize + ?Sized + Sync>(&self, data: &T) -> String {
        self.generate_text_from_json(data, EVENT_PROMPT).await
    }

    pub async fn health(&self) -> LlmHealth {
        self.llm.health().await
    }

    pub async fn is_available(&self) -> bool {
        self.llm.health().await.available
    }

    pub fn configuration(&self) -> TextGenerationConfig {
        self.llm.configuration()
    }

    pub fn update_configuration(
        &self,
        base_url: &str,
        model: Option<&str>,
    ) -> Result<TextGenerationConfig, ConfigurationError> {
        self.llm.update_configuration(base_url, model)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;
    use chrono::Utc;

    use super::*;
    use crate::application::ports::outbound::{LlmResponse, TextGenerationError};

    /// Replays canned replies in order, then repeats the last one
    pub(crate) struct MockLlm {
        replies: Mutex<Vec<String>>,
        pub(crate) prompts: Mutex<Vec<String>>,
    }

    impl MockLlm {
        pub(crate) fn new(replies: &[&str]) -> Self {
            Self {
                replies: Mutex::new(replies.iter().rev().map(|r| r.to_string()).collect()),
                prompts: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl LlmPort for MockLlm {
        async fn generate(&self, request: LlmRequest) -> Result<LlmResponse, TextGenerationError> {
            let prompt = request
                .messages
                .last()
                .map(|m| m.content.clone())
                .unwrap_or_default();
            self.prompts.lock().unwrap().push(prompt);

            let mut replies = self.replies.lock().unwrap();
            let content = if replies.len() > 1 {
                replies.pop().unwrap_or_default()
            } else {
                replies.last().cloned().unwrap_or_default()
            };
            Ok(LlmResponse { content })
        }

        async fn health(&self) -> LlmHealth {
            LlmHealth {
                available: true,
                status: "Healthy".to_string(),
                base_url: "http://mock".to_string(),
                model: "mock".to_string(),
                response_time_ms: 1,
                error_message: None,
                checked_at: Utc::now(),
            }
        }

        fn configuration(&self) -> TextGenerationConfig {
            TextGenerationConfig {
                base_url: "http://mock".to_string(),
                model: "mock".to_string(),
            }
        }

        fn update_configuration(
            &self,
            base_url: &str,
            model: Option<&str>,
        ) -> Result<TextGenerationConfig, ConfigurationError> {
            Ok(TextGenerationConfig {
                base_url: base_url.to_string(),
                model: model.unwrap_or("mock").to_string(),
            })
        }
    }

    /// A server that never answers
    pub(crate) struct UnreachableLlm;

    #[async_trait]
    impl LlmPort for UnreachableLlm {
        async fn generate(&self, _request: LlmRequest) -> Result<LlmResponse, TextGenerationError> {
            Err(TextGenerationError::Unavailable(
                "connection refused".to_string(),
            ))
        }

        async fn health(&self) -> LlmHealth {
            LlmHealth {
                available: false,
                status: "Unavailable".to_string(),
                base_url: "http://localhost:1".to_string(),
                model: "none".to_string(),
                response_time_ms: 0,
                error_message: Some("connection refused".to_string()),
                checked_at: Utc::now(),
            }
        }

        fn configuration(&self) -> TextGenerationConfig {
            TextGenerationConfig {
                base_url: "http://localhost:1".to_string(),
                model: "none".to_string(),
            }
        }

        fn update_configuration(
            &self,
            base_url: &str,
            _model: Option<&str>,
        ) -> Result<TextGenerationConfig, ConfigurationError> {
            Err(ConfigurationError::InvalidBaseUrl(base_url.to_string()))
        }
    }

    #[tokio::test]
    async fn test_prompt_embeds_pretty_json() {
        let service = TextGenerationService::new(MockLlm::new(&["A misty harbor."]));

        let text = service
            .location_description(&serde_json::json!({"name": "NeoHaven"}))
            .await;

        assert_eq!(text, "A misty harbor.");
        let prompts = service.llm.prompts.lock().unwrap();
        assert!(prompts[0].starts_with("Create an immersive description of this location."));
        assert!(prompts[0].contains("JSON Data:\n{\n  \"name\": \"NeoHaven\"\n}"));
        assert!(prompts[0].ends_with("Please generate a descriptive narrative based on this data:"));
    }

    #[tokio::test]
    async fn test_unreachable_server_yields_fallback() {
        let service = TextGenerationService::new(UnreachableLlm);

        let text = service.world_narrative(&serde_json::json!({})).await;

        assert_eq!(text, FALLBACK_TEXT);
        assert!(!service.is_available().await);
    }
}
