//! LLM port - Interface for the text-generation collaborator
//!
//! The collaborator is any OpenAI-compatible chat completion server. Its
//! replies are free text and are never trusted to be well formed.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Port for text generation
#[async_trait]
pub trait LlmPort: Send + Sync {
    /// Generate a completion for the request
    async fn generate(&self, request: LlmRequest) -> Result<LlmResponse, TextGenerationError>;

    /// Probe the server. Never fails: an unreachable server is reported in the record.
    async fn health(&self) -> LlmHealth;

    /// Snapshot of the active configuration
    fn configuration(&self) -> TextGenerationConfig;

    /// Replace the active configuration as a whole
    fn update_configuration(
        &self,
        base_url: &str,
        model: Option<&str>,
    ) -> Result<TextGenerationConfig, ConfigurationError>;
}

// =============================================================================
// Requests and responses
// =============================================================================

#[derive(Debug, Clone)]
pub struct LlmRequest {
    /// The conversation history
    pub messages: Vec<ChatMessage>,
    /// System prompt / context
    pub system_prompt: Option<String>,
    /// Temperature for response generation (0.0 - 2.0)
    pub temperature: Option<f32>,
    /// Maximum tokens to generate
    pub max_tokens: Option<u32>,
}

impl LlmRequest {
    pub fn new(messages: Vec<ChatMessage>) -> Self {
        Self {
            messages,
            system_prompt: None,
            temperature: None,
            max_tokens: None,
        }
    }

    pub fn with_system_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.system_prompt = Some(prompt.into());
        self
    }

    pub fn with_temperature(mut self, temp: f32) -> Self {
        self.temperature = Some(temp);
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: Option<u32>) -> Self {
        self.max_tokens = max_tokens;
        self
    }
}

/// A message in the conversation
#[derive(Debug, Clone)]
pub struct ChatMessage {
    pub role: MessageRole,
    pub content: String,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::Assistant,
            content: content.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageRole {
    User,
    Assistant,
    System,
}

#[derive(Debug, Clone)]
pub struct LlmResponse {
    pub content: String,
}

// =============================================================================
// Configuration and health
// =============================================================================

/// Where the text-generation server lives and which model it runs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextGenerationConfig {
    pub base_url: String,
    pub model: String,
}

/// Result of a health probe
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LlmHealth {
    pub available: bool,
    pub status: String,
    pub base_url: String,
    pub model: String,
    pub response_time_ms: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
    pub checked_at: DateTime<Utc>,
}

// =============================================================================
// Errors
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum TextGenerationError {
    #[error("LLM request failed: {0}")]
    RequestFailed(String),
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
    #[error("LLM server unavailable: {0}")]
    Unavailable(String),
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigurationError {
    #[error("Invalid base URL '{0}': expected an absolute http or https URL")]
    InvalidBaseUrl(String),
}
