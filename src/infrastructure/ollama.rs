//! Text-generation client for OpenAI-compatible chat completion servers
//!
//! Works against Ollama, LM Studio, llama.cpp and anything else that serves
//! `/v1/chat/completions`. The endpoint and model can be swapped at runtime:
//! the active configuration is an immutable snapshot replaced as a whole.

use std::sync::{Arc, RwLock};
use std::time::{Duration, Instant};

use async_trait::async_trait;
use chrono::Utc;
use reqwest::{Client, Url};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::application::ports::outbound::{
    ConfigurationError, LlmHealth, LlmPort, LlmRequest, LlmResponse, MessageRole,
    TextGenerationConfig, TextGenerationError,
};

/// Client for an OpenAI-compatible text-generation server
pub struct OllamaClient {
    client: Client,
    config: RwLock<Arc<TextGenerationConfig>>,
    health_timeout: Duration,
}

impl OllamaClient {
    pub fn new(
        base_url: &str,
        model: &str,
        timeout: Duration,
        health_timeout: Duration,
    ) -> Result<Self, ConfigurationError> {
        // Generation can be slow on local hardware
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|_| Client::new());

        Ok(Self {
            client,
            config: RwLock::new(Arc::new(TextGenerationConfig {
                base_url: normalize_base_url(base_url)?,
                model: model.to_string(),
            })),
            health_timeout,
        })
    }

    fn snapshot(&self) -> Arc<TextGenerationConfig> {
        match self.config.read() {
            Ok(config) => Arc::clone(&config),
            Err(poisoned) => Arc::clone(&poisoned.into_inner()),
        }
    }
}

/// Accept only absolute http(s) URLs; strip any trailing slash
fn normalize_base_url(base_url: &str) -> Result<String, ConfigurationError> {
    let trimmed = base_url.trim();
    let url = Url::parse(trimmed)
        .map_err(|_| ConfigurationError::InvalidBaseUrl(trimmed.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") || url.host_str().is_none() {
        return Err(ConfigurationError::InvalidBaseUrl(trimmed.to_string()));
    }
    Ok(trimmed.trim_end_matches('/').to_string())
}

#[async_trait]
impl LlmPort for OllamaClient {
    async fn generate(&self, request: LlmRequest) -> Result<LlmResponse, TextGenerationError> {
        let config = self.snapshot();
        let api_request = OpenAIChatRequest {
            model: config.model.clone(),
            messages: build_messages(&request),
            temperature: request.temperature,
            max_tokens: request.max_tokens,
        };

        let response = self
            .client
            .post(format!("{}/v1/chat/completions", config.base_url))
            .json(&api_request)
            .send()
            .await
            .map_err(|e| TextGenerationError::Unavailable(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .map_err(|e| TextGenerationError::RequestFailed(e.to_string()))?;
            return Err(TextGenerationError::RequestFailed(format!(
                "{}: {}",
                status, error_text
            )));
        }

        let api_response: OpenAIChatResponse = response
            .json()
            .await
            .map_err(|e| TextGenerationError::InvalidResponse(e.to_string()))?;

        convert_response(api_response)
    }

    async fn health(&self) -> LlmHealth {
        let config = self.snapshot();
        let started = Instant::now();

        let outcome = self
            .client
            .get(format!("{}/v1/models", config.base_url))
            .timeout(self.health_timeout)
            .send()
            .await;
        let response_time_ms = started.elapsed().as_millis() as u64;

        let (available, status, error_message) = match outcome {
            Ok(response) if response.status().is_success() => (true, "Healthy", None),
            Ok(response) => (
                false,
                "Unhealthy",
                Some(format!("Server responded with {}", response.status())),
            ),
            Err(e) => (false, "Unavailable", Some(e.to_string())),
        };

        if available {
            debug!(response_time_ms, "Text-generation server is healthy");
        } else {
            warn!(
                base_url = %config.base_url,
                error = error_message.as_deref().unwrap_or_default(),
                "Text-generation server health check failed"
            );
        }

        LlmHealth {
            available,
            status: status.to_string(),
            base_url: config.base_url.clone(),
            model: config.model.clone(),
            response_time_ms,
            error_message,
            checked_at: Utc::now(),
        }
    }

    fn configuration(&self) -> TextGenerationConfig {
        self.snapshot().as_ref().clone()
    }

    fn update_configuration(
        &self,
        base_url: &str,
        model: Option<&str>,
    ) -> Result<TextGenerationConfig, ConfigurationError> {
        let base_url = normalize_base_url(base_url)?;
        let model = match model.map(str::trim).filter(|m| !m.is_empty()) {
            Some(model) => model.to_string(),
            None => self.snapshot().model.clone(),
        };
        let updated = TextGenerationConfig { base_url, model };

        match self.config.write() {
            Ok(mut config) => *config = Arc::new(updated.clone()),
            Err(poisoned) => *poisoned.into_inner() = Arc::new(updated.clone()),
        }

        info!(base_url = %updated.base_url, model = %updated.model, "Updated text-generation configuration");
        Ok(updated)
    }
}

fn build_messages(request: &LlmRequest) -> Vec<OpenAIMessage> {
    let mut messages = Vec::new();

    if let Some(system) = &request.system_prompt {
        messages.push(OpenAIMessage {
            role: "system".to_string(),
            content: Some(system.clone()),
        });
    }

    for msg in &request.messages {
        messages.push(OpenAIMessage {
            role: match msg.role {
                MessageRole::User => "user",
                MessageRole::Assistant => "assistant",
                MessageRole::System => "system",
            }
            .to_string(),
            content: Some(msg.content.clone()),
        });
    }

    messages
}

fn convert_response(response: OpenAIChatResponse) -> Result<LlmResponse, TextGenerationError> {
    let choice = response.choices.into_iter().next().ok_or_else(|| {
        TextGenerationError::InvalidResponse("No choices in LLM response".to_string())
    })?;

    if let Some(reason) = &choice.finish_reason {
        debug!(finish_reason = %reason, "Completion finished");
    }

    Ok(LlmResponse {
        content: choice.message.content.unwrap_or_default(),
    })
}

// =============================================================================
// OpenAI API types
// =============================================================================

#[derive(Debug, Serialize)]
struct OpenAIChatRequest {
    model: String,
    messages: Vec<OpenAIMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
}

#[derive(Debug, Serialize, Deserialize)]
struct OpenAIMessage {
    role: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct OpenAIChatResponse {
    choices: Vec<OpenAIChoice>,
}

#[derive(Debug, Deserialize)]
struct OpenAIChoice {
    message: OpenAIMessage,
    finish_reason: Option<String>,
}
