//! Configuration API routes
//!
//! Endpoints for inspecting and switching the text-generation server, plus
//! the plain text-generation helpers.

use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::application::ports::outbound::{LlmHealth, TextGenerationConfig};
use crate::infrastructure::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateLlmConfigRequest {
    #[serde(default)]
    pub base_url: String,
    #[serde(default)]
    pub model: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct UpdateLlmConfigResponse {
    pub message: String,
    pub config: TextGenerationConfig,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateTextRequest {
    #[serde(default)]
    pub json_data: serde_json::Value,
    #[serde(default)]
    pub prompt: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateTextResponse {
    pub generated_text: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityResponse {
    pub is_available: bool,
}

/// Get current text-generation configuration
pub async fn get_llm_config(State(state): State<Arc<AppState>>) -> Json<TextGenerationConfig> {
    Json(state.text_generation_service.configuration())
}

/// Replace the text-generation configuration
pub async fn update_llm_config(
    State(state): State<Arc<AppState>>,
    Json(req): Json<UpdateLlmConfigRequest>,
) -> Result<Json<UpdateLlmConfigResponse>, (StatusCode, String)> {
    if req.base_url.trim().is_empty() {
        return Err((StatusCode::BAD_REQUEST, "Base URL is required".to_string()));
    }

    let model = req.model.as_deref().filter(|m| !m.trim().is_empty());
    let config = state
        .text_generation_service
        .update_configuration(&req.base_url, model)
        .map_err(|_| (StatusCode::BAD_REQUEST, "Invalid URL format".to_string()))?;

    Ok(Json(UpdateLlmConfigResponse {
        message: "LLM configuration updated successfully".to_string(),
        config,
    }))
}

/// Probe the text-generation server
pub async fn llm_health(State(state): State<Arc<AppState>>) -> Json<LlmHealth> {
    Json(state.text_generation_service.health().await)
}

pub async fn llm_available(State(state): State<Arc<AppState>>) -> Json<AvailabilityResponse> {
    Json(AvailabilityResponse {
        is_available: state.text_generation_service.is_available().await,
    })
}

/// Narrate arbitrary JSON. Degrades to the fallback text when the server is down.
pub async fn generate_from_json(
    State(state): State<Arc<AppState>>,
    Json(req): Json<GenerateTextRequest>,
) -> Json<GenerateTextResponse> {
    let generated_text = state
        .text_generation_service
        .generate_text_from_json(&req.json_data, &req.prompt)
        .await;
    Json(GenerateTextResponse { generated_text })
}
