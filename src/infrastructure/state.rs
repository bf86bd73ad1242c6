//! Shared application state

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};

use crate::application::services::{
    TextGenerationService, WorldEnhancementService, WorldGenerationService,
    WorldGenerationServiceImpl, WorldServiceImpl,
};
use crate::infrastructure::config::AppConfig;
use crate::infrastructure::ollama::OllamaClient;
use crate::infrastructure::persistence::JsonWorldRepository;

/// Shared application state
pub struct AppState {
    pub config: AppConfig,
    // Application services
    pub world_service: WorldServiceImpl,
    pub generation_service: Arc<dyn WorldGenerationService>,
    pub text_generation_service: Arc<TextGenerationService<OllamaClient>>,
    pub enhancement_service: WorldEnhancementService<OllamaClient>,
}

impl AppState {
    pub async fn new(config: AppConfig) -> Result<Self> {
        // Initialize world storage
        let repository = JsonWorldRepository::new(config.world_storage_dir.clone()).await?;

        // Initialize text-generation client
        let llm_client = OllamaClient::new(
            &config.llm_base_url,
            &config.llm_model,
            Duration::from_secs(config.llm_timeout_secs),
            Duration::from_secs(config.llm_health_timeout_secs),
        )
        .context("LLM_BASE_URL is not a usable URL")?;

        // Initialize application services
        let world_service = WorldServiceImpl::new(Arc::new(repository));
        let generation_service: Arc<dyn WorldGenerationService> =
            Arc::new(WorldGenerationServiceImpl::new());
        let text_generation_service = Arc::new(TextGenerationService::new(llm_client));
        let enhancement_service = WorldEnhancementService::new(
            Arc::clone(&text_generation_service),
            Arc::clone(&generation_service),
        );

        Ok(Self {
            config,
            world_service,
            generation_service,
            text_generation_service,
            enhancement_service,
        })
    }
}
