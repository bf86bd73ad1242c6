//! Application configuration

use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};

/// Application configuration loaded from environment
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// HTTP server port
    pub server_port: u16,

    /// Directory holding one JSON file per stored world
    pub world_storage_dir: PathBuf,

    /// Text-generation server base URL (OpenAI-compatible)
    pub llm_base_url: String,
    /// Model requested from the text-generation server
    pub llm_model: String,
    /// Timeout for generation requests
    pub llm_timeout_secs: u64,
    /// Timeout for health probes
    pub llm_health_timeout_secs: u64,
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            server_port: env::var("SERVER_PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .context("SERVER_PORT must be a valid port number")?,

            world_storage_dir: env::var("WORLD_STORAGE_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| default_storage_dir()),

            llm_base_url: env::var("LLM_BASE_URL")
                .unwrap_or_else(|_| "http://localhost:8080".to_string()),
            llm_model: env::var("LLM_MODEL").unwrap_or_else(|_| "local-model".to_string()),
            llm_timeout_secs: env::var("LLM_TIMEOUT_SECS")
                .unwrap_or_else(|_| "120".to_string())
                .parse()
                .context("LLM_TIMEOUT_SECS must be a whole number of seconds")?,
            llm_health_timeout_secs: env::var("LLM_HEALTH_TIMEOUT_SECS")
                .unwrap_or_else(|_| "10".to_string())
                .parse()
                .context("LLM_HEALTH_TIMEOUT_SECS must be a whole number of seconds")?,
        })
    }
}

/// `$HOME/MDL_Worlds`, or `./MDL_Worlds` when no home directory is set
fn default_storage_dir() -> PathBuf {
    env::var("HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("."))
        .join("MDL_Worlds")
}
