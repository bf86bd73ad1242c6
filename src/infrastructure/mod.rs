//! Infrastructure layer - External adapters and implementations
//!
//! This layer contains:
//! - Persistence: JSON file store for whole worlds
//! - HTTP: REST API routes
//! - Ollama: client for OpenAI-compatible text-generation servers
//! - Export: HTML wiki rendering
//! - Config: Application configuration
//! - State: Shared application state

pub mod config;
pub mod export;
pub mod http;
pub mod ollama;
pub mod persistence;
pub mod state;
