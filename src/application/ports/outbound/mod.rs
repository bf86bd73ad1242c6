//! Outbound ports - Interfaces that the application requires from external systems

mod llm_port;
mod repository_port;

pub use llm_port::{
    ChatMessage, ConfigurationError, LlmHealth, LlmPort, LlmRequest, LlmResponse, MessageRole,
    TextGenerationConfig, TextGenerationError,
};
pub use repository_port::{StorageError, WorldRepositoryPort};
