//! Application services - Use case implementations
//!
//! Each service follows hexagonal architecture principles, accepting port
//! dependencies and returning domain entities or DTOs.

pub mod llm;
pub mod text_generation_service;
pub mod world_enhancement_service;
pub mod world_generation_service;
pub mod world_service;

pub use text_generation_service::{TextGenerationService, FALLBACK_TEXT};
pub use world_enhancement_service::WorldEnhancementService;
pub use world_generation_service::{
    GenerationError, WorldGenerationService, WorldGenerationServiceImpl, DEFAULT_MAGIC_LEVEL,
    DEFAULT_TECH_LEVEL,
};
pub use world_service::{WorldService, WorldServiceImpl};
