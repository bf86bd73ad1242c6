//! Repository port - Interface for world persistence
//!
//! Application services depend on this trait, not on the file store behind it.

use anyhow::Result;
use async_trait::async_trait;

use crate::application::dto::WorldMetadata;
use crate::domain::entities::World;
use crate::domain::value_objects::WorldId;

/// Repository port for whole-world persistence
#[async_trait]
pub trait WorldRepositoryPort: Send + Sync {
    /// Persist a world, assigning an id and creation date when they are unset.
    /// Returns the world as stored.
    async fn save(&self, world: World) -> Result<World>;

    /// Get a world by ID
    async fn load(&self, id: WorldId) -> Result<Option<World>>;

    /// Summaries of every stored world, most recently modified first
    async fn list(&self) -> Result<Vec<WorldMetadata>>;

    /// Delete a world. Returns false when nothing was stored under the id.
    async fn delete(&self, id: WorldId) -> Result<bool>;

    async fn exists(&self, id: WorldId) -> Result<bool>;
}

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("Storage I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("World serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}
