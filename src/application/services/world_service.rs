//! World Service - Application service for stored worlds
//!
//! Thin use-case layer over the repository port: listing, loading,
//! saving, deleting and copying whole worlds.

use std::sync::Arc;

use anyhow::{Context, Result};
use async_trait::async_trait;
use tracing::{debug, info, instrument};

use crate::application::dto::WorldMetadata;
use crate::application::ports::outbound::WorldRepositoryPort;
use crate::domain::entities::World;
use crate::domain::value_objects::WorldId;

/// World service trait defining the application use cases
#[async_trait]
pub trait WorldService: Send + Sync {
    async fn list_worlds(&self) -> Result<Vec<WorldMetadata>>;

    /// Get a world by ID
    async fn get_world(&self, id: WorldId) -> Result<Option<World>>;

    /// Save a world, assigning an id and creation date when missing
    async fn save_world(&self, world: World) -> Result<World>;

    /// Delete a world. Returns false when it did not exist.
    async fn delete_world(&self, id: WorldId) -> Result<bool>;

    /// Copy a stored world under a fresh id. Returns None when the source is missing.
    async fn copy_world(&self, id: WorldId, new_name: Option<String>) -> Result<Option<World>>;
}

/// Default implementation of WorldService over a repository port
pub struct WorldServiceImpl {
    repository: Arc<dyn WorldRepositoryPort>,
}

impl WorldServiceImpl {
    pub fn new(repository: Arc<dyn WorldRepositoryPort>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl WorldService for WorldServiceImpl {
    #[instrument(skip(self))]
    async fn list_worlds(&self) -> Result<Vec<WorldMetadata>> {
        let worlds = self
            .repository
            .list()
            .await
            .context("Failed to list worlds from repository")?;
        debug!(count = worlds.len(), "Listed worlds");
        Ok(worlds)
    }

    #[instrument(skip(self))]
    async fn get_world(&self, id: WorldId) -> Result<Option<World>> {
        self.repository
            .load(id)
            .await
            .context("Failed to get world from repository")
    }

    #[instrument(skip(self, world), fields(world_name = %world.name))]
    async fn save_world(&self, world: World) -> Result<World> {
        let world = self
            .repository
            .save(world)
            .await
            .context("Failed to save world to repository")?;
        info!(world_id = %world.id, "Saved world: {}", world.name);
        Ok(world)
    }

    #[instrument(skip(self))]
    async fn delete_world(&self, id: WorldId) -> Result<bool> {
        let deleted = self
            .repository
            .delete(id)
            .await
            .context("Failed to delete world from repository")?;
        if deleted {
            info!(world_id = %id, "Deleted world");
        }
        Ok(deleted)
    }

    #[instrument(skip(self))]
    async fn copy_world(&self, id: WorldId, new_name: Option<String>) -> Result<Option<World>> {
        let Some(original) = self.get_world(id).await? else {
            return Ok(None);
        };

        let name = new_name
            .filter(|n| !n.trim().is_empty())
            .unwrap_or_else(|| format!("{} (Copy)", original.name));
        let copy = self.save_world(original.duplicate(name)).await?;

        info!(source_id = %id, world_id = %copy.id, "Copied world");
        Ok(Some(copy))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::Mutex;

    use chrono::Utc;

    use super::*;
    use crate::domain::entities::{Place, PlaceType};

    #[derive(Default)]
    struct MockRepository {
        worlds: Mutex<HashMap<WorldId, World>>,
    }

    #[async_trait]
    impl WorldRepositoryPort for MockRepository {
        async fn save(&self, world: World) -> Result<World> {
            self.worlds.lock().unwrap().insert(world.id, world.clone());
            Ok(world)
        }

        async fn load(&self, id: WorldId) -> Result<Option<World>> {
            Ok(self.worlds.lock().unwrap().get(&id).cloned())
        }

        async fn list(&self) -> Result<Vec<WorldMetadata>> {
            Ok(self
                .worlds
                .lock()
                .unwrap()
                .values()
                .map(|w| WorldMetadata::from_world(w, Utc::now(), 0))
                .collect())
        }

        async fn delete(&self, id: WorldId) -> Result<bool> {
            Ok(self.worlds.lock().unwrap().remove(&id).is_some())
        }

        async fn exists(&self, id: WorldId) -> Result<bool> {
            Ok(self.worlds.lock().unwrap().contains_key(&id))
        }
    }

    fn stored_world() -> World {
        let mut world = World::new("Aeloria");
        world.places.push(Place::new("NeoHaven", PlaceType::City));
        world
    }

    #[tokio::test]
    async fn test_copy_gets_new_id_and_keeps_content() {
        let service = WorldServiceImpl::new(Arc::new(MockRepository::default()));
        let original = service.save_world(stored_world()).await.unwrap();

        let copy = service
            .copy_world(original.id, None)
            .await
            .unwrap()
            .unwrap();

        assert_ne!(copy.id, original.id);
        assert_eq!(copy.name, "Aeloria (Copy)");
        assert_eq!(copy.places, original.places);

        let reloaded = service.get_world(original.id).await.unwrap().unwrap();
        assert_eq!(reloaded, original);
        assert_eq!(service.list_worlds().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_copy_with_name_and_missing_source() {
        let service = WorldServiceImpl::new(Arc::new(MockRepository::default()));
        let original = service.save_world(stored_world()).await.unwrap();

        let copy = service
            .copy_world(original.id, Some("Aeloria Prime".to_string()))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(copy.name, "Aeloria Prime");

        assert!(service.copy_world(WorldId::new(), None).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_delete_reports_missing_world() {
        let service = WorldServiceImpl::new(Arc::new(MockRepository::default()));
        let world = service.save_world(stored_world()).await.unwrap();

        assert!(service.delete_world(world.id).await.unwrap());
        assert!(!service.delete_world(world.id).await.unwrap());
    }
}
