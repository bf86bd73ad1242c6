//! JSON file repository - One pretty-printed `{id}.json` per world

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::fs;
use tracing::{debug, warn};

use crate::application::dto::WorldMetadata;
use crate::application::ports::outbound::{StorageError, WorldRepositoryPort};
use crate::domain::entities::World;
use crate::domain::value_objects::WorldId;

/// Repository storing whole worlds as JSON documents in a directory
pub struct JsonWorldRepository {
    directory: PathBuf,
}

impl JsonWorldRepository {
    /// Open the repository, creating the storage directory if needed
    pub async fn new(directory: impl Into<PathBuf>) -> Result<Self> {
        let directory = directory.into();
        fs::create_dir_all(&directory)
            .await
            .with_context(|| format!("Failed to create storage directory {}", directory.display()))?;
        Ok(Self { directory })
    }

    fn path_for(&self, id: WorldId) -> PathBuf {
        self.directory.join(format!("{}.json", id))
    }

    async fn read_world(path: &Path) -> Result<World, StorageError> {
        let contents = fs::read_to_string(path).await?;
        Ok(serde_json::from_str(&contents)?)
    }

    async fn read_metadata(path: &Path) -> Result<WorldMetadata, StorageError> {
        let file_metadata = fs::metadata(path).await?;
        let world = Self::read_world(path).await?;
        let last_modified = file_metadata
            .modified()
            .map(DateTime::<Utc>::from)
            .unwrap_or(world.creation_date);
        Ok(WorldMetadata::from_world(
            &world,
            last_modified,
            file_metadata.len(),
        ))
    }
}

#[async_trait]
impl WorldRepositoryPort for JsonWorldRepository {
    async fn save(&self, mut world: World) -> Result<World> {
        if world.id.is_nil() {
            world.id = WorldId::new();
        }
        if world.creation_date == DateTime::<Utc>::default() {
            world.creation_date = Utc::now();
        }

        let json = serde_json::to_string_pretty(&world).map_err(StorageError::from)?;
        let path = self.path_for(world.id);
        fs::write(&path, json)
            .await
            .map_err(StorageError::from)
            .with_context(|| format!("Failed to write world file {}", path.display()))?;

        debug!(world_id = %world.id, path = %path.display(), "Wrote world file");
        Ok(world)
    }

    async fn load(&self, id: WorldId) -> Result<Option<World>> {
        let path = self.path_for(id);
        if !fs::try_exists(&path).await.map_err(StorageError::from)? {
            return Ok(None);
        }
        let world = Self::read_world(&path)
            .await
            .with_context(|| format!("Failed to read world file {}", path.display()))?;
        Ok(Some(world))
    }

    async fn list(&self) -> Result<Vec<WorldMetadata>> {
        let mut entries = fs::read_dir(&self.directory)
            .await
            .map_err(StorageError::from)
            .context("Failed to read storage directory")?;

        let mut worlds = Vec::new();
        while let Some(entry) = entries.next_entry().await.map_err(StorageError::from)? {
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }
            match Self::read_metadata(&path).await {
                Ok(metadata) => worlds.push(metadata),
                Err(e) => warn!(path = %path.display(), error = %e, "Skipping unreadable world file"),
            }
        }

        worlds.sort_by(|a, b| b.last_modified.cmp(&a.last_modified));
        Ok(worlds)
    }

    async fn delete(&self, id: WorldId) -> Result<bool> {
        match fs::remove_file(self.path_for(id)).await {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(StorageError::from(e)).context("Failed to delete world file"),
        }
    }

    async fn exists(&self, id: WorldId) -> Result<bool> {
        Ok(fs::try_exists(self.path_for(id))
            .await
            .map_err(StorageError::from)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{Place, PlaceType};

    fn sample_world() -> World {
        let mut world = World::new("Aeloria");
        world.world_info.active_themes = vec!["Space-Magic".to_string()];
        world.places.push(Place::new("NeoHaven", PlaceType::City));
        world
    }

    #[tokio::test]
    async fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let repository = JsonWorldRepository::new(dir.path()).await.unwrap();
        let world = sample_world();

        let saved = repository.save(world.clone()).await.unwrap();
        let loaded = repository.load(saved.id).await.unwrap().unwrap();

        assert_eq!(loaded, world);
        assert!(dir.path().join(format!("{}.json", world.id)).exists());
        assert!(repository.exists(world.id).await.unwrap());
    }

    #[tokio::test]
    async fn test_repeated_loads_serialize_identically() {
        let dir = tempfile::tempdir().unwrap();
        let repository = JsonWorldRepository::new(dir.path()).await.unwrap();
        let saved = repository.save(sample_world()).await.unwrap();

        let first = repository.load(saved.id).await.unwrap().unwrap();
        let second = repository.load(saved.id).await.unwrap().unwrap();

        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }

    #[tokio::test]
    async fn test_save_assigns_missing_id_and_date() {
        let dir = tempfile::tempdir().unwrap();
        let repository = JsonWorldRepository::new(dir.path()).await.unwrap();
        let world = World {
            id: WorldId::nil(),
            name: "Unsaved".to_string(),
            ..Default::default()
        };

        let saved = repository.save(world).await.unwrap();

        assert!(!saved.id.is_nil());
        assert_ne!(saved.creation_date, DateTime::<Utc>::default());
    }

    #[tokio::test]
    async fn test_missing_world() {
        let dir = tempfile::tempdir().unwrap();
        let repository = JsonWorldRepository::new(dir.path()).await.unwrap();

        assert!(repository.load(WorldId::new()).await.unwrap().is_none());
        assert!(!repository.delete(WorldId::new()).await.unwrap());
    }

    #[tokio::test]
    async fn test_list_skips_unreadable_files() {
        let dir = tempfile::tempdir().unwrap();
        let repository = JsonWorldRepository::new(dir.path()).await.unwrap();
        let saved = repository.save(sample_world()).await.unwrap();
        std::fs::write(dir.path().join("broken.json"), "{ not json").unwrap();
        std::fs::write(dir.path().join("notes.txt"), "ignore me").unwrap();

        let listed = repository.list().await.unwrap();

        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].id, saved.id);
        assert_eq!(listed[0].theme, "Space-Magic");
        assert_eq!(listed[0].place_count, 1);
        assert!(listed[0].file_size_bytes > 0);
    }

    #[tokio::test]
    async fn test_delete_removes_file() {
        let dir = tempfile::tempdir().unwrap();
        let repository = JsonWorldRepository::new(dir.path()).await.unwrap();
        let saved = repository.save(sample_world()).await.unwrap();

        assert!(repository.delete(saved.id).await.unwrap());
        assert!(!repository.exists(saved.id).await.unwrap());
    }
}
