//! World Generation Service - Use cases for procedural world creation
//!
//! Validates the caller's parameters, then hands them to the domain
//! assembler with a freshly seeded random source. A world is returned
//! only once it is fully assembled; nothing is persisted here.

use anyhow::Result;
use async_trait::async_trait;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{info, instrument};

use crate::application::dto::{world_templates, WorldTemplate};
use crate::domain::entities::{HistoricFigure, Place, World};
use crate::domain::services::content_tables::SELECTABLE_THEMES;
use crate::domain::services::world_assembler;
use crate::domain::value_objects::{CompleteWorldRequest, ContentCategory, GenerationParameters};

pub const DEFAULT_TECH_LEVEL: i32 = 5;
pub const DEFAULT_MAGIC_LEVEL: i32 = 7;

const MAX_WORLD_NAME_LENGTH: usize = 255;
const MAX_POWER_LEVEL: i32 = 10;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GenerationError {
    #[error("{0}")]
    Validation(String),
}

/// World generation service trait defining the application use cases
#[async_trait]
pub trait WorldGenerationService: Send + Sync {
    /// Quick generation: a 25-place world from a name, theme and two levels
    async fn generate_world(
        &self,
        world_name: &str,
        theme: &str,
        tech_level: i32,
        magic_level: i32,
    ) -> Result<World>;

    /// Basic pipeline with caller-supplied parameters
    async fn generate_custom_world(&self, params: GenerationParameters) -> Result<World>;

    /// Explicit-count pipeline with optional structure passes
    async fn generate_complete_world(&self, request: CompleteWorldRequest) -> Result<World>;

    /// Append one category of generated content to an existing world
    async fn enhance_world(&self, world: World, content_type: &str) -> Result<World>;

    /// One new place for `world`; the caller decides where it goes
    async fn generate_place(&self, world: &World) -> Result<Place>;

    /// One new figure whose references resolve in `world`
    async fn generate_figure(&self, world: &World) -> Result<HistoricFigure>;

    fn themes(&self) -> Vec<String>;

    fn templates(&self) -> Vec<WorldTemplate>;
}

/// Default implementation backed by the domain assembler
#[derive(Debug, Clone, Default)]
pub struct WorldGenerationServiceImpl;

impl WorldGenerationServiceImpl {
    pub fn new() -> Self {
        Self
    }

    fn validate_name(name: &str) -> Result<(), GenerationError> {
        if name.trim().is_empty() {
            return Err(GenerationError::Validation(
                "World name cannot be empty".to_string(),
            ));
        }
        if name.len() > MAX_WORLD_NAME_LENGTH {
            return Err(GenerationError::Validation(format!(
                "World name cannot exceed {} characters",
                MAX_WORLD_NAME_LENGTH
            )));
        }
        Ok(())
    }

    fn validate_levels(tech_level: i32, magic_level: i32) -> Result<(), GenerationError> {
        if !(0..=MAX_POWER_LEVEL).contains(&tech_level) {
            return Err(GenerationError::Validation(format!(
                "Tech level must be between 0 and {}",
                MAX_POWER_LEVEL
            )));
        }
        if !(0..=MAX_POWER_LEVEL).contains(&magic_level) {
            return Err(GenerationError::Validation(format!(
                "Magic level must be between 0 and {}",
                MAX_POWER_LEVEL
            )));
        }
        Ok(())
    }

    fn validate_parameters(params: &GenerationParameters) -> Result<(), GenerationError> {
        Self::validate_name(&params.world_name)?;
        Self::validate_levels(params.tech_level, params.magic_level)
    }
}

#[async_trait]
impl WorldGenerationService for WorldGenerationServiceImpl {
    #[instrument(skip(self), fields(world_name = %world_name))]
    async fn generate_world(
        &self,
        world_name: &str,
        theme: &str,
        tech_level: i32,
        magic_level: i32,
    ) -> Result<World> {
        let params = GenerationParameters::quick(world_name, theme, tech_level, magic_level);
        self.generate_custom_world(params).await
    }

    #[instrument(skip(self, params), fields(world_name = %params.world_name))]
    async fn generate_custom_world(&self, params: GenerationParameters) -> Result<World> {
        Self::validate_parameters(&params)?;

        let mut rng = StdRng::from_entropy();
        let world = world_assembler::assemble_world(&params, &mut rng);

        info!(
            world_id = %world.id,
            places = world.places.len(),
            characters = world.historic_figures.len(),
            "Generated world"
        );
        Ok(world)
    }

    #[instrument(skip(self, request), fields(world_name = %request.world_name))]
    async fn generate_complete_world(&self, request: CompleteWorldRequest) -> Result<World> {
        Self::validate_name(&request.world_name)?;
        Self::validate_levels(request.tech_level, request.magic_level)?;

        let mut rng = StdRng::from_entropy();
        let world = world_assembler::assemble_complete_world(&request, &mut rng);

        info!(
            world_id = %world.id,
            places = world.places.len(),
            characters = world.historic_figures.len(),
            items = world.item_count(),
            "Generated complete world"
        );
        Ok(world)
    }

    #[instrument(skip(self, world), fields(world_id = %world.id))]
    async fn enhance_world(&self, mut world: World, content_type: &str) -> Result<World> {
        let category = ContentCategory::parse(content_type);
        let mut rng = StdRng::from_entropy();
        world_assembler::enhance_content(&mut world, category, &mut rng);

        info!(category = ?category, "Enhanced world content");
        Ok(world)
    }

    async fn generate_place(&self, world: &World) -> Result<Place> {
        let mut rng = StdRng::from_entropy();
        Ok(world_assembler::single_place(world, &mut rng))
    }

    async fn generate_figure(&self, world: &World) -> Result<HistoricFigure> {
        let mut rng = StdRng::from_entropy();
        Ok(world_assembler::single_figure(world, &mut rng))
    }

    fn themes(&self) -> Vec<String> {
        SELECTABLE_THEMES.iter().map(|t| t.to_string()).collect()
    }

    fn templates(&self) -> Vec<WorldTemplate> {
        world_templates()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::DEFAULT_THEME;

    #[tokio::test]
    async fn test_quick_generation_scenario() {
        let service = WorldGenerationServiceImpl::new();

        let world = service
            .generate_world("Aeloria", DEFAULT_THEME, 5, 7)
            .await
            .unwrap();

        assert_eq!(world.name, "Aeloria");
        assert!(world.description.contains("Aeloria"));
        assert_eq!(world.places.len(), 25);
        assert!(!world.spell_books.is_empty());
    }

    #[tokio::test]
    async fn test_empty_name_is_a_validation_error() {
        let service = WorldGenerationServiceImpl::new();

        let err = service
            .generate_world("   ", DEFAULT_THEME, 5, 7)
            .await
            .unwrap_err();

        assert_eq!(
            err.downcast_ref::<GenerationError>(),
            Some(&GenerationError::Validation(
                "World name cannot be empty".to_string()
            ))
        );
    }

    #[tokio::test]
    async fn test_out_of_range_levels_are_rejected() {
        let service = WorldGenerationServiceImpl::new();

        assert!(service.generate_world("Aeloria", DEFAULT_THEME, 11, 5).await.is_err());
        assert!(service.generate_world("Aeloria", DEFAULT_THEME, 5, -1).await.is_err());

        let long_name = "x".repeat(256);
        let request = CompleteWorldRequest {
            world_name: long_name,
            ..Default::default()
        };
        assert!(service.generate_complete_world(request).await.is_err());
    }

    #[tokio::test]
    async fn test_zero_levels_generate_no_magic_or_technology() {
        let service = WorldGenerationServiceImpl::new();

        let world = service
            .generate_world("Dustfall", DEFAULT_THEME, 0, 0)
            .await
            .unwrap();

        assert!(world.spell_books.is_empty());
        assert!(world.runes_of_power.is_empty());
        assert!(world.alchemy_recipes.is_empty());
        assert!(world.technical_specs.is_empty());
        assert!(!world.world_info.laws.magic_exists);
    }

    #[tokio::test]
    async fn test_enhance_unknown_type_adds_places_and_characters() {
        let service = WorldGenerationServiceImpl::new();
        let world = World::new("Aeloria");

        let world = service.enhance_world(world, "weather").await.unwrap();

        assert_eq!(world.places.len(), 5);
        assert_eq!(world.historic_figures.len(), 3);
    }

    #[tokio::test]
    async fn test_generated_figure_only_knows_existing_figures() {
        let service = WorldGenerationServiceImpl::new();
        let mut world = World::new("Empty");

        for _ in 0..20 {
            let figure = service.generate_figure(&world).await.unwrap();
            assert!(figure
                .relationships
                .iter()
                .all(|id| world.find_figure(*id).is_some()));
            world.historic_figures.push(figure);
        }
    }

    #[test]
    fn test_catalogs() {
        let service = WorldGenerationServiceImpl::new();
        assert_eq!(service.themes().len(), 8);
        assert_eq!(service.templates().len(), 5);
    }
}
