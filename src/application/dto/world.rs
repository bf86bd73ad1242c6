//! World DTOs - Storage summaries, templates and export packages

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::World;
use crate::domain::value_objects::{WorldId, DEFAULT_THEME};

/// Listing entry for a stored world
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorldMetadata {
    pub id: WorldId,
    pub name: String,
    pub description: String,
    pub creation_date: DateTime<Utc>,
    pub last_modified: DateTime<Utc>,
    pub genre: String,
    /// First active theme, empty when the world has none
    pub theme: String,
    pub place_count: usize,
    pub character_count: usize,
    pub event_count: usize,
    pub item_count: usize,
    pub file_size_bytes: u64,
}

impl WorldMetadata {
    pub fn from_world(world: &World, last_modified: DateTime<Utc>, file_size_bytes: u64) -> Self {
        Self {
            id: world.id,
            name: world.name.clone(),
            description: world.description.clone(),
            creation_date: world.creation_date,
            last_modified,
            genre: world.world_info.genre.clone(),
            theme: world
                .world_info
                .active_themes
                .first()
                .cloned()
                .unwrap_or_default(),
            place_count: world.places.len(),
            character_count: world.historic_figures.len(),
            event_count: world.world_events.len(),
            item_count: world.item_count(),
            file_size_bytes,
        }
    }
}

/// A preset combination of theme and power levels
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorldTemplate {
    pub name: String,
    pub description: String,
    pub theme: String,
    pub tech_level: i32,
    pub magic_level: i32,
}

impl WorldTemplate {
    fn new(name: &str, description: &str, theme: &str, tech_level: i32, magic_level: i32) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            theme: theme.to_string(),
            tech_level,
            magic_level,
        }
    }
}

pub fn world_templates() -> Vec<WorldTemplate> {
    vec![
        WorldTemplate::new(
            "Magitech Empire",
            "A realm where magic and technology have merged into a unified force",
            DEFAULT_THEME,
            8,
            7,
        ),
        WorldTemplate::new(
            "Cyber-Mystical Realm",
            "A world where ancient magic meets cutting-edge cybernetics",
            "Cyberpunk-Fantasy",
            9,
            6,
        ),
        WorldTemplate::new(
            "Quantum Spellcaster Society",
            "A reality where quantum mechanics and magical theory intertwine",
            "Quantum-Mystical",
            10,
            9,
        ),
        WorldTemplate::new(
            "Bio-Magical Synthesis",
            "A world where biological enhancement and magical evolution go hand in hand",
            "Bio-Magical",
            7,
            8,
        ),
        WorldTemplate::new(
            "Stellar Kingdoms",
            "Interstellar empires powered by both technology and cosmic magic",
            "Space-Magic",
            9,
            7,
        ),
    ]
}

/// Content counts reported alongside an export
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorldSummary {
    pub places: usize,
    pub characters: usize,
    pub events: usize,
    pub technical_specs: usize,
    pub magic_items: usize,
}

impl From<&World> for WorldSummary {
    fn from(world: &World) -> Self {
        Self {
            places: world.places.len(),
            characters: world.historic_figures.len(),
            events: world.world_events.len(),
            technical_specs: world.technical_specs.len(),
            magic_items: world.magic_item_count(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorldExport {
    pub world_id: WorldId,
    pub exported_at: DateTime<Utc>,
    pub world_data: World,
    pub narrative: String,
    pub summary: WorldSummary,
}

// ============================================================================
// Request bodies
// ============================================================================

/// Body of the quick generation endpoints
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuickWorldRequest {
    pub world_name: String,
    #[serde(default)]
    pub theme: Option<String>,
    #[serde(default)]
    pub tech_level: Option<i32>,
    #[serde(default)]
    pub magic_level: Option<i32>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnhanceWorldRequest {
    pub content_type: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CopyWorldRequest {
    #[serde(default)]
    pub new_name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{Place, PlaceType};

    #[test]
    fn test_metadata_counts_items_across_collections() {
        let mut world = World::new("Aeloria");
        world.world_info.active_themes = vec!["Space-Magic".to_string(), "Adventure".to_string()];
        world.places.push(Place::new("NeoHaven", PlaceType::City));

        let metadata = WorldMetadata::from_world(&world, Utc::now(), 512);

        assert_eq!(metadata.theme, "Space-Magic");
        assert_eq!(metadata.place_count, 1);
        assert_eq!(metadata.item_count, 0);
        assert_eq!(metadata.file_size_bytes, 512);
    }

    #[test]
    fn test_templates() {
        let templates = world_templates();
        assert_eq!(templates.len(), 5);
        assert_eq!(templates[2].name, "Quantum Spellcaster Society");
        assert_eq!(templates[2].tech_level, 10);
    }
}
