//! Inputs that drive procedural world generation

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

pub const DEFAULT_THEME: &str = "Fantasy-SciFi";

/// Upper bound applied to every requested content count
pub const MAX_CATEGORY_COUNT: i32 = 1000;

/// Clamp a caller-supplied count into `0..=MAX_CATEGORY_COUNT`
pub fn clamp_count(count: i32) -> usize {
    count.clamp(0, MAX_CATEGORY_COUNT) as usize
}

/// Parameters for the basic generation pipeline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GenerationParameters {
    pub world_name: String,
    pub theme: String,
    pub tech_level: i32,
    pub magic_level: i32,
    pub preferred_biomes: Vec<String>,
    pub preferred_races: Vec<String>,
    pub include_ancient_ruins: bool,
    pub include_space_travel: bool,
    pub include_magic_tech: bool,
    /// Number of places to generate
    pub world_size: i32,
    pub difficulty_level: String,
}

impl Default for GenerationParameters {
    fn default() -> Self {
        Self {
            world_name: String::new(),
            theme: DEFAULT_THEME.to_string(),
            tech_level: 5,
            magic_level: 7,
            preferred_biomes: Vec::new(),
            preferred_races: Vec::new(),
            include_ancient_ruins: true,
            include_space_travel: false,
            include_magic_tech: true,
            world_size: 50,
            difficulty_level: "Medium".to_string(),
        }
    }
}

impl GenerationParameters {
    /// Parameters used by the quick generator
    pub fn quick(world_name: &str, theme: &str, tech_level: i32, magic_level: i32) -> Self {
        Self {
            world_name: world_name.to_string(),
            theme: theme.to_string(),
            tech_level,
            magic_level,
            include_magic_tech: true,
            include_space_travel: tech_level >= 7,
            world_size: 25,
            ..Default::default()
        }
    }
}

/// Generation request where every category count and structural pass is explicit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CompleteWorldRequest {
    pub world_name: String,
    pub theme: String,
    pub tech_level: i32,
    pub magic_level: i32,
    /// Place count used when no hierarchy is requested
    pub total_places: i32,
    pub continent_count: i32,
    pub country_count: i32,
    pub region_count: i32,
    pub city_count: i32,
    pub town_count: i32,
    pub village_count: i32,
    pub dungeon_count: i32,
    pub natural_feature_count: i32,
    pub character_count: i32,
    pub historical_event_count: i32,
    pub equipment_count: i32,
    pub spell_book_count: i32,
    pub rune_count: i32,
    pub alchemy_recipe_count: i32,
    pub technology_count: i32,
    pub include_magic_tech: bool,
    pub include_space_travel: bool,
    pub include_ancient_ruins: bool,
    pub generate_hierarchy: bool,
    pub generate_connections: bool,
    pub generate_economy: bool,
    pub generate_politics: bool,
    pub preferred_biomes: Vec<String>,
    pub preferred_races: Vec<String>,
    pub difficulty_level: String,
    /// Local, Regional, Continental, Global or Interplanetary
    pub world_scale: String,
    pub custom_settings: BTreeMap<String, serde_json::Value>,
}

impl Default for CompleteWorldRequest {
    fn default() -> Self {
        Self {
            world_name: String::new(),
            theme: DEFAULT_THEME.to_string(),
            tech_level: 5,
            magic_level: 7,
            total_places: 50,
            continent_count: 3,
            country_count: 8,
            region_count: 15,
            city_count: 20,
            town_count: 25,
            village_count: 30,
            dungeon_count: 12,
            natural_feature_count: 18,
            character_count: 25,
            historical_event_count: 15,
            equipment_count: 40,
            spell_book_count: 8,
            rune_count: 12,
            alchemy_recipe_count: 10,
            technology_count: 15,
            include_magic_tech: true,
            include_space_travel: false,
            include_ancient_ruins: true,
            generate_hierarchy: true,
            generate_connections: true,
            generate_economy: true,
            generate_politics: true,
            preferred_biomes: Vec::new(),
            preferred_races: Vec::new(),
            difficulty_level: "Medium".to_string(),
            world_scale: "Continental".to_string(),
            custom_settings: BTreeMap::new(),
        }
    }
}

impl CompleteWorldRequest {
    /// The basic parameters shared with the quick pipeline
    pub fn parameters(&self) -> GenerationParameters {
        GenerationParameters {
            world_name: self.world_name.clone(),
            theme: self.theme.clone(),
            tech_level: self.tech_level,
            magic_level: self.magic_level,
            preferred_biomes: self.preferred_biomes.clone(),
            preferred_races: self.preferred_races.clone(),
            include_ancient_ruins: self.include_ancient_ruins,
            include_space_travel: self.include_space_travel,
            include_magic_tech: self.include_magic_tech,
            world_size: self.total_places,
            difficulty_level: self.difficulty_level.clone(),
        }
    }

    pub fn hierarchy_place_count(&self) -> usize {
        [
            self.continent_count,
            self.country_count,
            self.region_count,
            self.city_count,
            self.town_count,
            self.village_count,
            self.dungeon_count,
            self.natural_feature_count,
        ]
        .into_iter()
        .map(clamp_count)
        .sum()
    }
}

/// Content category targeted by incremental enhancement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentCategory {
    Places,
    Characters,
    Events,
    Technology,
    Magic,
    /// Anything unrecognised: places and characters
    General,
}

impl ContentCategory {
    pub fn parse(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "places" | "place" => Self::Places,
            "characters" | "character" => Self::Characters,
            "events" | "event" => Self::Events,
            "technology" => Self::Technology,
            "magic" => Self::Magic,
            _ => Self::General,
        }
    }
}
