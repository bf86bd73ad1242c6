//! Place entity - Geographic locations, from continents down to single rooms

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::PlaceId;

/// A place in the world
///
/// Places form a tree through `parent_place_id`. The tree is stored flat in
/// the owning world and children are found by scanning for their parent id,
/// so a place is only ever appended and never re-parented.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Place {
    pub id: PlaceId,
    pub name: String,
    pub description: String,
    #[serde(rename = "type")]
    pub place_type: PlaceType,
    pub parent_place_id: Option<PlaceId>,
    pub geography: GeographicInfo,
    pub population: Population,
    pub notable_features: Vec<String>,
    pub custom_properties: BTreeMap<String, String>,
}

impl Place {
    pub fn new(name: impl Into<String>, place_type: PlaceType) -> Self {
        Self {
            name: name.into(),
            place_type,
            ..Default::default()
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_parent(mut self, parent_id: PlaceId) -> Self {
        self.parent_place_id = Some(parent_id);
        self
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlaceType {
    World,
    Continent,
    Country,
    Region,
    Province,
    City,
    Town,
    Village,
    District,
    Building,
    Room,
    NaturalFeature,
    Dungeon,
    #[default]
    Other,
}

impl PlaceType {
    /// Types the basic generator draws from when no hierarchy is requested
    pub const SETTLEMENT_MIX: [PlaceType; 6] = [
        PlaceType::City,
        PlaceType::Town,
        PlaceType::Village,
        PlaceType::NaturalFeature,
        PlaceType::Dungeon,
        PlaceType::Other,
    ];

    /// Case-insensitive parse of a variant name
    pub fn parse(value: &str) -> Option<Self> {
        let normalized: String = value
            .chars()
            .filter(|c| c.is_alphanumeric())
            .collect::<String>()
            .to_lowercase();
        let place_type = match normalized.as_str() {
            "world" => Self::World,
            "continent" => Self::Continent,
            "country" => Self::Country,
            "region" => Self::Region,
            "province" => Self::Province,
            "city" => Self::City,
            "town" => Self::Town,
            "village" => Self::Village,
            "district" => Self::District,
            "building" => Self::Building,
            "room" => Self::Room,
            "naturalfeature" => Self::NaturalFeature,
            "dungeon" => Self::Dungeon,
            "other" => Self::Other,
            _ => return None,
        };
        Some(place_type)
    }
}

impl std::fmt::Display for PlaceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            PlaceType::NaturalFeature => "Natural Feature",
            other => return write!(f, "{:?}", other),
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GeographicInfo {
    pub climate: String,
    pub terrain: String,
    pub natural_resources: Vec<String>,
    pub coordinates: Coordinates,
    /// Square kilometres
    pub area: f64,
    pub borders: Vec<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
    /// Metres
    pub elevation: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Population {
    pub total_count: i64,
    pub race_distribution: BTreeMap<String, i32>,
    pub class_distribution: BTreeMap<String, i32>,
    pub age_distribution: BTreeMap<String, i32>,
    pub government_type: String,
    pub languages: Vec<String>,
    pub religions: Vec<String>,
}
