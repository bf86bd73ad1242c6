//! Magic entities - Spell books, runes of power and alchemy recipes

use serde::{Deserialize, Serialize};

use crate::domain::entities::MagicType;
use crate::domain::value_objects::{FigureId, RecipeId, RuneId, SpellBookId, SpellId};

// ============================================================================
// Spell books
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SpellBook {
    pub id: SpellBookId,
    pub name: String,
    pub description: String,
    pub author_id: Option<FigureId>,
    pub magic_school: MagicType,
    pub required_level: i32,
    pub spells: Vec<Spell>,
    pub language: String,
    pub is_complete: bool,
    pub missing_pages: Vec<String>,
}

impl Default for SpellBook {
    fn default() -> Self {
        Self {
            id: SpellBookId::new(),
            name: String::new(),
            description: String::new(),
            author_id: None,
            magic_school: MagicType::Arcane,
            required_level: 1,
            spells: Vec::new(),
            language: String::new(),
            is_complete: true,
            missing_pages: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Spell {
    pub id: SpellId,
    pub name: String,
    pub description: String,
    pub level: i32,
    pub school: MagicType,
    pub components: String,
    pub casting_time: String,
    pub range: String,
    pub duration: String,
    pub effects: Vec<String>,
    pub is_ritual: bool,
}

// ============================================================================
// Runes
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RuneOfPower {
    pub id: RuneId,
    pub name: String,
    pub symbol: String,
    pub description: String,
    #[serde(rename = "type")]
    pub rune_type: RuneType,
    /// 1-10
    pub power_level: i32,
    pub element: String,
    pub effects: Vec<String>,
    pub activation_condition: String,
    pub is_active: bool,
    /// Name of the place where the rune is inscribed
    pub location: String,
    pub creator_id: Option<FigureId>,
}

impl Default for RuneOfPower {
    fn default() -> Self {
        Self {
            id: RuneId::new(),
            name: String::new(),
            symbol: String::new(),
            description: String::new(),
            rune_type: RuneType::Other,
            power_level: 1,
            element: String::new(),
            effects: Vec::new(),
            activation_condition: String::new(),
            is_active: false,
            location: String::new(),
            creator_id: None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RuneType {
    Protection,
    Enhancement,
    Destruction,
    Binding,
    Summoning,
    Divination,
    Healing,
    Transformation,
    #[default]
    Other,
}

impl RuneType {
    pub const ALL: [RuneType; 9] = [
        RuneType::Protection,
        RuneType::Enhancement,
        RuneType::Destruction,
        RuneType::Binding,
        RuneType::Summoning,
        RuneType::Divination,
        RuneType::Healing,
        RuneType::Transformation,
        RuneType::Other,
    ];
}

// ============================================================================
// Alchemy
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AlchemyRecipe {
    pub id: RecipeId,
    pub name: String,
    pub description: String,
    #[serde(rename = "type")]
    pub alchemy_type: AlchemyType,
    /// 1-10
    pub difficulty: i32,
    pub ingredients: Vec<Ingredient>,
    pub steps: Vec<String>,
    pub preparation_time_hours: u32,
    pub effects: Vec<String>,
    pub side_effects: Vec<String>,
    pub creator_id: Option<FigureId>,
    pub is_secret: bool,
}

impl Default for AlchemyRecipe {
    fn default() -> Self {
        Self {
            id: RecipeId::new(),
            name: String::new(),
            description: String::new(),
            alchemy_type: AlchemyType::Other,
            difficulty: 3,
            ingredients: Vec::new(),
            steps: Vec::new(),
            preparation_time_hours: 1,
            effects: Vec::new(),
            side_effects: Vec::new(),
            creator_id: None,
            is_secret: false,
        }
    }
}

/// Map a five-tier difficulty label onto the 1-10 scale
pub fn alchemy_difficulty_from_label(label: &str) -> i32 {
    match label.trim().to_lowercase().as_str() {
        "novice" => 1,
        "apprentice" => 3,
        "journeyman" => 5,
        "expert" => 7,
        "master" => 10,
        _ => 3,
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Ingredient {
    pub name: String,
    pub quantity: i32,
    pub unit: String,
    pub rarity: IngredientRarity,
    pub source: String,
    pub properties: Vec<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AlchemyType {
    Healing,
    Poison,
    Enhancement,
    Transformation,
    Utility,
    Combat,
    Divination,
    #[default]
    Other,
}

impl AlchemyType {
    pub const ALL: [AlchemyType; 8] = [
        AlchemyType::Healing,
        AlchemyType::Poison,
        AlchemyType::Enhancement,
        AlchemyType::Transformation,
        AlchemyType::Utility,
        AlchemyType::Combat,
        AlchemyType::Divination,
        AlchemyType::Other,
    ];
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum IngredientRarity {
    #[default]
    Common,
    Uncommon,
    Rare,
    Epic,
    Legendary,
}

impl IngredientRarity {
    pub const ALL: [IngredientRarity; 5] = [
        IngredientRarity::Common,
        IngredientRarity::Uncommon,
        IngredientRarity::Rare,
        IngredientRarity::Epic,
        IngredientRarity::Legendary,
    ];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alchemy_difficulty_tiers() {
        assert_eq!(alchemy_difficulty_from_label("Novice"), 1);
        assert_eq!(alchemy_difficulty_from_label("apprentice"), 3);
        assert_eq!(alchemy_difficulty_from_label("Journeyman"), 5);
        assert_eq!(alchemy_difficulty_from_label("EXPERT"), 7);
        assert_eq!(alchemy_difficulty_from_label("Master"), 10);
        assert_eq!(alchemy_difficulty_from_label("Grandmaster"), 3);
    }
}
