//! Equipment entities - Weapons, magical artifacts and sci-fi devices
//!
//! Equipment is a sum type. On the wire every item carries a `"$type"`
//! discriminator naming its variant, with the shared fields inlined beside
//! the variant-specific ones.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{EquipmentId, FigureId};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "$type")]
pub enum Equipment {
    Weapon(Weapon),
    MagicalArtifact(MagicalArtifact),
    SciFiArtifact(SciFiArtifact),
}

impl Equipment {
    pub fn common(&self) -> &EquipmentCommon {
        match self {
            Equipment::Weapon(w) => &w.common,
            Equipment::MagicalArtifact(a) => &a.common,
            Equipment::SciFiArtifact(a) => &a.common,
        }
    }

    pub fn id(&self) -> EquipmentId {
        self.common().id
    }

    pub fn name(&self) -> &str {
        &self.common().name
    }

    pub fn kind_label(&self) -> &'static str {
        match self {
            Equipment::Weapon(_) => "Weapon",
            Equipment::MagicalArtifact(_) => "Magical Artifact",
            Equipment::SciFiArtifact(_) => "Sci-Fi Artifact",
        }
    }
}

/// Fields shared by every kind of equipment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EquipmentCommon {
    pub id: EquipmentId,
    pub name: String,
    pub description: String,
    #[serde(rename = "type")]
    pub equipment_type: EquipmentType,
    pub rarity: EquipmentRarity,
    /// Kilograms
    pub weight: f64,
    /// Gold pieces or credits
    pub value: f64,
    pub material: String,
    pub condition: String,
    pub creator_id: Option<FigureId>,
    pub current_owner_id: Option<FigureId>,
    pub history: Vec<String>,
    pub properties: BTreeMap<String, i32>,
}

impl Default for EquipmentCommon {
    fn default() -> Self {
        Self {
            id: EquipmentId::new(),
            name: String::new(),
            description: String::new(),
            equipment_type: EquipmentType::Other,
            rarity: EquipmentRarity::Common,
            weight: 0.0,
            value: 0.0,
            material: String::new(),
            condition: "Good".to_string(),
            creator_id: None,
            current_owner_id: None,
            history: Vec::new(),
            properties: BTreeMap::new(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Weapon {
    #[serde(flatten)]
    pub common: EquipmentCommon,
    pub weapon_type: WeaponType,
    pub damage: i32,
    pub range: i32,
    pub damage_type: String,
    pub is_magical: bool,
    pub enchantments: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MagicalArtifact {
    #[serde(flatten)]
    pub common: EquipmentCommon,
    pub magic_type: MagicType,
    pub magic_power: i32,
    pub spells: Vec<String>,
    pub charges: i32,
    pub max_charges: i32,
    pub requires_attunement: bool,
    pub activation_method: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SciFiArtifact {
    #[serde(flatten)]
    pub common: EquipmentCommon,
    pub technology_type: TechnologyType,
    pub tech_level: i32,
    pub power_source: String,
    pub power_level: i32,
    pub functions: Vec<String>,
    pub is_operational: bool,
    pub operating_system: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum EquipmentType {
    Weapon,
    Armor,
    Tool,
    Consumable,
    Artifact,
    Jewelry,
    Book,
    Container,
    #[default]
    Other,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum EquipmentRarity {
    #[default]
    Common,
    Uncommon,
    Rare,
    Epic,
    Legendary,
    Mythical,
    Unique,
}

impl EquipmentRarity {
    pub const ALL: [EquipmentRarity; 7] = [
        EquipmentRarity::Common,
        EquipmentRarity::Uncommon,
        EquipmentRarity::Rare,
        EquipmentRarity::Epic,
        EquipmentRarity::Legendary,
        EquipmentRarity::Mythical,
        EquipmentRarity::Unique,
    ];
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum WeaponType {
    Sword,
    Axe,
    Mace,
    Bow,
    Crossbow,
    Spear,
    Dagger,
    Staff,
    Wand,
    Firearm,
    EnergyWeapon,
    #[default]
    Other,
}

impl WeaponType {
    pub const ALL: [WeaponType; 12] = [
        WeaponType::Sword,
        WeaponType::Axe,
        WeaponType::Mace,
        WeaponType::Bow,
        WeaponType::Crossbow,
        WeaponType::Spear,
        WeaponType::Dagger,
        WeaponType::Staff,
        WeaponType::Wand,
        WeaponType::Firearm,
        WeaponType::EnergyWeapon,
        WeaponType::Other,
    ];
}

/// School of magic, shared by artifacts, spell books and spells
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MagicType {
    #[default]
    Arcane,
    Divine,
    Nature,
    Elemental,
    Necromantic,
    Illusion,
    Enchantment,
    Transmutation,
    Other,
}

impl MagicType {
    pub const ALL: [MagicType; 9] = [
        MagicType::Arcane,
        MagicType::Divine,
        MagicType::Nature,
        MagicType::Elemental,
        MagicType::Necromantic,
        MagicType::Illusion,
        MagicType::Enchantment,
        MagicType::Transmutation,
        MagicType::Other,
    ];
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TechnologyType {
    Weapon,
    Communication,
    Transportation,
    Medical,
    Computing,
    Energy,
    Manufacturing,
    Defense,
    #[default]
    Other,
}

impl TechnologyType {
    pub const ALL: [TechnologyType; 9] = [
        TechnologyType::Weapon,
        TechnologyType::Communication,
        TechnologyType::Transportation,
        TechnologyType::Medical,
        TechnologyType::Computing,
        TechnologyType::Energy,
        TechnologyType::Manufacturing,
        TechnologyType::Defense,
        TechnologyType::Other,
    ];
}
