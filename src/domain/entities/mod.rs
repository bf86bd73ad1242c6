//! Domain entities - Objects with identity owned by a world

mod equipment;
mod historic_figure;
mod magic;
mod place;
mod technology;
mod world;
mod world_event;

pub use equipment::{
    Equipment, EquipmentCommon, EquipmentRarity, EquipmentType, MagicType, MagicalArtifact,
    SciFiArtifact, TechnologyType, Weapon, WeaponType,
};
pub use historic_figure::HistoricFigure;
pub use magic::{
    alchemy_difficulty_from_label, AlchemyRecipe, AlchemyType, Ingredient, IngredientRarity,
    RuneOfPower, RuneType, Spell, SpellBook,
};
pub use place::{Coordinates, GeographicInfo, Place, PlaceType, Population};
pub use technology::{TechSpecType, TechnicalSpecification};
pub use world::World;
pub use world_event::{EventStatus, WorldEvent, WorldEventType};
