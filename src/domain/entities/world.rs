//! World - The root aggregate of a generated setting
//!
//! A World exclusively owns every entity collection generated for it. All
//! cross-references between entities are ids into these collections.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::{
    AlchemyRecipe, Equipment, HistoricFigure, Place, RuneOfPower, SpellBook,
    TechnicalSpecification, WorldEvent,
};
use crate::domain::value_objects::{
    EquipmentId, EventId, FigureId, PlaceId, RuneId, SpellBookId, TechSpecId, WorldId,
    WorldInfo,
};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct World {
    pub id: WorldId,
    pub name: String,
    pub description: String,
    pub creation_date: DateTime<Utc>,
    pub world_info: WorldInfo,
    pub places: Vec<Place>,
    pub historic_figures: Vec<HistoricFigure>,
    pub world_events: Vec<WorldEvent>,
    pub equipment: Vec<Equipment>,
    pub spell_books: Vec<SpellBook>,
    pub runes_of_power: Vec<RuneOfPower>,
    pub alchemy_recipes: Vec<AlchemyRecipe>,
    pub technical_specs: Vec<TechnicalSpecification>,
}

impl World {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: WorldId::new(),
            name: name.into(),
            creation_date: Utc::now(),
            ..Default::default()
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_info(mut self, info: WorldInfo) -> Self {
        self.world_info = info;
        self
    }

    // ========================================================================
    // Finders
    // ========================================================================

    pub fn find_place(&self, id: PlaceId) -> Option<&Place> {
        self.places.iter().find(|p| p.id == id)
    }

    pub fn find_place_mut(&mut self, id: PlaceId) -> Option<&mut Place> {
        self.places.iter_mut().find(|p| p.id == id)
    }

    pub fn find_place_by_name_mut(&mut self, name: &str) -> Option<&mut Place> {
        self.places.iter_mut().find(|p| p.name == name)
    }

    /// Places whose parent is `id`, in insertion order
    pub fn children_of(&self, id: PlaceId) -> impl Iterator<Item = &Place> {
        self.places
            .iter()
            .filter(move |p| p.parent_place_id == Some(id))
    }

    pub fn find_figure(&self, id: FigureId) -> Option<&HistoricFigure> {
        self.historic_figures.iter().find(|f| f.id == id)
    }

    pub fn find_figure_mut(&mut self, id: FigureId) -> Option<&mut HistoricFigure> {
        self.historic_figures.iter_mut().find(|f| f.id == id)
    }

    pub fn find_event(&self, id: EventId) -> Option<&WorldEvent> {
        self.world_events.iter().find(|e| e.id == id)
    }

    pub fn find_event_mut(&mut self, id: EventId) -> Option<&mut WorldEvent> {
        self.world_events.iter_mut().find(|e| e.id == id)
    }

    pub fn find_equipment(&self, id: EquipmentId) -> Option<&Equipment> {
        self.equipment.iter().find(|e| e.id() == id)
    }

    pub fn find_spell_book(&self, id: SpellBookId) -> Option<&SpellBook> {
        self.spell_books.iter().find(|b| b.id == id)
    }

    pub fn find_rune_mut(&mut self, id: RuneId) -> Option<&mut RuneOfPower> {
        self.runes_of_power.iter_mut().find(|r| r.id == id)
    }

    pub fn find_tech_spec_mut(&mut self, id: TechSpecId) -> Option<&mut TechnicalSpecification> {
        self.technical_specs.iter_mut().find(|t| t.id == id)
    }

    // ========================================================================
    // Counts
    // ========================================================================

    /// Everything that is an item rather than a place, person or event
    pub fn item_count(&self) -> usize {
        self.equipment.len()
            + self.spell_books.len()
            + self.runes_of_power.len()
            + self.alchemy_recipes.len()
            + self.technical_specs.len()
    }

    pub fn magic_item_count(&self) -> usize {
        self.runes_of_power.len() + self.spell_books.len() + self.alchemy_recipes.len()
    }

    /// Deep copy under a fresh world id
    ///
    /// Contained entities keep their ids: they are scoped to the owning world
    /// and every internal cross-reference stays valid.
    pub fn duplicate(&self, name: impl Into<String>) -> World {
        World {
            id: WorldId::new(),
            name: name.into(),
            creation_date: Utc::now(),
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::PlaceType;

    #[test]
    fn test_children_of_follows_parent_ids() {
        let mut world = World::new("Aeloria");
        let continent = Place::new("Astral Realm", PlaceType::Continent);
        let continent_id = continent.id;
        world.places.push(continent);
        world
            .places
            .push(Place::new("NeoHaven", PlaceType::Country).with_parent(continent_id));
        world.places.push(Place::new("VoidGate", PlaceType::Dungeon));

        let children: Vec<&str> = world
            .children_of(continent_id)
            .map(|p| p.name.as_str())
            .collect();
        assert_eq!(children, vec!["NeoHaven"]);
    }

    #[test]
    fn test_duplicate_assigns_new_id_and_keeps_content() {
        let mut world = World::new("Aeloria");
        world.places.push(Place::new("NeoHaven", PlaceType::City));
        world.historic_figures.push(HistoricFigure::new("Zara Starweaver"));

        let copy = world.duplicate("Aeloria (Copy)");

        assert_ne!(copy.id, world.id);
        assert_eq!(copy.name, "Aeloria (Copy)");
        assert_eq!(copy.places, world.places);
        assert_eq!(copy.historic_figures, world.historic_figures);
        assert_eq!(world.name, "Aeloria");
    }

    #[test]
    fn test_missing_fields_deserialize_to_defaults() {
        let world: World = serde_json::from_str(r#"{"name":"Bare"}"#).unwrap();
        assert_eq!(world.name, "Bare");
        assert!(world.places.is_empty());
        assert_eq!(world.creation_date, DateTime::<Utc>::default());
    }
}
