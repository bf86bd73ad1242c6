//! Entity factories - Build one fully populated entity per call
//!
//! Every factory draws its flavour fields from [`content_tables`] and reads
//! the world under construction only to pick cross-references. Factories
//! never push into the world themselves; the assembler decides where the
//! value goes.

use std::collections::BTreeMap;

use chrono::{DateTime, Duration, Utc};

use crate::domain::entities::{
    AlchemyRecipe, AlchemyType, Coordinates, Equipment, EquipmentCommon, EquipmentRarity,
    EquipmentType, EventStatus, GeographicInfo, HistoricFigure, Ingredient, IngredientRarity,
    MagicType, MagicalArtifact, Place, PlaceType, Population, RuneOfPower, RuneType,
    SciFiArtifact, Spell, SpellBook, TechSpecType, TechnicalSpecification, TechnologyType, Weapon,
    WeaponType, World, WorldEvent, WorldEventType,
};
use crate::domain::services::content_tables as tables;
use crate::domain::services::RandomProvider;
use crate::domain::value_objects::{FigureId, GenerationParameters, PlaceId};

/// Builds entities for one set of generation parameters
pub struct EntityFactory<'a> {
    params: &'a GenerationParameters,
    now: DateTime<Utc>,
}

impl<'a> EntityFactory<'a> {
    pub fn new(params: &'a GenerationParameters) -> Self {
        Self {
            params,
            now: Utc::now(),
        }
    }

    // ========================================================================
    // Places
    // ========================================================================

    pub fn place(
        &self,
        rng: &mut impl RandomProvider,
        place_type: PlaceType,
        parent: Option<PlaceId>,
    ) -> Place {
        let name = format!(
            "{}{}",
            rng.pick(tables::PLACE_PREFIXES),
            rng.pick(tables::PLACE_SUFFIXES)
        );

        let mut notable_features: Vec<String> =
            tables::NOTABLE_FEATURES.iter().map(|f| f.to_string()).collect();
        if self.params.include_ancient_ruins && rng.one_in(4) {
            notable_features.push(rng.pick(tables::ANCIENT_RUINS).to_string());
        }

        let mut custom_properties = BTreeMap::new();
        custom_properties.insert("Theme".to_string(), self.params.theme.clone());
        custom_properties.insert("DangerLevel".to_string(), rng.next_int(1, 10).to_string());

        Place {
            name,
            description: rng.pick(tables::PLACE_DESCRIPTIONS).to_string(),
            place_type,
            parent_place_id: parent,
            geography: self.geography(rng),
            population: self.population(rng),
            notable_features,
            custom_properties,
            ..Default::default()
        }
    }

    fn geography(&self, rng: &mut impl RandomProvider) -> GeographicInfo {
        let resource_count = rng.next_int(1, 4) as usize;
        let elevation = if self.params.include_space_travel {
            rng.next_int(-1000, 5000)
        } else {
            rng.next_int(0, 3000)
        };
        let border_count = rng.next_int(0, 3) as usize;

        GeographicInfo {
            climate: rng.pick(tables::CLIMATES).to_string(),
            terrain: preferred_or(rng, &self.params.preferred_biomes, tables::BIOMES),
            natural_resources: owned(rng.pick_many(tables::RESOURCES, resource_count)),
            coordinates: Coordinates {
                latitude: rng.next_f64() * 180.0 - 90.0,
                longitude: rng.next_f64() * 360.0 - 180.0,
                elevation: f64::from(elevation),
            },
            area: f64::from(rng.next_int(1, 1_000_000)),
            borders: tables::BORDERS
                .iter()
                .take(border_count)
                .map(|b| b.to_string())
                .collect(),
        }
    }

    fn population(&self, rng: &mut impl RandomProvider) -> Population {
        let mut race_distribution = BTreeMap::new();
        race_distribution.insert("Cyber-Elves".to_string(), rng.next_int(10, 40));
        race_distribution.insert("Techno-Dwarves".to_string(), rng.next_int(10, 30));
        race_distribution.insert("Quantum Humans".to_string(), rng.next_int(20, 50));
        for race in &self.params.preferred_races {
            race_distribution.insert(race.clone(), rng.next_int(20, 50));
        }

        Population {
            total_count: i64::from(rng.next_int(100, 100_000)),
            race_distribution,
            government_type: rng.pick(tables::GOVERNMENTS).to_string(),
            languages: to_strings(tables::LANGUAGES),
            religions: to_strings(tables::RELIGIONS),
            ..Default::default()
        }
    }

    // ========================================================================
    // Characters and events
    // ========================================================================

    pub fn historic_figure(&self, rng: &mut impl RandomProvider, world: &World) -> HistoricFigure {
        let name = format!(
            "{} {}",
            rng.pick(tables::FIRST_NAMES),
            rng.pick(tables::LAST_NAMES)
        );
        let birth_date = self.years_ago(rng.next_int(50, 500));
        let death_date = rng.one_in(4).then(|| self.years_ago(rng.next_int(1, 50)));
        // Drawn on its own: a figure can be alive with a death date on record.
        let is_alive = !rng.one_in(4);

        let associated_count = rng.next_int(1, 3) as usize;
        let achievement_count = rng.next_int(1, 4) as usize;
        let relationship_count = rng.next_int(0, 3) as usize;

        let mut attributes = BTreeMap::new();
        for attribute in ["Strength", "Intelligence", "Charisma"] {
            attributes.insert(attribute.to_string(), rng.next_int(8, 18));
        }

        HistoricFigure {
            name,
            title: rng.pick(tables::CHARACTER_TITLES).to_string(),
            description: rng.pick(tables::CHARACTER_DESCRIPTIONS).to_string(),
            race: preferred_or(rng, &self.params.preferred_races, tables::RACES),
            class: rng.pick(tables::CHARACTER_CLASSES).to_string(),
            birth_date: Some(birth_date),
            death_date,
            is_alive,
            birth_place_id: random_place(rng, world),
            associated_place_ids: world
                .places
                .iter()
                .take(associated_count)
                .map(|p| p.id)
                .collect(),
            achievements: owned(rng.pick_many(tables::ACHIEVEMENTS, achievement_count)),
            related_event_ids: Vec::new(),
            attributes,
            relationships: world
                .historic_figures
                .iter()
                .take(relationship_count)
                .map(|f| f.id)
                .collect(),
            ..Default::default()
        }
    }

    pub fn world_event(&self, rng: &mut impl RandomProvider, world: &World) -> WorldEvent {
        let name = format!("The {} Incident", rng.pick(tables::THEMES));
        let event_type = rng
            .choice(&WorldEventType::GENERATED)
            .copied()
            .unwrap_or_default();
        let start_date = self.years_ago(rng.next_int(1, 1000));
        let end_date = rng.one_in(2).then(|| self.years_ago(rng.next_int(1, 500)));
        let participant_count = rng.next_int(1, 4) as usize;
        let affected_count = rng.next_int(1, 3) as usize;

        let consequences = tables::EVENT_CONSEQUENCES
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();

        WorldEvent {
            description: tables::EVENT_DESCRIPTION.to_string(),
            start_date,
            end_date,
            status: EventStatus::Historical,
            participant_ids: world
                .historic_figures
                .iter()
                .take(participant_count)
                .map(|f| f.id)
                .collect(),
            affected_place_ids: world
                .places
                .iter()
                .take(affected_count)
                .map(|p| p.id)
                .collect(),
            consequences,
            global_impact_level: rng.next_int(1, 11),
            ..WorldEvent::new(name, event_type)
        }
    }

    // ========================================================================
    // Equipment
    // ========================================================================

    pub fn weapon(&self, rng: &mut impl RandomProvider, world: &World) -> Equipment {
        let name = format!(
            "{} {}",
            rng.pick(tables::WEAPON_PREFIXES),
            rng.pick(tables::WEAPON_BASES)
        );
        let mut properties = BTreeMap::new();
        properties.insert("Durability".to_string(), rng.next_int(50, 100));
        properties.insert("Power".to_string(), rng.next_int(1, 20));
        properties.insert("Efficiency".to_string(), rng.next_int(70, 100));

        let common = EquipmentCommon {
            name,
            description: tables::EQUIPMENT_DESCRIPTION.to_string(),
            equipment_type: EquipmentType::Weapon,
            rarity: random_rarity(rng),
            value: f64::from(rng.next_int(10, 10_000)),
            weight: f64::from(rng.next_int(1, 50)),
            material: rng.pick(tables::MATERIALS).to_string(),
            creator_id: random_figure(rng, world),
            history: to_strings(tables::EQUIPMENT_HISTORY),
            properties,
            ..Default::default()
        };

        Equipment::Weapon(Weapon {
            common,
            weapon_type: rng.choice(&WeaponType::ALL).copied().unwrap_or_default(),
            // Higher tech settings reach harder-hitting weapons.
            damage: rng.next_int(1, 20 + self.params.tech_level.max(0)),
            range: rng.next_int(5, 100),
            damage_type: rng.pick(tables::DAMAGE_TYPES).to_string(),
            is_magical: self.params.magic_level > 3,
            enchantments: to_strings(tables::ENCHANTMENTS),
        })
    }

    pub fn magical_artifact(&self, rng: &mut impl RandomProvider, world: &World) -> Equipment {
        let name = format!(
            "{} of {}",
            rng.pick(tables::ARTIFACT_FORMS),
            rng.pick(tables::THEMES)
        );
        let common = EquipmentCommon {
            name,
            description: tables::EQUIPMENT_DESCRIPTION.to_string(),
            equipment_type: EquipmentType::Artifact,
            rarity: random_rarity(rng),
            value: f64::from(rng.next_int(100, 50_000)),
            weight: f64::from(rng.next_int(1, 20)),
            material: rng.pick(tables::MATERIALS).to_string(),
            creator_id: random_figure(rng, world),
            history: to_strings(tables::EQUIPMENT_HISTORY),
            ..Default::default()
        };

        Equipment::MagicalArtifact(MagicalArtifact {
            common,
            magic_type: random_magic_type(rng),
            magic_power: rng.next_int(1, 20),
            spells: to_strings(tables::ARTIFACT_SPELLS),
            charges: rng.next_int(1, 10),
            max_charges: rng.next_int(5, 15),
            requires_attunement: rng.one_in(2),
            activation_method: rng.pick(tables::ACTIVATION_CONDITIONS).to_string(),
        })
    }

    pub fn sci_fi_artifact(&self, rng: &mut impl RandomProvider, world: &World) -> Equipment {
        let name = format!(
            "{} {}",
            rng.pick(tables::GADGET_PREFIXES),
            rng.pick(tables::GADGET_BASES)
        );
        let tech = self.params.tech_level.clamp(1, 10);
        let function_count = rng.next_int(1, 4) as usize;

        let common = EquipmentCommon {
            name,
            description: tables::EQUIPMENT_DESCRIPTION.to_string(),
            equipment_type: EquipmentType::Tool,
            rarity: random_rarity(rng),
            value: f64::from(rng.next_int(500, 20_000)),
            weight: f64::from(rng.next_int(1, 15)),
            material: rng.pick(tables::MATERIALS).to_string(),
            creator_id: random_figure(rng, world),
            history: to_strings(tables::EQUIPMENT_HISTORY),
            ..Default::default()
        };

        Equipment::SciFiArtifact(SciFiArtifact {
            common,
            technology_type: rng
                .choice(&TechnologyType::ALL)
                .copied()
                .unwrap_or_default(),
            tech_level: rng.next_int((tech - 2).max(1), tech + 1),
            power_source: rng.pick(tables::POWER_SOURCES).to_string(),
            power_level: rng.next_int(1, 101),
            functions: owned(rng.pick_many(tables::DEVICE_FUNCTIONS, function_count)),
            is_operational: !rng.one_in(5),
            operating_system: rng.pick(tables::OPERATING_SYSTEMS).to_string(),
        })
    }

    // ========================================================================
    // Magic
    // ========================================================================

    pub fn spell_book(&self, rng: &mut impl RandomProvider, world: &World) -> SpellBook {
        let magic_school = random_magic_type(rng);
        let spell_count = rng.next_int(1, 5);
        let spells = (0..spell_count)
            .map(|_| self.spell(rng, magic_school))
            .collect();
        let is_complete = !rng.one_in(3);
        let missing_pages = if is_complete {
            Vec::new()
        } else {
            (0..rng.next_int(1, 4))
                .map(|_| format!("Page {}", rng.next_int(1, 300)))
                .collect()
        };

        SpellBook {
            name: format!("The {} Codex", rng.pick(tables::THEMES)),
            description: tables::SPELL_BOOK_DESCRIPTION.to_string(),
            author_id: random_figure(rng, world),
            magic_school,
            required_level: rng.next_int(1, 15),
            spells,
            language: rng.pick(tables::ANCIENT_LANGUAGES).to_string(),
            is_complete,
            missing_pages,
            ..Default::default()
        }
    }

    fn spell(&self, rng: &mut impl RandomProvider, school: MagicType) -> Spell {
        Spell {
            name: format!(
                "{} {}",
                rng.pick(tables::SPELL_PREFIXES),
                rng.pick(tables::SPELL_BASES)
            ),
            description: rng.pick(tables::SPELL_EFFECTS).to_string(),
            level: rng.next_int(1, 10),
            school,
            components: rng.pick(tables::SPELL_COMPONENTS).to_string(),
            casting_time: rng.pick(tables::CASTING_TIMES).to_string(),
            range: rng.pick(tables::SPELL_RANGES).to_string(),
            duration: rng.pick(tables::SPELL_DURATIONS).to_string(),
            effects: vec![rng.pick(tables::SPELL_EFFECTS).to_string()],
            is_ritual: rng.one_in(5),
            ..Default::default()
        }
    }

    pub fn rune(&self, rng: &mut impl RandomProvider, world: &World) -> RuneOfPower {
        let location = rng
            .choice(&world.places)
            .map(|p| p.name.clone())
            .unwrap_or_else(|| "Unknown".to_string());

        RuneOfPower {
            name: format!(
                "Rune of {} {}",
                rng.pick(tables::RUNE_PREFIXES),
                rng.pick(tables::RUNE_BASES)
            ),
            symbol: rng.pick(tables::RUNE_SYMBOLS).to_string(),
            description: tables::RUNE_DESCRIPTION.to_string(),
            rune_type: rng.choice(&RuneType::ALL).copied().unwrap_or_default(),
            power_level: rng.next_int(1, 10),
            element: rng.pick(tables::RUNE_ELEMENTS).to_string(),
            effects: to_strings(tables::RUNE_EFFECTS),
            activation_condition: rng.pick(tables::ACTIVATION_CONDITIONS).to_string(),
            is_active: rng.one_in(2),
            location,
            creator_id: random_figure(rng, world),
            ..Default::default()
        }
    }

    pub fn alchemy_recipe(&self, rng: &mut impl RandomProvider, world: &World) -> AlchemyRecipe {
        let ingredient_count = rng.next_int(3, 6);
        let ingredients = (0..ingredient_count)
            .map(|_| Ingredient {
                name: rng.pick(tables::INGREDIENT_NAMES).to_string(),
                quantity: rng.next_int(1, 10),
                unit: rng.pick(tables::INGREDIENT_UNITS).to_string(),
                rarity: rng
                    .choice(&IngredientRarity::ALL)
                    .copied()
                    .unwrap_or_default(),
                source: "Mystical Gardens".to_string(),
                properties: to_strings(tables::INGREDIENT_PROPERTIES),
            })
            .collect();

        AlchemyRecipe {
            name: format!(
                "Potion of {} {}",
                rng.pick(tables::ALCHEMY_PREFIXES),
                rng.pick(tables::ALCHEMY_BASES)
            ),
            description: tables::ALCHEMY_DESCRIPTION.to_string(),
            alchemy_type: rng.choice(&AlchemyType::ALL).copied().unwrap_or_default(),
            difficulty: rng.next_int(1, 10),
            ingredients,
            steps: to_strings(tables::ALCHEMY_STEPS),
            preparation_time_hours: rng.next_int(1, 24) as u32,
            effects: to_strings(tables::ALCHEMY_EFFECTS),
            side_effects: to_strings(tables::ALCHEMY_SIDE_EFFECTS),
            creator_id: random_figure(rng, world),
            is_secret: rng.one_in(3),
            ..Default::default()
        }
    }

    // ========================================================================
    // Technology
    // ========================================================================

    pub fn tech_spec(&self, rng: &mut impl RandomProvider) -> TechnicalSpecification {
        let tech = self.params.tech_level;

        let mut specifications = BTreeMap::new();
        specifications.insert(
            "Processing Power".to_string(),
            format!("{} TeraFLOPS", rng.next_int(1, 100)),
        );
        specifications.insert(
            "Mana Capacity".to_string(),
            format!("{} MP", rng.next_int(100, 1000)),
        );
        specifications.insert(
            "Quantum Coherence".to_string(),
            format!("{}%", rng.next_int(50, 99)),
        );

        TechnicalSpecification {
            name: format!(
                "{}-{}",
                rng.pick(tables::TECH_PREFIXES),
                rng.pick(tables::TECH_BASES)
            ),
            description: tables::TECH_DESCRIPTION.to_string(),
            spec_type: rng.choice(&TechSpecType::ALL).copied().unwrap_or_default(),
            tech_level: rng.next_int(1, (tech + 1).max(2)),
            manufacturer: format!(
                "{} {}",
                rng.pick(tables::MANUFACTURER_PREFIXES),
                rng.pick(tables::MANUFACTURER_SUFFIXES)
            ),
            model_number: format!(
                "{}-{}",
                rng.pick(tables::MODEL_PREFIXES),
                rng.next_int(1000, 9999)
            ),
            specifications,
            requirements: to_strings(tables::TECH_REQUIREMENTS),
            capabilities: to_strings(tables::TECH_CAPABILITIES),
            power_consumption: format!(
                "{} Watts + {} MP/hour",
                rng.next_int(10, 500),
                rng.next_int(5, 50)
            ),
            maintenance_schedule: format!(
                "Every {} days or {} operating hours",
                rng.next_int(30, 365),
                rng.next_int(100, 1000)
            ),
            is_classified: rng.one_in(9),
            ..Default::default()
        }
    }

    fn years_ago(&self, years: i32) -> DateTime<Utc> {
        self.now - Duration::days(i64::from(years) * 365)
    }
}

// ============================================================================
// Helpers
// ============================================================================

fn to_strings(pool: &[&str]) -> Vec<String> {
    pool.iter().map(|s| s.to_string()).collect()
}

fn owned(picked: Vec<&&str>) -> Vec<String> {
    picked.into_iter().map(|s| s.to_string()).collect()
}

/// Caller preferences win three times out of four when present
fn preferred_or(
    rng: &mut impl RandomProvider,
    preferred: &[String],
    table: &[&'static str],
) -> String {
    if !preferred.is_empty() && !rng.one_in(4) {
        if let Some(choice) = rng.choice(preferred) {
            return choice.clone();
        }
    }
    rng.pick(table).to_string()
}

fn random_place(rng: &mut impl RandomProvider, world: &World) -> Option<PlaceId> {
    rng.choice(&world.places).map(|p| p.id)
}

fn random_figure(rng: &mut impl RandomProvider, world: &World) -> Option<FigureId> {
    rng.choice(&world.historic_figures).map(|f| f.id)
}

fn random_rarity(rng: &mut impl RandomProvider) -> EquipmentRarity {
    rng.choice(&EquipmentRarity::ALL).copied().unwrap_or_default()
}

fn random_magic_type(rng: &mut impl RandomProvider) -> MagicType {
    rng.choice(&MagicType::ALL).copied().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn params() -> GenerationParameters {
        GenerationParameters::quick("Aeloria", "Fantasy-SciFi", 5, 7)
    }

    #[test]
    fn test_place_fields_come_from_tables() {
        let params = params();
        let factory = EntityFactory::new(&params);
        let mut rng = StdRng::seed_from_u64(1);

        let place = factory.place(&mut rng, PlaceType::City, None);

        assert!(tables::CLIMATES.contains(&place.geography.climate.as_str()));
        assert!(tables::BIOMES.contains(&place.geography.terrain.as_str()));
        assert!((1..=3).contains(&place.geography.natural_resources.len()));
        assert!((100..100_000).contains(&place.population.total_count));
        assert_eq!(place.custom_properties["Theme"], "Fantasy-SciFi");
        assert!(place.parent_place_id.is_none());
    }

    #[test]
    fn test_preferred_biomes_show_up() {
        let mut params = params();
        params.preferred_biomes = vec!["Glass Dunes".to_string()];
        let factory = EntityFactory::new(&params);
        let mut rng = StdRng::seed_from_u64(5);

        let terrains: Vec<String> = (0..40)
            .map(|_| factory.place(&mut rng, PlaceType::Town, None).geography.terrain)
            .collect();
        assert!(terrains.iter().any(|t| t == "Glass Dunes"));
    }

    #[test]
    fn test_figure_without_places_has_no_birthplace() {
        let params = params();
        let factory = EntityFactory::new(&params);
        let mut rng = StdRng::seed_from_u64(2);
        let world = World::new("Empty");

        let figure = factory.historic_figure(&mut rng, &world);

        assert!(figure.birth_place_id.is_none());
        assert!(figure.associated_place_ids.is_empty());
        assert!(figure.relationships.is_empty());
        assert_eq!(figure.attributes.len(), 3);
    }

    #[test]
    fn test_alive_flag_is_independent_of_death_date() {
        // Known inconsistency kept on purpose: a living figure may carry a death date.
        let params = params();
        let factory = EntityFactory::new(&params);
        let mut rng = StdRng::seed_from_u64(11);
        let world = World::new("Aeloria");

        let figures: Vec<HistoricFigure> = (0..400)
            .map(|_| factory.historic_figure(&mut rng, &world))
            .collect();
        assert!(figures
            .iter()
            .any(|f| f.is_alive && f.death_date.is_some()));
    }

    #[test]
    fn test_weapon_references_existing_figure() {
        let params = params();
        let factory = EntityFactory::new(&params);
        let mut rng = StdRng::seed_from_u64(3);
        let mut world = World::new("Aeloria");
        world.historic_figures.push(HistoricFigure::new("Zara Starweaver"));

        let weapon = factory.weapon(&mut rng, &world);

        assert_eq!(weapon.kind_label(), "Weapon");
        assert_eq!(
            weapon.common().creator_id,
            Some(world.historic_figures[0].id)
        );
    }

    #[test]
    fn test_spell_book_holds_one_to_four_spells() {
        let params = params();
        let factory = EntityFactory::new(&params);
        let mut rng = StdRng::seed_from_u64(4);
        let world = World::new("Aeloria");

        for _ in 0..30 {
            let book = factory.spell_book(&mut rng, &world);
            assert!((1..=4).contains(&book.spells.len()));
            assert!(book.spells.iter().all(|s| s.school == book.magic_school));
            assert_eq!(book.is_complete, book.missing_pages.is_empty());
        }
    }

    #[test]
    fn test_rune_location_defaults_to_unknown() {
        let params = params();
        let factory = EntityFactory::new(&params);
        let mut rng = StdRng::seed_from_u64(6);

        let rune = factory.rune(&mut rng, &World::new("Aeloria"));

        assert_eq!(rune.location, "Unknown");
        assert!((1..10).contains(&rune.power_level));
    }

    #[test]
    fn test_tech_spec_level_bounded_by_world_tech() {
        let params = params();
        let factory = EntityFactory::new(&params);
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..50 {
            let spec = factory.tech_spec(&mut rng);
            assert!((1..=5).contains(&spec.tech_level));
            assert!(spec.model_number.len() == 7);
        }
    }
}
