//! World assembler - Runs the generation pipeline in its fixed order
//!
//! Order matters: places first, then figures (which point at places), then
//! events (which point at both), then equipment and magic (which point at
//! figures). Nothing is ever generated out of order or revisited, except by
//! the optional structure passes that only write place custom properties.

use crate::domain::entities::{HistoricFigure, Place, PlaceType, World};
use crate::domain::services::content_tables as tables;
use crate::domain::services::{EntityFactory, RandomProvider};
use crate::domain::value_objects::{
    clamp_count, magic_level_label, technology_level_label, time_era_label, CompleteWorldRequest,
    ContentCategory, GenerationParameters, PlaceId, WorldInfo, WorldLaws,
};

/// Places added by one enhancement of the places category
pub const ENHANCE_PLACE_COUNT: usize = 5;
pub const ENHANCE_CHARACTER_COUNT: usize = 3;
pub const ENHANCE_EVENT_COUNT: usize = 2;
/// Tech and magic level used when enhancing those categories
pub const ENHANCE_POWER_LEVEL: i32 = 5;

/// Magic content sizes for a given magic level: (spell books, runes, recipes)
pub fn magic_counts(magic_level: i32) -> (usize, usize, usize) {
    if magic_level <= 0 {
        return (0, 0, 0);
    }
    (
        clamp_count((magic_level / 2).max(1)),
        clamp_count(magic_level),
        clamp_count(magic_level / 2),
    )
}

// ============================================================================
// Entry points
// ============================================================================

/// Basic pipeline: every count is derived from world size and power levels
pub fn assemble_world(params: &GenerationParameters, rng: &mut impl RandomProvider) -> World {
    let factory = EntityFactory::new(params);
    let mut world = World::new(params.world_name.clone())
        .with_description(world_description(params, rng))
        .with_info(world_info(params));

    let size = clamp_count(params.world_size);
    add_random_places(&mut world, &factory, rng, size);
    add_figures(&mut world, &factory, rng, (size / 2).min(15));
    add_events(&mut world, &factory, rng, size / 3);
    add_basic_equipment(&mut world, &factory, rng, size / 2);

    let (books, runes, recipes) = magic_counts(params.magic_level);
    add_magic(&mut world, &factory, rng, books, runes, recipes);
    if params.tech_level > 0 {
        add_tech_specs(&mut world, &factory, rng, clamp_count(params.tech_level));
    }

    world
}

/// Complete pipeline: every count and structure pass comes from the request
pub fn assemble_complete_world(
    request: &CompleteWorldRequest,
    rng: &mut impl RandomProvider,
) -> World {
    let params = request.parameters();
    let factory = EntityFactory::new(&params);
    let mut world = World::new(params.world_name.clone())
        .with_description(detailed_description(request))
        .with_info(enhanced_world_info(request));

    if request.generate_hierarchy {
        add_hierarchy(&mut world, &factory, rng, request);
    } else {
        add_random_places(&mut world, &factory, rng, clamp_count(request.total_places));
    }

    add_figures(&mut world, &factory, rng, clamp_count(request.character_count));
    add_events(
        &mut world,
        &factory,
        rng,
        clamp_count(request.historical_event_count),
    );
    add_complete_equipment(
        &mut world,
        &factory,
        rng,
        clamp_count(request.equipment_count),
        params.tech_level >= 7,
    );

    if params.magic_level > 0 {
        add_magic(
            &mut world,
            &factory,
            rng,
            clamp_count(request.spell_book_count),
            clamp_count(request.rune_count),
            clamp_count(request.alchemy_recipe_count),
        );
    }
    if params.tech_level > 0 {
        add_tech_specs(&mut world, &factory, rng, clamp_count(request.technology_count));
    }

    if request.generate_connections {
        connect_places(&mut world, rng);
    }
    if request.generate_economy {
        assign_economies(&mut world, rng);
    }
    if request.generate_politics {
        assign_politics(&mut world, rng);
    }

    world
}

/// Append one category's worth of content to an existing world
pub fn enhance_content(
    world: &mut World,
    category: ContentCategory,
    rng: &mut impl RandomProvider,
) {
    let params = enhancement_parameters(world);
    let factory = EntityFactory::new(&params);

    match category {
        ContentCategory::Places => add_random_places(world, &factory, rng, ENHANCE_PLACE_COUNT),
        ContentCategory::Characters => add_figures(world, &factory, rng, ENHANCE_CHARACTER_COUNT),
        ContentCategory::Events => add_events(world, &factory, rng, ENHANCE_EVENT_COUNT),
        ContentCategory::Technology => {
            add_tech_specs(world, &factory, rng, ENHANCE_POWER_LEVEL as usize)
        }
        ContentCategory::Magic => {
            let (books, runes, recipes) = magic_counts(ENHANCE_POWER_LEVEL);
            add_magic(world, &factory, rng, books, runes, recipes);
        }
        ContentCategory::General => {
            add_random_places(world, &factory, rng, ENHANCE_PLACE_COUNT);
            add_figures(world, &factory, rng, ENHANCE_CHARACTER_COUNT);
        }
    }
}

/// One settlement-mix place built against `world`, not yet added to it
pub fn single_place(world: &World, rng: &mut impl RandomProvider) -> Place {
    let params = enhancement_parameters(world);
    let factory = EntityFactory::new(&params);
    let place_type = rng
        .choice(&PlaceType::SETTLEMENT_MIX)
        .copied()
        .unwrap_or_default();
    factory.place(rng, place_type, None)
}

/// One figure whose references all point into `world`, not yet added to it
pub fn single_figure(world: &World, rng: &mut impl RandomProvider) -> HistoricFigure {
    let params = enhancement_parameters(world);
    EntityFactory::new(&params).historic_figure(rng, world)
}

fn enhancement_parameters(world: &World) -> GenerationParameters {
    GenerationParameters {
        world_name: world.name.clone(),
        theme: if world.world_info.genre.is_empty() {
            GenerationParameters::default().theme
        } else {
            world.world_info.genre.clone()
        },
        tech_level: ENHANCE_POWER_LEVEL,
        magic_level: ENHANCE_POWER_LEVEL,
        ..Default::default()
    }
}

// ============================================================================
// Pipeline stages
// ============================================================================

pub fn add_random_places(
    world: &mut World,
    factory: &EntityFactory<'_>,
    rng: &mut impl RandomProvider,
    count: usize,
) {
    for _ in 0..count {
        let place_type = rng
            .choice(&PlaceType::SETTLEMENT_MIX)
            .copied()
            .unwrap_or_default();
        world.places.push(factory.place(rng, place_type, None));
    }
}

/// Nested tiers: each place hangs off a random place of the closest
/// non-empty tier above it. Dungeons and natural features stand alone.
fn add_hierarchy(
    world: &mut World,
    factory: &EntityFactory<'_>,
    rng: &mut impl RandomProvider,
    request: &CompleteWorldRequest,
) {
    let tiers = [
        (PlaceType::Continent, request.continent_count),
        (PlaceType::Country, request.country_count),
        (PlaceType::Region, request.region_count),
        (PlaceType::City, request.city_count),
        (PlaceType::Town, request.town_count),
        (PlaceType::Village, request.village_count),
    ];

    let mut parents: Vec<PlaceId> = Vec::new();
    for (place_type, count) in tiers {
        let mut tier: Vec<PlaceId> = Vec::new();
        for _ in 0..clamp_count(count) {
            let parent = rng.choice(&parents).copied();
            let place = factory.place(rng, place_type, parent);
            tier.push(place.id);
            world.places.push(place);
        }
        if !tier.is_empty() {
            parents = tier;
        }
    }

    for (place_type, count) in [
        (PlaceType::Dungeon, request.dungeon_count),
        (PlaceType::NaturalFeature, request.natural_feature_count),
    ] {
        for _ in 0..clamp_count(count) {
            world.places.push(factory.place(rng, place_type, None));
        }
    }
}

pub fn add_figures(
    world: &mut World,
    factory: &EntityFactory<'_>,
    rng: &mut impl RandomProvider,
    count: usize,
) {
    for _ in 0..count {
        let figure = factory.historic_figure(rng, world);
        world.historic_figures.push(figure);
    }
}

pub fn add_events(
    world: &mut World,
    factory: &EntityFactory<'_>,
    rng: &mut impl RandomProvider,
    count: usize,
) {
    for _ in 0..count {
        let event = factory.world_event(rng, world);
        world.world_events.push(event);
    }
}

/// Quick path: a coin flip between weapon and magical artifact
fn add_basic_equipment(
    world: &mut World,
    factory: &EntityFactory<'_>,
    rng: &mut impl RandomProvider,
    count: usize,
) {
    for _ in 0..count {
        let item = if rng.one_in(2) {
            factory.weapon(rng, world)
        } else {
            factory.magical_artifact(rng, world)
        };
        world.equipment.push(item);
    }
}

/// Complete path: sci-fi artifacts join the draw in high-tech worlds
fn add_complete_equipment(
    world: &mut World,
    factory: &EntityFactory<'_>,
    rng: &mut impl RandomProvider,
    count: usize,
    with_sci_fi: bool,
) {
    let kinds = if with_sci_fi { 3 } else { 2 };
    for _ in 0..count {
        let item = match rng.next_int(0, kinds) {
            0 => factory.weapon(rng, world),
            1 => factory.magical_artifact(rng, world),
            _ => factory.sci_fi_artifact(rng, world),
        };
        world.equipment.push(item);
    }
}

pub fn add_magic(
    world: &mut World,
    factory: &EntityFactory<'_>,
    rng: &mut impl RandomProvider,
    books: usize,
    runes: usize,
    recipes: usize,
) {
    for _ in 0..books {
        let book = factory.spell_book(rng, world);
        world.spell_books.push(book);
    }
    for _ in 0..runes {
        let rune = factory.rune(rng, world);
        world.runes_of_power.push(rune);
    }
    for _ in 0..recipes {
        let recipe = factory.alchemy_recipe(rng, world);
        world.alchemy_recipes.push(recipe);
    }
}

pub fn add_tech_specs(
    world: &mut World,
    factory: &EntityFactory<'_>,
    rng: &mut impl RandomProvider,
    count: usize,
) {
    for _ in 0..count {
        world.technical_specs.push(factory.tech_spec(rng));
    }
}

// ============================================================================
// Structure passes
// ============================================================================

/// Record 0-4 routes from each place to other places, as "Name (Type)" entries
pub fn connect_places(world: &mut World, rng: &mut impl RandomProvider) {
    let targets: Vec<(PlaceId, String)> = world
        .places
        .iter()
        .map(|p| (p.id, p.name.clone()))
        .collect();

    for place in world.places.iter_mut() {
        let wanted = rng.next_int(1, 5) as usize;
        let mut connections = Vec::new();
        for _ in 0..wanted.min(targets.len().saturating_sub(1)) {
            if let Some((id, name)) = rng.choice(&targets) {
                if *id != place.id {
                    connections.push(format!(
                        "{} ({})",
                        name,
                        rng.pick(tables::CONNECTION_TYPES)
                    ));
                }
            }
        }
        place
            .custom_properties
            .insert("Connections".to_string(), connections.join(", "));
    }
}

pub fn assign_economies(world: &mut World, rng: &mut impl RandomProvider) {
    for place in world.places.iter_mut() {
        set(place, "EconomicSystem", rng.pick(tables::ECONOMIC_SYSTEMS));
        let industries = pick_joined(rng, tables::INDUSTRIES);
        set(place, "MainIndustries", &industries);
        let goods = pick_joined(rng, tables::TRADE_GOODS);
        set(place, "TradeGoods", &goods);
        set(place, "Currency", rng.pick(tables::CURRENCIES));
    }
}

pub fn assign_politics(world: &mut World, rng: &mut impl RandomProvider) {
    for place in world.places.iter_mut() {
        set(place, "PoliticalSystem", rng.pick(tables::POLITICAL_SYSTEMS));
        let ruler = format!(
            "{} {}",
            rng.pick(tables::RULER_TITLES),
            rng.pick(tables::RULER_NAMES)
        );
        set(place, "Ruler", &ruler);
        set(place, "Laws", rng.pick(tables::LEGAL_SYSTEMS));
        set(place, "Diplomacy", rng.pick(tables::DIPLOMATIC_STANCES));
    }
}

fn set(place: &mut Place, key: &str, value: &str) {
    place
        .custom_properties
        .insert(key.to_string(), value.to_string());
}

/// One to three distinct entries joined with ", "
fn pick_joined(rng: &mut impl RandomProvider, pool: &[&'static str]) -> String {
    let amount = rng.next_int(1, 4) as usize;
    rng.pick_many(pool, amount)
        .into_iter()
        .copied()
        .collect::<Vec<_>>()
        .join(", ")
}

// ============================================================================
// Descriptions and world info
// ============================================================================

pub fn world_description(params: &GenerationParameters, rng: &mut impl RandomProvider) -> String {
    let magic = if params.magic_level > 7 {
        "ancient magic flows through every corner, "
    } else if params.magic_level > 3 {
        "magic exists in harmony with technology, "
    } else {
        "remnants of old magic still linger, "
    };
    let tech = if params.tech_level > 7 {
        "and advanced technology has reached the stars. "
    } else if params.tech_level > 3 {
        "while innovative technology shapes daily life. "
    } else {
        "though technology remains primitive in most regions. "
    };

    format!(
        "The world of {} is a unique realm where {}{}This {} world is characterized by {}, creating a unique blend of wonder and innovation.",
        params.world_name,
        magic,
        tech,
        params.theme,
        rng.pick(tables::THEMES).to_lowercase()
    )
}

pub fn detailed_description(request: &CompleteWorldRequest) -> String {
    let span = match request.world_scale.as_str() {
        "Interplanetary" => "multiple worlds and star systems, ",
        "Global" => "entire continents and oceans, ",
        "Continental" => "vast continents and regions, ",
        _ => "diverse regions and territories, ",
    };
    let magic = if request.magic_level > 7 {
        "Ancient magic flows through every corner of this realm, "
    } else if request.magic_level > 3 {
        "Magic exists in harmony with technology, "
    } else {
        "Remnants of old magic still linger, "
    };
    let tech = if request.tech_level > 7 {
        "while advanced technology has reached the stars. "
    } else if request.tech_level > 3 {
        "while innovative technology shapes daily life. "
    } else {
        "though technology remains primitive in most regions. "
    };

    format!(
        "The vast world of {name} is a {scale} realm that spans {span}featuring {continents} major continents, \
         {countries} sovereign nations, and {regions} distinct regions. {magic}{tech}This {theme} world is home to \
         {characters} notable figures and contains {dungeons} mysterious dungeons, {natural} natural wonders, \
         and {events} world-shaping events that have molded its history.",
        name = request.world_name,
        scale = request.world_scale.to_lowercase(),
        continents = request.continent_count,
        countries = request.country_count,
        regions = request.region_count,
        theme = request.theme,
        characters = request.character_count,
        dungeons = request.dungeon_count,
        natural = request.natural_feature_count,
        events = request.historical_event_count,
    )
}

pub fn world_info(params: &GenerationParameters) -> WorldInfo {
    let mut active_themes = vec![params.theme.clone()];
    active_themes.extend(tables::ACTIVE_THEME_EXTRAS.iter().map(|t| t.to_string()));

    let mut laws = WorldLaws {
        magic_exists: params.magic_level > 0,
        death_is_permanent: params.difficulty_level == "Hard",
        time_travel: params.tech_level >= 9,
        multiverse: params.tech_level >= 8 && params.magic_level >= 8,
        ..Default::default()
    };
    laws.custom_laws
        .insert("MagicTechInteraction".to_string(), params.include_magic_tech.into());
    laws.custom_laws
        .insert("SpaceTravel".to_string(), params.include_space_travel.into());
    laws.custom_laws
        .insert("AncientRuins".to_string(), params.include_ancient_ruins.into());

    WorldInfo {
        genre: params.theme.clone(),
        time_era: time_era_label(params.tech_level).to_string(),
        magic_level: magic_level_label(params.magic_level).to_string(),
        technology_level: technology_level_label(params.tech_level).to_string(),
        active_themes,
        laws,
        ..Default::default()
    }
}

/// World info plus the request's custom settings and structure summary
pub fn enhanced_world_info(request: &CompleteWorldRequest) -> WorldInfo {
    let mut info = world_info(&request.parameters());

    for (key, value) in &request.custom_settings {
        let text = match value {
            serde_json::Value::String(s) => s.clone(),
            other => other.to_string(),
        };
        info.custom_settings.insert(key.clone(), text);
    }

    let structure = [
        ("WorldScale", request.world_scale.clone()),
        ("ContinentCount", request.continent_count.to_string()),
        ("CountryCount", request.country_count.to_string()),
        ("RegionCount", request.region_count.to_string()),
        ("HasHierarchy", request.generate_hierarchy.to_string()),
        ("HasConnections", request.generate_connections.to_string()),
        ("HasEconomy", request.generate_economy.to_string()),
        ("HasPolitics", request.generate_politics.to_string()),
    ];
    for (key, value) in structure {
        info.custom_settings.insert(key.to_string(), value);
    }

    info
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    fn aeloria() -> GenerationParameters {
        GenerationParameters::quick("Aeloria", "Fantasy-SciFi", 5, 7)
    }

    fn assert_cross_references_resolve(world: &World) {
        let places: HashSet<_> = world.places.iter().map(|p| p.id).collect();
        let figures: HashSet<_> = world.historic_figures.iter().map(|f| f.id).collect();
        assert_eq!(places.len(), world.places.len(), "duplicate place id");
        assert_eq!(figures.len(), world.historic_figures.len(), "duplicate figure id");

        for place in &world.places {
            if let Some(parent) = place.parent_place_id {
                assert!(places.contains(&parent));
            }
        }
        for figure in &world.historic_figures {
            if let Some(birth_place) = figure.birth_place_id {
                assert!(places.contains(&birth_place));
            }
            assert!(figure.associated_place_ids.iter().all(|id| places.contains(id)));
            assert!(figure.relationships.iter().all(|id| figures.contains(id)));
        }
        for event in &world.world_events {
            assert!(event.participant_ids.iter().all(|id| figures.contains(id)));
            assert!(event.affected_place_ids.iter().all(|id| places.contains(id)));
        }
        for item in &world.equipment {
            if let Some(creator) = item.common().creator_id {
                assert!(figures.contains(&creator));
            }
        }
        for book in &world.spell_books {
            if let Some(author) = book.author_id {
                assert!(figures.contains(&author));
            }
        }
    }

    #[test]
    fn test_quick_world_for_aeloria() {
        let mut rng = StdRng::seed_from_u64(42);
        let world = assemble_world(&aeloria(), &mut rng);

        assert!(world.description.contains("Aeloria"));
        assert_eq!(world.places.len(), 25);
        assert_eq!(world.historic_figures.len(), 12);
        assert_eq!(world.world_events.len(), 8);
        assert_eq!(world.equipment.len(), 12);
        assert!(world.spell_books.len() >= 1);
        assert_eq!(world.runes_of_power.len(), 7);
        assert_eq!(world.technical_specs.len(), 5);
        assert!(world.places.iter().all(|p| p.parent_place_id.is_none()));
        assert!(world
            .equipment
            .iter()
            .all(|e| e.kind_label() != "Sci-Fi Artifact"));
        assert_cross_references_resolve(&world);
    }

    #[test]
    fn test_description_buckets() {
        let mut rng = StdRng::seed_from_u64(1);
        let low = world_description(
            &GenerationParameters::quick("Dim", "Fantasy-SciFi", 2, 1),
            &mut rng,
        );
        assert!(low.starts_with("The world of Dim is a unique realm where remnants of old magic"));
        assert!(low.contains("technology remains primitive"));

        let high = world_description(
            &GenerationParameters::quick("Bright", "Space-Magic", 9, 9),
            &mut rng,
        );
        assert!(high.contains("ancient magic flows through every corner, and advanced technology"));
        assert!(high.contains("This Space-Magic world is characterized by"));
    }

    #[test]
    fn test_complete_world_counts() {
        let request = CompleteWorldRequest {
            world_name: "Aeloria".to_string(),
            continent_count: 3,
            country_count: 8,
            city_count: 20,
            character_count: 25,
            spell_book_count: 8,
            rune_count: 12,
            technology_count: 15,
            generate_hierarchy: true,
            ..Default::default()
        };
        let mut rng = StdRng::seed_from_u64(9);

        let world = assemble_complete_world(&request, &mut rng);

        assert_eq!(world.historic_figures.len(), 25);
        assert_eq!(world.runes_of_power.len(), 12);
        assert_eq!(world.technical_specs.len(), 15);
        assert_eq!(world.spell_books.len(), 8);
        assert_eq!(world.places.len(), request.hierarchy_place_count());
        assert_cross_references_resolve(&world);
    }

    #[test]
    fn test_hierarchy_nests_each_tier_under_the_previous() {
        let request = CompleteWorldRequest {
            world_name: "Layers".to_string(),
            continent_count: 2,
            country_count: 4,
            region_count: 0,
            city_count: 6,
            town_count: 0,
            village_count: 0,
            dungeon_count: 2,
            natural_feature_count: 1,
            ..Default::default()
        };
        let mut rng = StdRng::seed_from_u64(13);
        let world = assemble_complete_world(&request, &mut rng);

        let type_of = |id: PlaceId| world.find_place(id).map(|p| p.place_type);
        for place in &world.places {
            let parent_type = place.parent_place_id.and_then(|id| type_of(id));
            match place.place_type {
                PlaceType::Continent | PlaceType::Dungeon | PlaceType::NaturalFeature => {
                    assert_eq!(parent_type, None)
                }
                PlaceType::Country => assert_eq!(parent_type, Some(PlaceType::Continent)),
                // Regions were skipped, so cities attach to countries.
                PlaceType::City => assert_eq!(parent_type, Some(PlaceType::Country)),
                other => panic!("unexpected place type {:?}", other),
            }
        }
    }

    #[test]
    fn test_flat_places_when_hierarchy_disabled() {
        let request = CompleteWorldRequest {
            world_name: "Flat".to_string(),
            total_places: 17,
            generate_hierarchy: false,
            ..Default::default()
        };
        let mut rng = StdRng::seed_from_u64(2);
        let world = assemble_complete_world(&request, &mut rng);
        assert_eq!(world.places.len(), 17);
    }

    #[test]
    fn test_no_magic_means_no_magic_items() {
        let mut rng = StdRng::seed_from_u64(5);
        let world = assemble_world(
            &GenerationParameters::quick("Mundane", "Fantasy-SciFi", 5, 0),
            &mut rng,
        );
        assert_eq!(world.magic_item_count(), 0);
        assert!(!world.world_info.laws.magic_exists);

        let request = CompleteWorldRequest {
            world_name: "Mundane".to_string(),
            magic_level: 0,
            ..Default::default()
        };
        let world = assemble_complete_world(&request, &mut rng);
        assert_eq!(world.magic_item_count(), 0);
    }

    #[test]
    fn test_no_tech_means_no_tech_specs() {
        let mut rng = StdRng::seed_from_u64(6);
        let world = assemble_world(
            &GenerationParameters::quick("Primitive", "Fantasy-SciFi", 0, 6),
            &mut rng,
        );
        assert!(world.technical_specs.is_empty());
    }

    #[test]
    fn test_laws_follow_power_levels() {
        for tech in 0..=10 {
            for magic in 0..=10 {
                let info = world_info(&GenerationParameters::quick("L", "Fantasy-SciFi", tech, magic));
                assert_eq!(info.laws.multiverse, tech >= 8 && magic >= 8);
                assert_eq!(info.laws.time_travel, tech >= 9);
                assert_eq!(info.laws.magic_exists, magic > 0);
            }
        }
    }

    #[test]
    fn test_structure_passes_write_custom_properties() {
        let request = CompleteWorldRequest {
            world_name: "Trade".to_string(),
            ..Default::default()
        };
        let mut rng = StdRng::seed_from_u64(21);
        let world = assemble_complete_world(&request, &mut rng);

        for place in &world.places {
            for key in ["Connections", "EconomicSystem", "Currency", "PoliticalSystem", "Ruler"] {
                assert!(place.custom_properties.contains_key(key), "missing {}", key);
            }
        }
    }

    #[test]
    fn test_enhanced_info_records_structure() {
        let mut request = CompleteWorldRequest {
            world_name: "Settings".to_string(),
            ..Default::default()
        };
        request
            .custom_settings
            .insert("Mood".to_string(), serde_json::json!("grim"));
        request
            .custom_settings
            .insert("Moons".to_string(), serde_json::json!(2));

        let info = enhanced_world_info(&request);

        assert_eq!(info.custom_settings["Mood"], "grim");
        assert_eq!(info.custom_settings["Moons"], "2");
        assert_eq!(info.custom_settings["WorldScale"], "Continental");
        assert_eq!(info.custom_settings["HasHierarchy"], "true");
    }

    #[test]
    fn test_detailed_description_mentions_scale_and_counts() {
        let request = CompleteWorldRequest {
            world_name: "Vastness".to_string(),
            world_scale: "Interplanetary".to_string(),
            ..Default::default()
        };
        let text = detailed_description(&request);
        assert!(text.starts_with(
            "The vast world of Vastness is a interplanetary realm that spans multiple worlds and star systems, featuring 3 major continents"
        ));
        assert!(text.ends_with("and 15 world-shaping events that have molded its history."));
    }

    #[test]
    fn test_enhance_content_sizes() {
        let mut rng = StdRng::seed_from_u64(30);
        let mut world = assemble_world(&aeloria(), &mut rng);
        let places = world.places.len();
        let figures = world.historic_figures.len();
        let runes = world.runes_of_power.len();

        enhance_content(&mut world, ContentCategory::Places, &mut rng);
        assert_eq!(world.places.len(), places + 5);

        enhance_content(&mut world, ContentCategory::Magic, &mut rng);
        assert_eq!(world.runes_of_power.len(), runes + 5);

        enhance_content(&mut world, ContentCategory::General, &mut rng);
        assert_eq!(world.places.len(), places + 10);
        assert_eq!(world.historic_figures.len(), figures + 3);
        assert_cross_references_resolve(&world);
    }

    #[test]
    fn test_single_figure_references_resolve_in_sparse_worlds() {
        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut world = World::new("Empty");

            let figure = single_figure(&world, &mut rng);
            assert!(figure.relationships.is_empty());
            assert!(figure.birth_place_id.is_none());
            world.historic_figures.push(figure);

            let place = single_place(&world, &mut rng);
            world.places.push(place);
            let figure = single_figure(&world, &mut rng);
            world.historic_figures.push(figure);

            assert_cross_references_resolve(&world);
        }
    }

    #[test]
    fn test_oversized_counts_are_clamped() {
        let params = GenerationParameters {
            world_name: "Huge".to_string(),
            world_size: 50_000,
            ..Default::default()
        };
        let mut rng = StdRng::seed_from_u64(8);
        let world = assemble_world(&params, &mut rng);
        assert_eq!(world.places.len(), 1000);
    }
}
