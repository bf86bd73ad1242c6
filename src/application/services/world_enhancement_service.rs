//! World Enhancement Service - Free-text driven changes to an existing world
//!
//! A user comment is turned into structured update instructions by the
//! text-generation server, the instructions are applied to the world, and
//! fresh narratives are requested for the result. Every reply from the
//! server is treated as untrusted text: anything that cannot be parsed
//! degrades to a logged no-op or a fallback entity, never to an error.

use std::sync::Arc;

use anyhow::Result;
use chrono::{DateTime, Duration, Utc};
use serde_json::{Map, Value};
use tracing::{debug, info, instrument, warn};

use crate::application::dto::{
    CreateAndEnhanceRequest, WorldEnhancementResult, WorldExport, WorldSummary,
    WorldUpdateInstruction,
};
use crate::application::ports::outbound::LlmPort;
use crate::application::services::llm::response_parser::{
    extract_array_of, extract_object, int_field, string_list, text_field,
};
use crate::application::services::text_generation_service::TextGenerationService;
use crate::application::services::world_generation_service::{
    WorldGenerationService, DEFAULT_MAGIC_LEVEL, DEFAULT_TECH_LEVEL,
};
use crate::domain::entities::{
    alchemy_difficulty_from_label, AlchemyRecipe, Ingredient, IngredientRarity, PlaceType,
    RuneOfPower, Spell, SpellBook, TechSpecType, TechnicalSpecification, World,
    WorldEvent, WorldEventType,
};
use crate::domain::value_objects::{
    EventId, FigureId, PlaceId, RuneId, TechSpecId, DEFAULT_THEME,
};

const INITIAL_COMMENT: &str = "Initial world generation";
const RUNE_SYMBOL: &str = "◈";

/// Service applying user feedback to worlds
pub struct WorldEnhancementService<L: LlmPort> {
    text: Arc<TextGenerationService<L>>,
    generation: Arc<dyn WorldGenerationService>,
}

impl<L: LlmPort> WorldEnhancementService<L> {
    pub fn new(
        text: Arc<TextGenerationService<L>>,
        generation: Arc<dyn WorldGenerationService>,
    ) -> Self {
        Self { text, generation }
    }

    /// Interpret a comment, apply the resulting instructions and narrate the result
    #[instrument(skip(self, world, user_comment), fields(world_name = %world.name))]
    pub async fn enhance(
        &self,
        world: World,
        user_comment: &str,
        target_section: Option<&str>,
    ) -> Result<WorldEnhancementResult> {
        let mut result = WorldEnhancementResult::new(world, user_comment);

        let instructions = self.analyze_comment(&result.updated_world, user_comment).await;
        debug!(count = instructions.len(), "Parsed update instructions");

        for instruction in &instructions {
            self.apply_instruction(&mut result.updated_world, instruction)
                .await?;
        }

        self.narrate_sections(&mut result, target_section).await;
        result.generated_narrative = self.text.world_narrative(&result.updated_world).await;
        result.changes_applied = instructions
            .iter()
            .map(|i| format!("{} {}: {}", i.action, i.target, i.description))
            .collect();

        info!(
            changes = result.changes_applied.len(),
            "Enhanced world from user comment"
        );
        Ok(result)
    }

    /// Rewrite the description of one entity. Unknown sections or ids change nothing.
    #[instrument(skip(self, world, user_comment), fields(world_name = %world.name))]
    pub async fn regenerate_section(
        &self,
        world: World,
        section_type: &str,
        section_id: &str,
        user_comment: &str,
    ) -> Result<WorldEnhancementResult> {
        let mut result = WorldEnhancementResult::new(world, user_comment);
        let section = section_type.trim().to_lowercase();

        let regenerated = self
            .regenerate_entity(&mut result.updated_world, &section, section_id, user_comment)
            .await;
        if !regenerated {
            warn!(
                section_type = %section_type,
                section_id = %section_id,
                "Nothing to regenerate"
            );
        }

        self.narrate_sections(&mut result, Some(&section)).await;
        result.changes_applied.push(format!(
            "Regenerated {} section '{}' based on user feedback",
            section_type, section_id
        ));
        Ok(result)
    }

    /// Add a single piece of content described by the user
    #[instrument(skip(self, world, description), fields(world_name = %world.name))]
    pub async fn add_content(
        &self,
        world: World,
        content_type: &str,
        description: &str,
    ) -> Result<WorldEnhancementResult> {
        let mut result = WorldEnhancementResult::new(world, description);
        let world = &mut result.updated_world;

        match content_type.trim().to_lowercase().as_str() {
            "place" | "places" => {
                let place = self.generation.generate_place(world).await?;
                world.places.push(place);
            }
            "character" | "characters" => {
                let figure = self.generation.generate_figure(world).await?;
                world.historic_figures.push(figure);
            }
            "event" | "events" => {
                let event = self.llm_event(world, description).await;
                world.world_events.push(event);
            }
            "technology" => {
                let spec = self.llm_tech_spec(world, description).await;
                world.technical_specs.push(spec);
            }
            "magic" => {
                let rune = self.llm_rune(world, description).await;
                world.runes_of_power.push(rune);
            }
            other => warn!(content_type = %other, "Unsupported content type, nothing added"),
        }

        self.narrate_sections(&mut result, Some(content_type)).await;
        result
            .changes_applied
            .push(format!("Added new {} content: {}", content_type, description));
        Ok(result)
    }

    pub async fn generate_narrative(&self, world: &World) -> String {
        self.text.world_narrative(world).await
    }

    /// Apply top-level property changes proposed for a comment.
    /// Unparsable proposals leave the world as it was.
    #[instrument(skip(self, world, user_comment), fields(world_name = %world.name))]
    pub async fn update_properties(&self, mut world: World, user_comment: &str) -> World {
        let prompt = format!(
            "Analyze this user comment about a fantasy/sci-fi world and suggest specific property changes:\n\n\
             World: {}\n\
             Current Description: {}\n\
             Current Genre: {}\n\
             Current Tech Level: {}\n\
             Current Magic Level: {}\n\n\
             User Comment: {}\n\n\
             Please provide a JSON response with suggested property updates in this format:\n\
             {{\n  \"description\": \"updated description\",\n  \"genre\": \"updated genre\",\n  \
             \"technologyLevel\": \"updated tech level\",\n  \"magicLevel\": \"updated magic level\",\n  \
             \"customSettings\": {{ \"key\": \"value\" }},\n  \"activeThemes\": [\"theme1\", \"theme2\"]\n}}",
            world.name,
            world.description,
            world.world_info.genre,
            world.world_info.technology_level,
            world.world_info.magic_level,
            user_comment
        );

        let reply = self.text.generate_text_from_json(&world, &prompt).await;
        let changes = match extract_object(&reply) {
            Ok(changes) => changes,
            Err(issue) => {
                warn!(%issue, "Could not parse property changes");
                return world;
            }
        };

        for (key, value) in &changes {
            let value = value_text(value);
            match key.to_lowercase().as_str() {
                "description" => {
                    let prompt = format!(
                        "Update the world description based on this user comment: '{}'. \
                         Current description: '{}'. Suggested change: '{}'. \
                         Provide a rich, detailed description that incorporates the user's feedback.",
                        user_comment, world.description, value
                    );
                    world.description = self.text.generate_text_from_json(&world, &prompt).await;
                }
                "genre" => world.world_info.genre = value,
                "technologylevel" => world.world_info.technology_level = value,
                "magiclevel" => world.world_info.magic_level = value,
                other => debug!(key = %other, "Ignoring unrecognised property"),
            }
        }

        world
    }

    /// Generate a quick world, then enhance it when a comment is supplied
    #[instrument(skip(self, request), fields(world_name = %request.world_name))]
    pub async fn create_and_enhance(
        &self,
        request: CreateAndEnhanceRequest,
    ) -> Result<WorldEnhancementResult> {
        let world = self
            .generation
            .generate_world(
                &request.world_name,
                request.theme.as_deref().unwrap_or(DEFAULT_THEME),
                request.tech_level.unwrap_or(DEFAULT_TECH_LEVEL),
                request.magic_level.unwrap_or(DEFAULT_MAGIC_LEVEL),
            )
            .await?;

        match request.user_comment.as_deref().map(str::trim) {
            Some(comment) if !comment.is_empty() => {
                self.enhance(world, comment, request.target_section.as_deref())
                    .await
            }
            _ => {
                let mut result = WorldEnhancementResult::new(world, INITIAL_COMMENT);
                result.generated_narrative = self.generate_narrative(&result.updated_world).await;
                result.changes_applied.push("Generated initial world".to_string());
                Ok(result)
            }
        }
    }

    /// Package a world with its narrative and content counts
    pub async fn export(&self, world: World) -> WorldExport {
        let narrative = self.generate_narrative(&world).await;
        WorldExport {
            world_id: world.id,
            exported_at: Utc::now(),
            summary: WorldSummary::from(&world),
            narrative,
            world_data: world,
        }
    }

    // ========================================================================
    // Instruction analysis and application
    // ========================================================================

    async fn analyze_comment(&self, world: &World, user_comment: &str) -> Vec<WorldUpdateInstruction> {
        let state = serde_json::to_string_pretty(world).unwrap_or_default();
        let prompt = format!(
            "Analyze this user comment about a fantasy/sci-fi world and break it down into specific update instructions.\n\n\
             World: {}\n\
             Current state: {}\n\n\
             User Comment: {}\n\n\
             Please provide a JSON array of update instructions in this format:\n\
             [\n  {{\n    \"action\": \"add|modify|remove\",\n    \
             \"target\": \"places|characters|events|technology|magic|worldinfo\",\n    \
             \"description\": \"specific description of what to change\",\n    \
             \"properties\": {{ \"key\": \"value\" }}\n  }}\n]",
            world.name, state, user_comment
        );

        let reply = self.text.generate_text_from_json(world, &prompt).await;
        parse_instructions(&reply)
    }

    async fn apply_instruction(
        &self,
        world: &mut World,
        instruction: &WorldUpdateInstruction,
    ) -> Result<()> {
        let action = instruction.action.trim().to_lowercase();
        let description = instruction.description.as_str();

        match (instruction.target.trim().to_lowercase().as_str(), action.as_str()) {
            ("places", "add") => {
                let place = self.generation.generate_place(world).await?;
                world.places.push(place);
            }
            ("places", "modify") => self.modify_place(world, instruction).await,
            ("characters", "add") => {
                let figure = self.generation.generate_figure(world).await?;
                world.historic_figures.push(figure);
            }
            ("events", "add") => {
                let event = self.llm_event(world, description).await;
                world.world_events.push(event);
            }
            ("technology", "add") => {
                let spec = self.llm_tech_spec(world, description).await;
                world.technical_specs.push(spec);
            }
            ("magic", "add") => self.add_magic(world, description).await,
            ("worldinfo", _) => self.modify_world_info(world, instruction).await,
            (target, action) => {
                debug!(target = %target, action = %action, "No handler for instruction")
            }
        }
        Ok(())
    }

    async fn add_magic(&self, world: &mut World, description: &str) {
        let lowered = description.to_lowercase();
        if lowered.contains("spell") {
            let book = self.llm_spell_book(world, description).await;
            world.spell_books.push(book);
        } else if lowered.contains("rune") {
            let rune = self.llm_rune(world, description).await;
            world.runes_of_power.push(rune);
        } else if lowered.contains("alchemy") {
            let recipe = self.llm_alchemy_recipe(world, description).await;
            world.alchemy_recipes.push(recipe);
        } else {
            debug!("Magic instruction names no spell, rune or alchemy; skipped");
        }
    }

    async fn modify_place(&self, world: &mut World, instruction: &WorldUpdateInstruction) {
        let Some(name) = instruction.property("name") else {
            debug!("Place modification without a name; skipped");
            return;
        };
        let Some(place) = world.find_place_by_name_mut(&name) else {
            debug!(place = %name, "Place to modify not found");
            return;
        };

        if let Some(requested) = instruction.property("description") {
            let prompt = format!(
                "Enhance the description of the place '{}' (Type: {}). Current description: '{}'. \
                 User wants to update it to: '{}'. Please provide a rich, detailed description that \
                 incorporates the user's request while maintaining consistency with the place's type \
                 and existing characteristics.",
                place.name, place.place_type, place.description, requested
            );
            place.description = self.text.generate_text_from_json(&*place, &prompt).await;
        }
        if let Some(place_type) = instruction
            .property("type")
            .and_then(|t| PlaceType::parse(&t))
        {
            place.place_type = place_type;
        }
        if let Some(population) = instruction
            .property("population")
            .and_then(|p| p.trim().parse::<i64>().ok())
        {
            place.population.total_count = population;
        }
    }

    async fn modify_world_info(&self, world: &mut World, instruction: &WorldUpdateInstruction) {
        if let Some(description) = instruction.property("description") {
            world.description = description;
        }
        if let Some(genre) = instruction.property("genre") {
            world.world_info.genre = genre;
        }
        if let Some(level) = instruction.property("technologyLevel") {
            world.world_info.technology_level = level;
        }
        if let Some(level) = instruction.property("magicLevel") {
            world.world_info.magic_level = level;
        }

        if instruction.description.to_lowercase().contains("theme") {
            let prompt = format!(
                "Based on this instruction: '{}', suggest 3-5 active themes for the world '{}' \
                 that match the current genre '{}'. Return as a JSON array: [\"theme1\", \"theme2\", \"theme3\"]",
                instruction.description, world.name, world.world_info.genre
            );
            let reply = self.text.generate_text_from_json(&*world, &prompt).await;
            match extract_array_of::<String>(&reply) {
                Ok(themes) if !themes.is_empty() => world.world_info.active_themes = themes,
                Ok(_) => debug!("Theme suggestion was empty"),
                Err(issue) => warn!(%issue, "Could not parse theme suggestions"),
            }
        }
    }

    async fn narrate_sections(&self, result: &mut WorldEnhancementResult, target: Option<&str>) {
        let sections: &[&str] = match target.map(|t| t.trim().to_lowercase()) {
            None => &["places", "characters", "events"],
            Some(t) if t == "places" || t == "place" => &["places"],
            Some(t) if t == "characters" || t == "character" => &["characters"],
            Some(t) if t == "events" || t == "event" => &["events"],
            Some(_) => &[],
        };

        for section in sections {
            let world = &result.updated_world;
            let narrative = match *section {
                "places" => self.text.location_description(&world.places).await,
                "characters" => self.text.character_description(&world.historic_figures).await,
                _ => self.text.event_narrative(&world.world_events).await,
            };
            result.section_narratives.insert(section.to_string(), narrative);
        }
    }

    async fn regenerate_entity(
        &self,
        world: &mut World,
        section: &str,
        section_id: &str,
        user_comment: &str,
    ) -> bool {
        match section {
            "places" => {
                let Some(place) = PlaceId::parse(section_id).and_then(|id| world.find_place_mut(id))
                else {
                    return false;
                };
                let context = serde_json::json!({ "place": &*place, "userComment": user_comment });
                place.description = self.text.location_description(&context).await;
            }
            "characters" => {
                let Some(figure) =
                    FigureId::parse(section_id).and_then(|id| world.find_figure_mut(id))
                else {
                    return false;
                };
                let context =
                    serde_json::json!({ "character": &*figure, "userComment": user_comment });
                figure.description = self.text.character_description(&context).await;
            }
            "events" => {
                let Some(event) = EventId::parse(section_id).and_then(|id| world.find_event_mut(id))
                else {
                    return false;
                };
                let context =
                    serde_json::json!({ "worldEvent": &*event, "userComment": user_comment });
                event.description = self.text.event_narrative(&context).await;
            }
            "technology" => {
                let Some(spec) =
                    TechSpecId::parse(section_id).and_then(|id| world.find_tech_spec_mut(id))
                else {
                    return false;
                };
                let context = serde_json::json!({ "tech": &*spec, "userComment": user_comment });
                spec.description = self
                    .text
                    .generate_text_from_json(
                        &context,
                        "Generate a detailed technical description based on the user comment",
                    )
                    .await;
            }
            "magic" => {
                let Some(rune) = RuneId::parse(section_id).and_then(|id| world.find_rune_mut(id))
                else {
                    return false;
                };
                let context = serde_json::json!({ "rune": &*rune, "userComment": user_comment });
                rune.description = self
                    .text
                    .generate_text_from_json(
                        &context,
                        "Generate a detailed magical description based on the user comment",
                    )
                    .await;
            }
            _ => return false,
        }
        true
    }

    // ========================================================================
    // Content factories
    // ========================================================================

    async fn llm_event(&self, world: &World, description: &str) -> WorldEvent {
        let existing: Vec<&str> = world.places.iter().take(3).map(|p| p.name.as_str()).collect();
        let prompt = format!(
            "Create a detailed world event for the world '{}' based on this description: {}\n\n\
             World Context:\n- Genre: {}\n- Tech Level: {}\n- Magic Level: {}\n- Existing Places: {}\n\n\
             Generate a JSON object with these fields:\n\
             {{\n  \"name\": \"Event Name\",\n  \"description\": \"Detailed description of what happened\",\n  \
             \"startDate\": \"2023-01-01T00:00:00Z\",\n  \"endDate\": \"2023-01-02T00:00:00Z\",\n  \
             \"consequences\": {{ \"political\": \"Political impact\", \"social\": \"Social impact\", \
             \"economic\": \"Economic impact\" }}\n}}",
            world.name,
            description,
            world.world_info.genre,
            world.world_info.technology_level,
            world.world_info.magic_level,
            existing.join(", ")
        );
        let reply = self.text.generate_text_from_json(world, &prompt).await;
        event_from_reply(&reply, description)
    }

    async fn llm_tech_spec(&self, world: &World, description: &str) -> TechnicalSpecification {
        let prompt = format!(
            "Create a detailed technology specification for the world '{}' based on this description: {}\n\n{}\n\n\
             Generate a JSON object with these fields:\n\
             {{\n  \"name\": \"Technology Name\",\n  \"description\": \"Detailed technical description\",\n  \
             \"category\": \"Weapon|Vehicle|Computer|Communication|Medical|Manufacturing|Defense|Exploration|Other\",\n  \
             \"complexity\": \"Simple|Moderate|Complex|Advanced\",\n  \
             \"requirements\": [\"requirement1\", \"requirement2\"],\n  \
             \"applications\": [\"application1\", \"application2\"]\n}}",
            world.name,
            description,
            world_context(world)
        );
        let reply = self.text.generate_text_from_json(world, &prompt).await;
        tech_spec_from_reply(&reply, description)
    }

    async fn llm_rune(&self, world: &World, description: &str) -> RuneOfPower {
        let prompt = format!(
            "Create a detailed magical rune for the world '{}' based on this description: {}\n\n{}\n\n\
             Generate a JSON object with these fields:\n\
             {{\n  \"name\": \"Rune Name\",\n  \
             \"description\": \"Detailed description of the rune's appearance and power\",\n  \
             \"element\": \"Fire|Water|Earth|Air|Shadow|Light|Arcane\",\n  \"powerLevel\": \"1-10\",\n  \
             \"activationMethod\": \"How to activate the rune\",\n  \
             \"effects\": [\"effect1\", \"effect2\"],\n  \"restrictions\": [\"restriction1\", \"restriction2\"]\n}}",
            world.name,
            description,
            world_context(world)
        );
        let reply = self.text.generate_text_from_json(world, &prompt).await;
        rune_from_reply(&reply, description)
    }

    async fn llm_alchemy_recipe(&self, world: &World, description: &str) -> AlchemyRecipe {
        let prompt = format!(
            "Create a detailed alchemy recipe for the world '{}' based on this description: {}\n\n{}\n\n\
             Generate a JSON object with these fields:\n\
             {{\n  \"name\": \"Potion/Recipe Name\",\n  \
             \"description\": \"Detailed description of what this creates and its effects\",\n  \
             \"difficulty\": \"Novice|Apprentice|Journeyman|Expert|Master\",\n  \
             \"ingredients\": [\"ingredient1\", \"ingredient2\", \"ingredient3\"],\n  \
             \"instructions\": \"Step by step brewing/crafting instructions\",\n  \
             \"effects\": [\"effect1\", \"effect2\"],\n  \"sideEffects\": [\"side effect1\", \"side effect2\"]\n}}",
            world.name,
            description,
            world_context(world)
        );
        let reply = self.text.generate_text_from_json(world, &prompt).await;
        alchemy_recipe_from_reply(&reply, description)
    }

    async fn llm_spell_book(&self, world: &World, description: &str) -> SpellBook {
        let prompt = format!(
            "Create a detailed spell book for the world '{}' based on this description: {}\n\n{}\n\n\
             Generate a JSON object with these fields:\n\
             {{\n  \"name\": \"Spell Book Name\",\n  \
             \"description\": \"Detailed description of the spell book's appearance and origin\",\n  \
             \"author\": \"Author Name\",\n  \"language\": \"Language the book is written in\",\n  \
             \"requiredLevel\": \"1-20\",\n  \"spells\": [\n    {{ \"name\": \"Spell Name\", \
             \"description\": \"What the spell does\", \"level\": \"1-9\", \
             \"components\": \"V, S, M (material components)\", \"castingTime\": \"1 action\", \
             \"range\": \"30 feet\", \"duration\": \"1 hour\" }}\n  ]\n}}",
            world.name,
            description,
            world_context(world)
        );
        let reply = self.text.generate_text_from_json(world, &prompt).await;
        spell_book_from_reply(&reply, description, world)
    }
}

// ============================================================================
// Reply interpretation
// ============================================================================

fn parse_instructions(reply: &str) -> Vec<WorldUpdateInstruction> {
    match extract_array_of::<WorldUpdateInstruction>(reply) {
        Ok(instructions) => instructions,
        Err(issue) => {
            warn!(%issue, "Could not parse update instructions, using fallback");
            vec![WorldUpdateInstruction {
                description: reply.to_string(),
                ..Default::default()
            }]
        }
    }
}

fn world_context(world: &World) -> String {
    format!(
        "World Context:\n- Genre: {}\n- Magic Level: {}\n- Tech Level: {}",
        world.world_info.genre, world.world_info.magic_level, world.world_info.technology_level
    )
}

fn value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn reply_object(reply: &str, kind: &str) -> Option<Map<String, Value>> {
    match extract_object(reply) {
        Ok(map) => Some(map),
        Err(issue) => {
            warn!(%issue, kind = %kind, "Could not parse generated content, using fallback");
            None
        }
    }
}

fn parse_date(map: &Map<String, Value>, key: &str) -> Option<DateTime<Utc>> {
    let raw = text_field(map, key)?;
    DateTime::parse_from_rfc3339(raw.trim())
        .ok()
        .map(|date| date.with_timezone(&Utc))
}

fn event_from_reply(reply: &str, description: &str) -> WorldEvent {
    let Some(map) = reply_object(reply, "event") else {
        return WorldEvent {
            description: description.to_string(),
            ..WorldEvent::new("New Event", WorldEventType::Other)
        };
    };

    let now = Utc::now();
    let consequences = match map.get("consequences") {
        Some(Value::Object(entries)) => entries
            .iter()
            .map(|(key, value)| (key.clone(), value_text(value)))
            .collect(),
        _ => Default::default(),
    };

    WorldEvent {
        description: text_field(&map, "description").unwrap_or_else(|| description.to_string()),
        start_date: parse_date(&map, "startDate").unwrap_or(now),
        end_date: Some(parse_date(&map, "endDate").unwrap_or(now + Duration::days(1))),
        consequences,
        ..WorldEvent::new(
            text_field(&map, "name").unwrap_or_else(|| "New Event".to_string()),
            WorldEventType::Other,
        )
    }
}

fn tech_spec_from_reply(reply: &str, description: &str) -> TechnicalSpecification {
    let Some(map) = reply_object(reply, "technology") else {
        return TechnicalSpecification {
            name: "New Technology".to_string(),
            description: description.to_string(),
            ..Default::default()
        };
    };

    let mut spec = TechnicalSpecification {
        name: text_field(&map, "name").unwrap_or_else(|| "New Technology".to_string()),
        description: text_field(&map, "description").unwrap_or_else(|| description.to_string()),
        manufacturer: "Unknown".to_string(),
        power_consumption: "Standard".to_string(),
        requirements: string_list(&map, "requirements"),
        capabilities: string_list(&map, "applications"),
        ..Default::default()
    };
    if let Some(spec_type) = text_field(&map, "category").and_then(|c| TechSpecType::parse(&c)) {
        spec.spec_type = spec_type;
    }
    if let Some(complexity) = text_field(&map, "complexity") {
        spec.specifications.insert("Complexity".to_string(), complexity);
    }
    spec
}

fn rune_from_reply(reply: &str, description: &str) -> RuneOfPower {
    let Some(map) = reply_object(reply, "rune") else {
        return RuneOfPower {
            name: "New Rune".to_string(),
            description: description.to_string(),
            ..Default::default()
        };
    };

    let mut rune = RuneOfPower {
        name: text_field(&map, "name").unwrap_or_else(|| "New Rune".to_string()),
        description: text_field(&map, "description").unwrap_or_else(|| description.to_string()),
        element: text_field(&map, "element").unwrap_or_else(|| "Arcane".to_string()),
        activation_condition: text_field(&map, "activationMethod")
            .unwrap_or_else(|| "Touch and speak command word".to_string()),
        symbol: RUNE_SYMBOL.to_string(),
        effects: string_list(&map, "effects"),
        ..Default::default()
    };
    if let Some(power) = int_field(&map, "powerLevel") {
        rune.power_level = power.clamp(1, 10) as i32;
    }
    rune
}

fn alchemy_recipe_from_reply(reply: &str, description: &str) -> AlchemyRecipe {
    let Some(map) = reply_object(reply, "alchemy recipe") else {
        return AlchemyRecipe {
            name: "New Alchemy Recipe".to_string(),
            description: description.to_string(),
            ..Default::default()
        };
    };

    let mut recipe = AlchemyRecipe {
        name: text_field(&map, "name").unwrap_or_else(|| "New Alchemy Recipe".to_string()),
        description: text_field(&map, "description").unwrap_or_else(|| description.to_string()),
        preparation_time_hours: 1,
        ingredients: string_list(&map, "ingredients")
            .into_iter()
            .map(|name| Ingredient {
                name,
                quantity: 1,
                unit: "piece".to_string(),
                rarity: IngredientRarity::Common,
                ..Default::default()
            })
            .collect(),
        effects: string_list(&map, "effects"),
        side_effects: string_list(&map, "sideEffects"),
        ..Default::default()
    };
    if let Some(label) = text_field(&map, "difficulty") {
        recipe.difficulty = alchemy_difficulty_from_label(&label);
    }
    if let Some(instructions) = text_field(&map, "instructions") {
        recipe.steps = instructions
            .split('.')
            .map(str::trim)
            .filter(|step| !step.is_empty())
            .map(str::to_string)
            .collect();
    }
    recipe
}

fn spell_book_from_reply(reply: &str, description: &str, world: &World) -> SpellBook {
    let Some(map) = reply_object(reply, "spell book") else {
        return SpellBook {
            name: "New Spell Book".to_string(),
            description: description.to_string(),
            ..Default::default()
        };
    };

    let mut book = SpellBook {
        name: text_field(&map, "name").unwrap_or_else(|| "New Spell Book".to_string()),
        description: text_field(&map, "description").unwrap_or_else(|| description.to_string()),
        language: text_field(&map, "language").unwrap_or_else(|| "Common".to_string()),
        ..Default::default()
    };
    if let Some(level) = int_field(&map, "requiredLevel") {
        book.required_level = level.clamp(1, 20) as i32;
    }
    book.author_id = text_field(&map, "author").and_then(|author| {
        world
            .historic_figures
            .iter()
            .find(|f| f.name.eq_ignore_ascii_case(author.trim()))
            .map(|f| f.id)
    });

    if let Some(Value::Array(spells)) = map.get("spells") {
        let school = book.magic_school;
        book.spells = spells
            .iter()
            .filter_map(Value::as_object)
            .map(|spell| Spell {
                name: text_field(spell, "name").unwrap_or_else(|| "Unnamed Spell".to_string()),
                description: text_field(spell, "description").unwrap_or_default(),
                level: int_field(spell, "level").map_or(1, |l| l.clamp(1, 9) as i32),
                school,
                components: text_field(spell, "components").unwrap_or_default(),
                casting_time: text_field(spell, "castingTime").unwrap_or_default(),
                range: text_field(spell, "range").unwrap_or_default(),
                duration: text_field(spell, "duration").unwrap_or_default(),
                ..Default::default()
            })
            .collect();
    }
    book
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::services::text_generation_service::tests::{MockLlm, UnreachableLlm};
    use crate::application::services::text_generation_service::FALLBACK_TEXT;
    use crate::application::services::world_generation_service::WorldGenerationServiceImpl;
    use crate::domain::entities::{HistoricFigure, Place};

    fn service<L: LlmPort>(llm: L) -> WorldEnhancementService<L> {
        WorldEnhancementService::new(
            Arc::new(TextGenerationService::new(llm)),
            Arc::new(WorldGenerationServiceImpl::new()),
        )
    }

    fn sample_world() -> World {
        let mut world = World::new("Aeloria");
        world.world_info.genre = DEFAULT_THEME.to_string();
        world
            .places
            .push(Place::new("NeoHaven", PlaceType::City).with_description("A harbor city"));
        world
            .historic_figures
            .push(HistoricFigure::new("Lyra Voss").with_description("An archmage"));
        world
    }

    #[tokio::test]
    async fn test_unreachable_server_degrades_to_fallback() {
        let service = service(UnreachableLlm);
        let world = sample_world();
        let before = serde_json::to_string(&world).unwrap();

        let result = service
            .enhance(world, "Add a floating city", None)
            .await
            .unwrap();

        assert_eq!(result.generated_narrative, FALLBACK_TEXT);
        assert_eq!(
            result.changes_applied,
            vec![format!("modify worldinfo: {}", FALLBACK_TEXT)]
        );
        assert_eq!(serde_json::to_string(&result.updated_world).unwrap(), before);
        assert_eq!(result.section_narratives.len(), 3);
    }

    #[tokio::test]
    async fn test_regenerate_missing_place_leaves_world_unchanged() {
        let service = service(MockLlm::new(&["Rewritten"]));
        let world = sample_world();
        let before = serde_json::to_string(&world).unwrap();

        let result = service
            .regenerate_section(world, "places", "nonexistent-id", "make it bigger")
            .await
            .unwrap();

        assert_eq!(serde_json::to_string(&result.updated_world).unwrap(), before);
    }

    #[tokio::test]
    async fn test_regenerate_existing_place_rewrites_description() {
        let service = service(MockLlm::new(&["Towering spires over a glass bay"]));
        let world = sample_world();
        let place_id = world.places[0].id.to_string();

        let result = service
            .regenerate_section(world, "places", &place_id, "make it bigger")
            .await
            .unwrap();

        assert_eq!(
            result.updated_world.places[0].description,
            "Towering spires over a glass bay"
        );
        assert_eq!(
            result.changes_applied,
            vec![format!(
                "Regenerated places section '{}' based on user feedback",
                place_id
            )]
        );
        assert!(result.section_narratives.contains_key("places"));
    }

    #[tokio::test]
    async fn test_unknown_section_is_a_no_op() {
        let service = service(MockLlm::new(&["Rewritten"]));
        let world = sample_world();
        let before = serde_json::to_string(&world).unwrap();

        let result = service
            .regenerate_section(world, "weather", "anything", "more rain")
            .await
            .unwrap();

        assert_eq!(serde_json::to_string(&result.updated_world).unwrap(), before);
        assert!(result.section_narratives.is_empty());
    }

    #[tokio::test]
    async fn test_add_instructions_are_applied_once() {
        let analysis = r#"Here you go:
[
  {"action": "add", "target": "places", "description": "a floating harbor"},
  {"action": "add", "target": "magic", "description": "a rune of embers"}
]"#;
        let rune = r#"{"name": "Ember Sigil", "powerLevel": 14, "effects": ["warmth"]}"#;
        let service = service(MockLlm::new(&[analysis, rune, "Narrative"]));

        let result = service
            .enhance(sample_world(), "Add a harbor and a rune", None)
            .await
            .unwrap();

        let world = &result.updated_world;
        assert_eq!(world.places.len(), 2);
        assert_eq!(world.runes_of_power.len(), 1);
        assert_eq!(world.runes_of_power[0].name, "Ember Sigil");
        assert_eq!(world.runes_of_power[0].power_level, 10);
        assert_eq!(world.runes_of_power[0].symbol, RUNE_SYMBOL);
        assert_eq!(result.generated_narrative, "Narrative");
        assert_eq!(
            result.changes_applied[1],
            "add magic: a rune of embers".to_string()
        );
    }

    #[tokio::test]
    async fn test_modify_place_by_name() {
        let analysis = r#"[{"action":"modify","target":"places","description":"grow it",
            "properties":{"name":"NeoHaven","type":"Town","population":"1200"}}]"#;
        let service = service(MockLlm::new(&[analysis, "Narrative"]));

        let result = service
            .enhance(sample_world(), "NeoHaven should be a town", Some("places"))
            .await
            .unwrap();

        let place = &result.updated_world.places[0];
        assert_eq!(place.place_type, PlaceType::Town);
        assert_eq!(place.population.total_count, 1200);
        assert_eq!(place.description, "A harbor city");
        assert_eq!(result.section_narratives.len(), 1);
    }

    #[tokio::test]
    async fn test_theme_instruction_sets_active_themes() {
        let analysis = r#"[{"action":"modify","target":"worldinfo","description":"darker theme",
            "properties":{"genre":"Grimdark"}}]"#;
        let themes = r#"["Decay", "Betrayal", "Hope"]"#;
        let service = service(MockLlm::new(&[analysis, themes, "Narrative"]));

        let result = service
            .enhance(sample_world(), "Make it darker", None)
            .await
            .unwrap();

        let info = &result.updated_world.world_info;
        assert_eq!(info.genre, "Grimdark");
        assert_eq!(info.active_themes, vec!["Decay", "Betrayal", "Hope"]);
    }

    #[tokio::test]
    async fn test_add_event_content() {
        let reply = r#"{"name":"The Sundering","description":"The sky split",
            "startDate":"1203-04-01T00:00:00Z","consequences":{"political":"Empires fell"}}"#;
        let service = service(MockLlm::new(&[reply, "Narrative"]));

        let result = service
            .add_content(sample_world(), "event", "A cataclysm")
            .await
            .unwrap();

        let event = &result.updated_world.world_events[0];
        assert_eq!(event.name, "The Sundering");
        assert_eq!(event.start_date.to_rfc3339(), "1203-04-01T00:00:00+00:00");
        assert_eq!(event.consequences["political"], "Empires fell");
        assert_eq!(
            result.changes_applied,
            vec!["Added new event content: A cataclysm".to_string()]
        );
        assert!(result.section_narratives.contains_key("events"));
    }

    #[tokio::test]
    async fn test_added_characters_only_reference_figures_in_the_world() {
        let service = service(MockLlm::new(&["Narrative"]));

        for _ in 0..50 {
            let mut world = World::new("Empty");
            for _ in 0..3 {
                world = service
                    .add_content(world, "character", "a hero")
                    .await
                    .unwrap()
                    .updated_world;
            }

            assert_eq!(world.historic_figures.len(), 3);
            for figure in &world.historic_figures {
                assert!(figure
                    .relationships
                    .iter()
                    .all(|id| world.find_figure(*id).is_some()));
            }
        }
    }

    #[tokio::test]
    async fn test_update_properties_applies_known_keys_only() {
        let reply = r#"Suggested: {"genre": "Solarpunk", "magicLevel": "Low", "weather": "rain"}"#;
        let service = service(MockLlm::new(&[reply]));

        let world = service
            .update_properties(sample_world(), "less magic, more sun")
            .await;

        assert_eq!(world.world_info.genre, "Solarpunk");
        assert_eq!(world.world_info.magic_level, "Low");
        assert_eq!(world.description, "");
    }

    #[tokio::test]
    async fn test_update_properties_ignores_unparsable_reply() {
        let service = service(MockLlm::new(&["I would change the genre."]));
        let world = sample_world();
        let before = serde_json::to_string(&world).unwrap();

        let world = service.update_properties(world, "whatever").await;

        assert_eq!(serde_json::to_string(&world).unwrap(), before);
    }

    #[tokio::test]
    async fn test_create_without_comment_reports_initial_generation() {
        let service = service(MockLlm::new(&["Once upon a time"]));
        let request = CreateAndEnhanceRequest {
            world_name: "Aeloria".to_string(),
            theme: None,
            tech_level: None,
            magic_level: None,
            user_comment: None,
            target_section: None,
        };

        let result = service.create_and_enhance(request).await.unwrap();

        assert_eq!(result.user_comment, INITIAL_COMMENT);
        assert_eq!(result.changes_applied, vec!["Generated initial world".to_string()]);
        assert_eq!(result.generated_narrative, "Once upon a time");
        assert_eq!(result.updated_world.places.len(), 25);
    }

    #[test]
    fn test_instruction_fallbacks() {
        let instructions = parse_instructions("Just make it cooler.");
        assert_eq!(instructions.len(), 1);
        assert_eq!(instructions[0].action, "modify");
        assert_eq!(instructions[0].target, "worldinfo");
        assert_eq!(instructions[0].description, "Just make it cooler.");

        let broken = parse_instructions("[{\"action\": \"add\"");
        assert_eq!(broken[0].target, "worldinfo");

        assert!(parse_instructions("[]").is_empty());
    }

    #[test]
    fn test_alchemy_reply_parsing() {
        let reply = r#"{"name":"Dawn Tonic","difficulty":"Expert",
            "ingredients":["Sunpetal","Ash"],"instructions":"Grind the petals. Boil.  . Strain",
            "sideEffects":["glowing skin"]}"#;

        let recipe = alchemy_recipe_from_reply(reply, "a tonic");

        assert_eq!(recipe.difficulty, 7);
        assert_eq!(recipe.ingredients.len(), 2);
        assert_eq!(recipe.ingredients[0].unit, "piece");
        assert_eq!(recipe.steps, vec!["Grind the petals", "Boil", "Strain"]);
        assert_eq!(recipe.preparation_time_hours, 1);
        assert_eq!(recipe.side_effects, vec!["glowing skin"]);
    }

    #[test]
    fn test_spell_book_reply_links_author_and_clamps_levels() {
        let world = sample_world();
        let reply = r#"{"name":"Codex of Stars","author":"lyra voss","requiredLevel":"40",
            "spells":[{"name":"Starfall","level":12},{"name":"Glimmer"}]}"#;

        let book = spell_book_from_reply(reply, "a star book", &world);

        assert_eq!(book.required_level, 20);
        assert_eq!(book.language, "Common");
        assert_eq!(book.author_id, Some(world.historic_figures[0].id));
        assert_eq!(book.spells.len(), 2);
        assert_eq!(book.spells[0].level, 9);
        assert_eq!(book.spells[1].level, 1);
    }

    #[test]
    fn test_unparsable_replies_fall_back_to_named_placeholders() {
        assert_eq!(tech_spec_from_reply("no", "d").name, "New Technology");
        assert_eq!(rune_from_reply("no", "d").name, "New Rune");
        assert_eq!(alchemy_recipe_from_reply("no", "d").name, "New Alchemy Recipe");
        assert_eq!(spell_book_from_reply("no", "d", &World::default()).name, "New Spell Book");
        let event = event_from_reply("no", "the flood");
        assert_eq!(event.name, "New Event");
        assert_eq!(event.description, "the flood");
    }

    #[test]
    fn test_tech_category_parsing() {
        let spec = tech_spec_from_reply(r#"{"name":"Skyrail","category":"vehicle"}"#, "d");
        assert_eq!(spec.manufacturer, "Unknown");
        assert_eq!(spec.power_consumption, "Standard");
        assert_eq!(spec.spec_type, TechSpecType::Vehicle);

        let unknown = tech_spec_from_reply(r#"{"category":"Transportation"}"#, "d");
        assert_eq!(unknown.spec_type, TechSpecType::Other);
    }
}
