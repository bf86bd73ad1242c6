//! Wiki renderer - Read-only HTML pages for a stored world
//!
//! Every page is a self-contained document with an inline stylesheet. Links
//! between pages use the `/api/world/{world_id}/wiki/{kind}/{entity_id}`
//! routes. All text taken from the world is escaped before interpolation.

use std::fmt::Display;

use crate::domain::entities::{Equipment, HistoricFigure, Place, World};
use crate::domain::value_objects::{EquipmentId, EventId, FigureId, PlaceId, SpellBookId};

const PLACE_LIMIT: usize = 20;
const CHARACTER_LIMIT: usize = 15;
const ITEM_LIMIT: usize = 12;
const SPELL_BOOK_LIMIT: usize = 10;
const EVENT_LIMIT: usize = 10;
const SUMMARY_LENGTH: usize = 100;

/// Entity kinds that have their own wiki page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WikiEntityKind {
    Place,
    Character,
    Item,
    Spell,
    Event,
}

impl WikiEntityKind {
    /// Parse the `{kind}` path segment
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "place" => Some(Self::Place),
            "character" => Some(Self::Character),
            "item" => Some(Self::Item),
            "spell" => Some(Self::Spell),
            "event" => Some(Self::Event),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Place => "Place",
            Self::Character => "Character",
            Self::Item => "Item",
            Self::Spell => "Spell",
            Self::Event => "Event",
        }
    }
}

/// Render the page for one entity. `None` when the id is unparsable or
/// absent from the world.
pub fn render_entity(world: &World, kind: WikiEntityKind, raw_id: &str) -> Option<String> {
    match kind {
        WikiEntityKind::Place => PlaceId::parse(raw_id).and_then(|id| render_place(world, id)),
        WikiEntityKind::Character => {
            FigureId::parse(raw_id).and_then(|id| render_character(world, id))
        }
        WikiEntityKind::Item => EquipmentId::parse(raw_id).and_then(|id| render_item(world, id)),
        WikiEntityKind::Spell => {
            SpellBookId::parse(raw_id).and_then(|id| render_spell_book(world, id))
        }
        WikiEntityKind::Event => EventId::parse(raw_id).and_then(|id| render_event(world, id)),
    }
}

// ============================================================================
// World overview
// ============================================================================

pub fn render_world(world: &World) -> String {
    let links = Links::new(world);
    let info = &world.world_info;
    let mut page = Page::new(&format!("{} - World Wiki", world.name));

    page.line("<div class=\"wiki-header\">");
    page.line(format!("<h1 class=\"wiki-title\">{}</h1>", escape(&world.name)));
    page.line("<div class=\"wiki-subtitle\">World Encyclopedia</div>");
    page.line("</div>");

    page.line("<nav class=\"wiki-nav\">");
    for (anchor, label) in [
        ("overview", "Overview"),
        ("places", "Places"),
        ("characters", "Characters"),
        ("items", "Items"),
        ("magic", "Magic"),
        ("events", "Events"),
    ] {
        page.line(format!("<a href=\"#{}\">{}</a>", anchor, label));
    }
    page.line("</nav>");

    page.line("<div class=\"wiki-content\">");

    page.line("<section id=\"overview\">");
    page.line("<div class=\"wiki-infobox\">");
    page.line(format!("<h3>{}</h3>", escape(&world.name)));
    page.field("Created", world.creation_date.format("%Y-%m-%d"));
    page.field("Genre", escape(&info.genre));
    page.field("Era", escape(&info.time_era));
    page.field("Magic Level", escape(&info.magic_level));
    page.field("Tech Level", escape(&info.technology_level));
    if !info.active_themes.is_empty() {
        page.field("Themes", escape(&info.active_themes.join(", ")));
    }
    page.line("</div>");
    page.line("<h2>Overview</h2>");
    page.paragraph(&world.description);
    page.line("</section>");

    page.line("<section id=\"places\">");
    page.line("<h2>Places</h2>");
    if world.places.is_empty() {
        page.empty_note("No places have been discovered yet.");
    } else {
        page.line("<div class=\"wiki-grid\">");
        for place in world.places.iter().take(PLACE_LIMIT) {
            page.card(
                &links.place(place.id, &place.name),
                &place.place_type.to_string(),
                &place.description,
            );
        }
        page.line("</div>");
    }
    page.line("</section>");

    page.line("<section id=\"characters\">");
    page.line("<h2>Characters</h2>");
    if world.historic_figures.is_empty() {
        page.empty_note("No notable characters have emerged yet.");
    } else {
        page.line("<div class=\"wiki-grid\">");
        for figure in world.historic_figures.iter().take(CHARACTER_LIMIT) {
            let subtitle = format!("{} - {} {}", figure.title, figure.race, figure.class);
            page.card(
                &links.character(figure.id, &figure.name),
                &subtitle,
                &figure.description,
            );
        }
        page.line("</div>");
    }
    page.line("</section>");

    page.line("<section id=\"items\">");
    page.line("<h2>Items</h2>");
    if world.equipment.is_empty() {
        page.empty_note("No items have been catalogued yet.");
    } else {
        page.line("<div class=\"wiki-grid\">");
        for item in world.equipment.iter().take(ITEM_LIMIT) {
            let common = item.common();
            let subtitle = format!(
                "{} - {:?} ({:?})",
                item.kind_label(),
                common.equipment_type,
                common.rarity
            );
            page.card(
                &links.item(item.id(), item.name()),
                &subtitle,
                &common.description,
            );
        }
        page.line("</div>");
    }
    page.line("</section>");

    page.line("<section id=\"magic\">");
    page.line("<h2>Magic</h2>");
    if world.spell_books.is_empty()
        && world.runes_of_power.is_empty()
        && world.alchemy_recipes.is_empty()
    {
        page.empty_note("No magical knowledge has been recorded yet.");
    }
    if !world.spell_books.is_empty() {
        page.line("<h3>Spell Books</h3>");
        page.line("<ul>");
        for book in world.spell_books.iter().take(SPELL_BOOK_LIMIT) {
            page.line(format!(
                "<li>{} ({:?}, level {})</li>",
                links.spell_book(book.id, &book.name),
                book.magic_school,
                book.required_level
            ));
        }
        page.line("</ul>");
    }
    if !world.runes_of_power.is_empty() {
        page.line("<h3>Runes of Power</h3>");
        page.line("<ul>");
        for rune in &world.runes_of_power {
            page.line(format!(
                "<li><strong>{} {}</strong> - {:?}, power {}/10</li>",
                escape(&rune.symbol),
                escape(&rune.name),
                rune.rune_type,
                rune.power_level
            ));
        }
        page.line("</ul>");
    }
    if !world.alchemy_recipes.is_empty() {
        page.line("<h3>Alchemy Recipes</h3>");
        page.line("<ul>");
        for recipe in &world.alchemy_recipes {
            page.line(format!(
                "<li><strong>{}</strong> - {:?}, difficulty {}/10</li>",
                escape(&recipe.name),
                recipe.alchemy_type,
                recipe.difficulty
            ));
        }
        page.line("</ul>");
    }
    page.line("</section>");

    page.line("<section id=\"events\">");
    page.line("<h2>Historical Events</h2>");
    if world.world_events.is_empty() {
        page.empty_note("No historical events have been recorded yet.");
    } else {
        page.line("<ul class=\"wiki-timeline\">");
        for event in world.world_events.iter().take(EVENT_LIMIT) {
            page.line(format!(
                "<li><span class=\"year\">{}</span> {} - {}</li>",
                event.start_date.format("%Y"),
                links.event(event.id, &event.name),
                escape(&truncate(&event.description, SUMMARY_LENGTH))
            ));
        }
        page.line("</ul>");
    }
    page.line("</section>");

    page.line("</div>");
    page.line("<div class=\"wiki-footer\">");
    page.line(format!(
        "<p>{} places, {} characters, {} events, {} items</p>",
        world.places.len(),
        world.historic_figures.len(),
        world.world_events.len(),
        world.item_count()
    ));
    page.line("</div>");
    page.finish()
}

// ============================================================================
// Entity pages
// ============================================================================

pub fn render_place(world: &World, place_id: PlaceId) -> Option<String> {
    let place = world.find_place(place_id)?;
    let links = Links::new(world);
    let mut page = Page::new(&format!("{} - {} Wiki", place.name, world.name));

    page.entity_header(&links, "places", "Places", &place.name, &place.place_type.to_string());

    page.line("<div class=\"wiki-infobox\">");
    page.line(format!("<h3>{}</h3>", escape(&place.name)));
    page.field("Type", place.place_type);
    if let Some(parent) = place.parent_place_id.and_then(|id| world.find_place(id)) {
        page.field("Part of", links.place(parent.id, &parent.name));
    }
    page.field("Climate", escape(&place.geography.climate));
    page.field("Terrain", escape(&place.geography.terrain));
    page.field("Population", place.population.total_count);
    page.field("Area", format!("{:.1} km²", place.geography.area));
    if !place.population.government_type.is_empty() {
        page.field("Government", escape(&place.population.government_type));
    }
    page.line("</div>");

    page.paragraph(&place.description);
    page.text_list("Notable Features", &place.notable_features);

    if !place.geography.natural_resources.is_empty() {
        page.text_list("Natural Resources", &place.geography.natural_resources);
    }

    let notable_people: Vec<&HistoricFigure> = world
        .historic_figures
        .iter()
        .filter(|f| is_connected_to(f, place))
        .collect();
    if !notable_people.is_empty() {
        page.line("<h3>Notable People</h3>");
        page.line("<ul>");
        for figure in notable_people {
            page.line(format!(
                "<li>{} - {}</li>",
                links.character(figure.id, &figure.name),
                escape(&figure.title)
            ));
        }
        page.line("</ul>");
    }

    let children: Vec<&Place> = world.children_of(place.id).collect();
    if !children.is_empty() {
        page.line("<h3>Sub-locations</h3>");
        page.line("<ul>");
        for child in children {
            page.line(format!(
                "<li>{} ({})</li>",
                links.place(child.id, &child.name),
                child.place_type
            ));
        }
        page.line("</ul>");
    }

    page.line("</div>");
    page.back_footer(&links);
    Some(page.finish())
}

pub fn render_character(world: &World, figure_id: FigureId) -> Option<String> {
    let figure = world.find_figure(figure_id)?;
    let links = Links::new(world);
    let mut page = Page::new(&format!("{} - {} Wiki", figure.name, world.name));

    page.entity_header(&links, "characters", "Characters", &figure.name, &figure.title);

    page.line("<div class=\"wiki-infobox\">");
    page.line(format!("<h3>{}</h3>", escape(&figure.name)));
    page.field("Race", escape(&figure.race));
    page.field("Class", escape(&figure.class));
    page.field("Status", if figure.is_alive { "Alive" } else { "Deceased" });
    if let Some(born) = figure.birth_date {
        page.field("Born", born.format("%Y"));
    }
    if let Some(died) = figure.death_date {
        page.field("Died", died.format("%Y"));
    }
    if let Some(birthplace) = figure.birth_place_id.and_then(|id| world.find_place(id)) {
        page.field("Birthplace", links.place(birthplace.id, &birthplace.name));
    }
    page.line("</div>");

    page.paragraph(&figure.description);
    page.text_list("Achievements", &figure.achievements);

    let associated: Vec<&Place> = figure
        .associated_place_ids
        .iter()
        .filter_map(|id| world.find_place(*id))
        .collect();
    if !associated.is_empty() {
        page.line("<h3>Associated Places</h3>");
        page.line("<ul>");
        for place in associated {
            page.line(format!("<li>{}</li>", links.place(place.id, &place.name)));
        }
        page.line("</ul>");
    }

    if !figure.attributes.is_empty() {
        page.line("<h3>Attributes</h3>");
        page.line("<div class=\"wiki-properties\">");
        for (name, value) in &figure.attributes {
            page.line(format!(
                "<div class=\"property\"><strong>{}:</strong> {}</div>",
                escape(name),
                value
            ));
        }
        page.line("</div>");
    }

    let owned: Vec<&Equipment> = world
        .equipment
        .iter()
        .filter(|item| item.common().current_owner_id == Some(figure.id))
        .collect();
    if !owned.is_empty() {
        page.line("<h3>Equipment</h3>");
        page.line("<ul>");
        for item in owned {
            page.line(format!(
                "<li>{} ({:?})</li>",
                links.item(item.id(), item.name()),
                item.common().equipment_type
            ));
        }
        page.line("</ul>");
    }

    page.line("</div>");
    page.back_footer(&links);
    Some(page.finish())
}

pub fn render_item(world: &World, item_id: EquipmentId) -> Option<String> {
    let item = world.find_equipment(item_id)?;
    let common = item.common();
    let links = Links::new(world);
    let mut page = Page::new(&format!("{} - {} Wiki", common.name, world.name));

    page.entity_header(&links, "items", "Items", &common.name, item.kind_label());

    page.line("<div class=\"wiki-infobox\">");
    page.line(format!("<h3>{}</h3>", escape(&common.name)));
    page.field("Type", format!("{:?}", common.equipment_type));
    page.field("Rarity", format!("{:?}", common.rarity));
    page.field("Material", escape(&common.material));
    page.field("Condition", escape(&common.condition));
    page.field("Weight", format!("{:.2} kg", common.weight));
    page.field("Value", format!("{:.2}", common.value));
    if let Some(creator) = common.creator_id.and_then(|id| world.find_figure(id)) {
        page.field("Creator", links.character(creator.id, &creator.name));
    }
    if let Some(owner) = common.current_owner_id.and_then(|id| world.find_figure(id)) {
        page.field("Current Owner", links.character(owner.id, &owner.name));
    }
    page.line("</div>");

    page.paragraph(&common.description);

    if !common.properties.is_empty() {
        page.line("<h3>Properties</h3>");
        page.line("<div class=\"wiki-properties\">");
        for (name, value) in &common.properties {
            page.line(format!(
                "<div class=\"property\"><strong>{}:</strong> {}</div>",
                escape(name),
                value
            ));
        }
        page.line("</div>");
    }

    match item {
        Equipment::Weapon(weapon) => {
            page.line("<h3>Combat Statistics</h3>");
            page.field("Weapon Type", format!("{:?}", weapon.weapon_type));
            page.field("Damage", weapon.damage);
            page.field("Range", weapon.range);
            page.field("Damage Type", escape(&weapon.damage_type));
            page.field("Magical", yes_no(weapon.is_magical));
            page.text_list("Enchantments", &weapon.enchantments);
        }
        Equipment::MagicalArtifact(artifact) => {
            page.line("<h3>Magical Properties</h3>");
            page.field("Magic Type", format!("{:?}", artifact.magic_type));
            page.field("Power", artifact.magic_power);
            page.field(
                "Charges",
                format!("{}/{}", artifact.charges, artifact.max_charges),
            );
            page.field("Requires Attunement", yes_no(artifact.requires_attunement));
            if !artifact.activation_method.is_empty() {
                page.field("Activation", escape(&artifact.activation_method));
            }
            page.text_list("Spells", &artifact.spells);
        }
        Equipment::SciFiArtifact(artifact) => {
            page.line("<h3>Technical Details</h3>");
            page.field("Technology", format!("{:?}", artifact.technology_type));
            page.field("Tech Level", artifact.tech_level);
            page.field("Power Source", escape(&artifact.power_source));
            page.field("Power Level", artifact.power_level);
            page.field("Operational", yes_no(artifact.is_operational));
            page.text_list("Functions", &artifact.functions);
        }
    }

    page.text_list("History", &common.history);

    page.line("</div>");
    page.back_footer(&links);
    Some(page.finish())
}

pub fn render_spell_book(world: &World, book_id: SpellBookId) -> Option<String> {
    let book = world.find_spell_book(book_id)?;
    let links = Links::new(world);
    let mut page = Page::new(&format!("{} - {} Wiki", book.name, world.name));

    page.entity_header(&links, "magic", "Magic", &book.name, "Spell Book");

    page.line("<div class=\"wiki-infobox\">");
    page.line(format!("<h3>{}</h3>", escape(&book.name)));
    page.field("School", format!("{:?}", book.magic_school));
    page.field("Required Level", book.required_level);
    page.field("Spell Count", book.spells.len());
    page.field("Language", escape(&book.language));
    page.field("Complete", yes_no(book.is_complete));
    if let Some(author) = book.author_id.and_then(|id| world.find_figure(id)) {
        page.field("Author", links.character(author.id, &author.name));
    }
    page.line("</div>");

    page.paragraph(&book.description);

    if !book.spells.is_empty() {
        page.line("<h3>Contained Spells</h3>");
        page.line("<ul>");
        for spell in &book.spells {
            page.line(format!(
                "<li><strong>{}</strong> (level {}) - {}</li>",
                escape(&spell.name),
                spell.level,
                escape(&spell.description)
            ));
        }
        page.line("</ul>");
    }
    page.text_list("Missing Pages", &book.missing_pages);

    page.line("</div>");
    page.back_footer(&links);
    Some(page.finish())
}

pub fn render_event(world: &World, event_id: EventId) -> Option<String> {
    let event = world.find_event(event_id)?;
    let links = Links::new(world);
    let mut page = Page::new(&format!("{} - {} Wiki", event.name, world.name));

    page.entity_header(&links, "events", "Events", &event.name, "Historical Event");

    page.line("<div class=\"wiki-infobox\">");
    page.line(format!("<h3>{}</h3>", escape(&event.name)));
    page.field("Start Date", event.start_date.format("%Y-%m-%d"));
    if let Some(end) = event.end_date {
        page.field("End Date", end.format("%Y-%m-%d"));
    }
    page.field("Type", format!("{:?}", event.event_type));
    page.field("Status", format!("{:?}", event.status));
    page.field("Global Impact", format!("{}/10", event.global_impact_level));
    page.line("</div>");

    page.paragraph(&event.description);

    let participants: Vec<&HistoricFigure> = event
        .participant_ids
        .iter()
        .filter_map(|id| world.find_figure(*id))
        .collect();
    if !participants.is_empty() {
        page.line("<h3>Participants</h3>");
        page.line("<ul>");
        for figure in participants {
            page.line(format!("<li>{}</li>", links.character(figure.id, &figure.name)));
        }
        page.line("</ul>");
    }

    let affected: Vec<&Place> = event
        .affected_place_ids
        .iter()
        .filter_map(|id| world.find_place(*id))
        .collect();
    if !affected.is_empty() {
        page.line("<h3>Affected Places</h3>");
        page.line("<ul>");
        for place in affected {
            page.line(format!("<li>{}</li>", links.place(place.id, &place.name)));
        }
        page.line("</ul>");
    }

    if !event.consequences.is_empty() {
        page.line("<h3>Consequences</h3>");
        page.line("<ul>");
        for (key, value) in &event.consequences {
            page.line(format!(
                "<li><strong>{}:</strong> {}</li>",
                escape(key),
                escape(value)
            ));
        }
        page.line("</ul>");
    }

    page.line("</div>");
    page.back_footer(&links);
    Some(page.finish())
}

pub fn render_not_found(kind: &str, id: &str) -> String {
    let mut page = Page::new(&format!("{} Not Found", kind));
    page.line("<div class=\"wiki-header\">");
    page.line(format!(
        "<h1 class=\"wiki-title\">404 - {} Not Found</h1>",
        escape(kind)
    ));
    page.line("</div>");
    page.line("<div class=\"wiki-content\">");
    page.line(format!(
        "<p>The {} with ID '{}' could not be found.</p>",
        escape(&kind.to_lowercase()),
        escape(id)
    ));
    page.line("<p><a href=\"javascript:history.back()\">&larr; Go Back</a></p>");
    page.line("</div>");
    page.finish()
}

// ============================================================================
// Helpers
// ============================================================================

/// Escape text for use in element content and double-quoted attributes
pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}

/// Cut to `max_chars` characters and mark the cut with "..."
pub fn truncate(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "Yes"
    } else {
        "No"
    }
}

fn is_connected_to(figure: &HistoricFigure, place: &Place) -> bool {
    figure.birth_place_id == Some(place.id) || figure.associated_place_ids.contains(&place.id)
}

/// Builds escaped anchor tags into the wiki of one world
struct Links {
    base: String,
    world_name: String,
}

impl Links {
    fn new(world: &World) -> Self {
        Self {
            base: format!("/api/world/{}/wiki", world.id),
            world_name: world.name.clone(),
        }
    }

    fn anchor(&self, path: &str, name: &str) -> String {
        format!("<a href=\"{}{}\">{}</a>", self.base, path, escape(name))
    }

    fn place(&self, id: PlaceId, name: &str) -> String {
        self.anchor(&format!("/place/{}", id), name)
    }

    fn character(&self, id: FigureId, name: &str) -> String {
        self.anchor(&format!("/character/{}", id), name)
    }

    fn item(&self, id: EquipmentId, name: &str) -> String {
        self.anchor(&format!("/item/{}", id), name)
    }

    fn spell_book(&self, id: SpellBookId, name: &str) -> String {
        self.anchor(&format!("/spell/{}", id), name)
    }

    fn event(&self, id: EventId, name: &str) -> String {
        self.anchor(&format!("/event/{}", id), name)
    }

    fn section(&self, anchor: &str, label: &str) -> String {
        format!("<a href=\"{}#{}\">{}</a>", self.base, anchor, label)
    }

    fn home(&self) -> String {
        self.anchor("", &self.world_name)
    }
}

/// Line-oriented HTML document under construction
struct Page {
    html: String,
}

impl Page {
    fn new(title: &str) -> Self {
        let mut page = Self {
            html: String::with_capacity(8 * 1024),
        };
        page.line("<!DOCTYPE html>");
        page.line("<html>");
        page.line("<head>");
        page.line("<meta charset=\"utf-8\">");
        page.line(format!("<title>{}</title>", escape(title)));
        page.line(WIKI_STYLES);
        page.line("</head>");
        page.line("<body>");
        page
    }

    fn line(&mut self, text: impl AsRef<str>) {
        self.html.push_str(text.as_ref());
        self.html.push('\n');
    }

    /// Labelled value. The value must already be escaped or be markup.
    fn field(&mut self, label: &str, value: impl Display) {
        self.line(format!("<div><strong>{}:</strong> {}</div>", label, value));
    }

    fn paragraph(&mut self, text: &str) {
        if !text.is_empty() {
            self.line(format!("<p>{}</p>", escape(text)));
        }
    }

    fn empty_note(&mut self, text: &str) {
        self.line(format!("<p class=\"wiki-empty\">{}</p>", text));
    }

    fn text_list(&mut self, heading: &str, entries: &[String]) {
        if entries.is_empty() {
            return;
        }
        self.line(format!("<h3>{}</h3>", heading));
        self.line("<ul>");
        for entry in entries {
            self.line(format!("<li>{}</li>", escape(entry)));
        }
        self.line("</ul>");
    }

    fn card(&mut self, link: &str, subtitle: &str, description: &str) {
        self.line("<div class=\"wiki-card\">");
        self.line(format!("<h4>{}</h4>", link));
        self.line(format!("<div class=\"wiki-card-type\">{}</div>", escape(subtitle)));
        self.line(format!(
            "<p>{}</p>",
            escape(&truncate(description, SUMMARY_LENGTH))
        ));
        self.line("</div>");
    }

    /// Breadcrumb, title and subtitle, then opens the content div
    fn entity_header(
        &mut self,
        links: &Links,
        anchor: &str,
        section: &str,
        name: &str,
        subtitle: &str,
    ) {
        self.line("<div class=\"wiki-header\">");
        self.line(format!(
            "<div class=\"wiki-breadcrumb\">{} &gt; {} &gt; {}</div>",
            links.home(),
            links.section(anchor, section),
            escape(name)
        ));
        self.line(format!("<h1 class=\"wiki-title\">{}</h1>", escape(name)));
        self.line(format!(
            "<div class=\"wiki-subtitle\">{}</div>",
            escape(subtitle)
        ));
        self.line("</div>");
        self.line("<div class=\"wiki-content\">");
    }

    fn back_footer(&mut self, links: &Links) {
        self.line("<div class=\"wiki-footer\">");
        self.line(format!("<p>&larr; Back to {}</p>", links.home()));
        self.line("</div>");
    }

    fn finish(mut self) -> String {
        self.line("</body>");
        self.line("</html>");
        self.html
    }
}

const WIKI_STYLES: &str = r#"<style>
body { font-family: 'Segoe UI', Tahoma, Geneva, Verdana, sans-serif; line-height: 1.6; margin: 0; padding: 0; background: #f8f9fa; color: #212529; }
a { color: #3a5fcd; text-decoration: none; }
a:hover { text-decoration: underline; }
.wiki-header { background: #2c3e50; color: #fff; padding: 24px 40px; }
.wiki-header a { color: #cfd8ff; }
.wiki-title { margin: 0; font-size: 2.2em; }
.wiki-subtitle { opacity: 0.8; }
.wiki-breadcrumb { font-size: 0.9em; margin-bottom: 8px; }
.wiki-nav { background: #34495e; padding: 8px 40px; }
.wiki-nav a { color: #fff; margin-right: 18px; }
.wiki-content { padding: 24px 40px; max-width: 1100px; }
.wiki-infobox { float: right; width: 280px; margin: 0 0 16px 24px; padding: 12px; background: #fff; border: 1px solid #ccc; border-radius: 6px; }
.wiki-grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(240px, 1fr)); gap: 16px; }
.wiki-card { background: #fff; border: 1px solid #ddd; border-radius: 6px; padding: 12px; }
.wiki-card h4 { margin: 0 0 4px 0; }
.wiki-card-type { font-size: 0.85em; color: #6c757d; }
.wiki-empty { font-style: italic; color: #6c757d; }
.wiki-timeline .year { font-weight: bold; margin-right: 8px; }
.wiki-properties .property { display: inline-block; margin-right: 16px; }
section { clear: both; margin-bottom: 32px; }
.wiki-footer { clear: both; padding: 16px 40px; border-top: 1px solid #ddd; color: #6c757d; }
</style>"#;
