//! Fixed vocabulary for procedural generation

// ============================================================================
// World flavour
// ============================================================================

pub const THEMES: &[&str] = &[
    "Magitech Empire",
    "Cybernetic Wizardry",
    "Quantum Spellcasting",
    "Stellar Kingdoms",
    "Techno-Druidism",
    "Mechanical Familiars",
    "Crystal-Powered Ships",
    "Dimensional Rifts",
    "Bio-Magical Synthesis",
    "Enchanted Circuits",
    "Astral Networks",
    "Runic Computers",
];

pub const BIOMES: &[&str] = &[
    "Enchanted Crystal Forests",
    "Cyber-Punk Cities",
    "Floating Sky Islands",
    "Underground Tech Vaults",
    "Magical Wastelands",
    "Quantum Beaches",
    "Temporal Anomaly Zones",
    "Bio-Mechanical Jungles",
    "Stellar Observatories",
    "Mystical Data Centers",
    "Arcane Laboratories",
    "Dimensional Harbors",
];

pub const RACES: &[&str] = &[
    "Cyber-Elves",
    "Techno-Dwarves",
    "Quantum Humans",
    "Magical Androids",
    "Stellar Gnomes",
    "Bio-Enhanced Orcs",
    "Crystal-Born",
    "Data-Sprites",
    "Mecha-Dragons",
    "Astral Beings",
];

/// Themes offered to clients choosing a world style
pub const SELECTABLE_THEMES: &[&str] = &[
    "Fantasy-SciFi",
    "Cyberpunk-Fantasy",
    "Space-Magic",
    "Bio-Magical",
    "Quantum-Mystical",
    "Steampunk-Arcane",
    "Digital-Shamanism",
    "Techno-Druidism",
];

pub const ACTIVE_THEME_EXTRAS: &[&str] = &["Adventure", "Exploration", "Magic-Tech Fusion"];

// ============================================================================
// Places
// ============================================================================

pub const PLACE_PREFIXES: &[&str] = &[
    "Neo", "Astral", "Cyber", "Quantum", "Mystic", "Stellar", "Arcane", "Tech", "Crystal", "Void",
];

pub const PLACE_SUFFIXES: &[&str] = &[
    "Haven", "Citadel", "Nexus", "Spire", "Realm", "Station", "Core", "Gate", "Sanctum", "Hub",
];

pub const PLACE_DESCRIPTIONS: &[&str] = &[
    "A magnificent fusion of ancient magic and cutting-edge technology",
    "Where holographic displays blend seamlessly with enchanted crystals",
    "A bustling metropolis powered by both arcane energy and quantum processors",
    "An otherworldly location where spells are cast through neural interfaces",
    "A hidden sanctuary where magical creatures coexist with AI constructs",
];

pub const CLIMATES: &[&str] = &[
    "Temperate",
    "Tropical",
    "Arctic",
    "Desert",
    "Mystical",
    "Artificial",
    "Temporal Flux",
    "Energy Storm",
];

pub const RESOURCES: &[&str] = &[
    "Mana Crystals",
    "Quantum Ore",
    "Mythril",
    "Data Fragments",
    "Ether Gas",
    "Nano-materials",
    "Enchanted Metals",
    "Bio-fuel",
    "Temporal Shards",
    "Psionic Stones",
];

pub const GOVERNMENTS: &[&str] = &[
    "Techno-Monarchy",
    "Mage Council",
    "AI Democracy",
    "Corporate Federation",
    "Quantum Republic",
    "Arcane Empire",
    "Digital Commune",
    "Hybrid Oligarchy",
];

pub const NOTABLE_FEATURES: &[&str] = &[
    "Magitech Spire",
    "Quantum Rift",
    "Digital Shrine",
    "Bio-Mechanical Grove",
];

pub const BORDERS: &[&str] = &["Mystic River", "Quantum Mountains", "Cyber Forest", "Digital Desert"];

pub const LANGUAGES: &[&str] = &["Common", "Cyber-Elven", "Techno-Dwarven", "Quantum Binary"];

pub const RELIGIONS: &[&str] = &[
    "Church of Digital Harmony",
    "Quantum Mysticism",
    "Techno-Druidism",
];

pub const ANCIENT_RUINS: &[&str] = &[
    "Ruins of the First Convergence",
    "Collapsed Arcane Reactor",
    "Forgotten Runic Archive",
];

// ============================================================================
// Characters
// ============================================================================

pub const FIRST_NAMES: &[&str] = &[
    "Zara", "Kai", "Nova", "Orion", "Luna", "Axel", "Vera", "Cyrus", "Aria", "Neon",
];

pub const LAST_NAMES: &[&str] = &[
    "Starweaver",
    "Cybermage",
    "Quantumborn",
    "Techbane",
    "Voidwalker",
    "Dataforge",
    "Spellcode",
    "Netcaster",
];

pub const CHARACTER_TITLES: &[&str] = &[
    "Quantum Sorcerer",
    "Cyber-Paladin",
    "Techno-Druid",
    "Digital Necromancer",
    "Mecha-Ranger",
    "Data-Witch",
    "Nano-Cleric",
    "Stellar Barbarian",
];

pub const CHARACTER_DESCRIPTIONS: &[&str] = &[
    "A master of both ancient magic and cutting-edge technology",
    "One who bridges the gap between the mystical and the digital",
    "A pioneer in the fusion of arcane arts and cyber-enhancement",
    "A guardian of the balance between magic and machine",
    "An explorer of the quantum realms and magical dimensions",
];

pub const CHARACTER_CLASSES: &[&str] = &[
    "Cyber-Paladin",
    "Techno-Wizard",
    "Quantum Ranger",
    "Bio-Cleric",
    "Data-Rogue",
];

pub const ACHIEVEMENTS: &[&str] = &[
    "Created the first magitech interface",
    "Discovered quantum-magical resonance",
    "Established the Cyber-Mage Academy",
    "Defeated the Rogue AI Overlord",
    "Opened the first dimensional portal",
    "Synthesized digital consciousness with magical souls",
];

// ============================================================================
// Events
// ============================================================================

pub const EVENT_DESCRIPTION: &str =
    "A significant event that shaped the balance between magic and technology in the world.";

pub const EVENT_CONSEQUENCES: &[(&str, &str)] = &[
    (
        "Primary",
        "Changed the fundamental understanding of magitech integration",
    ),
    (
        "Secondary",
        "Established new trade routes between magical and technological regions",
    ),
];

// ============================================================================
// Equipment
// ============================================================================

pub const WEAPON_PREFIXES: &[&str] = &["Plasma", "Quantum", "Mana", "Cyber", "Bio"];
pub const WEAPON_BASES: &[&str] = &["Sword", "Axe", "Rifle", "Staff", "Blade"];
pub const ARTIFACT_FORMS: &[&str] = &["Orb", "Amulet", "Crown", "Ring", "Scepter"];
pub const GADGET_PREFIXES: &[&str] = &["Neural", "Photon", "Graviton", "Holo", "Ion"];
pub const GADGET_BASES: &[&str] = &["Lens", "Gauntlet", "Projector", "Beacon", "Core"];

pub const EQUIPMENT_DESCRIPTION: &str =
    "A masterwork fusion of magical enchantment and technological innovation.";

pub const MATERIALS: &[&str] = &[
    "Quantum Steel",
    "Mithril Alloy",
    "Bio-Metal",
    "Crystal Matrix",
    "Nano-Carbon",
];

pub const EQUIPMENT_HISTORY: &[&str] = &[
    "Forged during the Great Convergence",
    "Enhanced with alien technology",
    "Blessed by digital spirits",
];

pub const DAMAGE_TYPES: &[&str] = &["Physical", "Energy", "Magical", "Plasma", "Quantum", "Psychic"];

pub const ENCHANTMENTS: &[&str] = &["Self-Repair Protocol", "Adaptive Resistance", "Neural Sync"];

pub const ARTIFACT_SPELLS: &[&str] = &[
    "Quantum Bolt",
    "Mana Shield",
    "Digital Telepathy",
    "Cyber Healing",
];

pub const POWER_SOURCES: &[&str] = &[
    "Fusion Cell",
    "Mana Battery",
    "Zero-Point Module",
    "Solar Lattice",
    "Crystal Capacitor",
];

pub const DEVICE_FUNCTIONS: &[&str] = &[
    "Holographic Mapping",
    "Threat Analysis",
    "Energy Shielding",
    "Remote Translation",
    "Matter Scanning",
];

pub const OPERATING_SYSTEMS: &[&str] = &["ArcOS", "QuantumKernel", "RuneShell", "NovaLink"];

// ============================================================================
// Magic
// ============================================================================

pub const SPELL_BOOK_DESCRIPTION: &str =
    "A comprehensive guide to integrating magical theory with technological applications.";

pub const ANCIENT_LANGUAGES: &[&str] = &[
    "Quantum Runic",
    "Binary Mystical",
    "Cyber-Elven",
    "Techno-Draconic",
    "Digital Celestial",
];

pub const SPELL_PREFIXES: &[&str] = &["Quantum", "Arcane", "Cyber", "Stellar", "Void"];
pub const SPELL_BASES: &[&str] = &["Bolt", "Shield", "Link", "Ward", "Surge"];
pub const SPELL_COMPONENTS: &[&str] = &["V, S", "V, S, M", "S, M", "V"];
pub const CASTING_TIMES: &[&str] = &["1 action", "1 bonus action", "1 minute", "10 minutes"];
pub const SPELL_RANGES: &[&str] = &["Self", "Touch", "30 feet", "60 feet", "120 feet"];
pub const SPELL_DURATIONS: &[&str] = &["Instantaneous", "1 minute", "10 minutes", "1 hour"];
pub const SPELL_EFFECTS: &[&str] = &[
    "Channels arcane current through a neural interface",
    "Projects a protective lattice of hard light",
    "Links the caster's mind to a nearby machine",
];

pub const RUNE_PREFIXES: &[&str] = &["Quantum", "Cyber", "Stellar", "Nano", "Bio"];
pub const RUNE_BASES: &[&str] = &["Power", "Harmony", "Interface", "Synthesis", "Resonance"];

pub const RUNE_DESCRIPTION: &str =
    "A mystical symbol that bridges the gap between magical energy and digital processing.";

pub const RUNE_SYMBOLS: &[&str] = &["◊◊◊", "▲▼▲", "◈◈◈", "◇◆◇", "▣▣▣"];

pub const RUNE_ELEMENTS: &[&str] = &[
    "Fire", "Water", "Air", "Earth", "Quantum", "Digital", "Bio", "Cyber",
];

pub const RUNE_EFFECTS: &[&str] = &[
    "Enhances cyber-magical integration",
    "Boosts quantum processing",
    "Stabilizes dimensional rifts",
];

pub const ACTIVATION_CONDITIONS: &[&str] = &[
    "Touch",
    "Spoken Command",
    "Mental Focus",
    "Cybernetic Interface",
    "Magical Resonance",
];

pub const ALCHEMY_PREFIXES: &[&str] = &["Cyber", "Quantum", "Stellar", "Bio", "Nano"];
pub const ALCHEMY_BASES: &[&str] = &[
    "Enhancement",
    "Synthesis",
    "Resonance",
    "Integration",
    "Awakening",
];

pub const ALCHEMY_DESCRIPTION: &str =
    "A carefully crafted blend of magical essences and technological components.";

pub const INGREDIENT_NAMES: &[&str] = &[
    "Quantum Moss",
    "Cyber-Herb",
    "Liquid Mana",
    "Nano-Particles",
    "Stellar Dew",
];

pub const INGREDIENT_UNITS: &[&str] = &["grams", "milliliters", "units", "drops", "crystals"];

pub const INGREDIENT_PROPERTIES: &[&str] = &["Magical", "Technological", "Rare"];

pub const ALCHEMY_STEPS: &[&str] = &[
    "Combine base ingredients",
    "Heat to 100°C",
    "Add magical catalyst",
    "Stir with enchanted rod",
    "Cool slowly",
];

pub const ALCHEMY_EFFECTS: &[&str] = &[
    "Temporary cyber-magical abilities",
    "Enhanced neural processing",
    "Dimensional sight",
];

pub const ALCHEMY_SIDE_EFFECTS: &[&str] = &[
    "Mild quantum fluctuations",
    "Temporary digital overlay vision",
];

// ============================================================================
// Technology
// ============================================================================

pub const TECH_PREFIXES: &[&str] = &["Quantum", "Nano", "Bio", "Cyber", "Neural"];
pub const TECH_BASES: &[&str] = &[
    "Processor",
    "Interface",
    "Synthesizer",
    "Amplifier",
    "Converter",
];

pub const TECH_DESCRIPTION: &str =
    "Advanced technology enhanced with magical principles for optimal performance.";

pub const MANUFACTURER_PREFIXES: &[&str] = &["Quantum", "Stellar", "Cyber", "Mystic", "Nano"];
pub const MANUFACTURER_SUFFIXES: &[&str] = &[
    "Industries",
    "Corporation",
    "Technologies",
    "Dynamics",
    "Systems",
];

pub const MODEL_PREFIXES: &[&str] = &["QM", "CT", "NB", "SX", "MZ"];

pub const TECH_REQUIREMENTS: &[&str] = &["Quantum Power Source", "Mana Conduit", "Neural Interface"];

pub const TECH_CAPABILITIES: &[&str] = &[
    "Spell-Code Translation",
    "Quantum Processing",
    "Dimensional Scanning",
];

// ============================================================================
// Structure passes
// ============================================================================

pub const CONNECTION_TYPES: &[&str] = &[
    "Road",
    "River",
    "Sea Route",
    "Portal",
    "Mountain Pass",
    "Bridge",
    "Tunnel",
    "Trade Route",
];

pub const ECONOMIC_SYSTEMS: &[&str] = &[
    "Feudalism",
    "Capitalism",
    "Socialism",
    "Barter System",
    "Post-Scarcity",
    "Resource-Based",
    "Guild System",
];

pub const INDUSTRIES: &[&str] = &[
    "Agriculture",
    "Mining",
    "Manufacturing",
    "Trade",
    "Magic",
    "Technology",
    "Fishing",
    "Crafting",
];

pub const TRADE_GOODS: &[&str] = &[
    "Spices",
    "Metals",
    "Gems",
    "Textiles",
    "Weapons",
    "Magical Items",
    "Technology",
    "Food",
    "Lumber",
];

pub const CURRENCIES: &[&str] = &[
    "Gold Coins",
    "Silver Coins",
    "Crystals",
    "Credits",
    "Barter",
    "Energy Units",
    "Magical Essence",
];

pub const POLITICAL_SYSTEMS: &[&str] = &[
    "Monarchy",
    "Democracy",
    "Oligarchy",
    "Theocracy",
    "Technocracy",
    "Magocracy",
    "Confederation",
    "Empire",
];

pub const RULER_TITLES: &[&str] = &[
    "King",
    "Queen",
    "Emperor",
    "Empress",
    "Lord",
    "Lady",
    "Archmage",
    "High Priest",
    "Council",
];

pub const RULER_NAMES: &[&str] = &[
    "Aldric", "Morgana", "Theron", "Lyanna", "Vex", "Zara", "Kael", "Mira", "Darius", "Sera",
];

pub const LEGAL_SYSTEMS: &[&str] = &[
    "Common Law",
    "Divine Law",
    "Martial Law",
    "Magical Regulations",
    "Trade Laws",
    "Honor Code",
    "Technological Ethics",
];

pub const DIPLOMATIC_STANCES: &[&str] = &[
    "Peaceful",
    "Neutral",
    "Aggressive",
    "Isolationist",
    "Expansionist",
    "Defensive",
    "Mercantile",
];
