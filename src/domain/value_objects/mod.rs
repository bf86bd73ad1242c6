//! Value objects - Immutable objects defined by their attributes

mod generation;
mod ids;
mod world_info;

pub use generation::{
    clamp_count, CompleteWorldRequest, ContentCategory, GenerationParameters, DEFAULT_THEME,
    MAX_CATEGORY_COUNT,
};
pub use ids::*;
pub use world_info::{
    magic_level_label, technology_level_label, time_era_label, WorldInfo, WorldLaws,
};
