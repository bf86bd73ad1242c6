//! World export functionality
//!
//! Stored worlds can be browsed as a small HTML wiki. The JSON export package
//! is assembled by the enhancement service; this module only renders pages.

mod wiki_renderer;

pub use wiki_renderer::{render_entity, render_not_found, render_world, WikiEntityKind};
