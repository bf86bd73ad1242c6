//! Domain services - Pure generation logic with no I/O

pub mod content_tables;
mod entity_factory;
mod random_provider;
pub mod world_assembler;

pub use entity_factory::EntityFactory;
pub use random_provider::RandomProvider;
