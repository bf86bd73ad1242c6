//! Domain layer - World model and procedural generation, free of I/O
//!
//! This layer contains:
//! - Entities: World, Place, HistoricFigure, WorldEvent, Equipment, magic and technology
//! - Value Objects: typed ids, WorldInfo, generation parameters
//! - Domain Services: content tables, entity factories and the world assembler

pub mod entities;
pub mod services;
pub mod value_objects;
