//! Persistence adapters
//!
//! Worlds are stored as whole JSON documents on the local filesystem.

mod json_world_repository;

pub use json_world_repository::JsonWorldRepository;
