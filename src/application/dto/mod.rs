//! Data Transfer Objects - For API boundaries
//!
//! DTOs live in the application layer so infrastructure (HTTP) can
//! serialize/deserialize request and response shapes that are not domain entities.

pub mod enhancement;
pub mod world;

pub use enhancement::*;
pub use world::*;
