//! World event entity - Occurrences that shaped a world's history

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{EventId, FigureId, PlaceId};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WorldEvent {
    pub id: EventId,
    pub name: String,
    pub description: String,
    #[serde(rename = "type")]
    pub event_type: WorldEventType,
    pub start_date: DateTime<Utc>,
    pub end_date: Option<DateTime<Utc>>,
    pub status: EventStatus,
    pub participant_ids: Vec<FigureId>,
    pub affected_place_ids: Vec<PlaceId>,
    pub consequences: BTreeMap<String, String>,
    /// 1-10
    pub global_impact_level: i32,
}

impl Default for WorldEvent {
    fn default() -> Self {
        Self {
            id: EventId::new(),
            name: String::new(),
            description: String::new(),
            event_type: WorldEventType::Other,
            start_date: Utc::now(),
            end_date: None,
            status: EventStatus::Historical,
            participant_ids: Vec::new(),
            affected_place_ids: Vec::new(),
            consequences: BTreeMap::new(),
            global_impact_level: 1,
        }
    }
}

impl WorldEvent {
    pub fn new(name: impl Into<String>, event_type: WorldEventType) -> Self {
        Self {
            name: name.into(),
            event_type,
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum WorldEventType {
    Creation,
    Apocalypse,
    DivineIntervention,
    MagicalCatastrophe,
    TechnologicalSingularity,
    PlaneShift,
    TimeDistortion,
    #[default]
    Other,
}

impl WorldEventType {
    /// Event types the generator draws from
    pub const GENERATED: [WorldEventType; 5] = [
        WorldEventType::MagicalCatastrophe,
        WorldEventType::TechnologicalSingularity,
        WorldEventType::PlaneShift,
        WorldEventType::TimeDistortion,
        WorldEventType::Other,
    ];
}

/// Lifecycle of an event: Planned, then Ongoing, then one of the past states
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum EventStatus {
    Planned,
    Ongoing,
    #[default]
    Historical,
    Legendary,
    Mythical,
}
