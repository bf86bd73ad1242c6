//! Historic figure entity - Notable characters of a world's history

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{EventId, FigureId, PlaceId};

/// A notable character
///
/// `is_alive` and `death_date` are independent fields: a figure may carry a
/// death date while still flagged alive. Nothing here reconciles the two.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HistoricFigure {
    pub id: FigureId,
    pub name: String,
    pub title: String,
    pub description: String,
    pub race: String,
    pub class: String,
    pub birth_date: Option<DateTime<Utc>>,
    pub death_date: Option<DateTime<Utc>>,
    pub is_alive: bool,
    pub birth_place_id: Option<PlaceId>,
    pub associated_place_ids: Vec<PlaceId>,
    pub achievements: Vec<String>,
    pub related_event_ids: Vec<EventId>,
    pub attributes: BTreeMap<String, i32>,
    /// Other figures this one is connected to
    pub relationships: Vec<FigureId>,
}

impl Default for HistoricFigure {
    fn default() -> Self {
        Self {
            id: FigureId::new(),
            name: String::new(),
            title: String::new(),
            description: String::new(),
            race: String::new(),
            class: String::new(),
            birth_date: None,
            death_date: None,
            is_alive: true,
            birth_place_id: None,
            associated_place_ids: Vec::new(),
            achievements: Vec::new(),
            related_event_ids: Vec::new(),
            attributes: BTreeMap::new(),
            relationships: Vec::new(),
        }
    }
}

impl HistoricFigure {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}
