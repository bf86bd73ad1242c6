//! Enhancement DTOs - Update instructions and enhancement results

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::World;

/// One change proposed by the text-generation server
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WorldUpdateInstruction {
    /// add, modify or remove
    pub action: String,
    /// places, characters, events, technology, magic or worldinfo
    pub target: String,
    pub description: String,
    pub properties: BTreeMap<String, serde_json::Value>,
}

impl Default for WorldUpdateInstruction {
    fn default() -> Self {
        Self {
            action: "modify".to_string(),
            target: "worldinfo".to_string(),
            description: String::new(),
            properties: BTreeMap::new(),
        }
    }
}

impl WorldUpdateInstruction {
    /// Text value of a property. JSON strings come back unquoted.
    pub fn property(&self, key: &str) -> Option<String> {
        self.properties.get(key).map(|value| match value {
            serde_json::Value::String(s) => s.clone(),
            other => other.to_string(),
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorldEnhancementResult {
    pub updated_world: World,
    pub generated_narrative: String,
    pub changes_applied: Vec<String>,
    pub user_comment: String,
    pub update_timestamp: DateTime<Utc>,
    pub section_narratives: BTreeMap<String, String>,
}

impl WorldEnhancementResult {
    pub fn new(world: World, user_comment: impl Into<String>) -> Self {
        Self {
            updated_world: world,
            generated_narrative: String::new(),
            changes_applied: Vec::new(),
            user_comment: user_comment.into(),
            update_timestamp: Utc::now(),
            section_narratives: BTreeMap::new(),
        }
    }
}

// ============================================================================
// Request bodies
//
// The world is optional on the wire so a missing one can be reported as a
// bad request instead of a body rejection.
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnhancementRequest {
    #[serde(default)]
    pub world: Option<World>,
    #[serde(default)]
    pub user_comment: String,
    #[serde(default)]
    pub target_section: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegenerateSectionRequest {
    #[serde(default)]
    pub world: Option<World>,
    #[serde(default)]
    pub section_type: String,
    #[serde(default)]
    pub section_id: String,
    #[serde(default)]
    pub user_comment: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddContentRequest {
    #[serde(default)]
    pub world: Option<World>,
    #[serde(default)]
    pub content_type: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePropertiesRequest {
    #[serde(default)]
    pub world: Option<World>,
    #[serde(default)]
    pub user_comment: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAndEnhanceRequest {
    #[serde(default)]
    pub world_name: String,
    #[serde(default)]
    pub theme: Option<String>,
    #[serde(default)]
    pub tech_level: Option<i32>,
    #[serde(default)]
    pub magic_level: Option<i32>,
    #[serde(default)]
    pub user_comment: Option<String>,
    #[serde(default)]
    pub target_section: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_instruction_defaults_and_property_text() {
        let instruction: WorldUpdateInstruction = serde_json::from_str(
            r#"{"action":"modify","target":"places","properties":{"name":"NeoHaven","population":5000}}"#,
        )
        .unwrap();

        assert_eq!(instruction.description, "");
        assert_eq!(instruction.property("name").as_deref(), Some("NeoHaven"));
        assert_eq!(instruction.property("population").as_deref(), Some("5000"));
        assert_eq!(instruction.property("type"), None);
    }

    #[test]
    fn test_request_without_world_still_parses() {
        let request: EnhancementRequest =
            serde_json::from_str(r#"{"userComment":"Add a floating city"}"#).unwrap();
        assert!(request.world.is_none());
        assert_eq!(request.user_comment, "Add a floating city");
        assert_eq!(request.target_section, None);
    }
}
