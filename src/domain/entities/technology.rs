//! Technical specification entity - Sci-fi devices and systems

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::TechSpecId;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TechnicalSpecification {
    pub id: TechSpecId,
    pub name: String,
    pub description: String,
    #[serde(rename = "type")]
    pub spec_type: TechSpecType,
    pub tech_level: i32,
    pub manufacturer: String,
    pub model_number: String,
    pub specifications: BTreeMap<String, String>,
    pub requirements: Vec<String>,
    pub capabilities: Vec<String>,
    pub power_consumption: String,
    pub maintenance_schedule: String,
    pub is_classified: bool,
}

impl Default for TechnicalSpecification {
    fn default() -> Self {
        Self {
            id: TechSpecId::new(),
            name: String::new(),
            description: String::new(),
            spec_type: TechSpecType::Other,
            tech_level: 1,
            manufacturer: String::new(),
            model_number: String::new(),
            specifications: BTreeMap::new(),
            requirements: Vec::new(),
            capabilities: Vec::new(),
            power_consumption: String::new(),
            maintenance_schedule: String::new(),
            is_classified: false,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TechSpecType {
    Weapon,
    Vehicle,
    Computer,
    Communication,
    Medical,
    Manufacturing,
    Defense,
    Exploration,
    #[default]
    Other,
}

impl TechSpecType {
    pub const ALL: [TechSpecType; 9] = [
        TechSpecType::Weapon,
        TechSpecType::Vehicle,
        TechSpecType::Computer,
        TechSpecType::Communication,
        TechSpecType::Medical,
        TechSpecType::Manufacturing,
        TechSpecType::Defense,
        TechSpecType::Exploration,
        TechSpecType::Other,
    ];

    /// Case-insensitive match on the variant name
    pub fn parse(value: &str) -> Option<Self> {
        let wanted = value.trim();
        Self::ALL
            .into_iter()
            .find(|t| format!("{:?}", t).eq_ignore_ascii_case(wanted))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_ignores_case() {
        assert_eq!(TechSpecType::parse("medical"), Some(TechSpecType::Medical));
        assert_eq!(TechSpecType::parse(" Vehicle "), Some(TechSpecType::Vehicle));
        assert_eq!(TechSpecType::parse("Transportation"), None);
    }
}
