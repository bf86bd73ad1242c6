//! World metadata: genre, era, power levels and the laws of the setting

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Descriptive settings of a world
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WorldInfo {
    pub genre: String,
    pub time_era: String,
    pub magic_level: String,
    pub technology_level: String,
    pub custom_settings: BTreeMap<String, String>,
    pub active_themes: Vec<String>,
    pub laws: WorldLaws,
}

/// The fundamental rules a world operates under
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WorldLaws {
    pub magic_exists: bool,
    pub death_is_permanent: bool,
    pub time_travel: bool,
    pub multiverse: bool,
    pub custom_laws: BTreeMap<String, serde_json::Value>,
}

impl Default for WorldLaws {
    fn default() -> Self {
        Self {
            magic_exists: false,
            death_is_permanent: true,
            time_travel: false,
            multiverse: false,
            custom_laws: BTreeMap::new(),
        }
    }
}

/// Bucket a numeric magic level into its label
pub fn magic_level_label(level: i32) -> &'static str {
    match level {
        i32::MIN..=3 => "Low",
        4..=7 => "Medium",
        _ => "High",
    }
}

/// Bucket a numeric technology level into its label
pub fn technology_level_label(level: i32) -> &'static str {
    match level {
        i32::MIN..=3 => "Pre-Industrial",
        4..=6 => "Industrial",
        7..=8 => "Information Age",
        _ => "Space Age",
    }
}

pub fn time_era_label(tech_level: i32) -> &'static str {
    if tech_level > 6 {
        "Future"
    } else {
        "Medieval-Future"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_magic_level_buckets() {
        assert_eq!(magic_level_label(0), "Low");
        assert_eq!(magic_level_label(3), "Low");
        assert_eq!(magic_level_label(4), "Medium");
        assert_eq!(magic_level_label(7), "Medium");
        assert_eq!(magic_level_label(8), "High");
    }

    #[test]
    fn test_technology_level_buckets() {
        assert_eq!(technology_level_label(1), "Pre-Industrial");
        assert_eq!(technology_level_label(6), "Industrial");
        assert_eq!(technology_level_label(8), "Information Age");
        assert_eq!(technology_level_label(9), "Space Age");
    }

    #[test]
    fn test_laws_default_to_permanent_death() {
        let laws: WorldLaws = serde_json::from_str("{}").unwrap();
        assert!(laws.death_is_permanent);
        assert!(!laws.magic_exists);
    }
}
