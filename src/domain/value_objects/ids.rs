//! Strongly-typed identifiers for world entities

use serde::{Deserialize, Serialize};
use uuid::Uuid;

macro_rules! define_id {
    ($name:ident) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            /// The all-zero id, used on the wire to mean "not yet assigned"
            pub fn nil() -> Self {
                Self(Uuid::nil())
            }

            pub fn is_nil(&self) -> bool {
                self.0.is_nil()
            }

            pub fn parse(value: &str) -> Option<Self> {
                Uuid::parse_str(value.trim()).ok().map(Self)
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<Uuid> for $name {
            fn from(uuid: Uuid) -> Self {
                Self(uuid)
            }
        }

        impl From<$name> for Uuid {
            fn from(id: $name) -> Uuid {
                id.0
            }
        }
    };
}

define_id!(WorldId);
define_id!(PlaceId);
define_id!(FigureId);
define_id!(EventId);
define_id!(EquipmentId);
define_id!(SpellBookId);
define_id!(SpellId);
define_id!(RuneId);
define_id!(RecipeId);
define_id!(TechSpecId);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_accepts_uuid_text() {
        let id = PlaceId::new();
        assert_eq!(PlaceId::parse(&id.to_string()), Some(id));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!(PlaceId::parse("nonexistent-id"), None);
        assert_eq!(WorldId::parse(""), None);
    }

    #[test]
    fn test_serializes_as_bare_string() {
        let id = WorldId::nil();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"00000000-0000-0000-0000-000000000000\"");
        assert!(serde_json::from_str::<WorldId>(&json).unwrap().is_nil());
    }
}
