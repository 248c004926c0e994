//! Identifier newtypes
//!
//! Lists and items are addressed by opaque string identifiers. Freshly
//! assigned identifiers are decimal numbers (see `store::ids`), seeded ones
//! may be anything.

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Numeric value of the identifier, if it is a decimal number
            pub fn numeric(&self) -> Option<u64> {
                self.0.parse().ok()
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl From<u64> for $name {
            fn from(value: u64) -> Self {
                Self(value.to_string())
            }
        }
    };
}

use serde::{Deserialize, Serialize};

string_id!(
    /// Identifier of a shopping list, unique across the store
    ListId
);

string_id!(
    /// Identifier of an item, unique within its list
    ItemId
);

/// User identifier. Users are known by email address only.
pub type UserId = String;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_ids() {
        assert_eq!(ListId::from(42u64).numeric(), Some(42));
        assert_eq!(ItemId::from("item7").numeric(), None);
    }

    #[test]
    fn test_id_serializes_as_plain_string() {
        let json = serde_json::to_string(&ListId::from("3")).unwrap();
        assert_eq!(json, "\"3\"");
    }
}
