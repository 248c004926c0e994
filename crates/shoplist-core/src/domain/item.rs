//! Item Entity
//!
//! A single shopping entry inside a list.

use serde::{Deserialize, Serialize};
use super::entity::Entity;
use super::id::ItemId;

/// A shopping entry with a resolved/unresolved state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Unique within the owning list
    pub id: ItemId,
    /// Display text
    #[serde(alias = "name")]
    pub text: String,
    /// Whether the entry has been bought
    #[serde(default)]
    pub resolved: bool,
}

impl Item {
    /// Create a new unresolved item
    pub fn new(id: impl Into<ItemId>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            resolved: false,
        }
    }

    /// Copy of this item with the resolved flag flipped
    pub fn toggled(&self) -> Self {
        Self {
            resolved: !self.resolved,
            ..self.clone()
        }
    }
}

impl Entity for Item {
    type Id = ItemId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_creation() {
        let item = Item::new("1", "Milk");
        assert_eq!(item.id().as_str(), "1");
        assert_eq!(item.text, "Milk");
        assert!(!item.resolved);
    }

    #[test]
    fn test_toggled_leaves_original_untouched() {
        let item = Item::new("1", "Milk");
        let toggled = item.toggled();
        assert!(toggled.resolved);
        assert!(!item.resolved);
        assert!(!toggled.toggled().resolved);
    }

    #[test]
    fn test_item_accepts_name_field() {
        let item: Item = serde_json::from_str(r#"{"id":"2","name":"Bread","resolved":true}"#).unwrap();
        assert_eq!(item.text, "Bread");
        assert!(item.resolved);
    }
}
