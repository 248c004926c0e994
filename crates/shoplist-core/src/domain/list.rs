//! Shopping List Entity
//!
//! A named collection of items with one owner and a set of members.

use serde::{Deserialize, Serialize};
use super::entity::{find_by_id, Entity};
use super::id::{ItemId, ListId, UserId};
use super::item::Item;

/// A shopping list
///
/// # Invariants
/// - `owner` never appears in `members`.
/// - `members` holds no duplicates.
/// - `id` never changes after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShoppingList {
    pub id: ListId,
    pub name: String,
    pub owner: UserId,
    /// Participants other than the owner, in invitation order
    #[serde(default)]
    pub members: Vec<UserId>,
    #[serde(default)]
    pub items: Vec<Item>,
    #[serde(default)]
    pub archived: bool,
}

impl ShoppingList {
    /// Create an unarchived list, dropping the owner and repeated entries
    /// from `members`
    pub fn new(
        id: impl Into<ListId>,
        name: impl Into<String>,
        owner: impl Into<UserId>,
        members: Vec<UserId>,
        items: Vec<Item>,
    ) -> Self {
        let mut list = Self {
            id: id.into(),
            name: name.into(),
            owner: owner.into(),
            members,
            items,
            archived: false,
        };
        list.normalize_members();
        list
    }

    /// Re-establish the membership invariants after deserialization
    pub(crate) fn normalize_members(&mut self) {
        let owner = self.owner.clone();
        let mut seen: Vec<UserId> = Vec::with_capacity(self.members.len());
        self.members.retain(|member| {
            if *member == owner || seen.contains(member) {
                return false;
            }
            seen.push(member.clone());
            true
        });
    }

    pub fn is_owner(&self, user: &str) -> bool {
        self.owner == user
    }

    /// Non-owner membership
    pub fn is_member(&self, user: &str) -> bool {
        self.members.iter().any(|m| m == user)
    }

    /// Owner or member
    pub fn is_participant(&self, user: &str) -> bool {
        self.is_owner(user) || self.is_member(user)
    }

    pub fn item(&self, item_id: &ItemId) -> Option<&Item> {
        find_by_id(&self.items, item_id)
    }
}

impl Entity for ShoppingList {
    type Id = ListId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn members(values: &[&str]) -> Vec<UserId> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_list_creation() {
        let list = ShoppingList::new("1", "Weekly", "john", members(&["jane"]), vec![]);
        assert_eq!(list.id().as_str(), "1");
        assert!(!list.archived);
        assert!(list.is_owner("john"));
        assert!(list.is_member("jane"));
        assert!(!list.is_member("john"));
        assert!(list.is_participant("john"));
        assert!(!list.is_participant("bob"));
    }

    #[test]
    fn test_owner_and_duplicates_dropped_from_members() {
        let list = ShoppingList::new(
            "1",
            "Weekly",
            "john",
            members(&["jane", "john", "jane", "bob"]),
            vec![],
        );
        assert_eq!(list.members, members(&["jane", "bob"]));
    }

    #[test]
    fn test_find_item() {
        let list = ShoppingList::new("1", "Weekly", "john", vec![], vec![Item::new("7", "Eggs")]);
        assert_eq!(list.item(&ItemId::from("7")).map(|i| i.text.as_str()), Some("Eggs"));
        assert!(list.item(&ItemId::from("8")).is_none());
    }
}
