//! List Store
//!
//! Holds every shopping list plus the session values, and exposes the
//! mutators that produce the next snapshot.
//!
//! # Invariants
//! - The list collection is never edited in place. Every applied mutation
//!   allocates a new collection, so earlier snapshots stay valid.
//! - A mutation that changes nothing returns a store sharing the previous
//!   collection (see [`ListStore::shares_lists_with`]).
//! - Mutators never fail: an unknown list, item or member is a no-op.

mod action;
mod ids;

#[cfg(test)]
mod tests;

use std::sync::Arc;

use log::{debug, trace};

use crate::domain::{
    find_by_id, position_by_id, Item, ItemId, ListId, OwnerFilter, SessionState, ShoppingList, UserId,
};

pub use action::ListAction;
pub use ids::IdSequence;

/// Immutable snapshot of all lists and the session state
#[derive(Debug, Clone, PartialEq)]
pub struct ListStore {
    lists: Arc<[ShoppingList]>,
    session: SessionState,
    ids: IdSequence,
}

impl ListStore {
    /// Build a store from existing records.
    ///
    /// Membership invariants are re-established on every list, so records
    /// coming from a seed document cannot smuggle the owner into `members`.
    pub fn new(session: SessionState, lists: Vec<ShoppingList>) -> Self {
        let lists: Vec<ShoppingList> = lists
            .into_iter()
            .map(|mut list| {
                list.normalize_members();
                list
            })
            .collect();
        let ids = IdSequence::after(&lists);
        Self {
            lists: lists.into(),
            session,
            ids,
        }
    }

    /// Empty store for `current_user`
    pub fn empty(current_user: impl Into<UserId>) -> Self {
        Self::new(SessionState::new(current_user), Vec::new())
    }

    // ========================
    // Reads
    // ========================

    pub fn lists(&self) -> &[ShoppingList] {
        &self.lists
    }

    /// Shared handle to the current list collection
    pub fn snapshot(&self) -> Arc<[ShoppingList]> {
        Arc::clone(&self.lists)
    }

    pub fn session(&self) -> &SessionState {
        &self.session
    }

    pub fn current_user(&self) -> &str {
        &self.session.current_user
    }

    pub fn find(&self, list_id: &ListId) -> Option<&ShoppingList> {
        find_by_id(&self.lists, list_id)
    }

    /// True when both stores hold the very same list collection
    pub fn shares_lists_with(&self, other: &ListStore) -> bool {
        Arc::ptr_eq(&self.lists, &other.lists)
    }

    // ========================
    // List mutators
    // ========================

    /// Append a new list with a fresh identifier.
    ///
    /// The name is trimmed and a blank name rejects the call. Member entries
    /// are trimmed; blanks, repeats and the owner are dropped. Supplied items
    /// keep their text and state but are renumbered with fresh identifiers.
    #[must_use]
    pub fn create_list(
        &self,
        name: &str,
        owner: &str,
        members: Vec<UserId>,
        items: Vec<Item>,
    ) -> Self {
        let name = name.trim();
        if name.is_empty() {
            trace!("event=create_list status=skipped reason=empty_name");
            return self.clone();
        }
        let members = members
            .into_iter()
            .map(|m| m.trim().to_string())
            .filter(|m| !m.is_empty())
            .collect();

        let (id, mut ids) = self
            .ids
            .take_unused(|n| self.lists.iter().any(|list| list.id.numeric() == Some(n)));
        let mut fresh_items: Vec<Item> = Vec::with_capacity(items.len());
        for item in items {
            let (item_id, next) =
                ids.take_unused(|n| fresh_items.iter().any(|i| i.id.numeric() == Some(n)));
            fresh_items.push(Item {
                id: ItemId::from(item_id),
                ..item
            });
            ids = next;
        }

        let list = ShoppingList::new(id, name, owner, members, fresh_items);
        debug!(
            "event=create_list status=ok list_id={} members={} items={}",
            list.id,
            list.members.len(),
            list.items.len()
        );

        let mut lists = self.lists.to_vec();
        lists.push(list);
        Self {
            lists: lists.into(),
            session: self.session.clone(),
            ids,
        }
    }

    #[must_use]
    pub fn delete_list(&self, list_id: &ListId) -> Self {
        if self.find(list_id).is_none() {
            trace!("event=delete_list status=skipped reason=unknown_list list_id={}", list_id);
            return self.clone();
        }
        debug!("event=delete_list status=ok list_id={}", list_id);
        let lists: Vec<ShoppingList> = self
            .lists
            .iter()
            .filter(|list| &list.id != list_id)
            .cloned()
            .collect();
        self.with_lists(lists)
    }

    /// Flip the archived flag
    #[must_use]
    pub fn archive_list(&self, list_id: &ListId) -> Self {
        self.replace_list(list_id, "archive_list", |list| {
            Some(ShoppingList {
                archived: !list.archived,
                ..list.clone()
            })
        })
    }

    /// Rename when the trimmed name is non-empty and actually different
    #[must_use]
    pub fn rename_list(&self, list_id: &ListId, new_name: &str) -> Self {
        let new_name = new_name.trim();
        self.replace_list(list_id, "rename_list", |list| {
            if new_name.is_empty() || list.name == new_name {
                return None;
            }
            Some(ShoppingList {
                name: new_name.to_string(),
                ..list.clone()
            })
        })
    }

    /// Drop `user_id` from the members. The owner cannot leave.
    #[must_use]
    pub fn leave_list(&self, list_id: &ListId, user_id: &str) -> Self {
        self.replace_list(list_id, "leave_list", |list| {
            if list.is_owner(user_id) || !list.is_member(user_id) {
                return None;
            }
            Some(without_member(list, user_id))
        })
    }

    // ========================
    // Item mutators
    // ========================

    /// Append an unresolved item with a fresh identifier
    #[must_use]
    pub fn add_item(&self, list_id: &ListId, text: &str) -> Self {
        let text = text.trim();
        if text.is_empty() {
            trace!("event=add_item status=skipped reason=empty_text list_id={}", list_id);
            return self.clone();
        }
        let (id, ids) = self.ids.take_unused(|n| {
            self.find(list_id)
                .is_some_and(|list| list.items.iter().any(|item| item.id.numeric() == Some(n)))
        });
        let next = self.replace_list(list_id, "add_item", |list| {
            let mut items = list.items.clone();
            items.push(Item::new(id, text));
            Some(ShoppingList {
                items,
                ..list.clone()
            })
        });
        if next.shares_lists_with(self) {
            return next;
        }
        Self { ids, ..next }
    }

    #[must_use]
    pub fn toggle_item(&self, list_id: &ListId, item_id: &ItemId) -> Self {
        self.replace_list(list_id, "toggle_item", |list| {
            list.item(item_id)?;
            let items = list
                .items
                .iter()
                .map(|item| {
                    if &item.id == item_id {
                        item.toggled()
                    } else {
                        item.clone()
                    }
                })
                .collect();
            Some(ShoppingList {
                items,
                ..list.clone()
            })
        })
    }

    #[must_use]
    pub fn delete_item(&self, list_id: &ListId, item_id: &ItemId) -> Self {
        self.replace_list(list_id, "delete_item", |list| {
            list.item(item_id)?;
            let items = list
                .items
                .iter()
                .filter(|item| &item.id != item_id)
                .cloned()
                .collect();
            Some(ShoppingList {
                items,
                ..list.clone()
            })
        })
    }

    // ========================
    // Membership mutators
    // ========================

    /// Invite `email`. Exact, case-sensitive duplicate check; the owner is
    /// never added as a member.
    #[must_use]
    pub fn add_member(&self, list_id: &ListId, email: &str) -> Self {
        let email = email.trim();
        self.replace_list(list_id, "add_member", |list| {
            if email.is_empty() || list.is_participant(email) {
                return None;
            }
            let mut members = list.members.clone();
            members.push(email.to_string());
            Some(ShoppingList {
                members,
                ..list.clone()
            })
        })
    }

    #[must_use]
    pub fn remove_member(&self, list_id: &ListId, email: &str) -> Self {
        self.replace_list(list_id, "remove_member", |list| {
            if !list.is_member(email) {
                return None;
            }
            Some(without_member(list, email))
        })
    }

    // ========================
    // Session setters
    // ========================

    #[must_use]
    pub fn with_search_term(&self, term: impl Into<String>) -> Self {
        self.with_session(SessionState {
            search_term: term.into(),
            ..self.session.clone()
        })
    }

    #[must_use]
    pub fn with_owner_filter(&self, owner_filter: OwnerFilter) -> Self {
        self.with_session(SessionState {
            owner_filter,
            ..self.session.clone()
        })
    }

    #[must_use]
    pub fn with_show_archived(&self, show_archived: bool) -> Self {
        self.with_session(SessionState {
            show_archived,
            ..self.session.clone()
        })
    }

    // ========================
    // Helpers
    // ========================

    fn with_session(&self, session: SessionState) -> Self {
        Self {
            lists: Arc::clone(&self.lists),
            session,
            ids: self.ids,
        }
    }

    fn with_lists(&self, lists: Vec<ShoppingList>) -> Self {
        Self {
            lists: lists.into(),
            session: self.session.clone(),
            ids: self.ids,
        }
    }

    /// Replace the list `list_id` with whatever `update` returns.
    /// `None` from `update`, or an unknown list, leaves the store untouched.
    fn replace_list<F>(&self, list_id: &ListId, event: &str, update: F) -> Self
    where
        F: FnOnce(&ShoppingList) -> Option<ShoppingList>,
    {
        let Some(index) = position_by_id(&self.lists, list_id) else {
            trace!("event={} status=skipped reason=unknown_list list_id={}", event, list_id);
            return self.clone();
        };
        let Some(updated) = update(&self.lists[index]) else {
            trace!("event={} status=skipped reason=no_change list_id={}", event, list_id);
            return self.clone();
        };
        debug!("event={} status=ok list_id={}", event, list_id);

        let mut lists = self.lists.to_vec();
        lists[index] = updated;
        self.with_lists(lists)
    }
}

fn without_member(list: &ShoppingList, user: &str) -> ShoppingList {
    ShoppingList {
        members: list.members.iter().filter(|m| *m != user).cloned().collect(),
        ..list.clone()
    }
}
