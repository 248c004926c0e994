//! Derived Views
//!
//! Pure projections over a store snapshot. Nothing here is cached; callers
//! recompute on every render.

use serde::Serialize;

use crate::domain::{Item, ItemFilter, ListId, OwnerFilter, Role, SessionState, ShoppingList, UserId};

/// Lists matching the search term, ownership filter and archived toggle
pub fn visible_lists<'a>(lists: &'a [ShoppingList], session: &SessionState) -> Vec<&'a ShoppingList> {
    let needle = session.search_term.to_lowercase();
    lists
        .iter()
        .filter(|list| matches_search(list, &needle))
        .filter(|list| matches_owner(list, session.owner_filter, &session.current_user))
        .filter(|list| session.show_archived || !list.archived)
        .collect()
}

fn matches_search(list: &ShoppingList, needle: &str) -> bool {
    needle.is_empty() || list.name.to_lowercase().contains(needle)
}

fn matches_owner(list: &ShoppingList, filter: OwnerFilter, current_user: &str) -> bool {
    match filter {
        OwnerFilter::All => true,
        OwnerFilter::Mine => list.is_owner(current_user),
        OwnerFilter::Shared => !list.is_owner(current_user) && list.is_member(current_user),
    }
}

/// Number of items still to buy
pub fn unresolved_count(list: &ShoppingList) -> usize {
    list.items.iter().filter(|item| !item.resolved).count()
}

pub fn visible_items(list: &ShoppingList, filter: ItemFilter) -> Vec<&Item> {
    list.items
        .iter()
        .filter(|item| match filter {
            ItemFilter::All => true,
            ItemFilter::Unresolved => !item.resolved,
            ItemFilter::Resolved => item.resolved,
        })
        .collect()
}

/// Owner followed by the members, for display only
pub fn all_members(list: &ShoppingList) -> Vec<&str> {
    std::iter::once(list.owner.as_str())
        .chain(list.members.iter().map(String::as_str))
        .collect()
}

pub fn role_of(list: &ShoppingList, user: &str) -> Role {
    if list.is_owner(user) {
        Role::Owner
    } else if list.is_member(user) {
        Role::Member
    } else {
        Role::Guest
    }
}

/// Card data for the overview grid
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ListSummary {
    pub id: ListId,
    pub name: String,
    pub role: Role,
    /// Members excluding the owner
    pub member_count: usize,
    pub pending: usize,
    pub total: usize,
    pub archived: bool,
}

impl ListSummary {
    /// "1 member" / "3 members"
    pub fn member_label(&self) -> String {
        if self.member_count == 1 {
            "1 member".to_string()
        } else {
            format!("{} members", self.member_count)
        }
    }
}

pub fn list_summary(list: &ShoppingList, current_user: &str) -> ListSummary {
    ListSummary {
        id: list.id.clone(),
        name: list.name.clone(),
        role: role_of(list, current_user),
        member_count: list.members.len(),
        pending: unresolved_count(list),
        total: list.items.len(),
        archived: list.archived,
    }
}

/// Leading slice of the roster plus how many entries did not fit
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MemberPreview {
    pub shown: Vec<UserId>,
    pub hidden: usize,
}

pub fn member_preview(list: &ShoppingList, limit: usize) -> MemberPreview {
    let roster = all_members(list);
    let hidden = roster.len().saturating_sub(limit);
    MemberPreview {
        shown: roster.into_iter().take(limit).map(str::to_string).collect(),
        hidden,
    }
}
