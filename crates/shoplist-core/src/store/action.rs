//! Reducer form of the mutators
//!
//! Every store transition as a value, so intents can be recorded, replayed
//! or forwarded from the UI as one message.

use serde::{Deserialize, Serialize};

use crate::domain::{Item, ItemId, ListId, OwnerFilter, UserId};
use super::ListStore;

/// One store transition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ListAction {
    CreateList {
        name: String,
        owner: UserId,
        members: Vec<UserId>,
        items: Vec<Item>,
    },
    DeleteList { list_id: ListId },
    ArchiveList { list_id: ListId },
    RenameList { list_id: ListId, name: String },
    LeaveList { list_id: ListId, user_id: UserId },
    AddItem { list_id: ListId, text: String },
    ToggleItem { list_id: ListId, item_id: ItemId },
    DeleteItem { list_id: ListId, item_id: ItemId },
    AddMember { list_id: ListId, email: String },
    RemoveMember { list_id: ListId, email: String },
    SetSearchTerm { term: String },
    SetOwnerFilter { filter: OwnerFilter },
    SetShowArchived { show: bool },
}

impl ListStore {
    /// Apply one action, returning the next snapshot
    #[must_use]
    pub fn dispatch(&self, action: ListAction) -> ListStore {
        match action {
            ListAction::CreateList { name, owner, members, items } => {
                self.create_list(&name, &owner, members, items)
            }
            ListAction::DeleteList { list_id } => self.delete_list(&list_id),
            ListAction::ArchiveList { list_id } => self.archive_list(&list_id),
            ListAction::RenameList { list_id, name } => self.rename_list(&list_id, &name),
            ListAction::LeaveList { list_id, user_id } => self.leave_list(&list_id, &user_id),
            ListAction::AddItem { list_id, text } => self.add_item(&list_id, &text),
            ListAction::ToggleItem { list_id, item_id } => self.toggle_item(&list_id, &item_id),
            ListAction::DeleteItem { list_id, item_id } => self.delete_item(&list_id, &item_id),
            ListAction::AddMember { list_id, email } => self.add_member(&list_id, &email),
            ListAction::RemoveMember { list_id, email } => self.remove_member(&list_id, &email),
            ListAction::SetSearchTerm { term } => self.with_search_term(term),
            ListAction::SetOwnerFilter { filter } => self.with_owner_filter(filter),
            ListAction::SetShowArchived { show } => self.with_show_archived(show),
        }
    }

    /// Apply a sequence of actions in order
    #[must_use]
    pub fn dispatch_all<I>(&self, actions: I) -> ListStore
    where
        I: IntoIterator<Item = ListAction>,
    {
        actions
            .into_iter()
            .fold(self.clone(), |store, action| store.dispatch(action))
    }
}
