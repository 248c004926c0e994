//! Application Context
//!
//! Shared handle provided via Leptos Context API. Views read snapshots from
//! it and forward every user intent through its methods; nothing else
//! writes to the store.

use leptos::prelude::*;
use log::info;
use shoplist_core::validation::{collect_member_emails, invite_candidate};
use shoplist_core::{DomainError, DomainResult, ItemId, ListAction, ListId, ListStore, OwnerFilter};

use crate::store::{store_replace_lists, store_set_notice, AppStateStoreFields, AppStore};

/// Lists context: read access plus the mutators
#[derive(Clone, Copy)]
pub struct ListsContext {
    store: AppStore,
}

impl ListsContext {
    pub fn new(store: AppStore) -> Self {
        Self { store }
    }

    /// Current snapshot (tracked)
    pub fn snapshot(&self) -> ListStore {
        self.store.lists().get()
    }

    /// The signed-in user; fixed for the session
    pub fn current_user(&self) -> String {
        self.store.lists().get_untracked().current_user().to_string()
    }

    pub fn notice(&self) -> Option<String> {
        self.store.notice().get()
    }

    pub fn clear_notice(&self) {
        store_set_notice(&self.store, None);
    }

    fn apply(&self, action: ListAction) {
        store_replace_lists(&self.store, |lists| lists.dispatch(action));
    }

    // ========================
    // Session
    // ========================

    pub fn set_search_term(&self, term: String) {
        self.apply(ListAction::SetSearchTerm { term });
    }

    pub fn set_owner_filter(&self, filter: OwnerFilter) {
        self.apply(ListAction::SetOwnerFilter { filter });
    }

    pub fn set_show_archived(&self, show: bool) {
        self.apply(ListAction::SetShowArchived { show });
    }

    // ========================
    // Lists
    // ========================

    /// Create a list owned by the current user from the form rows
    pub fn create_list(&self, name: String, member_rows: &[String]) {
        self.apply(ListAction::CreateList {
            name,
            owner: self.current_user(),
            members: collect_member_emails(member_rows),
            items: Vec::new(),
        });
    }

    pub fn delete_list(&self, list_id: ListId) {
        self.apply(ListAction::DeleteList { list_id });
    }

    pub fn archive_list(&self, list_id: ListId) {
        self.apply(ListAction::ArchiveList { list_id });
    }

    pub fn rename_list(&self, list_id: ListId, name: String) {
        self.apply(ListAction::RenameList { list_id, name });
    }

    /// The current user leaves the list
    pub fn leave_list(&self, list_id: ListId) {
        let user_id = self.current_user();
        self.apply(ListAction::LeaveList { list_id, user_id });
    }

    // ========================
    // Items
    // ========================

    pub fn add_item(&self, list_id: ListId, text: String) {
        self.apply(ListAction::AddItem { list_id, text });
    }

    pub fn toggle_item(&self, list_id: ListId, item_id: ItemId) {
        self.apply(ListAction::ToggleItem { list_id, item_id });
    }

    pub fn delete_item(&self, list_id: ListId, item_id: ItemId) {
        self.apply(ListAction::DeleteItem { list_id, item_id });
    }

    // ========================
    // Members
    // ========================

    /// Invite `email`. Blank input is ignored; a duplicate or the owner's
    /// address is reported through the notice instead of reaching the store.
    pub fn add_member(&self, list_id: ListId, email: String) -> DomainResult<()> {
        let checked = {
            let lists = self.store.lists().get_untracked();
            match lists.find(&list_id) {
                Some(list) => invite_candidate(list, &email),
                // unknown list: let the store ignore it
                None => Ok(Some(email)),
            }
        };
        match checked {
            Ok(None) => Ok(()),
            Ok(Some(email)) => {
                store_set_notice(&self.store, None);
                self.apply(ListAction::AddMember { list_id, email });
                Ok(())
            }
            Err(err) => {
                info!("event=add_member status=rejected list_id={} reason={}", list_id, err);
                if matches!(err, DomainError::Conflict(_)) {
                    store_set_notice(&self.store, Some(err.to_string()));
                }
                Err(err)
            }
        }
    }

    pub fn remove_member(&self, list_id: ListId, email: String) {
        self.apply(ListAction::RemoveMember { list_id, email });
    }
}

/// Get the lists context
pub fn use_lists() -> ListsContext {
    use_context::<ListsContext>().expect("ListsContext should be provided")
}
