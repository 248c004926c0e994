//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The list
//! snapshot itself is immutable; writers swap in the next snapshot.

use leptos::prelude::*;
use reactive_stores::Store;
use shoplist_core::ListStore;

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Store)]
pub struct AppState {
    /// Current lists plus session values (search, filters, current user)
    pub lists: ListStore,
    /// Message for the user after a rejected intent, e.g. a duplicate invite
    pub notice: Option<String>,
}

impl AppState {
    pub fn new(lists: ListStore) -> Self {
        Self {
            lists,
            notice: None,
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

// ========================
// Store Helper Functions
// ========================

/// Replace the snapshot with `update(current)`.
///
/// Returns false, without notifying subscribers, when `update` changed
/// neither the lists nor the session.
pub fn store_replace_lists<F>(store: &AppStore, update: F) -> bool
where
    F: FnOnce(&ListStore) -> ListStore,
{
    let current = store.lists().get_untracked();
    let next = update(&current);
    if next.shares_lists_with(&current) && next.session() == current.session() {
        return false;
    }
    *store.lists().write() = next;
    true
}

/// Set or clear the notice
pub fn store_set_notice(store: &AppStore, notice: Option<String>) {
    *store.notice().write() = notice;
}
