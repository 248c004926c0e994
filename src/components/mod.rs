//! UI Components
//!
//! Reusable Leptos components and the four routed views.

mod confirm_button;
mod filter_dropdown;
mod item_filter_bar;
mod item_row;
mod list_card;
mod list_detail;
mod lists_overview;
mod members_page;
mod new_list_form;
mod not_found;
mod notice_banner;
mod search_input;
mod toggle_switch;

pub use confirm_button::ConfirmButton;
pub use filter_dropdown::FilterDropdown;
pub use item_filter_bar::ItemFilterBar;
pub use item_row::ItemRow;
pub use list_card::ListCard;
pub use list_detail::ListDetail;
pub use lists_overview::ListsOverview;
pub use members_page::MembersPage;
pub use new_list_form::NewListForm;
pub use not_found::{ListNotFound, NotFound};
pub use notice_banner::NoticeBanner;
pub use search_input::SearchInput;
pub use toggle_switch::ToggleSwitch;

use leptos_router::hooks::use_params_map;
use leptos::prelude::*;
use shoplist_core::ListId;

/// `:list_id` of the current route
pub(crate) fn use_list_id() -> Memo<ListId> {
    let params = use_params_map();
    Memo::new(move |_| ListId::from(params.read().get("list_id").unwrap_or_default()))
}
