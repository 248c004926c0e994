//! Item Row Component
//!
//! A single item in the detail view.

use leptos::prelude::*;
use shoplist_core::{Item, ListId};

use crate::context::use_lists;

/// A single item row with checkbox and delete button
#[component]
pub fn ItemRow(list_id: ListId, item: Item) -> impl IntoView {
    let ctx = use_lists();

    let resolved = item.resolved;
    let toggle_ids = (list_id.clone(), item.id.clone());
    let delete_ids = (list_id, item.id);

    view! {
        <li class=if resolved { "item-row resolved" } else { "item-row" }>
            // Checkbox
            <input
                type="checkbox"
                class="item-checkbox"
                prop:checked=resolved
                on:change=move |_| ctx.toggle_item(toggle_ids.0.clone(), toggle_ids.1.clone())
            />

            // Text
            <span class="item-text">{item.text}</span>

            // Delete button
            <button
                class="delete-item-btn"
                on:click=move |_| ctx.delete_item(delete_ids.0.clone(), delete_ids.1.clone())
            >
                "Delete"
            </button>
        </li>
    }
}
