//! Item Filter Bar Component
//!
//! Reusable item filter buttons for the detail view.

use leptos::prelude::*;
use shoplist_core::ItemFilter;

/// Filter buttons for items
#[component]
pub fn ItemFilterBar(
    current: ReadSignal<ItemFilter>,
    on_change: impl Fn(ItemFilter) + Copy + 'static,
) -> impl IntoView {
    view! {
        <div class="filter-controls">
            {ItemFilter::ALL.iter().map(|filter| {
                let filter = *filter;
                let is_selected = move || current.get() == filter;
                view! {
                    <button
                        class=move || if is_selected() { "filter-btn active" } else { "filter-btn" }
                        on:click=move |_| on_change(filter)
                    >
                        {filter.label()}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
