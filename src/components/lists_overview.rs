//! Lists Overview
//!
//! `/lists`: search, owner filter, archived toggle and one card per
//! visible list.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use shoplist_core::views::{list_summary, visible_lists};
use shoplist_core::{AppRoute, OwnerFilter};

use crate::components::{FilterDropdown, ListCard, SearchInput, ToggleSwitch};
use crate::context::use_lists;

#[component]
pub fn ListsOverview() -> impl IntoView {
    let ctx = use_lists();
    let navigate = use_navigate();

    let search_term = Signal::derive(move || ctx.snapshot().session().search_term.clone());
    let owner_filter = Signal::derive(move || ctx.snapshot().session().owner_filter);
    let show_archived = Signal::derive(move || ctx.snapshot().session().show_archived);

    // Recomputed whenever the snapshot changes
    let summaries = Memo::new(move |_| {
        let snapshot = ctx.snapshot();
        let user = snapshot.current_user();
        visible_lists(snapshot.lists(), snapshot.session())
            .into_iter()
            .map(|list| list_summary(list, user))
            .collect::<Vec<_>>()
    });

    view! {
        <div class="overview-header">
            <h1>"Shopping Lists"</h1>
            <div class="toolbar">
                <SearchInput
                    value=search_term
                    on_input=move |term: String| ctx.set_search_term(term)
                    placeholder="Search lists..."
                />
                <FilterDropdown
                    value=owner_filter
                    on_change=move |filter: OwnerFilter| ctx.set_owner_filter(filter)
                />
                <ToggleSwitch
                    checked=show_archived
                    on_change=move |show: bool| ctx.set_show_archived(show)
                    label="Show Archived"
                />
                <button
                    class="btn primary"
                    on:click=move |_| navigate(&AppRoute::NewList.to_path(), Default::default())
                >
                    "+ New List"
                </button>
            </div>
        </div>

        <div class="overview-grid">
            <For
                each=move || summaries.get()
                key=|summary| summary.clone()
                children=move |summary| view! { <ListCard summary=summary /> }
            />
            <Show when=move || summaries.with(|s| s.is_empty())>
                <p class="empty-state">"No lists match the current filters"</p>
            </Show>
        </div>
    }
}
