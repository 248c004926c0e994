//! Filter Dropdown Component
//!
//! Owner filter selector for the overview.

use leptos::prelude::*;
use shoplist_core::OwnerFilter;

#[component]
pub fn FilterDropdown(
    #[prop(into)] value: Signal<OwnerFilter>,
    #[prop(into)] on_change: Callback<OwnerFilter>,
) -> impl IntoView {
    view! {
        <select
            class="filter-dropdown"
            prop:value=move || value.get().as_str()
            on:change=move |ev| on_change.run(OwnerFilter::from_str(&event_target_value(&ev)))
        >
            {OwnerFilter::ALL.iter().map(|filter| {
                view! { <option value=filter.as_str()>{filter.label()}</option> }
            }).collect_view()}
        </select>
    }
}
