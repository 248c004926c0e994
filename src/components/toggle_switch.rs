//! Toggle Switch Component

use leptos::prelude::*;

/// Labelled checkbox styled as a switch
#[component]
pub fn ToggleSwitch(
    #[prop(into)] checked: Signal<bool>,
    #[prop(into)] on_change: Callback<bool>,
    label: &'static str,
) -> impl IntoView {
    view! {
        <label class=move || if checked.get() { "toggle-switch on" } else { "toggle-switch" }>
            <input
                type="checkbox"
                prop:checked=move || checked.get()
                on:change=move |ev| on_change.run(event_target_checked(&ev))
            />
            <span class="toggle-label">{label}</span>
        </label>
    }
}
