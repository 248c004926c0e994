//! Two-step confirmation for destructive list actions (delete, leave).

use leptos::prelude::*;

/// Button that asks `prompt` with ✓/✗ before running `on_confirm`.
/// Confirming also closes the prompt, so the control can be reused.
#[component]
pub fn ConfirmButton(
    #[prop(into)] button_class: String,
    #[prop(into)] label: String,
    #[prop(into, default = "Are you sure?".to_string())] prompt: String,
    #[prop(into)] on_confirm: Callback<()>,
) -> impl IntoView {
    let (asking, set_asking) = signal(false);

    let ask = move |ev: web_sys::MouseEvent| {
        ev.stop_propagation();
        set_asking.set(true);
    };
    let confirm = move |ev: web_sys::MouseEvent| {
        ev.stop_propagation();
        set_asking.set(false);
        on_confirm.run(());
    };
    let cancel = move |ev: web_sys::MouseEvent| {
        ev.stop_propagation();
        set_asking.set(false);
    };

    view! {
        <Show
            when=move || asking.get()
            fallback=move || view! { <button class=button_class.clone() on:click=ask>{label.clone()}</button> }
        >
            <span class="confirm-prompt" role="group">
                <span class="confirm-text">{prompt.clone()}</span>
                <button class="confirm-btn" title="Confirm" on:click=confirm>"✓"</button>
                <button class="cancel-btn" title="Cancel" on:click=cancel>"✗"</button>
            </span>
        </Show>
    }
}
