//! Notice Banner Component
//!
//! Shows the message left by a rejected intent until dismissed.

use leptos::prelude::*;

use crate::context::use_lists;

#[component]
pub fn NoticeBanner() -> impl IntoView {
    let ctx = use_lists();

    move || {
        ctx.notice().map(|message| {
            view! {
                <div class="notice-banner" role="alert">
                    <span>{message}</span>
                    <button class="notice-dismiss" on:click=move |_| ctx.clear_notice()>"×"</button>
                </div>
            }
        })
    }
}
