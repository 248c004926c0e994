//! Not-found views

use leptos::prelude::*;
use leptos_router::components::A;
use shoplist_core::AppRoute;

/// Fallback for unknown paths
#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <div class="not-found">
            <p>"Page not found"</p>
            <A href=AppRoute::Overview.to_path()>"← Back to Lists"</A>
        </div>
    }
}

/// Shown by the detail and members views for an unknown list id
#[component]
pub fn ListNotFound() -> impl IntoView {
    view! {
        <div class="not-found">
            <p>"List not found"</p>
            <A href=AppRoute::Overview.to_path()>"← Back to Lists"</A>
        </div>
    }
}
