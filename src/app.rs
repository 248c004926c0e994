//! Shopping Lists Frontend App
//!
//! Root component: owns the store, provides the context and maps URL paths
//! to views.

use leptos::prelude::*;
use leptos_router::components::{Redirect, Route, Router, Routes};
use leptos_router::path;
use reactive_stores::Store;
use shoplist_core::{AppRoute, ListStore};

use crate::components::{ListDetail, ListsOverview, MembersPage, NewListForm, NoticeBanner, NotFound};
use crate::context::ListsContext;
use crate::store::AppState;

#[component]
pub fn App(lists: ListStore) -> impl IntoView {
    let store = Store::new(AppState::new(lists));

    // Provide store and context to all children
    provide_context(store);
    provide_context(ListsContext::new(store));

    let landing = AppRoute::landing().to_path();

    view! {
        <Router>
            <main class="app-layout">
                <NoticeBanner />
                // "/lists/new" is declared before "/lists/:list_id"
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/") view=move || view! { <Redirect path=landing.clone() /> } />
                    <Route path=path!("/lists") view=ListsOverview />
                    <Route path=path!("/lists/new") view=NewListForm />
                    <Route path=path!("/lists/:list_id") view=ListDetail />
                    <Route path=path!("/lists/:list_id/members") view=MembersPage />
                </Routes>
            </main>
        </Router>
    }
}
