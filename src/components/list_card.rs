//! List Card Component
//!
//! One card in the overview grid.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use shoplist_core::views::ListSummary;
use shoplist_core::{AppRoute, Role};

use crate::components::ConfirmButton;
use crate::context::use_lists;

#[component]
pub fn ListCard(summary: ListSummary) -> impl IntoView {
    let ctx = use_lists();
    let navigate = use_navigate();

    let detail_path = AppRoute::Detail(summary.id.clone()).to_path();
    let list_id = summary.id.clone();
    let is_owner = summary.role == Role::Owner;
    let card_class = if summary.archived { "list-card archived" } else { "list-card" };

    let open_card = {
        let navigate = navigate.clone();
        let path = detail_path.clone();
        move |_: web_sys::MouseEvent| navigate(&path, Default::default())
    };
    let open_details = move |ev: web_sys::MouseEvent| {
        ev.stop_propagation();
        navigate(&detail_path, Default::default());
    };

    view! {
        <div class=card_class on:click=open_card>
            <div class="card-title">{summary.name.clone()}</div>
            <div class="card-meta">
                {summary.role.label()} " • " {summary.member_label()}
            </div>
            <div class="card-meta">
                {format!("{} / {} items pending", summary.pending, summary.total)}
            </div>
            <div class="card-actions" on:click=|ev| ev.stop_propagation()>
                <button class="btn outline small" on:click=open_details>"View Details"</button>
                {is_owner.then(|| {
                    let list_id = list_id.clone();
                    view! {
                        <ConfirmButton
                            button_class="btn danger small"
                            label="Delete"
                            prompt="Delete?"
                            on_confirm=move |_: ()| ctx.delete_list(list_id.clone())
                        />
                    }
                })}
            </div>
        </div>
    }
}
