//! New List Form
//!
//! `/lists/new`: list name plus a growable set of member email rows.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;
use shoplist_core::validation::required_text;
use shoplist_core::AppRoute;

use crate::context::use_lists;

#[component]
pub fn NewListForm() -> impl IntoView {
    let ctx = use_lists();
    let navigate = use_navigate();

    let (list_name, set_list_name) = signal(String::new());
    // At least one row is always kept
    let (member_rows, set_member_rows) = signal(vec![String::new()]);

    let create_list = {
        let navigate = navigate.clone();
        move |ev: web_sys::SubmitEvent| {
            ev.prevent_default();
            let Ok(name) = required_text("list name", &list_name.get()) else {
                return;
            };
            ctx.create_list(name, &member_rows.get());
            navigate(&AppRoute::Overview.to_path(), Default::default());
        }
    };

    let add_row = move |_: web_sys::MouseEvent| set_member_rows.update(|rows| rows.push(String::new()));
    let remove_row = move |index: usize| {
        set_member_rows.update(|rows| {
            if rows.len() > 1 && index < rows.len() {
                rows.remove(index);
            }
        })
    };
    let update_row = move |index: usize, value: String| {
        set_member_rows.update(|rows| {
            if let Some(row) = rows.get_mut(index) {
                *row = value;
            }
        })
    };

    view! {
        <div class="new-list-page">
            <A href=AppRoute::Overview.to_path()>"← Back to Lists"</A>

            <form class="new-list-form" on:submit=create_list>
                <h2>"Create New List"</h2>

                <label class="field-label">"List Name"</label>
                <input
                    type="text"
                    placeholder="Enter list name"
                    required
                    prop:value=move || list_name.get()
                    on:input=move |ev| set_list_name.set(event_target_value(&ev))
                />

                <label class="field-label">"Invite Members (Email Addresses)"</label>
                <div class="member-rows">
                    {move || {
                        let rows = member_rows.get();
                        let single = rows.len() == 1;
                        rows.into_iter().enumerate().map(move |(index, email)| {
                            view! {
                                <div class="member-row">
                                    <input
                                        type="email"
                                        placeholder="email@example.com"
                                        prop:value=email
                                        on:change=move |ev| update_row(index, event_target_value(&ev))
                                    />
                                    <button
                                        type="button"
                                        class="btn danger small"
                                        disabled=single
                                        on:click=move |_| remove_row(index)
                                    >
                                        "Remove"
                                    </button>
                                </div>
                            }
                        }).collect_view()
                    }}
                </div>
                <button type="button" class="btn outline small" on:click=add_row>"+ Add Member"</button>

                <div class="form-actions">
                    <button
                        type="submit"
                        class="btn primary"
                        disabled=move || list_name.with(|name| name.trim().is_empty())
                    >
                        "Create List"
                    </button>
                    <button
                        type="button"
                        class="btn secondary"
                        on:click=move |_| navigate(&AppRoute::Overview.to_path(), Default::default())
                    >
                        "Cancel"
                    </button>
                </div>
            </form>
        </div>
    }
}
