//! List Detail
//!
//! `/lists/:list_id`: items, membership summary and the owner/member
//! actions (rename, archive, delete, leave).

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;
use shoplist_core::views::{member_preview, role_of, unresolved_count, visible_items};
use shoplist_core::{AppRoute, ItemFilter, ListId, Role, ShoppingList};

use crate::components::{use_list_id, ConfirmButton, ItemFilterBar, ItemRow, ListNotFound};
use crate::context::use_lists;

/// Roster entries shown before the "+N more" badge
const MEMBER_PREVIEW_LIMIT: usize = 3;

#[component]
pub fn ListDetail() -> impl IntoView {
    let ctx = use_lists();
    let list_id = use_list_id();

    let list = Memo::new(move |_| {
        let id = list_id.get();
        ctx.snapshot().find(&id).cloned()
    });
    let found = Memo::new(move |_| list.with(Option::is_some));

    move || {
        if found.get() {
            view! { <ListDetailBody list_id=list_id list=list /> }.into_any()
        } else {
            view! { <ListNotFound /> }.into_any()
        }
    }
}

/// Body of the detail view. Form state lives here and survives store
/// updates; only the parts reading `list` re-render.
#[component]
fn ListDetailBody(list_id: Memo<ListId>, list: Memo<Option<ShoppingList>>) -> impl IntoView {
    let ctx = use_lists();
    let navigate = use_navigate();
    let user = ctx.current_user();

    let role = Memo::new(move |_| {
        list.with(|l| l.as_ref().map_or(Role::Guest, |l| role_of(l, &user)))
    });
    let is_owner = Signal::derive(move || role.get() == Role::Owner);
    let is_member = Signal::derive(move || role.get() == Role::Member);

    let (item_filter, set_item_filter) = signal(ItemFilter::All);
    let (new_item, set_new_item) = signal(String::new());
    let (new_name, set_new_name) = signal(String::new());

    // Only a change of the stored name resets the rename input
    let stored_name = Memo::new(move |_| list.with(|l| l.as_ref().map(|l| l.name.clone())));
    Effect::new(move |_| {
        if let Some(name) = stored_name.get() {
            set_new_name.set(name);
        }
    });

    let add_item = move || {
        let text = new_item.get();
        if text.trim().is_empty() {
            return;
        }
        ctx.add_item(list_id.get_untracked(), text);
        set_new_item.set(String::new());
    };

    let rename = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        ctx.rename_list(list_id.get_untracked(), new_name.get());
    };

    let archive = move |_: web_sys::MouseEvent| ctx.archive_list(list_id.get_untracked());

    let delete = {
        let navigate = navigate.clone();
        move |_: ()| {
            ctx.delete_list(list_id.get_untracked());
            navigate(&AppRoute::Overview.to_path(), Default::default());
        }
    };

    let leave = move |_: ()| {
        ctx.leave_list(list_id.get_untracked());
        navigate(&AppRoute::Overview.to_path(), Default::default());
    };

    let members_path = move || AppRoute::Members(list_id.get()).to_path();

    let header = move || {
        list.with(|l| {
            l.as_ref().map(|l| {
                let owner_line = if is_owner.get_untracked() {
                    "You are the owner".to_string()
                } else {
                    format!("Owner: {}", l.owner)
                };
                view! {
                    <div>
                        <h2>{l.name.clone()}</h2>
                        <div class="card-meta">{owner_line}</div>
                    </div>
                }
            })
        })
    };

    let archive_label = move || {
        let archived = list.with(|l| l.as_ref().is_some_and(|l| l.archived));
        if archived { "Unarchive List" } else { "Archive List" }
    };

    let members_summary = move || {
        list.with(|l| {
            l.as_ref().map(|l| {
                let preview = member_preview(l, MEMBER_PREVIEW_LIMIT);
                let roster_size = preview.shown.len() + preview.hidden;
                let hidden = preview.hidden;
                view! {
                    <h3>{format!("Members ({roster_size})")}</h3>
                    <div class="member-badges">
                        {preview.shown.into_iter().map(|email| view! {
                            <span class="badge">{email}</span>
                        }).collect_view()}
                        {(hidden > 0).then(|| view! {
                            <span class="badge">{format!("+{hidden} more")}</span>
                        })}
                    </div>
                }
            })
        })
    };

    let items_title = move || {
        let unresolved = list.with(|l| l.as_ref().map_or(0, unresolved_count));
        format!("Items ({unresolved} unresolved)")
    };

    let item_rows = move || {
        let filter = item_filter.get();
        list.with(|l| {
            let Some(l) = l.as_ref() else {
                return view! { <li class="empty-state">"No items to display"</li> }.into_any();
            };
            let rows = visible_items(l, filter)
                .into_iter()
                .map(|item| view! { <ItemRow list_id=l.id.clone() item=item.clone() /> })
                .collect::<Vec<_>>();
            if rows.is_empty() {
                view! { <li class="empty-state">"No items to display"</li> }.into_any()
            } else {
                rows.into_any()
            }
        })
    };

    view! {
        <div class="list-detail">
            <A href=AppRoute::Overview.to_path()>"← Back to Lists"</A>

            <header class="detail-header">
                {header}
                <span class=move || format!("role-badge role-{}", role.get().label().to_lowercase())>
                    {move || role.get().label()}
                </span>
            </header>

            <section class="detail-actions">
                <A href=members_path>"Manage Members"</A>
                <Show when=move || is_owner.get()>
                    <button class="btn secondary small" on:click=archive>{archive_label}</button>
                    <ConfirmButton
                        button_class="btn danger small"
                        label="Delete List"
                        prompt="Delete this list?"
                        on_confirm=delete.clone()
                    />
                </Show>
                <Show when=move || is_member.get()>
                    <ConfirmButton
                        button_class="btn secondary small"
                        label="Leave List"
                        prompt="Leave this list?"
                        on_confirm=leave.clone()
                    />
                </Show>
            </section>

            <Show when=move || is_owner.get()>
                <form class="rename-form" on:submit=rename>
                    <input
                        type="text"
                        class="list-name-input"
                        prop:value=move || new_name.get()
                        on:input=move |ev| set_new_name.set(event_target_value(&ev))
                    />
                    <button type="submit" class="btn outline small">"Rename"</button>
                </form>
            </Show>

            <section class="detail-section">
                {members_summary}
                <A href=members_path>"Manage Members"</A>
            </section>

            <section class="detail-section">
                <div class="items-header">
                    <h3>{items_title}</h3>
                    <ItemFilterBar
                        current=item_filter
                        on_change=move |filter| set_item_filter.set(filter)
                    />
                </div>

                <div class="add-item-form">
                    <input
                        type="text"
                        placeholder="Add new item..."
                        prop:value=move || new_item.get()
                        on:input=move |ev| set_new_item.set(event_target_value(&ev))
                        on:keydown=move |ev: web_sys::KeyboardEvent| {
                            if ev.key() == "Enter" {
                                add_item();
                            }
                        }
                    />
                    <button
                        class="btn primary"
                        disabled=move || new_item.with(|text| text.trim().is_empty())
                        on:click=move |_| add_item()
                    >
                        "Add"
                    </button>
                </div>

                <ul class="item-list">{item_rows}</ul>
            </section>
        </div>
    }
}
