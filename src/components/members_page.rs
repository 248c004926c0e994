//! Members Page
//!
//! `/lists/:list_id/members`: owner row, member rows and the owner-only
//! invite form.

use leptos::prelude::*;
use leptos_router::components::A;
use shoplist_core::views::role_of;
use shoplist_core::{AppRoute, ListId, Role, ShoppingList};

use crate::components::{use_list_id, ListNotFound};
use crate::context::use_lists;

#[component]
pub fn MembersPage() -> impl IntoView {
    let ctx = use_lists();
    let list_id = use_list_id();

    let list = Memo::new(move |_| {
        let id = list_id.get();
        ctx.snapshot().find(&id).cloned()
    });
    let found = Memo::new(move |_| list.with(Option::is_some));

    move || {
        if found.get() {
            view! { <MembersBody list_id=list_id list=list /> }.into_any()
        } else {
            view! { <ListNotFound /> }.into_any()
        }
    }
}

#[component]
fn MembersBody(list_id: Memo<ListId>, list: Memo<Option<ShoppingList>>) -> impl IntoView {
    let ctx = use_lists();
    let user = ctx.current_user();

    let is_owner = Memo::new(move |_| {
        list.with(|l| l.as_ref().is_some_and(|l| role_of(l, &user) == Role::Owner))
    });
    let (invite_email, set_invite_email) = signal(String::new());

    let invite = move || {
        if ctx.add_member(list_id.get_untracked(), invite_email.get()).is_ok() {
            set_invite_email.set(String::new());
        }
    };

    let title = move || {
        list.with(|l| {
            l.as_ref()
                .map(|l| format!("Manage Members - {}", l.name))
                .unwrap_or_default()
        })
    };
    let owner = move || list.with(|l| l.as_ref().map(|l| l.owner.clone()).unwrap_or_default());
    let members = move || list.with(|l| l.as_ref().map(|l| l.members.clone()).unwrap_or_default());
    let member_count = move || list.with(|l| l.as_ref().map_or(0, |l| l.members.len()));

    view! {
        <div class="members-page">
            <A href=move || AppRoute::Detail(list_id.get()).to_path()>"← Back to List"</A>

            <h2>{title}</h2>

            <section class="owner-section">
                <h3>"Owner"</h3>
                <div class="member-item">
                    <span class="member-email">{owner}</span>
                    <span class="owner-badge">"Owner"</span>
                </div>
            </section>

            <section class="members-section">
                <h3>{move || format!("Members ({})", member_count())}</h3>
                <ul class="members-list">
                    <For
                        each=members
                        key=|email| email.clone()
                        children=move |email| {
                            let remove_email = email.clone();
                            view! {
                                <li class="member-item">
                                    <span class="member-email">{email}</span>
                                    <Show when=move || is_owner.get()>
                                        <button
                                            class="btn danger small"
                                            on:click={
                                                let remove_email = remove_email.clone();
                                                move |_| ctx.remove_member(list_id.get_untracked(), remove_email.clone())
                                            }
                                        >
                                            "Remove"
                                        </button>
                                    </Show>
                                </li>
                            }
                        }
                    />
                    <Show when=move || member_count() == 0>
                        <li class="empty-state">"No members yet"</li>
                    </Show>
                </ul>
            </section>

            <Show when=move || is_owner.get()>
                <section class="invite-section">
                    <h3>"Invite New Member"</h3>
                    <div class="invite-form">
                        <input
                            type="email"
                            placeholder="email@example.com"
                            prop:value=move || invite_email.get()
                            on:input=move |ev| set_invite_email.set(event_target_value(&ev))
                            on:keydown=move |ev: web_sys::KeyboardEvent| {
                                if ev.key() == "Enter" {
                                    invite();
                                }
                            }
                        />
                        <button
                            class="btn success"
                            disabled=move || invite_email.with(|email| email.trim().is_empty())
                            on:click=move |_| invite()
                        >
                            "Invite"
                        </button>
                    </div>
                </section>
            </Show>
        </div>
    }
}
