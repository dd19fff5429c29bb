//! Admin Dashboard Component
//!
//! User administration: expandable rows with role changes, deletion, and
//! a jump to the user's task list.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::DeleteConfirmButton;
use crate::context::{AuthContext, Nav, View};
use crate::session::ROLES;
use crate::store::{store_remove_user, store_set_users, use_app_store, AppStateStoreFields};

#[component]
pub fn AdminDashboard() -> impl IntoView {
    let auth = expect_context::<AuthContext>();
    let nav = expect_context::<Nav>();
    let store = use_app_store();

    let (expanded_user, set_expanded_user) = signal(None::<u32>);
    let (editing_role_user, set_editing_role_user) = signal(None::<u32>);
    let (selected_role, set_selected_role) = signal(String::new());
    let (reload_trigger, set_reload_trigger) = signal(0u32);

    Effect::new(move |_| {
        let _ = reload_trigger.get();
        let Some(token) = auth.token.get() else {
            return;
        };
        spawn_local(async move {
            if let Ok(users) = api::get_users(&token).await {
                store_set_users(&store, users);
            }
        });
    });

    let on_change_role = move |user_id: u32| {
        let role = selected_role.get();
        if role.is_empty() {
            return;
        }
        let Some(token) = auth.token.get() else { return };
        spawn_local(async move {
            if api::change_role(&token, user_id, &role).await.is_ok() {
                set_editing_role_user.set(None);
                set_reload_trigger.update(|v| *v += 1);
            }
        });
    };

    view! {
        <div class="admin-dashboard">
            <h2>"All Users"</h2>
            <For
                each=move || store.users().get()
                key=|user| user.id
                children=move |user| {
                    let user_id = user.id;
                    let current_role = user.role;
                    let is_admin_row = user.role.is_admin();
                    let email = user.email.clone();
                    view! {
                        <div
                            class="user-container"
                            on:click=move |_| set_expanded_user.update(|expanded| {
                                *expanded = if *expanded == Some(user_id) { None } else { Some(user_id) };
                            })
                        >
                            <div class="user-header">
                                <span>{user.username.clone()}</span>
                                <Show when=move || !is_admin_row>
                                    <div class="button-group">
                                        <DeleteConfirmButton
                                            button_class="delete-btn"
                                            on_confirm=Callback::new(move |_| {
                                                let Some(token) = auth.token.get() else { return };
                                                spawn_local(async move {
                                                    if api::delete_user(&token, user_id).await.is_ok() {
                                                        store_remove_user(&store, user_id);
                                                    }
                                                });
                                            })
                                        />
                                        <button
                                            class="change-role-btn"
                                            on:click=move |ev| {
                                                ev.stop_propagation();
                                                set_selected_role.set(current_role.to_string());
                                                set_editing_role_user.update(|editing| {
                                                    *editing = if *editing == Some(user_id) {
                                                        None
                                                    } else {
                                                        Some(user_id)
                                                    };
                                                });
                                            }
                                        >
                                            "Change Role"
                                        </button>
                                        <button
                                            class="view-tasks-btn"
                                            on:click=move |ev| {
                                                ev.stop_propagation();
                                                nav.go(View::TaskList {
                                                    status: "assigned_tasks".to_string(),
                                                    user_id: Some(user_id),
                                                });
                                            }
                                        >
                                            "Tasks"
                                        </button>
                                    </div>
                                </Show>
                            </div>

                            <Show when=move || editing_role_user.get() == Some(user_id)>
                                <div class="role-dropdown" on:click=|ev: web_sys::MouseEvent| ev.stop_propagation()>
                                    <select on:change=move |ev| set_selected_role.set(event_target_value(&ev))>
                                        {ROLES.iter().map(|role| {
                                            let selected = *role == current_role;
                                            view! {
                                                <option value=role.as_str() selected=selected>
                                                    {role.as_str()}
                                                </option>
                                            }
                                        }).collect_view()}
                                    </select>
                                    <button class="update-role" on:click=move |_| on_change_role(user_id)>
                                        "Update"
                                    </button>
                                </div>
                            </Show>

                            <Show when=move || expanded_user.get() == Some(user_id)>
                                <div class="user-details">
                                    <p><strong>"Email: "</strong>{email.clone()}</p>
                                    <p><strong>"Role: "</strong>{current_role.to_string()}</p>
                                </div>
                            </Show>
                        </div>
                    }
                }
            />
        </div>
    }
}
