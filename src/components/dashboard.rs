//! Dashboard Component
//!
//! Home view: the signed-in user's projects, project creation for
//! admins/managers, and the profile drawer.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::{CreateProject, DeleteConfirmButton};
use crate::context::{AuthContext, Nav, View};
use crate::store::{
    store_add_project, store_remove_project, store_set_projects, use_app_store, AppStateStoreFields,
};

#[component]
pub fn Dashboard() -> impl IntoView {
    let auth = expect_context::<AuthContext>();
    let nav = expect_context::<Nav>();
    let store = use_app_store();

    let (show_create, set_show_create) = signal(false);
    let (menu_open, set_menu_open) = signal(false);
    let (message, set_message) = signal(String::new());

    // Flash feedback that clears itself
    let show_message = move |msg: String| {
        set_message.set(msg);
        spawn_local(async move {
            TimeoutFuture::new(4_000).await;
            set_message.set(String::new());
        });
    };

    // Load projects once a token is available
    Effect::new(move |_| {
        let Some(token) = auth.token.get() else {
            return;
        };
        spawn_local(async move {
            match api::get_projects(&token).await {
                Ok(projects) => {
                    web_sys::console::log_1(
                        &format!("[DASHBOARD] Loaded {} projects", projects.len()).into(),
                    );
                    store_set_projects(&store, projects);
                }
                Err(err) => show_message(err),
            }
        });
    });

    let can_manage = move || {
        auth.session
            .get()
            .is_some_and(|session| session.role.can_manage())
    };

    let username = move || {
        auth.session
            .get()
            .map(|session| session.username)
            .unwrap_or_default()
    };

    let on_logout = move |_| {
        auth.logout();
        nav.go(View::Login);
    };

    view! {
        <div class="dashboard-container">
            <div class="top-bar">
                <button class="hamburger" on:click=move |_| set_menu_open.update(|open| *open = !*open)>
                    "☰"
                </button>
                <div class="welcome-text">
                    <h2>"Welcome, " {username} "!"</h2>
                </div>
                <button class="logout-btn" on:click=on_logout>"Logout"</button>
            </div>

            <Show when=move || menu_open.get()>
                <div class="overlay" on:click=move |_| set_menu_open.set(false)></div>
                <div class="hamburger-menu open">
                    <div class="profile">
                        <h3>{username}</h3>
                        <p>{move || auth.session.get().map(|s| s.email).unwrap_or_default()}</p>
                        <p>{move || auth.session.get().map(|s| s.role.to_string()).unwrap_or_default()}</p>
                    </div>
                    <hr />
                    <button class="goto-dashboard" on:click=move |_| nav.go(View::Summary)>
                        "Dashboard"
                    </button>
                </div>
            </Show>

            <div class="project-section">
                <div class="project-header">
                    <h2>"Your Projects"</h2>
                    <Show when=can_manage>
                        <button
                            class="create-project-btn"
                            on:click=move |_| set_show_create.update(|show| *show = !*show)
                        >
                            {move || if show_create.get() { "Close" } else { "Create New Project" }}
                        </button>
                    </Show>
                </div>

                {move || {
                    let flash = message.get();
                    (!flash.is_empty()).then(|| view! { <p class="flash-message">{flash}</p> })
                }}

                <Show when=move || show_create.get()>
                    <div class="create-project-form">
                        <CreateProject
                            on_created=Callback::new(move |project| {
                                store_add_project(&store, project);
                            })
                            on_close=Callback::new(move |_| set_show_create.set(false))
                        />
                    </div>
                </Show>

                <div class="project-list">
                    <For
                        each=move || store.projects().get()
                        key=|project| project.id
                        children=move |project| {
                            let id = project.id;
                            view! {
                                <div class="project-item" on:click=move |_| nav.go(View::Project(id))>
                                    <span class="project-title">{project.title.clone()}</span>
                                    <Show when=can_manage>
                                        <DeleteConfirmButton
                                            button_class="delete-btn"
                                            on_confirm=Callback::new(move |_| {
                                                let Some(token) = auth.token.get() else { return };
                                                spawn_local(async move {
                                                    match api::delete_project(&token, id).await {
                                                        Ok(()) => {
                                                            store_remove_project(&store, id);
                                                            show_message("Project deleted successfully!".to_string());
                                                        }
                                                        Err(err) => show_message(err),
                                                    }
                                                });
                                            })
                                        />
                                    </Show>
                                </div>
                            }
                        }
                    />
                    {move || store.projects().get().is_empty().then(|| view! {
                        <p>"No projects yet."</p>
                    })}
                </div>
            </div>
        </div>
    }
}
