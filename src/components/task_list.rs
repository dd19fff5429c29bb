//! Task List Page Component
//!
//! Tasks in one summary bucket ("overdue_tasks", "due_soon", ...),
//! reached from the summary cards or, with a user id, from the admin
//! dashboard.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::{alert, Spinner};
use crate::context::{AuthContext, Nav, View};
use crate::models::Task;

#[component]
pub fn TaskListPage(status: String, user_id: Option<u32>) -> impl IntoView {
    let auth = expect_context::<AuthContext>();
    let nav = expect_context::<Nav>();

    let (tasks, set_tasks) = signal(Vec::<Task>::new());
    let (loading, set_loading) = signal(true);

    let heading = status.replace('_', " ").to_uppercase();

    Effect::new(move |_| {
        let Some(token) = auth.token.get() else {
            return;
        };
        let status = status.clone();
        spawn_local(async move {
            match api::tasks_by_status(&token, &status, user_id).await {
                Ok(loaded) => set_tasks.set(loaded),
                Err(_) => alert("Failed to fetch tasks"),
            }
            set_loading.set(false);
        });
    });

    view! {
        <div class="task-list-page">
            <button class="back" on:click=move |_| nav.go(View::Summary)>"← Back"</button>
            <h2>{heading}</h2>
            {move || if loading.get() {
                view! { <Spinner /> }.into_any()
            } else if tasks.get().is_empty() {
                view! { <p>"No tasks found."</p> }.into_any()
            } else {
                view! {
                    <ul class="task-list">
                        <For
                            each=move || tasks.get()
                            key=|task| task.id
                            children=move |task| {
                                let task_id = task.id;
                                let project_id = task.project_id;
                                view! {
                                    <li
                                        class="task-item"
                                        on:click=move |_| nav.go(View::Task { project_id, task_id })
                                    >
                                        <h4>{task.title.clone()}</h4>
                                    </li>
                                }
                            }
                        />
                    </ul>
                }.into_any()
            }}
        </div>
    }
}
