//! Task Details Component
//!
//! Full task view: fields with resolved assignee/module names, the
//! attachment panel, and the comment section.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::{alert, AttachmentPanel, CommentList, Spinner, UpdateTaskForm};
use crate::context::{AuthContext, Nav, View};
use crate::filters::{tool_name, user_name};
use crate::models::{Task, Tool};
use crate::store::{store_set_users, use_app_store, AppStateStoreFields};

#[component]
pub fn TaskDetails(project_id: u32, task_id: u32) -> impl IntoView {
    let auth = expect_context::<AuthContext>();
    let nav = expect_context::<Nav>();
    let store = use_app_store();

    let (task, set_task) = signal(None::<Task>);
    let (tools, set_tools) = signal(Vec::<Tool>::new());
    let (editing, set_editing) = signal(false);
    let (reload_trigger, set_reload_trigger) = signal(0u32);

    Effect::new(move |_| {
        let _ = reload_trigger.get();
        let Some(token) = auth.token.get() else {
            return;
        };
        spawn_local(async move {
            if let Ok(tasks) = api::project_tasks(&token, project_id).await {
                set_task.set(tasks.into_iter().find(|t| t.id == task_id));
            }
        });
    });

    Effect::new(move |_| {
        let Some(token) = auth.token.get() else {
            return;
        };
        spawn_local(async move {
            if let Ok(users) = api::get_users(&token).await {
                store_set_users(&store, users);
            }
            if let Ok(loaded) = api::project_tools(&token, project_id).await {
                set_tools.set(loaded);
            }
        });
    });

    let can_edit = move || {
        match (auth.session.get(), task.get()) {
            (Some(session), Some(task)) => session.can_edit_task(&task),
            _ => false,
        }
    };

    view! {
        <div class="task-details-container">
            <div class="task-top-bar">
                <button class="back" on:click=move |_| nav.go(View::Project(project_id))>
                    "← Back"
                </button>
                <Show when=can_edit>
                    <button class="update-btn" on:click=move |_| set_editing.set(true)>
                        "Update"
                    </button>
                </Show>
                {move || match task.get() {
                    Some(task) => {
                        let assignee = user_name(&store.users().get(), task.assigned_to);
                        let module = tool_name(&tools.get(), task.tool_id);
                        let reason = (task.due_date_edited)
                            .then_some(task.due_date_change_reason.clone())
                            .flatten();
                        view! {
                            <div class="task-info">
                                <h2>{task.title.clone()}</h2>
                                <p><b>"Description: "</b> {task.description.clone()}</p>
                                <p><b>"Status: "</b> {task.status.clone()}</p>
                                <p><b>"Start Date: "</b> {task.start_date.to_string()}</p>
                                <p><b>"Due Date: "</b> {task.due_date.to_string()}</p>
                                <p><b>"Tool Used: "</b> {module}</p>
                                <p><b>"Assigned to: "</b> {assignee}</p>
                                {reason.map(|reason| view! {
                                    <p><b>"Reason for Due Date Change: "</b> {reason}</p>
                                })}
                            </div>
                        }.into_any()
                    }
                    None => view! { <Spinner /> }.into_any(),
                }}
            </div>

            {move || editing.get().then(|| task.get()).flatten().map(|current| {
                view! {
                    <UpdateTaskForm
                        task=current
                        on_updated=Callback::new(move |_| {
                            set_editing.set(false);
                            set_reload_trigger.update(|v| *v += 1);
                            alert("Task updated successfully!");
                        })
                        on_close=Callback::new(move |_| set_editing.set(false))
                    />
                }
            })}

            <AttachmentPanel task_id=task_id />

            <CommentList task_id=task_id />
        </div>
    }
}
