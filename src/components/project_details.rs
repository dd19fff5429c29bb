//! Project Details Component
//!
//! Tasks of one project with composable status/assignee/module filters,
//! task creation and editing, the module sidebar, and a report table.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::{CreateTask, DeleteConfirmButton, Spinner, ToolList, UpdateTaskForm};
use crate::context::{AuthContext, Nav, View};
use crate::filters::{filter_tasks, user_name};
use crate::models::{Task, TASK_STATUSES};
use crate::store::{store_set_users, use_app_store, AppStateStoreFields};

#[component]
pub fn ProjectDetails(project_id: u32) -> impl IntoView {
    let auth = expect_context::<AuthContext>();
    let nav = expect_context::<Nav>();
    let store = use_app_store();

    let (project, set_project) = signal(None);
    let (tasks, set_tasks) = signal(Vec::<Task>::new());
    let (reload_trigger, set_reload_trigger) = signal(0u32);
    let (status_filter, set_status_filter) = signal("all".to_string());
    let (assignee_filter, set_assignee_filter) = signal("all".to_string());
    let (tool_filter, set_tool_filter) = signal(None::<u32>);
    let (show_create, set_show_create) = signal(false);
    let (editing_task, set_editing_task) = signal(None::<Task>);
    let (show_report, set_show_report) = signal(false);

    // The API has no single-project endpoint; find it in the list
    Effect::new(move |_| {
        let Some(token) = auth.token.get() else {
            return;
        };
        spawn_local(async move {
            if let Ok(projects) = api::get_projects(&token).await {
                set_project.set(projects.into_iter().find(|p| p.id == project_id));
            }
        });
    });

    Effect::new(move |_| {
        let _ = reload_trigger.get();
        let Some(token) = auth.token.get() else {
            return;
        };
        spawn_local(async move {
            if let Ok(loaded) = api::project_tasks(&token, project_id).await {
                web_sys::console::log_1(
                    &format!("[PROJECT] Loaded {} tasks for project {}", loaded.len(), project_id).into(),
                );
                set_tasks.set(loaded);
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
        });
    });

    let can_manage = move || {
        auth.session
            .get()
            .is_some_and(|session| session.role.can_manage())
    };

    let filtered = move || {
        filter_tasks(
            &tasks.get(),
            &status_filter.get(),
            assignee_filter.get().parse().ok(),
            tool_filter.get(),
        )
    };

    view! {
        <div class="project-detail-container">
            <div class="project-top-bar">
                <button class="back" on:click=move |_| nav.go(View::Dashboard)>"← Back"</button>
                {move || match project.get() {
                    Some(project) => view! {
                        <div class="project-info">
                            <h2>{project.title}</h2>
                            <p>{project.description}</p>
                        </div>
                    }.into_any(),
                    None => view! { <Spinner /> }.into_any(),
                }}
            </div>

            <div class="project-body">
                <div class="task-header-list">
                    <div class="task-header">
                        <h3>"Tasks"</h3>
                        <div class="task-filter">
                            <label for="user-filter">"User: "</label>
                            <select
                                id="user-filter"
                                on:change=move |ev| set_assignee_filter.set(event_target_value(&ev))
                            >
                                <option value="all">"All"</option>
                                <For
                                    each=move || store.users().get()
                                    key=|user| user.id
                                    children=move |user| {
                                        view! {
                                            <option value=user.id.to_string()>{user.username.clone()}</option>
                                        }
                                    }
                                />
                            </select>

                            <label for="status-filter">"Status: "</label>
                            <select
                                id="status-filter"
                                on:change=move |ev| set_status_filter.set(event_target_value(&ev))
                            >
                                <option value="all">"All"</option>
                                {TASK_STATUSES.iter().map(|(value, label)| view! {
                                    <option value=*value>{*label}</option>
                                }).collect_view()}
                            </select>
                        </div>
                        <Show when=can_manage>
                            <button
                                class="create-task"
                                on:click=move |_| set_show_create.update(|show| *show = !*show)
                            >
                                {move || if show_create.get() { "Close Task Form" } else { "+ Create Task" }}
                            </button>
                        </Show>
                    </div>

                    <Show when=move || show_create.get()>
                        <CreateTask
                            project_id=project_id
                            on_created=Callback::new(move |task| {
                                set_tasks.update(|tasks| tasks.push(task));
                                set_show_create.set(false);
                            })
                            on_close=Callback::new(move |_| set_show_create.set(false))
                        />
                    </Show>

                    {move || editing_task.get().map(|task| view! {
                        <UpdateTaskForm
                            task=task
                            on_updated=Callback::new(move |updated: Task| {
                                set_tasks.update(|tasks| {
                                    if let Some(existing) = tasks.iter_mut().find(|t| t.id == updated.id) {
                                        *existing = updated;
                                    }
                                });
                                set_editing_task.set(None);
                            })
                            on_close=Callback::new(move |_| set_editing_task.set(None))
                        />
                    })}

                    <div class="task-list">
                        <For
                            each=filtered
                            key=|task| task.id
                            children=move |task| {
                                let task_id = task.id;
                                let status_class = format!("status-circle {}", task.status);
                                let assignee = move || user_name(&store.users().get(), task.assigned_to);
                                let can_edit = {
                                    let task = task.clone();
                                    move || auth.session.get().is_some_and(|s| s.can_edit_task(&task))
                                };
                                let edit_task = task.clone();
                                view! {
                                    <div
                                        class="task-item"
                                        on:click=move |_| nav.go(View::Task { project_id, task_id })
                                    >
                                        <div class="task-title-wrapper">
                                            <span class=status_class></span>
                                            <span class="task-title">{task.title.clone()}</span>
                                            <span class="task-title-user">" - " {assignee}</span>
                                        </div>
                                        <div class="task-actions">
                                            <Show when=can_edit.clone()>
                                                <button
                                                    class="update-btn"
                                                    on:click={
                                                        let edit_task = edit_task.clone();
                                                        move |ev: web_sys::MouseEvent| {
                                                            ev.stop_propagation();
                                                            set_editing_task.set(Some(edit_task.clone()));
                                                        }
                                                    }
                                                >
                                                    "Update"
                                                </button>
                                            </Show>
                                            <Show when=can_manage>
                                                <DeleteConfirmButton
                                                    button_class="delete-btn"
                                                    on_confirm=Callback::new(move |_| {
                                                        let Some(token) = auth.token.get() else { return };
                                                        spawn_local(async move {
                                                            if api::delete_task(&token, task_id).await.is_ok() {
                                                                set_tasks.update(|tasks| {
                                                                    tasks.retain(|t| t.id != task_id)
                                                                });
                                                            }
                                                        });
                                                    })
                                                />
                                            </Show>
                                        </div>
                                    </div>
                                }
                            }
                        />
                        {move || filtered().is_empty().then(|| view! {
                            <p>"No tasks for this project."</p>
                        })}
                    </div>

                    <div class="print-section">
                        <button class="print" on:click=move |_| set_show_report.update(|show| *show = !*show)>
                            {move || if show_report.get() { "Hide Report" } else { "Show Report" }}
                        </button>
                        <Show when=move || show_report.get()>
                            <div class="report">
                                <h2>"Project: " {move || project.get().map(|p| p.title).unwrap_or_default()}</h2>
                                <p>"Filter: " {move || status_filter.get()}</p>
                                <table>
                                    <thead>
                                        <tr>
                                            <th>"#"</th>
                                            <th>"Title"</th>
                                            <th>"Status"</th>
                                            <th>"Description"</th>
                                            <th>"Assigned To"</th>
                                            <th>"Due Date"</th>
                                        </tr>
                                    </thead>
                                    <tbody>
                                        {move || filtered().into_iter().enumerate().map(|(index, task)| {
                                            let description = if task.description.is_empty() {
                                                "No description".to_string()
                                            } else {
                                                task.description.clone()
                                            };
                                            view! {
                                                <tr>
                                                    <td>{index + 1}</td>
                                                    <td>{task.title.clone()}</td>
                                                    <td>{task.status.clone()}</td>
                                                    <td>{description}</td>
                                                    <td>{user_name(&store.users().get(), task.assigned_to)}</td>
                                                    <td>{task.due_date.to_string()}</td>
                                                </tr>
                                            }
                                        }).collect_view()}
                                    </tbody>
                                </table>
                            </div>
                        </Show>
                    </div>
                </div>

                <ToolList
                    project_id=project_id
                    on_select=Callback::new(move |tool_id| set_tool_filter.set(Some(tool_id)))
                    on_clear=Callback::new(move |_| set_tool_filter.set(None))
                    on_changed=Callback::new(move |_| {
                        set_tool_filter.set(None);
                        set_reload_trigger.update(|v| *v += 1);
                    })
                />
            </div>
        </div>
    }
}
