//! Update Task Form Component
//!
//! Modal form for editing a task. Changing the due date demands a reason,
//! which the backend stores alongside the task.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, UpdateTaskArgs};
use crate::context::AuthContext;
use crate::models::{Task, TASK_STATUSES};
use crate::validate;

#[component]
pub fn UpdateTaskForm(
    task: Task,
    #[prop(into)] on_updated: Callback<Task>,
    #[prop(into)] on_close: Callback<()>,
) -> impl IntoView {
    let auth = expect_context::<AuthContext>();

    let task_id = task.id;
    let initial_due = task.due_date.to_string();
    let initial_status = task.status.clone();

    let (title, set_title) = signal(task.title.clone());
    let (description, set_description) = signal(task.description.clone());
    let (status, set_status) = signal(task.status.clone());
    let (due_date, set_due_date) = signal(initial_due.clone());
    let (reason, set_reason) = signal(String::new());
    let (error, set_error) = signal(String::new());

    let due_changed = {
        let initial_due = initial_due.clone();
        move || due_date.get() != initial_due
    };

    let on_submit = {
        let due_changed = due_changed.clone();
        move |ev: web_sys::SubmitEvent| {
            ev.prevent_default();
            set_error.set(String::new());

            let title = title.get();
            if title.is_empty() {
                set_error.set("Title is required".to_string());
                return;
            }
            let due = match validate::parse_date(&due_date.get()) {
                Ok(date) => date,
                Err(err) => return set_error.set(err),
            };
            let changed = due_changed();
            let reason = reason.get();
            if changed && reason.trim().is_empty() {
                set_error.set("Reason for due date change is required.".to_string());
                return;
            }

            let description = description.get();
            let status = status.get();
            let Some(token) = auth.token.get() else { return };
            spawn_local(async move {
                let args = UpdateTaskArgs {
                    title: Some(&title),
                    description: Some(&description),
                    status: Some(&status),
                    due_date: Some(due),
                    due_date_change_reason: changed.then_some(reason.as_str()),
                };
                match api::update_task(&token, task_id, &args).await {
                    Ok(updated) => on_updated.run(updated),
                    Err(err) => set_error.set(err),
                }
            });
        }
    };

    view! {
        <div class="modal">
            <form class="update-form" on:submit=on_submit>
                <h3>"Update Task"</h3>
                <input
                    type="text"
                    placeholder="Title"
                    prop:value=move || title.get()
                    on:input=move |ev| set_title.set(event_target_value(&ev))
                />
                <textarea
                    placeholder="Description"
                    prop:value=move || description.get()
                    on:input=move |ev| set_description.set(event_target_value(&ev))
                ></textarea>
                <select on:change=move |ev| set_status.set(event_target_value(&ev))>
                    {TASK_STATUSES.iter().map(|(value, label)| {
                        let selected = *value == initial_status;
                        view! {
                            <option value=*value selected=selected>{*label}</option>
                        }
                    }).collect_view()}
                </select>
                <label>
                    "Due date"
                    <input
                        type="date"
                        prop:value=move || due_date.get()
                        on:input=move |ev| set_due_date.set(event_target_value(&ev))
                    />
                </label>
                <Show when=due_changed.clone()>
                    <div>
                        <label>"Reason for Due Date Change"</label>
                        <input
                            type="text"
                            prop:value=move || reason.get()
                            on:input=move |ev| set_reason.set(event_target_value(&ev))
                        />
                    </div>
                </Show>
                {move || {
                    let message = error.get();
                    (!message.is_empty()).then(|| view! { <div class="error">{message}</div> })
                }}
                <button type="submit">"Save"</button>
                <button type="button" on:click=move |_| on_close.run(())>"Cancel"</button>
            </form>
        </div>
    }
}
