//! Create Task Form Component
//!
//! Modal form for adding a task to a project, admins/managers only.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, CreateTaskArgs};
use crate::context::AuthContext;
use crate::models::{Task, Tool};
use crate::store::{use_app_store, AppStateStoreFields};
use crate::validate;

#[component]
pub fn CreateTask(
    project_id: u32,
    #[prop(into)] on_created: Callback<Task>,
    #[prop(into)] on_close: Callback<()>,
) -> impl IntoView {
    let auth = expect_context::<AuthContext>();
    let store = use_app_store();

    let (tools, set_tools) = signal(Vec::<Tool>::new());
    let (title, set_title) = signal(String::new());
    let (description, set_description) = signal(String::new());
    let (start_date, set_start_date) = signal(String::new());
    let (due_date, set_due_date) = signal(String::new());
    let (assigned_to, set_assigned_to) = signal(String::new());
    let (tool_id, set_tool_id) = signal(String::new());
    let (error, set_error) = signal(String::new());

    // Modules of this project for the tool dropdown
    Effect::new(move |_| {
        let Some(token) = auth.token.get() else {
            return;
        };
        spawn_local(async move {
            if let Ok(loaded) = api::project_tools(&token, project_id).await {
                set_tools.set(loaded);
            }
        });
    });

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let title = title.get();
        let description = description.get();
        if title.is_empty() || description.is_empty() {
            set_error.set("Title and description are required".to_string());
            return;
        }
        let start = match validate::parse_date(&start_date.get()) {
            Ok(date) => date,
            Err(err) => return set_error.set(err),
        };
        let due = match validate::parse_date(&due_date.get()) {
            Ok(date) => date,
            Err(err) => return set_error.set(err),
        };
        if let Err(err) = validate::check_date_range(start, due) {
            return set_error.set(err);
        }
        let Ok(assignee) = assigned_to.get().parse::<u32>() else {
            set_error.set("Assign the task to a user".to_string());
            return;
        };
        let Ok(tool) = tool_id.get().parse::<u32>() else {
            set_error.set("Select a module for the task".to_string());
            return;
        };

        let Some(token) = auth.token.get() else { return };
        spawn_local(async move {
            let args = CreateTaskArgs {
                title: &title,
                description: &description,
                start_date: start,
                due_date: due,
                assigned_to: assignee,
                project_id,
                tool_id: tool,
            };
            match api::create_task(&token, &args).await {
                Ok(task) => {
                    set_error.set(String::new());
                    on_created.run(task);
                }
                Err(err) => set_error.set(err),
            }
        });
    };

    view! {
        <div class="modal-overlay" on:click=move |_| on_close.run(())>
            <div class="modal-content" on:click=|ev: web_sys::MouseEvent| ev.stop_propagation()>
                <form class="create-task-form" on:submit=on_submit>
                    <h3>"Create Task"</h3>
                    <input
                        placeholder="Title"
                        prop:value=move || title.get()
                        on:input=move |ev| set_title.set(event_target_value(&ev))
                    />
                    <textarea
                        placeholder="Description"
                        prop:value=move || description.get()
                        on:input=move |ev| set_description.set(event_target_value(&ev))
                    ></textarea>
                    <label>
                        "Start date"
                        <input
                            type="date"
                            prop:value=move || start_date.get()
                            on:input=move |ev| set_start_date.set(event_target_value(&ev))
                        />
                    </label>
                    <label>
                        "Due date"
                        <input
                            type="date"
                            prop:value=move || due_date.get()
                            on:input=move |ev| set_due_date.set(event_target_value(&ev))
                        />
                    </label>
                    <select on:change=move |ev| set_assigned_to.set(event_target_value(&ev))>
                        <option value="">"Assign to..."</option>
                        <For
                            each=move || store.users().get()
                            key=|user| user.id
                            children=move |user| {
                                let label = format!("{} ({})", user.username, user.role);
                                view! { <option value=user.id.to_string()>{label}</option> }
                            }
                        />
                    </select>
                    <select on:change=move |ev| set_tool_id.set(event_target_value(&ev))>
                        <option value="">"Module..."</option>
                        <For
                            each=move || tools.get()
                            key=|tool| tool.id
                            children=move |tool| {
                                view! { <option value=tool.id.to_string()>{tool.name.clone()}</option> }
                            }
                        />
                    </select>
                    {move || {
                        let message = error.get();
                        (!message.is_empty()).then(|| view! { <p class="error">{message}</p> })
                    }}
                    <button type="submit" class="submit-form">"Create Task"</button>
                    <button type="button" on:click=move |_| on_close.run(())>"Cancel"</button>
                </form>
            </div>
        </div>
    }
}
