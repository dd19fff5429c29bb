//! Create Project Form Component
//!
//! Modal form shown from the dashboard, admins/managers only.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, CreateProjectArgs};
use crate::context::AuthContext;
use crate::models::Project;
use crate::validate;

#[component]
pub fn CreateProject(
    #[prop(into)] on_created: Callback<Project>,
    #[prop(into)] on_close: Callback<()>,
) -> impl IntoView {
    let auth = expect_context::<AuthContext>();

    let (title, set_title) = signal(String::new());
    let (description, set_description) = signal(String::new());
    let (start_date, set_start_date) = signal(String::new());
    let (due_date, set_due_date) = signal(String::new());
    let (message, set_message) = signal(String::new());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let title = title.get();
        let description = description.get();
        if title.is_empty() || description.is_empty() {
            set_message.set("Title and description are required".to_string());
            return;
        }
        let start = match validate::parse_date(&start_date.get()) {
            Ok(date) => date,
            Err(err) => return set_message.set(err),
        };
        let due = match validate::parse_date(&due_date.get()) {
            Ok(date) => date,
            Err(err) => return set_message.set(err),
        };
        if let Err(err) = validate::check_date_range(start, due) {
            return set_message.set(err);
        }

        let Some(token) = auth.token.get() else { return };
        spawn_local(async move {
            let args = CreateProjectArgs {
                title: &title,
                description: &description,
                start_date: start,
                due_date: due,
            };
            match api::create_project(&token, &args).await {
                Ok(project) => {
                    set_message.set(format!("Project \"{}\" created successfully!", project.title));
                    set_title.set(String::new());
                    set_description.set(String::new());
                    set_start_date.set(String::new());
                    set_due_date.set(String::new());
                    on_created.run(project);
                }
                Err(err) => set_message.set(err),
            }
        });
    };

    view! {
        <div class="modal-overlay">
            <div class="modal-content">
                <form class="create-form" on:submit=on_submit>
                    <h3>"Create New Project"</h3>
                    <input
                        type="text"
                        placeholder="Project Title"
                        prop:value=move || title.get()
                        on:input=move |ev| set_title.set(event_target_value(&ev))
                    />
                    <textarea
                        placeholder="Project Description"
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
                    <button type="submit" class="submit">"Create Project"</button>
                    <button type="button" class="close" on:click=move |_| on_close.run(())>
                        "Close"
                    </button>
                </form>
                {move || {
                    let text = message.get();
                    (!text.is_empty()).then(|| view! { <p class="form-message">{text}</p> })
                }}
            </div>
        </div>
    }
}
