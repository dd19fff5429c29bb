//! Tool List Component
//!
//! Sidebar of a project's modules. Clicking one filters the task list;
//! admins/managers can add and delete modules. Deleting a module also
//! deletes its tasks server-side, so the parent refetches afterwards.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::alert;
use crate::context::AuthContext;
use crate::models::Tool;

#[component]
pub fn ToolList(
    project_id: u32,
    #[prop(into)] on_select: Callback<u32>,
    #[prop(into)] on_clear: Callback<()>,
    #[prop(into)] on_changed: Callback<()>,
) -> impl IntoView {
    let auth = expect_context::<AuthContext>();

    let (tools, set_tools) = signal(Vec::<Tool>::new());
    let (new_tool, set_new_tool) = signal(String::new());
    let (reload_trigger, set_reload_trigger) = signal(0u32);

    Effect::new(move |_| {
        let _ = reload_trigger.get();
        let Some(token) = auth.token.get() else {
            return;
        };
        spawn_local(async move {
            if let Ok(loaded) = api::project_tools(&token, project_id).await {
                set_tools.set(loaded);
            }
        });
    });

    let can_manage = move || {
        auth.session
            .get()
            .is_some_and(|session| session.role.can_manage())
    };

    let on_add = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let name = new_tool.get();
        if name.trim().is_empty() {
            return;
        }
        let Some(token) = auth.token.get() else { return };
        spawn_local(async move {
            match api::add_tool(&token, project_id, &name).await {
                Ok(tool) => {
                    set_new_tool.set(String::new());
                    set_tools.update(|tools| tools.push(tool));
                }
                Err(err) => alert(&err),
            }
        });
    };

    view! {
        <div class="tool-list-container">
            <h2 class="tool-list-heading">"Modules"</h2>

            <Show when=can_manage>
                <form class="tool-form" on:submit=on_add>
                    <input
                        type="text"
                        class="tool-input"
                        placeholder="Module name"
                        prop:value=move || new_tool.get()
                        on:input=move |ev| set_new_tool.set(event_target_value(&ev))
                    />
                    <button type="submit" class="tool-add-button">"+"</button>
                </form>
            </Show>

            <ul class="tool-items">
                <For
                    each=move || tools.get()
                    key=|tool| tool.id
                    children=move |tool| {
                        let tool_id = tool.id;
                        view! {
                            <li class="tool-item" on:click=move |_| on_select.run(tool_id)>
                                <span class="tool-name">{tool.name.clone()}</span>
                                <Show when=can_manage>
                                    <button
                                        class="tool-delete-button"
                                        on:click=move |ev| {
                                            ev.stop_propagation();
                                            let confirmed = web_sys::window()
                                                .map(|w| {
                                                    w.confirm_with_message(
                                                        "Deleting this module will delete all the tasks using it.",
                                                    )
                                                    .unwrap_or(false)
                                                })
                                                .unwrap_or(false);
                                            if !confirmed {
                                                return;
                                            }
                                            let Some(token) = auth.token.get() else { return };
                                            spawn_local(async move {
                                                match api::delete_tool(&token, tool_id).await {
                                                    Ok(()) => {
                                                        set_tools.update(|tools| {
                                                            tools.retain(|t| t.id != tool_id)
                                                        });
                                                        on_changed.run(());
                                                    }
                                                    Err(_) => alert("Could not delete module"),
                                                }
                                            });
                                        }
                                    >
                                        "X"
                                    </button>
                                </Show>
                            </li>
                        }
                    }
                />
            </ul>
            {move || tools.get().is_empty().then(|| view! {
                <p class="no-tools">"No modules added"</p>
            })}
            <Show when=move || !tools.get().is_empty()>
                <button class="clear-tool-filter" on:click=move |_| on_clear.run(())>
                    "Clear Filter"
                </button>
            </Show>
        </div>
    }
}
