//! Manager Dashboard Component
//!
//! Cross-project totals from the per-project summary rows, with a
//! per-project breakdown table.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::context::AuthContext;
use crate::filters::project_totals;
use crate::models::ProjectSummary;

#[component]
pub fn ManagerDashboard() -> impl IntoView {
    let auth = expect_context::<AuthContext>();

    let (rows, set_rows) = signal(Vec::<ProjectSummary>::new());

    Effect::new(move |_| {
        let Some(token) = auth.token.get() else {
            return;
        };
        spawn_local(async move {
            if let Ok(loaded) = api::project_summary(&token).await {
                web_sys::console::log_1(
                    &format!("[SUMMARY] Loaded {} project rows", loaded.len()).into(),
                );
                set_rows.set(loaded);
            }
        });
    });

    let totals = move || project_totals(&rows.get());

    view! {
        <div class="manager-dashboard">
            <h2>"Manager Dashboard"</h2>
            <div class="summary-cards">
                <div class="summary-card blue">
                    <h4>"Total Projects"</h4>
                    <p>{move || totals().total_projects}</p>
                </div>
                <div class="summary-card yellow">
                    <h4>"Tasks In Progress"</h4>
                    <p>{move || totals().pending_tasks}</p>
                </div>
                <div class="summary-card green">
                    <h4>"Completed Tasks"</h4>
                    <p>{move || totals().completed_tasks}</p>
                </div>
            </div>

            <Show when=move || !rows.get().is_empty()>
                <table class="project-summary-table">
                    <thead>
                        <tr>
                            <th>"Project"</th>
                            <th>"Tasks"</th>
                            <th>"Completed"</th>
                            <th>"Pending"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || rows.get()
                            key=|row| row.project_name.clone()
                            children=move |row| {
                                view! {
                                    <tr>
                                        <td>{row.project_name.clone()}</td>
                                        <td>{row.total_tasks}</td>
                                        <td>{row.completed_tasks}</td>
                                        <td>{row.pending_tasks}</td>
                                    </tr>
                                }
                            }
                        />
                    </tbody>
                </table>
            </Show>
        </div>
    }
}
