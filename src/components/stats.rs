//! Stats Component
//!
//! Summary dashboard: the user's task counts as clickable cards plus the
//! status chart, with the manager and admin dashboards below for the
//! roles that can see them.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::{AdminDashboard, ManagerDashboard, Spinner, SummaryCard, TaskChart};
use crate::context::{AuthContext, Nav, View};
use crate::models::UserSummary;

/// Card label to summary bucket, in display order.
const CARDS: &[(&str, &str)] = &[
    ("Assigned Tasks", "assigned_tasks"),
    ("Completed Tasks", "completed_tasks"),
    ("Overdue Tasks", "overdue_tasks"),
    ("Due Soon", "due_soon"),
];

fn card_value(summary: &UserSummary, bucket: &str) -> u32 {
    match bucket {
        "assigned_tasks" => summary.assigned_tasks,
        "completed_tasks" => summary.completed_tasks,
        "overdue_tasks" => summary.overdue_tasks,
        _ => summary.soon_due_tasks,
    }
}

#[component]
pub fn Stats() -> impl IntoView {
    let auth = expect_context::<AuthContext>();
    let nav = expect_context::<Nav>();

    let (summary, set_summary) = signal(None::<UserSummary>);
    let (error, set_error) = signal(String::new());

    Effect::new(move |_| {
        let Some(token) = auth.token.get() else {
            return;
        };
        spawn_local(async move {
            match api::user_summary(&token).await {
                Ok(loaded) => set_summary.set(Some(loaded)),
                Err(_) => set_error.set("Unable to load dashboard data.".to_string()),
            }
        });
    });

    let role = move || auth.session.get().map(|session| session.role);

    view! {
        <div class="summary-container">
            <button class="back" on:click=move |_| nav.go(View::Dashboard)>"← Back"</button>
            <h2 class="user-summary">"User Stats"</h2>
            {move || {
                let message = error.get();
                (!message.is_empty()).then(|| view! { <p class="error-msg">{message}</p> })
            }}

            {move || match summary.get() {
                Some(summary) => view! {
                    <div class="dashboard-body">
                        <div class="card-labels">
                            {CARDS.iter().map(|(label, bucket)| {
                                let bucket = bucket.to_string();
                                view! {
                                    <SummaryCard
                                        label=*label
                                        value=card_value(&summary, &bucket)
                                        on_click=Callback::new(move |_| {
                                            nav.go(View::TaskList {
                                                status: bucket.clone(),
                                                user_id: None,
                                            });
                                        })
                                    />
                                }
                            }).collect_view()}
                        </div>
                        <div class="chart-section">
                            <TaskChart summary=summary />
                        </div>
                    </div>
                }.into_any(),
                None => view! {
                    <Show when=move || error.get().is_empty()>
                        <Spinner />
                    </Show>
                }.into_any(),
            }}

            <Show when=move || role().is_some_and(|role| role.can_manage())>
                <ManagerDashboard />
            </Show>

            <Show when=move || role().is_some_and(|role| role.is_admin())>
                <AdminDashboard />
            </Show>
        </div>
    }
}
