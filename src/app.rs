//! Project-X Frontend App
//!
//! Top-level component: provides auth, navigation, and the shared store,
//! then renders the current view. Protected views fall back to the login
//! screen when no session is present.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{
    Dashboard, LandingPage, Login, ProjectDetails, Register, Stats, TaskDetails, TaskListPage,
};
use crate::context::{AuthContext, Nav, View};
use crate::session::Session;
use crate::store::AppState;

#[component]
pub fn App() -> impl IntoView {
    let (session, set_session) = signal(None::<Session>);
    let (token, set_token) = signal(None::<String>);
    let auth = AuthContext::new((session, set_session), (token, set_token));

    // Pick up the token from a previous visit before the first render
    auth.restore();

    let initial = if auth.is_authenticated() {
        View::Dashboard
    } else {
        View::Landing
    };
    let (current_view, set_current_view) = signal(initial);
    let nav = Nav::new((current_view, set_current_view));

    // Provide context to all children
    provide_context(auth);
    provide_context(nav);
    provide_context(Store::new(AppState::default()));

    view! {
        <div class="app-layout">
            {move || {
                let view = current_view.get();
                // Route guard: no session, no protected view
                if view.requires_auth() && session.get().is_none() {
                    return view! { <Login /> }.into_any();
                }
                match view {
                    View::Landing => view! { <LandingPage /> }.into_any(),
                    View::Login => view! { <Login /> }.into_any(),
                    View::Register => view! { <Register /> }.into_any(),
                    View::Dashboard => view! { <Dashboard /> }.into_any(),
                    View::Project(project_id) => view! {
                        <ProjectDetails project_id=project_id />
                    }.into_any(),
                    View::Task { project_id, task_id } => view! {
                        <TaskDetails project_id=project_id task_id=task_id />
                    }.into_any(),
                    View::Summary => view! { <Stats /> }.into_any(),
                    View::TaskList { status, user_id } => view! {
                        <TaskListPage status=status user_id=user_id />
                    }.into_any(),
                }
            }}
        </div>
    }
}
