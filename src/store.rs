//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. Holds the
//! lists several views share; per-view data (tasks, comments, tools)
//! stays in local signals.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{Project, User};

/// Shared state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Projects visible to the signed-in user
    pub projects: Vec<Project>,
    /// All users, for assignee dropdowns and name lookups
    pub users: Vec<User>,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Replace the project list after a fetch
pub fn store_set_projects(store: &AppStore, projects: Vec<Project>) {
    *store.projects().write() = projects;
}

/// Add a newly created project
pub fn store_add_project(store: &AppStore, project: Project) {
    store.projects().write().push(project);
}

/// Remove a project by ID
pub fn store_remove_project(store: &AppStore, project_id: u32) {
    store.projects().write().retain(|project| project.id != project_id);
}

/// Replace the user list after a fetch
pub fn store_set_users(store: &AppStore, users: Vec<User>) {
    *store.users().write() = users;
}

/// Remove a user by ID
pub fn store_remove_user(store: &AppStore, user_id: u32) {
    store.users().write().retain(|user| user.id != user_id);
}
