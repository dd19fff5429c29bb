//! Summary Commands
//!
//! Dashboard statistics and the status-bucket task lists behind the
//! summary cards.

use super::{fetch_json, Body};
use crate::models::{ProjectSummary, Task, UserSummary};

pub async fn user_summary(token: &str) -> Result<UserSummary, String> {
    fetch_json("GET", "/summary/user-summary", Body::None, Some(token)).await
}

/// Manager/admin only: per-project task counts.
pub async fn project_summary(token: &str) -> Result<Vec<ProjectSummary>, String> {
    fetch_json("GET", "/summary/project-summary", Body::None, Some(token)).await
}

/// Tasks in one summary bucket: `assigned_tasks`, `completed_tasks`,
/// `overdue_tasks`, or `due_soon`. Passing a user id is admin-only and
/// scopes the list to that user instead of the caller.
pub async fn tasks_by_status(
    token: &str,
    status: &str,
    user_id: Option<u32>,
) -> Result<Vec<Task>, String> {
    let path = match user_id {
        Some(id) => format!("/summary/tasks/{}?user_id={}", status, id),
        None => format!("/summary/tasks/{}", status),
    };
    fetch_json("GET", &path, Body::None, Some(token)).await
}
