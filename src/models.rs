//! Frontend Models
//!
//! Transient copies of the entities owned by the backend API. Nothing here
//! is persisted client-side; each view fetches what it renders.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::session::Role;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: u32,
    pub username: String,
    pub email: String,
    pub role: Role,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub start_date: NaiveDate,
    pub due_date: NaiveDate,
}

/// Task status values understood by the backend.
pub const TASK_STATUSES: &[(&str, &str)] = &[
    ("pending", "Pending"),
    ("in_progress", "In Progress"),
    ("completed", "Completed"),
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub status: String,
    pub start_date: NaiveDate,
    pub due_date: NaiveDate,
    pub assigned_to: Option<u32>,
    pub tool_id: Option<u32>,
    pub project_id: u32,
    pub due_date_change_reason: Option<String>,
    #[serde(default)]
    pub due_date_edited: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub id: u32,
    pub content: String,
    pub user_id: u32,
    pub task_id: u32,
    pub created_at: NaiveDateTime,
    pub user: User,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attachment {
    pub id: u32,
    pub filename: String,
    pub task_id: u32,
    pub created_at: NaiveDateTime,
}

/// A project-scoped module tasks can reference. The list endpoints omit
/// the owning project, so the field is optional on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tool {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub project_id: Option<u32>,
}

/// Per-user task counts for the summary dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
pub struct UserSummary {
    pub assigned_tasks: u32,
    pub completed_tasks: u32,
    pub overdue_tasks: u32,
    pub soon_due_tasks: u32,
}

/// Per-project task counts, one row per project.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ProjectSummary {
    pub project_name: String,
    pub total_tasks: u32,
    pub completed_tasks: u32,
    pub pending_tasks: u32,
}
