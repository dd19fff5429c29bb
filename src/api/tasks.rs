//! Task Commands

use chrono::NaiveDate;
use serde::Serialize;

use super::{fetch_json, fetch_unit, json_body, Body};
use crate::models::Task;

#[derive(Serialize)]
pub struct CreateTaskArgs<'a> {
    pub title: &'a str,
    pub description: &'a str,
    pub start_date: NaiveDate,
    pub due_date: NaiveDate,
    pub assigned_to: u32,
    pub project_id: u32,
    pub tool_id: u32,
}

/// Partial update; absent fields keep their server-side values. A changed
/// due date must carry its reason.
#[derive(Serialize)]
pub struct UpdateTaskArgs<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date_change_reason: Option<&'a str>,
}

pub async fn create_task(token: &str, args: &CreateTaskArgs<'_>) -> Result<Task, String> {
    fetch_json("POST", "/project/create-tasks", json_body(args)?, Some(token)).await
}

pub async fn project_tasks(token: &str, project_id: u32) -> Result<Vec<Task>, String> {
    fetch_json(
        "GET",
        &format!("/project/{}/tasks", project_id),
        Body::None,
        Some(token),
    )
    .await
}

pub async fn update_task(token: &str, task_id: u32, args: &UpdateTaskArgs<'_>) -> Result<Task, String> {
    fetch_json(
        "PUT",
        &format!("/project/update-task/{}", task_id),
        json_body(args)?,
        Some(token),
    )
    .await
}

pub async fn delete_task(token: &str, task_id: u32) -> Result<(), String> {
    fetch_unit(
        "DELETE",
        &format!("/project/delete-task/{}", task_id),
        Body::None,
        Some(token),
    )
    .await
}
