//! Project Commands

use chrono::NaiveDate;
use serde::Serialize;

use super::{fetch_json, fetch_unit, json_body, Body};
use crate::models::Project;

#[derive(Serialize)]
pub struct CreateProjectArgs<'a> {
    pub title: &'a str,
    pub description: &'a str,
    pub start_date: NaiveDate,
    pub due_date: NaiveDate,
}

pub async fn create_project(token: &str, args: &CreateProjectArgs<'_>) -> Result<Project, String> {
    fetch_json("POST", "/project/create-projects", json_body(args)?, Some(token)).await
}

pub async fn get_projects(token: &str) -> Result<Vec<Project>, String> {
    fetch_json("GET", "/project/get-projects", Body::None, Some(token)).await
}

pub async fn delete_project(token: &str, project_id: u32) -> Result<(), String> {
    fetch_unit(
        "DELETE",
        &format!("/project/delete-project/{}", project_id),
        Body::None,
        Some(token),
    )
    .await
}
