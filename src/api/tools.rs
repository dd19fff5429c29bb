//! Tool Commands
//!
//! Project modules tasks can reference.

use serde::Serialize;

use super::{fetch_json, fetch_unit, json_body, Body};
use crate::models::Tool;

#[derive(Serialize)]
struct ToolArgs<'a> {
    name: &'a str,
}

pub async fn add_tool(token: &str, project_id: u32, name: &str) -> Result<Tool, String> {
    fetch_json(
        "POST",
        &format!("/tool/{}/tools", project_id),
        json_body(&ToolArgs { name })?,
        Some(token),
    )
    .await
}

pub async fn project_tools(token: &str, project_id: u32) -> Result<Vec<Tool>, String> {
    fetch_json(
        "GET",
        &format!("/tool/{}/tools", project_id),
        Body::None,
        Some(token),
    )
    .await
}

pub async fn delete_tool(token: &str, tool_id: u32) -> Result<(), String> {
    fetch_unit(
        "DELETE",
        &format!("/tool/tools/{}", tool_id),
        Body::None,
        Some(token),
    )
    .await
}
