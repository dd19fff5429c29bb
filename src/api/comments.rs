//! Comment Commands

use serde::Serialize;

use super::{fetch_json, fetch_unit, json_body, Body};
use crate::models::Comment;

#[derive(Serialize)]
struct CommentArgs<'a> {
    content: &'a str,
}

pub async fn task_comments(token: &str, task_id: u32) -> Result<Vec<Comment>, String> {
    fetch_json(
        "GET",
        &format!("/comment/task/{}", task_id),
        Body::None,
        Some(token),
    )
    .await
}

pub async fn add_comment(token: &str, task_id: u32, content: &str) -> Result<Comment, String> {
    fetch_json(
        "POST",
        &format!("/comment/task/{}", task_id),
        json_body(&CommentArgs { content })?,
        Some(token),
    )
    .await
}

pub async fn edit_comment(token: &str, comment_id: u32, content: &str) -> Result<Comment, String> {
    fetch_json(
        "PUT",
        &format!("/comment/comments/{}", comment_id),
        json_body(&CommentArgs { content })?,
        Some(token),
    )
    .await
}

pub async fn delete_comment(token: &str, comment_id: u32) -> Result<(), String> {
    fetch_unit(
        "DELETE",
        &format!("/comment/{}", comment_id),
        Body::None,
        Some(token),
    )
    .await
}
