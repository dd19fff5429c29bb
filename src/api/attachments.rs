//! Attachment Commands
//!
//! Multipart upload plus listing and download of a task's files.

use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::FormData;

use super::{fetch_json, js_err, send, Body};
use crate::models::Attachment;

/// Upload one file for a task. The field name `file` is what the backend
/// reads from the multipart form.
pub async fn upload_attachment(token: &str, task_id: u32, file: &web_sys::File) -> Result<(), String> {
    let form = FormData::new().map_err(js_err)?;
    form.append_with_blob("file", file).map_err(js_err)?;
    send(
        "POST",
        &format!("/project/tasks/{}/attachments/", task_id),
        Body::Form(form),
        Some(token),
    )
    .await
    .map(|_| ())
}

pub async fn task_attachments(token: &str, task_id: u32) -> Result<Vec<Attachment>, String> {
    fetch_json(
        "GET",
        &format!("/project/tasks/{}/attachments/", task_id),
        Body::None,
        Some(token),
    )
    .await
}

/// Fetch an attachment's bytes as a Blob for saving through an object URL.
pub async fn download_attachment(token: &str, attachment_id: u32) -> Result<web_sys::Blob, String> {
    let response = send(
        "GET",
        &format!("/project/attachments/download/{}", attachment_id),
        Body::None,
        Some(token),
    )
    .await?;
    let blob = JsFuture::from(response.blob().map_err(js_err)?)
        .await
        .map_err(js_err)?;
    blob.dyn_into()
        .map_err(|_| "Unexpected download result".to_string())
}
