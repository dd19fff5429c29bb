//! Attachment Panel Component
//!
//! Upload and browse a task's email/PDF attachments. Files are grouped by
//! upload day; clicking one downloads it through an object URL.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::api;
use crate::components::{alert, Spinner};
use crate::context::AuthContext;
use crate::filters::group_attachments_by_date;
use crate::models::Attachment;
use crate::validate;

/// Save fetched bytes under the attachment's filename.
fn save_blob(blob: &web_sys::Blob, filename: &str) {
    let Ok(url) = web_sys::Url::create_object_url_with_blob(blob) else {
        return;
    };
    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
        if let Ok(element) = document.create_element("a") {
            if let Ok(anchor) = element.dyn_into::<web_sys::HtmlAnchorElement>() {
                anchor.set_href(&url);
                anchor.set_download(filename);
                anchor.click();
            }
        }
    }
    let _ = web_sys::Url::revoke_object_url(&url);
}

#[component]
pub fn AttachmentPanel(task_id: u32) -> impl IntoView {
    let auth = expect_context::<AuthContext>();

    let (attachments, set_attachments) = signal(Vec::<Attachment>::new());
    let (show_upload, set_show_upload) = signal(false);
    let (show_list, set_show_list) = signal(false);
    let (upload_message, set_upload_message) = signal(String::new());
    let (uploading, set_uploading) = signal(false);
    let (reload_trigger, set_reload_trigger) = signal(0u32);

    let file_input = NodeRef::<leptos::html::Input>::new();

    Effect::new(move |_| {
        let _ = reload_trigger.get();
        let Some(token) = auth.token.get() else {
            return;
        };
        spawn_local(async move {
            if let Ok(loaded) = api::task_attachments(&token, task_id).await {
                set_attachments.set(loaded);
            }
        });
    });

    // Validate the chosen filename as soon as it is picked
    let on_file_change = move |ev: web_sys::Event| {
        let target = ev.target().unwrap();
        let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
        match input.files().and_then(|files| files.get(0)) {
            Some(file) if !validate::allowed_attachment(&file.name()) => {
                input.set_value("");
                set_upload_message.set("Only .eml or .pdf files are allowed".to_string());
            }
            Some(_) => set_upload_message.set("File ready to upload".to_string()),
            None => set_upload_message.set(String::new()),
        }
    };

    let on_upload = move |_| {
        let Some(input) = file_input.get() else { return };
        let Some(file) = input.files().and_then(|files| files.get(0)) else {
            alert("Only .eml or .pdf files are allowed.");
            return;
        };
        let Some(token) = auth.token.get() else { return };
        set_uploading.set(true);
        spawn_local(async move {
            match api::upload_attachment(&token, task_id, &file).await {
                Ok(()) => {
                    alert("File uploaded!");
                    input.set_value("");
                    set_upload_message.set(String::new());
                    set_show_upload.set(false);
                    set_reload_trigger.update(|v| *v += 1);
                }
                Err(err) => alert(&format!("Upload failed:\n{}", err)),
            }
            set_uploading.set(false);
        });
    };

    view! {
        <div class="attachment-panel">
            <button class="add-files" on:click=move |_| set_show_upload.update(|show| *show = !*show)>
                {move || if show_upload.get() { "Close" } else { "Add Files" }}
            </button>
            <button class="show-files" on:click=move |_| set_show_list.update(|show| *show = !*show)>
                {move || if show_list.get() { "Hide Files" } else { "Show Files" }}
            </button>

            <Show when=move || uploading.get()>
                <Spinner />
            </Show>

            <Show when=move || show_upload.get()>
                <div class="upload-box">
                    <h3>"Upload Files"</h3>
                    <input
                        type="file"
                        accept=".eml,.pdf"
                        node_ref=file_input
                        on:change=on_file_change
                    />
                    <button class="upload-file" on:click=on_upload>"Upload"</button>
                    <p>{move || upload_message.get()}</p>
                </div>
            </Show>

            <Show when=move || show_list.get() && !attachments.get().is_empty()>
                <div class="files-list">
                    <h3>"Uploaded Files"</h3>
                    {move || group_attachments_by_date(&attachments.get()).into_iter().map(|(date, group)| {
                        view! {
                            <div class="file-group">
                                <h4>{date.format("%d/%m/%Y").to_string()}</h4>
                                <ul>
                                    {group.into_iter().map(|attachment| {
                                        let filename = attachment.filename.clone();
                                        view! {
                                            <li>
                                                <p
                                                    class="download-file"
                                                    on:click=move |_| {
                                                        let Some(token) = auth.token.get() else { return };
                                                        let filename = filename.clone();
                                                        spawn_local(async move {
                                                            match api::download_attachment(&token, attachment.id).await {
                                                                Ok(blob) => save_blob(&blob, &filename),
                                                                Err(_) => alert("Failed to download file."),
                                                            }
                                                        });
                                                    }
                                                >
                                                    {attachment.filename.clone()}
                                                </p>
                                            </li>
                                        }
                                    }).collect_view()}
                                </ul>
                            </div>
                        }
                    }).collect_view()}
                </div>
            </Show>
        </div>
    }
}
