//! Comment List Component
//!
//! A task's comment thread: newest first, inline editing for the author,
//! deletion for admins.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::{alert, DeleteConfirmButton};
use crate::context::AuthContext;
use crate::models::Comment;

#[component]
pub fn CommentList(task_id: u32) -> impl IntoView {
    let auth = expect_context::<AuthContext>();

    let (comments, set_comments) = signal(Vec::<Comment>::new());
    let (new_comment, set_new_comment) = signal(String::new());
    let (edit_id, set_edit_id) = signal(None::<u32>);
    let (edit_content, set_edit_content) = signal(String::new());

    Effect::new(move |_| {
        let Some(token) = auth.token.get() else {
            return;
        };
        spawn_local(async move {
            if let Ok(loaded) = api::task_comments(&token, task_id).await {
                set_comments.set(loaded);
            }
        });
    });

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let content = new_comment.get();
        if content.trim().is_empty() {
            return;
        }
        let Some(token) = auth.token.get() else { return };
        spawn_local(async move {
            match api::add_comment(&token, task_id, &content).await {
                Ok(comment) => {
                    set_comments.update(|comments| comments.insert(0, comment));
                    set_new_comment.set(String::new());
                }
                Err(_) => alert("Failed to post comment"),
            }
        });
    };

    let on_edit_submit = move |comment_id: u32| {
        let content = edit_content.get();
        let Some(token) = auth.token.get() else { return };
        spawn_local(async move {
            match api::edit_comment(&token, comment_id, &content).await {
                Ok(updated) => {
                    set_comments.update(|comments| {
                        if let Some(existing) = comments.iter_mut().find(|c| c.id == comment_id) {
                            *existing = updated;
                        }
                    });
                    set_edit_id.set(None);
                    set_edit_content.set(String::new());
                }
                Err(_) => alert("Failed to edit comment"),
            }
        });
    };

    view! {
        <div class="comment-section">
            <h3>"Comments"</h3>

            <form class="comment-form" on:submit=on_submit>
                <input
                    type="text"
                    class="comment-input"
                    placeholder="Add a comment..."
                    prop:value=move || new_comment.get()
                    on:input=move |ev| set_new_comment.set(event_target_value(&ev))
                />
            </form>

            <div class="comment-list">
                <For
                    each=move || comments.get()
                    key=|comment| comment.id
                    children=move |comment| {
                        let comment_id = comment.id;
                        let author = comment.user.username.clone();
                        let role = comment.user.role.to_string();
                        let posted = comment.created_at.format("%d/%m/%Y").to_string();
                        let can_edit = {
                            let comment = comment.clone();
                            move || auth.session.get().is_some_and(|s| s.can_edit_comment(&comment))
                        };
                        let can_delete = move || {
                            auth.session.get().is_some_and(|s| s.can_delete_comment())
                        };
                        let edit_source = comment.content.clone();
                        view! {
                            <div class="comment-item">
                                <div class="comment-content">
                                    <p class="comment-author">{author}</p>
                                    <span class="comment-date">" - " {posted}</span>
                                    <p class="author-role">" - " {role}</p>
                                    {move || if edit_id.get() == Some(comment_id) {
                                        view! {
                                            <form
                                                class="edit-comment-form"
                                                on:submit=move |ev: web_sys::SubmitEvent| {
                                                    ev.prevent_default();
                                                    on_edit_submit(comment_id);
                                                }
                                            >
                                                <input
                                                    type="text"
                                                    class="comment-input"
                                                    prop:value=move || edit_content.get()
                                                    on:input=move |ev| set_edit_content.set(event_target_value(&ev))
                                                />
                                                <button type="submit" class="save-comment">"Save"</button>
                                                <button
                                                    type="button"
                                                    class="cancel-edit"
                                                    on:click=move |_| set_edit_id.set(None)
                                                >
                                                    "Cancel"
                                                </button>
                                            </form>
                                        }.into_any()
                                    } else {
                                        view! { <p>{comment.content.clone()}</p> }.into_any()
                                    }}
                                </div>
                                <div class="comment-actions">
                                    <Show when=can_edit.clone()>
                                        <button
                                            class="edit-comment"
                                            on:click={
                                                let edit_source = edit_source.clone();
                                                move |_| {
                                                    set_edit_id.set(Some(comment_id));
                                                    set_edit_content.set(edit_source.clone());
                                                }
                                            }
                                        >
                                            "Edit"
                                        </button>
                                    </Show>
                                    <Show when=can_delete>
                                        <DeleteConfirmButton
                                            button_class="delete-comment"
                                            on_confirm=Callback::new(move |_| {
                                                let Some(token) = auth.token.get() else { return };
                                                spawn_local(async move {
                                                    match api::delete_comment(&token, comment_id).await {
                                                        Ok(()) => set_comments.update(|comments| {
                                                            comments.retain(|c| c.id != comment_id)
                                                        }),
                                                        Err(err) => alert(&err),
                                                    }
                                                });
                                            })
                                        />
                                    </Show>
                                </div>
                            </div>
                        }
                    }
                />
                {move || comments.get().is_empty().then(|| view! {
                    <p>"No comments yet."</p>
                })}
            </div>
        </div>
    }
}
