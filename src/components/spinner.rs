//! Loading Spinner Component

use leptos::prelude::*;

/// Shown while a view waits on its first fetch.
#[component]
pub fn Spinner() -> impl IntoView {
    view! {
        <div class="spinner-overlay">
            <div class="spinner"></div>
            <p>"Loading..."</p>
        </div>
    }
}
