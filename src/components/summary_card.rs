//! Summary Card Component

use leptos::prelude::*;

/// One labelled count on the summary dashboard. Clicking it opens the
/// matching task list.
#[component]
pub fn SummaryCard(
    #[prop(into)] label: String,
    value: u32,
    #[prop(into)] on_click: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="card-container" on:click=move |_| on_click.run(())>
            <h3 class="label-heading">{label}</h3>
            <p class="label-text">{value}</p>
        </div>
    }
}
