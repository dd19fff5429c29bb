//! Landing Page Component

use leptos::prelude::*;

use crate::context::{Nav, View};

#[component]
pub fn LandingPage() -> impl IntoView {
    let nav = expect_context::<Nav>();

    view! {
        <div class="landing-container">
            <div class="landing-box">
                <h1>"Project-X"</h1>
                <div class="tagline">"Just a Task Planner But Better!"</div>
                <p>
                    "Take control of your projects and stay on top of your goals with Project-X — smart, simple, and made for you."
                </p>
                <div class="buttons">
                    <button class="btn btn-signup" on:click=move |_| nav.go(View::Register)>
                        "Sign Up"
                    </button>
                    <button class="btn btn-login" on:click=move |_| nav.go(View::Login)>
                        "Sign In"
                    </button>
                </div>
                <footer>"© 2025 Project-X. All rights reserved."</footer>
            </div>
        </div>
    }
}
