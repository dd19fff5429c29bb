//! Login Component
//!
//! Collects email and password, trades them for a bearer token, and
//! derives the session from it.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::Spinner;
use crate::context::{AuthContext, Nav, View};

#[component]
pub fn Login() -> impl IntoView {
    let auth = expect_context::<AuthContext>();
    let nav = expect_context::<Nav>();

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error, set_error) = signal(String::new());
    let (loading, set_loading) = signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let email = email.get();
        let password = password.get();
        if email.is_empty() || password.is_empty() {
            set_error.set("Email and password are required".to_string());
            return;
        }
        set_loading.set(true);
        spawn_local(async move {
            match api::login(&email, &password).await {
                Ok(token) => {
                    if auth.login(token) {
                        set_error.set(String::new());
                        nav.go(View::Dashboard);
                    } else {
                        set_error.set("Received an unreadable token".to_string());
                    }
                }
                Err(err) => set_error.set(err),
            }
            set_loading.set(false);
        });
    };

    view! {
        {move || if loading.get() {
            view! { <Spinner /> }.into_any()
        } else {
            view! {
                <div class="login-container">
                    <h2>"Login"</h2>
                    <form on:submit=on_submit>
                        <input
                            type="email"
                            placeholder="Email"
                            prop:value=move || email.get()
                            on:input=move |ev| set_email.set(event_target_value(&ev))
                        />
                        <input
                            type="password"
                            placeholder="Password"
                            prop:value=move || password.get()
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                        />
                        {move || {
                            let message = error.get();
                            (!message.is_empty()).then(|| view! { <p class="error">{message}</p> })
                        }}
                        <button type="submit">"Login"</button>
                        <p>
                            "New user? "
                            <button type="button" class="link-btn" on:click=move |_| nav.go(View::Register)>
                                "Register"
                            </button>
                        </p>
                    </form>
                </div>
            }.into_any()
        }}
    }
}
