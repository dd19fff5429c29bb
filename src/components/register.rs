//! Register Component

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, RegisterArgs};
use crate::components::alert;
use crate::context::{Nav, View};

#[component]
pub fn Register() -> impl IntoView {
    let nav = expect_context::<Nav>();

    let (username, set_username) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error, set_error) = signal(String::new());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        set_error.set(String::new());
        let username = username.get();
        let email = email.get();
        let password = password.get();
        if username.is_empty() || email.is_empty() || password.is_empty() {
            set_error.set("All fields are required".to_string());
            return;
        }
        spawn_local(async move {
            let args = RegisterArgs {
                username: &username,
                email: &email,
                password: &password,
            };
            match api::register(&args).await {
                Ok(_) => {
                    alert("Registration successful");
                    set_username.set(String::new());
                    set_email.set(String::new());
                    set_password.set(String::new());
                    nav.go(View::Login);
                }
                Err(err) => set_error.set(err),
            }
        });
    };

    view! {
        <div class="register-container">
            <h2>"Register"</h2>
            <form on:submit=on_submit>
                <input
                    type="text"
                    placeholder="Username"
                    prop:value=move || username.get()
                    on:input=move |ev| set_username.set(event_target_value(&ev))
                />
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
                    (!message.is_empty()).then(|| view! { <div class="error">{message}</div> })
                }}
                <button type="submit">"Register"</button>
                <p>
                    "Already registered? "
                    <button type="button" class="link-btn" on:click=move |_| nav.go(View::Login)>
                        "Click here to login"
                    </button>
                </p>
            </form>
        </div>
    }
}
