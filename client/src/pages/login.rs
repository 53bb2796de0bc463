//! Login page completing the email + password flow.
//!
//! A successful sign-in persists the token, publishes the login event,
//! and returns the visitor to the path the auth prompt remembered (or
//! home when they came here directly).

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;

use session::{ActivityCounter, AuthBus};

use crate::net::api;
use crate::state::auth;
use crate::state::prompt::use_auth_prompt;
use crate::util::navigation::use_tracked_navigate;
use crate::util::storage::StoreHandle;

/// Normalize and check the sign-in form input. The email is trimmed; the
/// password is taken as typed.
fn validate_login_input(email: &str, password: &str) -> Result<(String, String), &'static str> {
    let email = email.trim();
    if email.is_empty() || !email.contains('@') {
        return Err("Enter a valid email address.");
    }
    if password.is_empty() {
        return Err("Enter your password.");
    }
    Ok((email.to_owned(), password.to_owned()))
}

/// Where to land after a successful sign-in.
fn post_login_target(target: Option<String>) -> String {
    target.unwrap_or_else(|| "/".to_owned())
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let store = expect_context::<StoreHandle>();
    let bus = expect_context::<AuthBus>();
    let counter = expect_context::<ActivityCounter>();
    let prompt = use_auth_prompt();
    let navigate = use_tracked_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (email_value, password_value) =
            match validate_login_input(&email.get(), &password.get()) {
                Ok(values) => values,
                Err(err) => {
                    message.set(err.to_owned());
                    return;
                }
            };
        busy.set(true);
        message.set("Signing in...".to_owned());

        let store = store.clone();
        let bus = bus.clone();
        let counter = counter.clone();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match api::login(&counter, &email_value, &password_value).await {
                Ok(response) => {
                    auth::complete_login(&store, &bus, &response.token, Some(response.user));
                    navigate(&post_login_target(prompt.target_path()));
                }
                Err(err) => {
                    message.set(format!("Sign-in failed: {err}"));
                    busy.set(false);
                }
            }
        });
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Sign in to Gearline"</h1>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Sign in"
                    </button>
                </form>
                <Show when=move || !message.get().is_empty()>
                    <p class="login-message">{move || message.get()}</p>
                </Show>
            </div>
        </div>
    }
}
