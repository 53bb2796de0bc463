//! Shared sign-in prompt dialog.

use leptos::prelude::*;

use crate::state::prompt::use_auth_prompt;

/// Modal asking the visitor to sign in, mounted once at the app root.
///
/// Rendering is driven entirely by the shared prompt controller: any
/// guard or page can ask for it, and one dialog serves them all.
#[component]
pub fn AuthPromptHost() -> impl IntoView {
    let prompt = use_auth_prompt();

    let on_backdrop = move |_| prompt.close();
    let on_dismiss = move |_| prompt.close();
    let on_sign_in = move |_| prompt.request_login();

    view! {
        <Show when=move || prompt.is_open()>
            <div class="dialog-backdrop" on:click=on_backdrop>
                <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                    <h2 class="dialog__title">"Sign in required"</h2>
                    <p class="dialog__body">
                        "Sign in to see your profile, orders, and garage."
                    </p>
                    <div class="dialog__actions">
                        <button class="btn" on:click=on_dismiss>
                            "Not now"
                        </button>
                        <button class="btn btn--primary" on:click=on_sign_in>
                            "Sign in"
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
