//! Context wiring for the shared auth prompt.
//!
//! SYSTEM CONTEXT
//! ==============
//! Exactly one prompt state exists per application: `provide_auth_prompt`
//! runs once at the app root and every consumer fetches the same
//! controller with `use_auth_prompt`. Calling the consumer hook outside
//! the provider is a programmer error with no sane fallback, so it fails
//! fast instead of synthesizing a detached prompt.

use leptos::prelude::*;

use session::PromptState;

/// Handle on the shared login-prompt state.
///
/// `Copy`, so components and event handlers can capture it freely.
#[derive(Clone, Copy)]
pub struct PromptController {
    state: RwSignal<PromptState>,
    begin_login: Callback<()>,
}

impl PromptController {
    /// Open the prompt, remembering where to return after login.
    /// Idempotent while open.
    pub fn open(&self, target_path: Option<String>) {
        self.state.update(|prompt| prompt.open(target_path));
    }

    /// Dismiss the prompt. Idempotent.
    pub fn close(&self) {
        self.state.update(session::PromptState::close);
    }

    /// Dismiss the prompt and hand off to the login flow.
    pub fn request_login(&self) {
        self.close();
        self.begin_login.run(());
    }

    /// Reactive read of the open flag.
    pub fn is_open(&self) -> bool {
        self.state.with(PromptState::is_open)
    }

    /// Path remembered by the most recent open, surviving `close` so the
    /// login flow can still redirect after a dismissal.
    pub fn target_path(&self) -> Option<String> {
        self.state
            .with_untracked(|prompt| prompt.target_path().map(ToOwned::to_owned))
    }
}

impl std::fmt::Debug for PromptController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PromptController").finish_non_exhaustive()
    }
}

/// Create the app-wide prompt controller and put it in context.
///
/// `begin_login` is the externally supplied login entry point; the app
/// wires it to a tracked navigation to `/login`.
pub fn provide_auth_prompt(begin_login: Callback<()>) -> PromptController {
    let controller = PromptController {
        state: RwSignal::new(PromptState::new()),
        begin_login,
    };
    provide_context(controller);
    controller
}

/// Fetch the shared controller. Panics outside the provider.
pub fn use_auth_prompt() -> PromptController {
    use_context::<PromptController>().expect("auth prompt controller provided at the app root")
}
