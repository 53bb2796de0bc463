//! Shared open/closed state for the login prompt dialog.
//!
//! Exactly one prompt exists per app; every guard and header button talks
//! to the same state so two "please log in" triggers can never stack two
//! dialogs. The struct is plain data; the UI layer wraps it in whatever
//! reactive cell it uses and decides when to actually render the dialog.

#[cfg(test)]
#[path = "prompt_test.rs"]
mod prompt_test;

/// Open flag plus the path to return to after a successful login.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PromptState {
    open: bool,
    target_path: Option<String>,
}

impl PromptState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Open the prompt, remembering `target_path` for the post-login
    /// redirect. No-op while already open: the first trigger's target
    /// wins until the prompt closes.
    pub fn open(&mut self, target_path: Option<String>) {
        if self.open {
            return;
        }
        self.open = true;
        self.target_path = target_path;
    }

    /// Close the prompt. The remembered target survives so a login
    /// started right after dismissal still knows where to return.
    pub fn close(&mut self) {
        self.open = false;
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }

    #[must_use]
    pub fn target_path(&self) -> Option<&str> {
        self.target_path.as_deref()
    }
}
