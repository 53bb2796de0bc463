//! Route-guard verdict machine for pages that require a signed-in user.
//!
//! DESIGN
//! ======
//! One machine per guarded page instance. A disabled guard is authorized
//! from construction and never changes. An enabled guard starts pending;
//! the page must not render protected content until the host router
//! reports a stable route and [`RouteGuard::evaluate`] has run the
//! one-time token check. After that, every [`AuthChangeEvent`] re-resolves
//! the verdict from the event's status alone, never re-reading storage,
//! so a storage mutation without a matching publish can drift until the
//! next full page load.
//!
//! The machine performs no side effects itself. When the prompt should
//! open it returns a [`PromptRequest`] and the caller decides what to do
//! with it, which keeps every transition natively testable.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use crate::bus::{AuthChangeEvent, AuthStatus};
use crate::store::{KeyValueStore, TOKEN_STORAGE_KEY};

/// Outcome of a guarded page's authorization check.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Verdict {
    /// Not yet decided; protected content must not render.
    #[default]
    Pending,
    /// Render away.
    Authorized,
    /// No valid session; protected content must not render.
    Unauthorized,
}

impl Verdict {
    /// True only for [`Verdict::Authorized`].
    #[must_use]
    pub fn allows_render(self) -> bool {
        matches!(self, Self::Authorized)
    }
}

/// Instruction to open the auth prompt, remembering where the user was.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PromptRequest {
    /// Path to return to after a successful login.
    pub target_path: String,
}

/// Verdict state for one guarded page instance.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RouteGuard {
    enabled: bool,
    verdict: Verdict,
}

impl RouteGuard {
    /// A disabled guard is immediately and permanently authorized; an
    /// enabled guard starts pending.
    #[must_use]
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled,
            verdict: if enabled {
                Verdict::Pending
            } else {
                Verdict::Authorized
            },
        }
    }

    #[must_use]
    pub fn verdict(&self) -> Verdict {
        self.verdict
    }

    /// One-time token check once the host router is stable.
    ///
    /// Only acts while the verdict is still pending, so repeated calls
    /// cannot re-open the prompt. An empty stored token counts as absent.
    pub fn evaluate(&mut self, store: &dyn KeyValueStore, path: &str) -> Option<PromptRequest> {
        if !self.enabled || self.verdict != Verdict::Pending {
            return None;
        }
        match store.get(TOKEN_STORAGE_KEY) {
            Some(token) if !token.is_empty() => {
                self.verdict = Verdict::Authorized;
                None
            }
            _ => {
                self.verdict = Verdict::Unauthorized;
                Some(PromptRequest {
                    target_path: path.to_owned(),
                })
            }
        }
    }

    /// Re-resolve the verdict from a published auth change.
    ///
    /// Trusts the event's status; never reads storage. A logout always
    /// asks for the prompt again, even if the guard was already
    /// unauthorized.
    pub fn apply_event(
        &mut self,
        event: &AuthChangeEvent,
        path: &str,
    ) -> Option<PromptRequest> {
        if !self.enabled {
            return None;
        }
        match event.status {
            AuthStatus::Login => {
                self.verdict = Verdict::Authorized;
                None
            }
            AuthStatus::Logout => {
                self.verdict = Verdict::Unauthorized;
                Some(PromptRequest {
                    target_path: path.to_owned(),
                })
            }
        }
    }
}
