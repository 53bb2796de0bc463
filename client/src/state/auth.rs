//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! `AuthState` mirrors the latest bus event for user-aware components; the
//! app root owns the mirroring subscription. `complete_login` and
//! `complete_logout` are the publisher side of the auth bus: they move the
//! persisted token and then tell everyone, in that order, so a subscriber
//! re-reading storage during the pass sees the new world.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use session::{AuthBus, AuthChangeEvent, AuthUser, KeyValueStore, TOKEN_STORAGE_KEY};

/// Authentication state tracking the current user and loading status.
#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub user: Option<AuthUser>,
    pub loading: bool,
}

impl AuthState {
    /// True once a user identity is known.
    pub fn signed_in(&self) -> bool {
        self.user.is_some()
    }
}

/// Persist the session token, then publish a login event.
pub fn complete_login(
    store: &dyn KeyValueStore,
    bus: &AuthBus,
    token: &str,
    user: Option<AuthUser>,
) {
    store.set(TOKEN_STORAGE_KEY, token);
    bus.publish(&AuthChangeEvent::login(user));
}

/// Clear the session token, then publish a logout event.
pub fn complete_logout(store: &dyn KeyValueStore, bus: &AuthBus) {
    store.remove(TOKEN_STORAGE_KEY);
    bus.publish(&AuthChangeEvent::logout());
}
