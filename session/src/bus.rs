//! Auth change notifications broadcast to interested components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Login/logout actions publish here; route guards subscribe so guarded
//! pages can re-evaluate without a page reload. The bus is process-wide by
//! construction, not by global state: the app root builds one instance and
//! shares it through context, so tests can build a fresh bus per case.
//!
//! There is no queue. An event published before anyone subscribes is
//! dropped, and a publish returns only after every current subscriber has
//! run.

#[cfg(test)]
#[path = "bus_test.rs"]
mod bus_test;

use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};

use crate::registry::{self, Registry, Subscription};

/// Direction of an authentication change.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthStatus {
    Login,
    Logout,
}

/// Identity attached to a login notification.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthUser {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
}

/// One login/logout notification.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthChangeEvent {
    pub status: AuthStatus,
    #[serde(default)]
    pub user: Option<AuthUser>,
}

impl AuthChangeEvent {
    #[must_use]
    pub fn login(user: Option<AuthUser>) -> Self {
        Self {
            status: AuthStatus::Login,
            user,
        }
    }

    #[must_use]
    pub fn logout() -> Self {
        Self {
            status: AuthStatus::Logout,
            user: None,
        }
    }
}

/// Publish/subscribe channel for [`AuthChangeEvent`]s.
///
/// Cloning shares the same subscriber registry.
#[derive(Clone)]
pub struct AuthBus {
    registry: Arc<Mutex<Registry<AuthChangeEvent>>>,
}

impl AuthBus {
    #[must_use]
    pub fn new() -> Self {
        Self {
            registry: Arc::new(Mutex::new(Registry::new())),
        }
    }

    /// Synchronously notify every current subscriber, in registration
    /// order. Subscribers cancelled earlier in the same pass are skipped;
    /// subscribers added during the pass wait for the next publish.
    pub fn publish(&self, event: &AuthChangeEvent) {
        let snapshot = registry::lock(&self.registry).snapshot();
        for (id, listener) in snapshot {
            if registry::lock(&self.registry).contains(id) {
                listener(event);
            }
        }
    }

    /// Register a listener; the returned handle unregisters it.
    #[must_use]
    pub fn subscribe(
        &self,
        listener: impl Fn(&AuthChangeEvent) + Send + Sync + 'static,
    ) -> Subscription {
        let id = registry::lock(&self.registry).insert(Arc::new(listener));
        let weak = Arc::downgrade(&self.registry);
        Subscription::new(move || {
            if let Some(registry) = weak.upgrade() {
                registry::lock(&registry).remove(id);
            }
        })
    }

    /// Number of registered listeners.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        registry::lock(&self.registry).len()
    }
}

impl Default for AuthBus {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for AuthBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthBus")
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}
