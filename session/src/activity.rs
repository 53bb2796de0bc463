//! In-flight request counter behind the global preloader.
//!
//! DESIGN
//! ======
//! A counter rather than a boolean: overlapping requests each add one, so
//! the overlay stays up until the *last* request settles instead of the
//! first. Decrementing below zero clamps to zero: the policy is "never
//! show a negative count", accepting that a genuine double-decrement bug
//! is masked rather than reported.
//!
//! Call sites should prefer [`ActivityCounter::begin`], which balances the
//! increment with a decrement when the returned guard drops, covering
//! early returns and error paths.

#[cfg(test)]
#[path = "activity_test.rs"]
mod activity_test;

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::registry::{Listener, Registry, Subscription};

struct Inner {
    value: u32,
    registry: Registry<u32>,
}

/// Shared count of outstanding requests with change notification.
///
/// Cloning shares the same count and subscriber registry.
#[derive(Clone)]
pub struct ActivityCounter {
    inner: Arc<Mutex<Inner>>,
}

impl ActivityCounter {
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(Inner {
                value: 0,
                registry: Registry::new(),
            })),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Add one outstanding request and notify subscribers with the new
    /// value.
    pub fn increment(&self) {
        let (value, snapshot) = {
            let mut inner = self.lock();
            inner.value += 1;
            (inner.value, inner.registry.snapshot())
        };
        self.notify(value, snapshot);
    }

    /// Remove one outstanding request, clamped at zero, and notify
    /// subscribers with the new value. A clamped decrement still notifies.
    pub fn decrement(&self) {
        let (value, snapshot) = {
            let mut inner = self.lock();
            inner.value = inner.value.saturating_sub(1);
            (inner.value, inner.registry.snapshot())
        };
        self.notify(value, snapshot);
    }

    /// Current number of outstanding requests.
    #[must_use]
    pub fn current(&self) -> u32 {
        self.lock().value
    }

    /// Increment now and decrement when the returned guard drops.
    #[must_use]
    pub fn begin(&self) -> InFlight {
        self.increment();
        InFlight {
            counter: self.clone(),
        }
    }

    /// Register a listener for value changes; the returned handle
    /// unregisters it.
    #[must_use]
    pub fn subscribe(&self, listener: impl Fn(u32) + Send + Sync + 'static) -> Subscription {
        let id = self
            .lock()
            .registry
            .insert(Arc::new(move |value: &u32| listener(*value)));
        let weak = Arc::downgrade(&self.inner);
        Subscription::new(move || {
            if let Some(inner) = weak.upgrade() {
                inner
                    .lock()
                    .unwrap_or_else(PoisonError::into_inner)
                    .registry
                    .remove(id);
            }
        })
    }

    fn notify(&self, value: u32, snapshot: Vec<(u64, Listener<u32>)>) {
        for (id, listener) in snapshot {
            if self.lock().registry.contains(id) {
                listener(&value);
            }
        }
    }
}

impl Default for ActivityCounter {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ActivityCounter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ActivityCounter")
            .field("value", &self.current())
            .finish()
    }
}

/// Guard pairing one increment with one decrement on drop.
///
/// Hold it across a request's await points so the counter balances even
/// when the request errors or the caller returns early.
#[derive(Debug)]
pub struct InFlight {
    counter: ActivityCounter,
}

impl Drop for InFlight {
    fn drop(&mut self) {
        self.counter.decrement();
    }
}
