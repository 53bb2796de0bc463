//! Ordered subscriber registry shared by the bus and the activity counter.
//!
//! DESIGN
//! ======
//! Listeners are kept in registration order and notified synchronously. A
//! notification pass snapshots the current entries, releases the lock, and
//! re-checks each listener against the live registry right before invoking
//! it: a listener cancelled mid-pass is skipped for the rest of that pass,
//! and a listener added mid-pass waits for the next one. Because the lock
//! is never held while a listener runs, listeners may subscribe, cancel,
//! or publish reentrantly without deadlocking.
//!
//! The browser runtime is single-threaded; the `Mutex` exists to satisfy
//! the `Send + Sync` bounds on shared context values, not to coordinate
//! threads.

#[cfg(test)]
#[path = "registry_test.rs"]
mod registry_test;

use std::sync::{Mutex, MutexGuard, PoisonError};

pub(crate) type Listener<T> = std::sync::Arc<dyn Fn(&T) + Send + Sync>;

/// Ordered collection of listeners with stable ids.
pub(crate) struct Registry<T> {
    next_id: u64,
    entries: Vec<(u64, Listener<T>)>,
}

impl<T> Registry<T> {
    pub(crate) fn new() -> Self {
        Self {
            next_id: 0,
            entries: Vec::new(),
        }
    }

    /// Append a listener and return its id.
    pub(crate) fn insert(&mut self, listener: Listener<T>) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.entries.push((id, listener));
        id
    }

    pub(crate) fn remove(&mut self, id: u64) {
        self.entries.retain(|(entry_id, _)| *entry_id != id);
    }

    pub(crate) fn contains(&self, id: u64) -> bool {
        self.entries.iter().any(|(entry_id, _)| *entry_id == id)
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    /// Clone the current entries for one notification pass.
    pub(crate) fn snapshot(&self) -> Vec<(u64, Listener<T>)> {
        self.entries.clone()
    }
}

/// Lock a registry mutex, shrugging off poisoning so the registry stays
/// usable after a listener panic.
pub(crate) fn lock<T>(registry: &Mutex<Registry<T>>) -> MutexGuard<'_, Registry<T>> {
    registry.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Handle owning one listener registration.
///
/// Cancelling removes the listener from its registry exactly once; calling
/// [`cancel`](Subscription::cancel) again is a no-op, and dropping the
/// handle cancels it too. Components park the handle in `on_cleanup` so
/// teardown releases the listener deterministically.
pub struct Subscription {
    cancel: Mutex<Option<Box<dyn FnOnce() + Send>>>,
}

impl Subscription {
    pub(crate) fn new(cancel: impl FnOnce() + Send + 'static) -> Self {
        Self {
            cancel: Mutex::new(Some(Box::new(cancel))),
        }
    }

    /// Remove the listener. Safe to call more than once.
    pub fn cancel(&self) {
        let taken = self
            .cancel
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
        if let Some(run) = taken {
            run();
        }
    }

    /// True until the first `cancel` (or drop).
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.cancel
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.cancel();
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.is_active())
            .finish()
    }
}
