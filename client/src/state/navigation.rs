//! Router lifecycle state observed by the guard hook and the preloader.
//!
//! SYSTEM CONTEXT
//! ==============
//! `ready` is false until the first client-side effect pass marks the
//! route stable; guards hold their `Pending` verdict until then, which is
//! what keeps server render passes from ever showing protected content.
//! `in_transition` tracks tracked navigations for the global preloader.

#[cfg(test)]
#[path = "navigation_test.rs"]
mod navigation_test;

/// Router readiness and transition progress.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RouterState {
    pub ready: bool,
    pub in_transition: bool,
}

impl RouterState {
    /// The route has stabilized client-side; guards may evaluate.
    pub fn mark_ready(&mut self) {
        self.ready = true;
    }

    pub fn transition_started(&mut self) {
        self.in_transition = true;
    }

    pub fn transition_completed(&mut self) {
        self.in_transition = false;
    }

    /// A navigation that ended somewhere other than its target. The error
    /// itself is the router layer's to report; this only stops the
    /// preloader.
    pub fn transition_failed(&mut self) {
        self.in_transition = false;
    }
}
