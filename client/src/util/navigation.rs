//! Router plumbing: readiness detection and tracked navigation.
//!
//! DESIGN
//! ======
//! The router itself does not expose "a transition is in flight", so the
//! app brackets it manually: `use_tracked_navigate` flips
//! `in_transition` on before delegating to the router, and the bridge
//! effect installed here flips it off again once the new pathname
//! renders. The same effect marks the router ready on its first run.
//! Effects never run during server rendering, which is exactly what
//! keeps guards pending on the server.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::state::navigation::RouterState;

/// Mirror router lifecycle into the shared [`RouterState`].
///
/// Mounted once, inside the `Router`.
pub fn install_router_bridge() {
    let router = expect_context::<RwSignal<RouterState>>();
    let location = use_location();
    Effect::new(move || {
        // Subscribe to every pathname change.
        let _path = location.pathname.get();
        let stale = router.with_untracked(|state| !state.ready || state.in_transition);
        if stale {
            router.update(|state| {
                state.mark_ready();
                state.transition_completed();
            });
        }
    });
}

/// Navigation that drives the global preloader.
///
/// Navigating to the current path is skipped entirely, so a transition
/// can never start without a pathname change to finish it.
pub fn use_tracked_navigate() -> impl Fn(&str) + Clone {
    let router = expect_context::<RwSignal<RouterState>>();
    let location = use_location();
    let navigate = use_navigate();
    move |path: &str| {
        if location.pathname.get_untracked() == path {
            return;
        }
        router.update(RouterState::transition_started);
        navigate(path, NavigateOptions::default());
    }
}
