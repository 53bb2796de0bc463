//! Per-page access gate.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages that need a signed-in user call [`use_route_guard`] with
//! `enabled = true` and render against the returned verdict. The verdict
//! starts pending, resolves from the persisted token once the router is
//! ready, and from then on follows auth events alone (see
//! `session::guard` for the trust-the-event contract). An unauthorized
//! resolution opens the shared prompt with the current path as the
//! return target.
//!
//! With `enabled = false` the hook is inert: a constant authorized
//! verdict, no storage reads, no subscriptions. The early return also
//! means a disabled guard touches no context at all.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use session::{AuthBus, RouteGuard, Verdict};

use crate::state::navigation::RouterState;
use crate::state::prompt::use_auth_prompt;
use crate::util::storage::StoreHandle;

/// Evaluate access for the current page.
pub fn use_route_guard(enabled: bool) -> Signal<Verdict> {
    if !enabled {
        return Signal::derive(|| Verdict::Authorized);
    }

    let store = expect_context::<StoreHandle>();
    let bus = expect_context::<AuthBus>();
    let router = expect_context::<RwSignal<RouterState>>();
    let prompt = use_auth_prompt();
    let pathname = use_location().pathname;

    let guard = RwSignal::new(RouteGuard::new(true));

    // Initial storage read, deferred until the router is ready. Once the
    // guard settles, `evaluate` is a no-op, so router churn after that
    // never touches storage again.
    Effect::new(move || {
        if !router.with(|state| state.ready) {
            return;
        }
        let request = guard
            .try_update(|gate| {
                let path = pathname.get_untracked();
                gate.evaluate(&store, &path)
            })
            .flatten();
        if let Some(request) = request {
            prompt.open(Some(request.target_path));
        }
    });

    // Later auth changes arrive over the bus, never from storage.
    let subscription = bus.subscribe(move |event| {
        let request = guard
            .try_update(|gate| {
                let path = pathname.get_untracked();
                gate.apply_event(event, &path)
            })
            .flatten();
        if let Some(request) = request {
            prompt.open(Some(request.target_path));
        }
    });
    on_cleanup(move || subscription.cancel());

    Signal::derive(move || guard.with(RouteGuard::verdict))
}

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;
