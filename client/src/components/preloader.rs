//! Full-viewport busy overlay.
//!
//! DESIGN
//! ======
//! The overlay is mounted only while something is actually happening: a
//! route transition in flight, or at least one tracked request
//! outstanding. When idle it contributes no DOM node at all. The
//! activity counter lives outside the reactive graph, so a subscription
//! mirrors its value into a local signal for the component's lifetime.

#[cfg(test)]
#[path = "preloader_test.rs"]
mod preloader_test;

use leptos::prelude::*;

use session::ActivityCounter;

use crate::state::navigation::RouterState;

/// True when the overlay should be in the DOM.
fn overlay_visible(in_transition: bool, pending_requests: u32) -> bool {
    in_transition || pending_requests > 0
}

/// Busy overlay shown during route transitions and tracked requests.
#[component]
pub fn GlobalPreloader() -> impl IntoView {
    let router = expect_context::<RwSignal<RouterState>>();
    let counter = expect_context::<ActivityCounter>();

    let pending = RwSignal::new(counter.current());
    let subscription = counter.subscribe(move |value| pending.set(value));
    on_cleanup(move || subscription.cancel());

    view! {
        <Show when=move || {
            overlay_visible(router.with(|state| state.in_transition), pending.get())
        }>
            <div class="global-preloader" aria-busy="true">
                <div class="global-preloader__spinner"></div>
            </div>
        </Show>
    }
}
