//! Fallback page for unmatched routes.

use leptos::prelude::*;

use crate::state::navigation::RouterState;
use crate::util::navigation::use_tracked_navigate;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    let router = expect_context::<RwSignal<RouterState>>();

    // A navigation that dead-ends here still has to stop the preloader.
    Effect::new(move || {
        router.update(RouterState::transition_failed);
    });

    let navigate = use_tracked_navigate();
    let on_home = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        navigate("/");
    };

    view! {
        <section class="not-found-page">
            <h1>"Page not found"</h1>
            <p>"The page you were looking for does not exist."</p>
            <a class="btn btn--primary" href="/" on:click=on_home>
                "Back to the shop"
            </a>
        </section>
    }
}
