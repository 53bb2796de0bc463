//! Landing page.

use leptos::prelude::*;

use crate::util::navigation::use_tracked_navigate;

#[component]
pub fn HomePage() -> impl IntoView {
    let navigate = use_tracked_navigate();
    let on_browse = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        navigate("/catalog");
    };

    view! {
        <section class="home-page">
            <h1>"Gearline Auto Parts"</h1>
            <p class="home-page__tagline">
                "Brakes, filters, and service parts for daily drivers."
            </p>
            <a class="btn btn--primary" href="/catalog" on:click=on_browse>
                "Browse the catalog"
            </a>
        </section>
    }
}
