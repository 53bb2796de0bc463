//! Top navigation bar.
//!
//! SYSTEM CONTEXT
//! ==============
//! Shows the brand, primary navigation with cart/favorites badges, and
//! the session controls (sign in, or greeting plus sign out). All
//! navigation goes through the tracked navigate so the global preloader
//! covers route changes.

use leptos::prelude::*;

use session::{ActivityCounter, AuthBus, KeyValueStore, TOKEN_STORAGE_KEY};

use crate::net::api;
use crate::state::auth::{self, AuthState};
use crate::state::cart::CartState;
use crate::state::favorites::FavoritesState;
use crate::state::prompt::use_auth_prompt;
use crate::util::navigation::use_tracked_navigate;
use crate::util::storage::StoreHandle;

/// Header link routed through the tracked navigate.
#[component]
fn NavLink(href: &'static str, children: Children) -> impl IntoView {
    let navigate = use_tracked_navigate();
    view! {
        <a
            class="site-header__link"
            href=href
            on:click=move |ev| {
                ev.prevent_default();
                navigate(href);
            }
        >
            {children()}
        </a>
    }
}

/// Global storefront header.
#[component]
pub fn SiteHeader() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let cart = expect_context::<RwSignal<CartState>>();
    let favorites = expect_context::<RwSignal<FavoritesState>>();
    let store = expect_context::<StoreHandle>();
    let bus = expect_context::<AuthBus>();
    let counter = expect_context::<ActivityCounter>();
    let prompt = use_auth_prompt();
    let navigate = use_tracked_navigate();

    let cart_count = Signal::derive(move || cart.with(CartState::total_items));
    let favorites_count = Signal::derive(move || favorites.with(FavoritesState::count));
    let user_name =
        move || auth.with(|state| state.user.as_ref().map(|user| user.name.clone()));

    let on_brand = {
        let navigate = navigate.clone();
        move |ev: leptos::ev::MouseEvent| {
            ev.prevent_default();
            navigate("/");
        }
    };
    let on_sign_in = move |_| prompt.open(None);
    // Local session state drops immediately; server invalidation is
    // best-effort in the background.
    let on_sign_out = move |_| {
        let token = store.get(TOKEN_STORAGE_KEY).unwrap_or_default();
        auth::complete_logout(&store, &bus);
        let counter = counter.clone();
        leptos::task::spawn_local(async move {
            api::logout(&counter, &token).await;
        });
    };

    view! {
        <header class="site-header">
            <a class="site-header__brand" href="/" on:click=on_brand>
                "Gearline"
            </a>
            <nav class="site-header__nav">
                <NavLink href="/catalog">"Catalog"</NavLink>
                <NavLink href="/cart">
                    "Cart"
                    <Show when=move || { cart_count.get() > 0 }>
                        <span class="site-header__badge">{move || cart_count.get()}</span>
                    </Show>
                </NavLink>
                <NavLink href="/favorites">
                    "Favorites"
                    <Show when=move || { favorites_count.get() > 0 }>
                        <span class="site-header__badge">{move || favorites_count.get()}</span>
                    </Show>
                </NavLink>
                <NavLink href="/profile">"Profile"</NavLink>
            </nav>
            <div class="site-header__session">
                <Show
                    when=move || auth.with(AuthState::signed_in)
                    fallback=move || {
                        view! {
                            <button class="btn btn--primary" on:click=on_sign_in>
                                "Sign in"
                            </button>
                        }
                    }
                >
                    <span class="site-header__user">{user_name}</span>
                    <button class="btn" on:click=on_sign_out.clone()>
                        "Sign out"
                    </button>
                </Show>
            </div>
        </header>
    }
}
