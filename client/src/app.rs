//! Root application component: session services, context providers, and
//! the route table.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use session::{
    ActivityCounter, AuthBus, AuthChangeEvent, AuthStatus, KeyValueStore, TOKEN_STORAGE_KEY,
};

use crate::components::auth_prompt::AuthPromptHost;
use crate::components::preloader::GlobalPreloader;
use crate::components::site_header::SiteHeader;
use crate::net::api;
use crate::pages::{
    cart::CartPage, catalog::CatalogPage, favorites::FavoritesPage, garage::GaragePage,
    home::HomePage, login::LoginPage, not_found::NotFoundPage, orders::OrdersPage,
    profile::ProfilePage,
};
use crate::state::auth::AuthState;
use crate::state::cart::{CART_STORAGE_KEY, CartState};
use crate::state::catalog::CatalogState;
use crate::state::favorites::{FAVORITES_STORAGE_KEY, FavoritesState};
use crate::state::navigation::RouterState;
use crate::state::prompt::provide_auth_prompt;
use crate::util::navigation::{install_router_bridge, use_tracked_navigate};
use crate::util::storage::{StoreHandle, load_json, save_json};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Owns the session services (auth bus, activity counter, storage
/// handle), the shared state signals, and the subscriptions tying them
/// together, then mounts the routed shell.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // One bus, one counter, one store per application.
    let bus = AuthBus::new();
    let counter = ActivityCounter::new();
    let store = StoreHandle::browser();

    let auth = RwSignal::new(AuthState::default());
    let router = RwSignal::new(RouterState::default());
    let catalog = RwSignal::new(CatalogState::default());
    // Loaded before the save effects exist, so the first effect pass
    // writes back what was read rather than clobbering it.
    let cart =
        RwSignal::new(load_json::<CartState>(&store, CART_STORAGE_KEY).unwrap_or_default());
    let favorites = RwSignal::new(
        load_json::<FavoritesState>(&store, FAVORITES_STORAGE_KEY).unwrap_or_default(),
    );

    // Mirror bus events into the render-side auth signal.
    let subscription = bus.subscribe(move |event| match event.status {
        AuthStatus::Login => auth.set(AuthState {
            user: event.user.clone(),
            loading: false,
        }),
        AuthStatus::Logout => auth.set(AuthState {
            user: None,
            loading: false,
        }),
    });
    on_cleanup(move || subscription.cancel());

    // Session bootstrap: a persisted token restores the display
    // identity. A rejected token ends the session for everyone at once.
    let token = store.get(TOKEN_STORAGE_KEY).unwrap_or_default();
    if !token.is_empty() {
        auth.update(|state| state.loading = true);
        let bus = bus.clone();
        let store = store.clone();
        let counter = counter.clone();
        leptos::task::spawn_local(async move {
            match api::fetch_current_user(&counter, &token).await {
                Some(user) => bus.publish(&AuthChangeEvent::login(Some(user))),
                None => {
                    store.remove(TOKEN_STORAGE_KEY);
                    bus.publish(&AuthChangeEvent::logout());
                }
            }
        });
    }

    // Persist cart and favorites on every change.
    {
        let store = store.clone();
        Effect::new(move || {
            cart.with(|state| save_json(&store, CART_STORAGE_KEY, state));
        });
    }
    {
        let store = store.clone();
        Effect::new(move || {
            favorites.with(|state| save_json(&store, FAVORITES_STORAGE_KEY, state));
        });
    }

    provide_context(bus);
    provide_context(counter);
    provide_context(store);
    provide_context(auth);
    provide_context(router);
    provide_context(cart);
    provide_context(favorites);
    provide_context(catalog);

    view! {
        <Stylesheet id="leptos" href="/pkg/gearline.css"/>
        <Title text="Gearline Auto Parts"/>

        <Router>
            <AppShell/>
        </Router>
    }
}

/// Routed shell: chrome, overlays, and the route table.
///
/// Lives inside `Router` so navigation hooks are available to the
/// header, the bridge effect, and the login entry point.
#[component]
fn AppShell() -> impl IntoView {
    install_router_bridge();

    let navigate = use_tracked_navigate();
    provide_auth_prompt(Callback::new(move |()| navigate("/login")));

    view! {
        <SiteHeader/>
        <GlobalPreloader/>
        <AuthPromptHost/>
        <main class="site-main">
            <Routes fallback=|| view! { <NotFoundPage/> }>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=StaticSegment("catalog") view=CatalogPage/>
                <Route path=StaticSegment("cart") view=CartPage/>
                <Route path=StaticSegment("favorites") view=FavoritesPage/>
                <Route path=StaticSegment("profile") view=ProfilePage/>
                <Route path=StaticSegment("orders") view=OrdersPage/>
                <Route path=StaticSegment("profile-gar") view=GaragePage/>
                <Route path=StaticSegment("login") view=LoginPage/>
            </Routes>
        </main>
    }
}
