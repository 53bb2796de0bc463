//! Parts catalog page.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use leptos::prelude::*;

use session::ActivityCounter;

use crate::state::cart::CartState;
use crate::state::catalog::{self, CatalogState};
use crate::state::favorites::FavoritesState;
use crate::util::money::format_cents;

/// Catalog page listing every part with add-to-cart and favorite actions.
#[component]
pub fn CatalogPage() -> impl IntoView {
    let catalog = expect_context::<RwSignal<CatalogState>>();
    let cart = expect_context::<RwSignal<CartState>>();
    let favorites = expect_context::<RwSignal<FavoritesState>>();
    let counter = expect_context::<ActivityCounter>();

    Effect::new(move || catalog::ensure_parts_loaded(catalog, &counter));

    let toast = RwSignal::new(None::<String>);
    let toast_epoch = RwSignal::new(0u32);
    let alive = Arc::new(AtomicBool::new(true));
    on_cleanup({
        let alive = Arc::clone(&alive);
        move || alive.store(false, Ordering::Relaxed)
    });
    let show_toast = Callback::new(move |message: String| {
        let epoch = toast_epoch.get_untracked() + 1;
        toast_epoch.set(epoch);
        toast.set(Some(message));

        #[cfg(feature = "hydrate")]
        {
            let alive = Arc::clone(&alive);
            leptos::task::spawn_local(async move {
                gloo_timers::future::sleep(std::time::Duration::from_millis(1800)).await;
                // A newer toast may own the slot by now.
                if alive.load(Ordering::Relaxed) && toast_epoch.get_untracked() == epoch {
                    toast.set(None);
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = &alive;
        }
    });

    view! {
        <section class="catalog-page">
            <h1>"Catalog"</h1>
            <Show
                when=move || catalog.with(|state| !state.parts.is_empty())
                fallback=move || view! { <CatalogStatus/> }
            >
                <ul class="catalog-page__grid">
                    {move || {
                        catalog.with(|state| {
                            state
                                .parts
                                .iter()
                                .cloned()
                                .map(|part| {
                                    let part_id = part.id.clone();
                                    let fav_id = part.id.clone();
                                    let toast_name = part.name.clone();
                                    let price = format_cents(part.price_cents);
                                    let in_stock = part.in_stock;
                                    let is_favorite =
                                        move || favorites.with(|f| f.contains(&fav_id));
                                    let on_add = move |_| {
                                        cart.update(|c| c.add(&part_id));
                                        show_toast.run(format!("{toast_name} added to cart"));
                                    };
                                    let on_favorite = {
                                        let part_id = part.id.clone();
                                        move |_| {
                                            favorites.update(|f| {
                                                f.toggle(&part_id);
                                            });
                                        }
                                    };
                                    view! {
                                        <li class="catalog-card">
                                            <div class="catalog-card__name">{part.name.clone()}</div>
                                            <div class="catalog-card__brand">{part.brand.clone()}</div>
                                            <div class="catalog-card__price">{price}</div>
                                            <div class="catalog-card__actions">
                                                <button
                                                    class="btn catalog-card__favorite"
                                                    class:catalog-card__favorite--on=is_favorite
                                                    on:click=on_favorite
                                                    title="Toggle favorite"
                                                >
                                                    "★"
                                                </button>
                                                <button
                                                    class="btn btn--primary"
                                                    on:click=on_add
                                                    disabled=!in_stock
                                                >
                                                    {if in_stock { "Add to cart" } else { "Out of stock" }}
                                                </button>
                                            </div>
                                        </li>
                                    }
                                })
                                .collect::<Vec<_>>()
                        })
                    }}
                </ul>
            </Show>
            <Show when=move || toast.with(Option::is_some)>
                <div class="toast">{move || toast.get().unwrap_or_default()}</div>
            </Show>
        </section>
    }
}

/// Loading/error text shown while the parts list is empty.
#[component]
fn CatalogStatus() -> impl IntoView {
    let catalog = expect_context::<RwSignal<CatalogState>>();
    view! {
        <p class="catalog-page__status">
            {move || {
                catalog.with(|state| match &state.error {
                    Some(err) => format!("Could not load the catalog: {err}"),
                    None => "Loading catalog...".to_owned(),
                })
            }}
        </p>
    }
}
