//! Saved-parts page.

use leptos::prelude::*;

use session::ActivityCounter;

use crate::state::cart::CartState;
use crate::state::catalog::{self, CatalogState};
use crate::state::favorites::FavoritesState;
use crate::util::money::format_cents;

#[component]
pub fn FavoritesPage() -> impl IntoView {
    let favorites = expect_context::<RwSignal<FavoritesState>>();
    let catalog = expect_context::<RwSignal<CatalogState>>();
    let counter = expect_context::<ActivityCounter>();

    Effect::new(move || catalog::ensure_parts_loaded(catalog, &counter));

    view! {
        <section class="favorites-page">
            <h1>"Favorites"</h1>
            <Show
                when=move || favorites.with(|state| !state.is_empty())
                fallback=|| {
                    view! { <p class="favorites-page__empty">"Nothing saved yet."</p> }
                }
            >
                <ul class="favorites-page__list">
                    {move || {
                        favorites.with(|state| {
                            state
                                .part_ids
                                .iter()
                                .cloned()
                                .map(|part_id| view! { <FavoriteRow part_id=part_id/> })
                                .collect::<Vec<_>>()
                        })
                    }}
                </ul>
            </Show>
        </section>
    }
}

/// One saved part with add-to-cart and unfavorite actions.
#[component]
fn FavoriteRow(part_id: String) -> impl IntoView {
    let cart = expect_context::<RwSignal<CartState>>();
    let catalog = expect_context::<RwSignal<CatalogState>>();
    let favorites = expect_context::<RwSignal<FavoritesState>>();

    let name = {
        let part_id = part_id.clone();
        move || {
            catalog.with(|state| {
                state
                    .part(&part_id)
                    .map_or_else(|| part_id.clone(), |part| part.name.clone())
            })
        }
    };
    let price = {
        let part_id = part_id.clone();
        move || {
            catalog
                .with(|state| state.part(&part_id).map(|part| format_cents(part.price_cents)))
        }
    };
    let on_add = {
        let part_id = part_id.clone();
        move |_| cart.update(|state| state.add(&part_id))
    };
    let on_unfavorite = move |_| {
        favorites.update(|state| {
            state.toggle(&part_id);
        });
    };

    view! {
        <li class="favorite-row">
            <span class="favorite-row__name">{name}</span>
            <span class="favorite-row__price">{price}</span>
            <button class="btn btn--primary" on:click=on_add>
                "Add to cart"
            </button>
            <button class="btn" on:click=on_unfavorite title="Remove from favorites">
                "★"
            </button>
        </li>
    }
}
