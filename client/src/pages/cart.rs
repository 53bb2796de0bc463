//! Cart page: lines joined against the catalog for names and prices.

use leptos::prelude::*;

use session::ActivityCounter;

use crate::state::cart::{CartLine, CartState};
use crate::state::catalog::{self, CatalogState};
use crate::util::money::format_cents;

#[component]
pub fn CartPage() -> impl IntoView {
    let cart = expect_context::<RwSignal<CartState>>();
    let catalog = expect_context::<RwSignal<CatalogState>>();
    let counter = expect_context::<ActivityCounter>();

    // The join needs part data even when the user lands here first.
    Effect::new(move || catalog::ensure_parts_loaded(catalog, &counter));

    let total = move || {
        let parts = catalog.with(|state| state.parts.clone());
        cart.with(|state| state.total_cents(&parts))
    };

    view! {
        <section class="cart-page">
            <h1>"Cart"</h1>
            <Show
                when=move || cart.with(|state| !state.is_empty())
                fallback=|| view! { <p class="cart-page__empty">"Your cart is empty."</p> }
            >
                <ul class="cart-page__lines">
                    {move || {
                        cart.with(|state| {
                            state
                                .lines
                                .iter()
                                .cloned()
                                .map(|line| view! { <CartLineRow line=line/> })
                                .collect::<Vec<_>>()
                        })
                    }}
                </ul>
                <footer class="cart-page__footer">
                    <span class="cart-page__total">
                        {move || format!("Total: {}", format_cents(total()))}
                    </span>
                    <button
                        class="btn btn--danger"
                        on:click=move |_| cart.update(CartState::clear)
                    >
                        "Clear cart"
                    </button>
                </footer>
            </Show>
        </section>
    }
}

/// One cart line with quantity controls.
#[component]
fn CartLineRow(line: CartLine) -> impl IntoView {
    let cart = expect_context::<RwSignal<CartState>>();
    let catalog = expect_context::<RwSignal<CatalogState>>();

    let name = {
        let part_id = line.part_id.clone();
        move || {
            catalog.with(|state| {
                state
                    .part(&part_id)
                    .map_or_else(|| part_id.clone(), |part| part.name.clone())
            })
        }
    };
    let price = {
        let part_id = line.part_id.clone();
        move || {
            catalog
                .with(|state| state.part(&part_id).map(|part| format_cents(part.price_cents)))
        }
    };
    let qty = {
        let part_id = line.part_id.clone();
        move || cart.with(|state| state.qty(&part_id))
    };
    let on_more = {
        let part_id = line.part_id.clone();
        move |_| {
            cart.update(|state| {
                let current = state.qty(&part_id);
                state.set_qty(&part_id, current.saturating_add(1));
            });
        }
    };
    // Decrementing to zero removes the line.
    let on_less = {
        let part_id = line.part_id.clone();
        move |_| {
            cart.update(|state| {
                let current = state.qty(&part_id);
                state.set_qty(&part_id, current.saturating_sub(1));
            });
        }
    };
    let on_remove = {
        let part_id = line.part_id.clone();
        move |_| cart.update(|state| state.remove(&part_id))
    };

    view! {
        <li class="cart-line">
            <span class="cart-line__name">{name}</span>
            <span class="cart-line__price">{price}</span>
            <span class="cart-line__qty">
                <button class="btn" on:click=on_less title="One fewer">
                    "-"
                </button>
                <span class="cart-line__count">{qty}</span>
                <button class="btn" on:click=on_more title="One more">
                    "+"
                </button>
            </span>
            <button class="btn btn--danger" on:click=on_remove>
                "Remove"
            </button>
        </li>
    }
}
