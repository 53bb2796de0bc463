//! Order history page.

use leptos::prelude::*;

use session::{ActivityCounter, KeyValueStore, TOKEN_STORAGE_KEY, Verdict};

use crate::net::api;
use crate::net::types::OrderSummary;
use crate::util::guard::use_route_guard;
use crate::util::money::format_cents;
use crate::util::storage::StoreHandle;

#[component]
pub fn OrdersPage() -> impl IntoView {
    let verdict = use_route_guard(true);
    let store = expect_context::<StoreHandle>();
    let counter = expect_context::<ActivityCounter>();

    // Refetches when the verdict changes; only an authorized visitor
    // actually hits the API.
    let orders = LocalResource::new(move || {
        let authorized = verdict.get() == Verdict::Authorized;
        let store = store.clone();
        let counter = counter.clone();
        async move {
            if !authorized {
                return None;
            }
            let token = store.get(TOKEN_STORAGE_KEY).unwrap_or_default();
            Some(api::fetch_orders(&counter, &token).await)
        }
    });

    view! {
        <section class="orders-page">
            <h1>"Your orders"</h1>
            {move || match verdict.get() {
                Verdict::Pending => {
                    view! { <p class="orders-page__status">"Checking your session..."</p> }
                        .into_any()
                }
                Verdict::Unauthorized => {
                    view! { <p class="orders-page__status">"Sign in to see your orders."</p> }
                        .into_any()
                }
                Verdict::Authorized => view! { <OrderList orders=orders/> }.into_any(),
            }}
        </section>
    }
}

/// Resolved order list, or its loading/error states.
#[component]
fn OrderList(orders: LocalResource<Option<Result<Vec<OrderSummary>, String>>>) -> impl IntoView {
    view! {
        <Suspense fallback=move || view! { <p class="orders-page__status">"Loading orders..."</p> }>
            {move || {
                orders
                    .get()
                    .and_then(|loaded| loaded)
                    .map(|result| match result {
                        Ok(list) if list.is_empty() => {
                            view! { <p class="orders-page__empty">"No orders yet."</p> }
                                .into_any()
                        }
                        Ok(list) => {
                            view! {
                                <ul class="orders-page__list">
                                    {list
                                        .into_iter()
                                        .map(|order| {
                                            let total = format_cents(order.total_cents);
                                            view! {
                                                <li class="order-row">
                                                    <span class="order-row__id">{order.id}</span>
                                                    <span class="order-row__date">{order.placed_at}</span>
                                                    <span class="order-row__status">{order.status}</span>
                                                    <span class="order-row__items">
                                                        {format!("{} items", order.item_count)}
                                                    </span>
                                                    <span class="order-row__total">{total}</span>
                                                </li>
                                            }
                                        })
                                        .collect::<Vec<_>>()}
                                </ul>
                            }
                                .into_any()
                        }
                        Err(err) => {
                            view! {
                                <p class="orders-page__status">
                                    {format!("Could not load orders: {err}")}
                                </p>
                            }
                                .into_any()
                        }
                    })
            }}
        </Suspense>
    }
}
