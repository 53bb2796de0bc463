//! Garage page: the vehicles a signed-in user has saved.
//!
//! Mounted at `/profile-gar`, the account-section route the header and
//! profile page link to.

use leptos::prelude::*;

use session::{ActivityCounter, KeyValueStore, TOKEN_STORAGE_KEY, Verdict};

use crate::net::api;
use crate::net::types::Vehicle;
use crate::util::guard::use_route_guard;
use crate::util::storage::StoreHandle;

#[component]
pub fn GaragePage() -> impl IntoView {
    let verdict = use_route_guard(true);
    let store = expect_context::<StoreHandle>();
    let counter = expect_context::<ActivityCounter>();

    let vehicles = LocalResource::new(move || {
        let authorized = verdict.get() == Verdict::Authorized;
        let store = store.clone();
        let counter = counter.clone();
        async move {
            if !authorized {
                return None;
            }
            let token = store.get(TOKEN_STORAGE_KEY).unwrap_or_default();
            Some(api::fetch_vehicles(&counter, &token).await)
        }
    });

    view! {
        <section class="garage-page">
            <h1>"My garage"</h1>
            {move || match verdict.get() {
                Verdict::Pending => {
                    view! { <p class="garage-page__status">"Checking your session..."</p> }
                        .into_any()
                }
                Verdict::Unauthorized => {
                    view! { <p class="garage-page__status">"Sign in to see your garage."</p> }
                        .into_any()
                }
                Verdict::Authorized => view! { <VehicleList vehicles=vehicles/> }.into_any(),
            }}
        </section>
    }
}

/// Resolved vehicle list, or its loading/error states.
#[component]
fn VehicleList(vehicles: LocalResource<Option<Result<Vec<Vehicle>, String>>>) -> impl IntoView {
    view! {
        <Suspense fallback=move || {
            view! { <p class="garage-page__status">"Loading vehicles..."</p> }
        }>
            {move || {
                vehicles
                    .get()
                    .and_then(|loaded| loaded)
                    .map(|result| match result {
                        Ok(list) if list.is_empty() => {
                            view! {
                                <p class="garage-page__empty">
                                    "No vehicles saved yet. Add one to match parts faster."
                                </p>
                            }
                                .into_any()
                        }
                        Ok(list) => {
                            view! {
                                <ul class="garage-page__list">
                                    {list
                                        .into_iter()
                                        .map(|vehicle| {
                                            view! {
                                                <li class="vehicle-row">
                                                    <span class="vehicle-row__label">{vehicle.label}</span>
                                                    {vehicle
                                                        .vin
                                                        .map(|vin| {
                                                            view! { <span class="vehicle-row__vin">{vin}</span> }
                                                        })}
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
                                <p class="garage-page__status">
                                    {format!("Could not load vehicles: {err}")}
                                </p>
                            }
                                .into_any()
                        }
                    })
            }}
        </Suspense>
    }
}
