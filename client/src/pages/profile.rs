//! Profile page, visible to signed-in users only.

use leptos::prelude::*;

use session::Verdict;

use crate::state::auth::AuthState;
use crate::util::guard::use_route_guard;
use crate::util::navigation::use_tracked_navigate;

#[component]
pub fn ProfilePage() -> impl IntoView {
    let verdict = use_route_guard(true);

    view! {
        <section class="profile-page">
            {move || match verdict.get() {
                Verdict::Pending => {
                    view! { <p class="profile-page__status">"Checking your session..."</p> }
                        .into_any()
                }
                Verdict::Unauthorized => {
                    view! { <p class="profile-page__status">"Sign in to see your profile."</p> }
                        .into_any()
                }
                Verdict::Authorized => view! { <ProfileDetails/> }.into_any(),
            }}
        </section>
    }
}

/// Identity card plus links into the account sub-pages.
#[component]
fn ProfileDetails() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_tracked_navigate();

    let name = move || {
        auth.with(|state| {
            state
                .user
                .as_ref()
                .map_or_else(|| "there".to_owned(), |user| user.name.clone())
        })
    };
    let email = move || auth.with(|state| state.user.as_ref().and_then(|user| user.email.clone()));

    let on_orders = {
        let navigate = navigate.clone();
        move |ev: leptos::ev::MouseEvent| {
            ev.prevent_default();
            navigate("/orders");
        }
    };
    let on_garage = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        navigate("/profile-gar");
    };

    view! {
        <div class="profile-card">
            <h1>{move || format!("Hi, {}", name())}</h1>
            <Show when=move || email().is_some()>
                <p class="profile-card__email">{move || email().unwrap_or_default()}</p>
            </Show>
            <nav class="profile-card__links">
                <a class="btn" href="/orders" on:click=on_orders>
                    "Order history"
                </a>
                <a class="btn" href="/profile-gar" on:click=on_garage>
                    "My garage"
                </a>
            </nav>
        </div>
    }
}
