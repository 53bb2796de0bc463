//! REST helpers for the storefront `/api/*` proxy.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, each held in
//! the activity counter for its full duration so the global preloader
//! sees it. Server-side (SSR): stubs returning `None`/`Err`, since the
//! proxy is only reachable from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Option`/`Result` outputs instead of panics so a failed
//! fetch degrades the page without crashing hydration.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use session::{ActivityCounter, AuthUser};

use super::types::{LoginResponse, OrderSummary, Part, Vehicle};

#[cfg(any(test, feature = "hydrate"))]
fn bearer_header(token: &str) -> String {
    format!("Bearer {token}")
}

#[cfg(any(test, feature = "hydrate"))]
fn catalog_failed_message(status: u16) -> String {
    format!("catalog request failed: {status}")
}

#[cfg(any(test, feature = "hydrate"))]
fn orders_failed_message(status: u16) -> String {
    format!("orders request failed: {status}")
}

#[cfg(any(test, feature = "hydrate"))]
fn vehicles_failed_message(status: u16) -> String {
    format!("vehicles request failed: {status}")
}

#[cfg(any(test, feature = "hydrate"))]
fn login_failed_message(status: u16) -> String {
    if status == 401 {
        "invalid email or password".to_owned()
    } else {
        format!("login failed: {status}")
    }
}

/// Fetch the full parts catalog from `/api/catalog/parts`.
///
/// # Errors
///
/// Returns an error string if the HTTP request fails or the server
/// responds with a non-OK status.
pub async fn fetch_parts(counter: &ActivityCounter) -> Result<Vec<Part>, String> {
    #[cfg(feature = "hydrate")]
    {
        let _in_flight = counter.begin();
        let started_ms = js_sys::Date::now();
        let resp = gloo_net::http::Request::get("/api/catalog/parts")
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(catalog_failed_message(resp.status()));
        }
        let parts: Vec<Part> = resp.json().await.map_err(|e| e.to_string())?;
        let elapsed_ms = (js_sys::Date::now() - started_ms).max(0.0);
        leptos::logging::log!("catalog: {} parts in {elapsed_ms:.0}ms", parts.len());
        Ok(parts)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = counter;
        Err("not available on server".to_owned())
    }
}

/// Fetch the signed-in user's identity from `/api/auth/me`.
/// Returns `None` if the token is rejected or on the server.
pub async fn fetch_current_user(counter: &ActivityCounter, token: &str) -> Option<AuthUser> {
    #[cfg(feature = "hydrate")]
    {
        let _in_flight = counter.begin();
        let resp = gloo_net::http::Request::get("/api/auth/me")
            .header("authorization", &bearer_header(token))
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<AuthUser>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (counter, token);
        None
    }
}

/// Exchange credentials for a token via `POST /api/auth/login`.
///
/// # Errors
///
/// Returns a display-ready error string if the HTTP request fails or the
/// credentials are rejected.
pub async fn login(
    counter: &ActivityCounter,
    email: &str,
    password: &str,
) -> Result<LoginResponse, String> {
    #[cfg(feature = "hydrate")]
    {
        let _in_flight = counter.begin();
        let payload = serde_json::json!({ "email": email, "password": password });
        let resp = gloo_net::http::Request::post("/api/auth/login")
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(login_failed_message(resp.status()));
        }
        resp.json::<LoginResponse>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (counter, email, password);
        Err("not available on server".to_owned())
    }
}

/// Invalidate the server-side session via `POST /api/auth/logout`.
///
/// Local state is cleared by the caller regardless of the outcome, so
/// failures are ignored.
pub async fn logout(counter: &ActivityCounter, token: &str) {
    #[cfg(feature = "hydrate")]
    {
        let _in_flight = counter.begin();
        let _ = gloo_net::http::Request::post("/api/auth/logout")
            .header("authorization", &bearer_header(token))
            .send()
            .await;
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (counter, token);
    }
}

/// Fetch the signed-in user's order history from `/api/orders`.
///
/// # Errors
///
/// Returns an error string if the HTTP request fails or the server
/// responds with a non-OK status.
pub async fn fetch_orders(
    counter: &ActivityCounter,
    token: &str,
) -> Result<Vec<OrderSummary>, String> {
    #[cfg(feature = "hydrate")]
    {
        let _in_flight = counter.begin();
        let resp = gloo_net::http::Request::get("/api/orders")
            .header("authorization", &bearer_header(token))
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(orders_failed_message(resp.status()));
        }
        resp.json().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (counter, token);
        Err("not available on server".to_owned())
    }
}

/// Fetch the signed-in user's saved vehicles from `/api/garage/vehicles`.
///
/// # Errors
///
/// Returns an error string if the HTTP request fails or the server
/// responds with a non-OK status.
pub async fn fetch_vehicles(
    counter: &ActivityCounter,
    token: &str,
) -> Result<Vec<Vehicle>, String> {
    #[cfg(feature = "hydrate")]
    {
        let _in_flight = counter.begin();
        let resp = gloo_net::http::Request::get("/api/garage/vehicles")
            .header("authorization", &bearer_header(token))
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(vehicles_failed_message(resp.status()));
        }
        resp.json().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (counter, token);
        Err("not available on server".to_owned())
    }
}
