//! # client
//!
//! Leptos + WASM storefront for Gearline auto parts.
//!
//! This crate contains pages, components, application state, and the
//! `gloo-net` API helpers. The session core (auth event bus, activity
//! counter, route-guard machine, prompt state) lives in the `session`
//! crate; this crate wires those services into Leptos context and supplies
//! the browser-backed storage implementation.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: attach the client app to server-rendered HTML.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
