//! # session
//!
//! Client-session core for the Gearline storefront: the auth change bus,
//! the network-activity counter, the auth-prompt state, the route-guard
//! verdict machine, and the key-value persistence port they read through.
//!
//! This crate owns the behavior that must agree across independent UI
//! components (signed-in status, outstanding request count, prompt
//! visibility) without depending on any UI framework or browser API. The `client` crate wires these services into
//! Leptos context and supplies the browser-backed store implementation.

pub mod activity;
pub mod bus;
pub mod guard;
pub mod prompt;
pub mod registry;
pub mod store;

pub use activity::{ActivityCounter, InFlight};
pub use bus::{AuthBus, AuthChangeEvent, AuthStatus, AuthUser};
pub use guard::{PromptRequest, RouteGuard, Verdict};
pub use prompt::PromptState;
pub use registry::Subscription;
pub use store::{KeyValueStore, MemoryStore, NoopStore, TOKEN_STORAGE_KEY};
