//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`auth`, `cart`, `catalog`, etc.) so individual
//! components can depend on small focused models. Each model is a plain
//! struct held in an `RwSignal` provided from the app root; the session
//! services (`AuthBus`, `ActivityCounter`) are provided alongside them.

pub mod auth;
pub mod cart;
pub mod catalog;
pub mod favorites;
pub mod navigation;
pub mod prompt;
