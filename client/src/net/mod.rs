//! Networking modules for the storefront REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` holds the HTTP helpers (every call tracked by the activity
//! counter) and `types` defines the wire schema they share.

pub mod api;
pub mod types;
