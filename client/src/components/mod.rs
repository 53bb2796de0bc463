//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render storefront chrome and interaction surfaces while
//! reading/writing shared state from Leptos context providers.

pub mod auth_prompt;
pub mod preloader;
pub mod site_header;
