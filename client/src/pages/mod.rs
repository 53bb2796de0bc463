//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates shared chrome
//! to `components`. Public pages render directly; guarded pages render
//! against their route-guard verdict.

pub mod cart;
pub mod catalog;
pub mod favorites;
pub mod garage;
pub mod home;
pub mod login;
pub mod not_found;
pub mod orders;
pub mod profile;
