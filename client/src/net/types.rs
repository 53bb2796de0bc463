//! Wire-schema DTOs for the storefront API.
//!
//! DESIGN
//! ======
//! These types mirror the JSON the `/api/*` proxy returns, so serde does
//! all the mapping and call sites stay schema-driven. Auth identity types
//! live in the `session` crate; this module only adds the shop-side
//! payloads.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

use session::AuthUser;

/// A catalog part as returned by `/api/catalog/parts`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Part {
    /// Unique part identifier.
    pub id: String,
    /// Display name, e.g. `"Front brake pad set"`.
    pub name: String,
    /// Manufacturer brand.
    pub brand: String,
    /// Unit price in cents.
    pub price_cents: u32,
    /// Whether the part can currently be ordered.
    pub in_stock: bool,
}

/// One past order as returned by `/api/orders`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderSummary {
    /// Unique order identifier.
    pub id: String,
    /// ISO 8601 date string of when the order was placed.
    pub placed_at: String,
    /// Fulfilment status, e.g. `"delivered"`, `"shipped"`.
    pub status: String,
    /// Number of items across all order lines.
    pub item_count: u32,
    /// Order total in cents.
    pub total_cents: u32,
}

/// A saved vehicle as returned by `/api/garage/vehicles`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vehicle {
    /// Unique vehicle identifier.
    pub id: String,
    /// Human-readable label, e.g. `"2019 Honda Civic"`.
    pub label: String,
    /// Vehicle identification number, if the user entered one.
    pub vin: Option<String>,
}

/// Successful response body of `POST /api/auth/login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResponse {
    /// Opaque bearer token to persist for later sessions.
    pub token: String,
    /// The signed-in user's display identity.
    pub user: AuthUser,
}
