//! Shopping cart state, persisted to localStorage as JSON.
//!
//! Lines keep insertion order so the cart page renders stably across
//! add/remove churn. Quantities are `u32`; setting a quantity to zero
//! removes the line rather than rendering a zero row.

#[cfg(test)]
#[path = "cart_test.rs"]
mod cart_test;

use serde::{Deserialize, Serialize};

use crate::net::types::Part;

/// Storage key holding the serialized cart.
pub const CART_STORAGE_KEY: &str = "gearline_cart";

/// One part in the cart with its quantity.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    pub part_id: String,
    pub qty: u32,
}

/// Shared cart state.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartState {
    pub lines: Vec<CartLine>,
}

impl CartState {
    /// Add one of `part_id`, merging into an existing line.
    pub fn add(&mut self, part_id: &str) {
        if let Some(line) = self.lines.iter_mut().find(|line| line.part_id == part_id) {
            line.qty = line.qty.saturating_add(1);
            return;
        }
        self.lines.push(CartLine {
            part_id: part_id.to_owned(),
            qty: 1,
        });
    }

    /// Set the quantity for `part_id`; zero removes the line. Unknown ids
    /// are ignored.
    pub fn set_qty(&mut self, part_id: &str, qty: u32) {
        if qty == 0 {
            self.remove(part_id);
            return;
        }
        if let Some(line) = self.lines.iter_mut().find(|line| line.part_id == part_id) {
            line.qty = qty;
        }
    }

    pub fn remove(&mut self, part_id: &str) {
        self.lines.retain(|line| line.part_id != part_id);
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Quantity of `part_id` in the cart, zero when absent.
    pub fn qty(&self, part_id: &str) -> u32 {
        self.lines
            .iter()
            .find(|line| line.part_id == part_id)
            .map_or(0, |line| line.qty)
    }

    /// Total number of items across all lines.
    pub fn total_items(&self) -> u32 {
        self.lines.iter().map(|line| line.qty).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Cart total in cents against the given catalog. Lines whose part is
    /// not in the catalog contribute nothing.
    pub fn total_cents(&self, parts: &[Part]) -> u32 {
        self.lines
            .iter()
            .filter_map(|line| {
                parts
                    .iter()
                    .find(|part| part.id == line.part_id)
                    .map(|part| part.price_cents.saturating_mul(line.qty))
            })
            .sum()
    }
}
