//! Saved-parts list, persisted to localStorage as JSON.

#[cfg(test)]
#[path = "favorites_test.rs"]
mod favorites_test;

use serde::{Deserialize, Serialize};

/// Storage key holding the serialized favorites list.
pub const FAVORITES_STORAGE_KEY: &str = "gearline_favorites";

/// Part ids the user has favorited, in the order they were added.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FavoritesState {
    pub part_ids: Vec<String>,
}

impl FavoritesState {
    /// Flip the favorite flag for `part_id`; returns the new state.
    pub fn toggle(&mut self, part_id: &str) -> bool {
        if self.contains(part_id) {
            self.part_ids.retain(|id| id != part_id);
            false
        } else {
            self.part_ids.push(part_id.to_owned());
            true
        }
    }

    pub fn contains(&self, part_id: &str) -> bool {
        self.part_ids.iter().any(|id| id == part_id)
    }

    pub fn count(&self) -> usize {
        self.part_ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.part_ids.is_empty()
    }
}
