//! Catalog state shared by the catalog, cart, and favorites pages.
//!
//! The parts list is fetched once and kept in context; pages that only
//! join against it (cart, favorites) trigger the same load path, so
//! whichever page the user lands on first pays for the fetch.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use leptos::prelude::*;

use session::ActivityCounter;

use crate::net::types::Part;

/// Parts inventory plus load progress.
#[derive(Clone, Debug, Default)]
pub struct CatalogState {
    pub parts: Vec<Part>,
    pub loading: bool,
    pub error: Option<String>,
}

impl CatalogState {
    /// Look up one part by id.
    pub fn part(&self, part_id: &str) -> Option<&Part> {
        self.parts.iter().find(|part| part.id == part_id)
    }
}

/// True when the catalog has not been fetched yet and no fetch is running.
pub(crate) fn needs_fetch(state: &CatalogState) -> bool {
    !state.loading && state.parts.is_empty() && state.error.is_none()
}

/// Fetch the parts list once. Safe to call from every interested page;
/// only the first call on an unloaded catalog starts a request.
pub fn ensure_parts_loaded(catalog: RwSignal<CatalogState>, counter: &ActivityCounter) {
    if !catalog.with_untracked(needs_fetch) {
        return;
    }
    catalog.update(|state| state.loading = true);

    #[cfg(feature = "hydrate")]
    {
        let counter = counter.clone();
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_parts(&counter).await {
                Ok(parts) => catalog.update(|state| {
                    state.parts = parts;
                    state.loading = false;
                }),
                Err(err) => {
                    leptos::logging::warn!("catalog fetch failed: {err}");
                    catalog.update(|state| {
                        state.error = Some(err);
                        state.loading = false;
                    });
                }
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = counter;
    }
}
