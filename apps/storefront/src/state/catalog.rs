//! # Catalog State
//!
//! Read-only after initialization, so no mutex needed; clones share one
//! `Arc<Catalog>`.

use std::sync::Arc;

use storefront_core::Catalog;

#[derive(Debug, Clone)]
pub struct CatalogState {
    catalog: Arc<Catalog>,
}

impl CatalogState {
    pub fn new(catalog: Catalog) -> Self {
        CatalogState {
            catalog: Arc::new(catalog),
        }
    }

    pub fn inner(&self) -> &Catalog {
        &self.catalog
    }
}

impl Default for CatalogState {
    /// The demo catalog.
    fn default() -> Self {
        Self::new(Catalog::mock())
    }
}
