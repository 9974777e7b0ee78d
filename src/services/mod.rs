//! Business logic services

pub mod catalog;

use crate::repository::DynBookStore;

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub catalog: catalog::CatalogService,
}

impl Services {
    /// Create all services over the given store
    pub fn new(store: DynBookStore) -> Self {
        Self {
            catalog: catalog::CatalogService::new(store),
        }
    }
}
