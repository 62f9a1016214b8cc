//! Shared application state for all routes.

use crate::service::ProductService;
use crate::store::CategoryStore;

#[derive(Clone)]
pub struct AppState {
    /// In-memory categories; clones share one collection.
    pub categories: CategoryStore,
    pub products: ProductService,
}

impl AppState {
    pub fn new(categories: CategoryStore, products: ProductService) -> Self {
        AppState { categories, products }
    }
}
