//! API server state

use crate::catalog::Catalog;

/// API server state
#[derive(Clone, Debug)]
pub struct AppState {
    /// Opportunities served by the listing endpoint
    pub catalog: Catalog,
}

impl AppState {
    pub fn new(catalog: Catalog) -> Self {
        Self { catalog }
    }
}
