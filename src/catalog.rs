//! Opportunity catalog
//!
//! The listing is fixed at construction time and shared read-only between
//! request handlers.

use std::sync::Arc;

use crate::types::Opportunity;

/// Immutable, ordered set of opportunities.
#[derive(Debug, Clone)]
pub struct Catalog {
    opportunities: Arc<[Opportunity]>,
}

impl Catalog {
    pub fn new(opportunities: Vec<Opportunity>) -> Self {
        Self {
            opportunities: opportunities.into(),
        }
    }

    /// The mock listing served until real ingestion exists.
    pub fn mock() -> Self {
        Self::new(vec![
            Opportunity::new(
                1,
                "Software Engineer",
                "Tech Corp",
                "San Francisco, CA",
                "Build innovative solutions",
                85,
            ),
            Opportunity::new(
                2,
                "Product Manager",
                "Startup Inc",
                "Remote",
                "Lead product development",
                92,
            ),
        ])
    }

    pub fn opportunities(&self) -> &[Opportunity] {
        &self.opportunities
    }

    pub fn len(&self) -> usize {
        self.opportunities.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mock_catalog_has_two_entries_in_order() {
        let catalog = Catalog::mock();
        let ids: Vec<_> = catalog.opportunities().iter().map(|o| o.id).collect();

        assert_eq!(ids, vec![1, 2]);
        assert_eq!(catalog.opportunities()[0].match_score, 85);
        assert_eq!(catalog.opportunities()[1].location, "Remote");
    }

    #[test]
    fn clones_share_storage() {
        let catalog = Catalog::mock();
        let cloned = catalog.clone();

        assert!(std::ptr::eq(
            catalog.opportunities().as_ptr(),
            cloned.opportunities().as_ptr()
        ));
    }

    #[test]
    fn empty_catalog() {
        let catalog = Catalog::new(Vec::new());
        assert_eq!(catalog.len(), 0);
        assert!(catalog.opportunities().is_empty());
    }
}
