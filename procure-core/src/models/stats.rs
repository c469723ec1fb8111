//! Dashboard Statistics Model

use serde::Serialize;

/// Summary statistics over a (pre-filtered) entry collection
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CatalogStats {
    pub total: usize,

    // Per-status counts
    pub active: usize,
    pub inactive: usize,
    pub discontinued: usize,
    pub suspended: usize,

    // Per-kind counts
    pub products: usize,
    pub services: usize,

    /// Mean resolved unit price; 0 for an empty collection
    pub average_price: f64,
    /// Sum of resolved unit prices
    pub total_value: f64,
    /// Entries created within the trailing 7 days of the injected `now`
    pub recently_added: usize,
}
