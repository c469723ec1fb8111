//! Domain Models
//!
//! Normalized catalog entry shapes plus the query/bulk/stats DTOs
//! exchanged with callers.

pub mod bulk;
pub mod entry;
pub mod query;
pub mod stats;

pub use bulk::{BulkAction, BulkResult};
pub use entry::{CatalogEntry, EntryKind, EntryStatus, EntryVariant, RateUnit, RawRecord};
pub use query::{DateRange, FilterSpec, PageResult, PriceRange, QueryParams, SortDirection, SortField, SortSpec};
pub use stats::CatalogStats;
