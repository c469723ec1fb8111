//! Procurement catalog aggregation and bulk-operation engine
//!
//! Unifies two structurally different record kinds (products and
//! services) into one queryable collection, applies composable
//! filter/sort/pagination rules in memory after fetching, executes
//! multi-item bulk actions with independent per-item outcomes, and
//! serializes collections into CSV/JSON export payloads. The record
//! store and activity sink are consumed through traits; this crate has
//! no database dependency.

pub mod audit;
pub mod bulk;
pub mod engine;
pub mod error;
pub mod export;
pub mod models;
pub mod normalize;
pub mod service;

pub use audit::{log_best_effort, ActivityAction, ActivityEntry, ActivitySink};
pub use bulk::{BulkOperationExecutor, ItemWriter};
pub use engine::{FilterEngine, Paginator, SortEngine, StatsAggregator};
pub use error::{CatalogError, CatalogResult};
pub use export::{ExportField, ExportFormat, ExportSerializer};
pub use models::{
    BulkAction, BulkResult, CatalogEntry, CatalogStats, DateRange, EntryKind, EntryStatus,
    EntryVariant, FilterSpec, PageResult, PriceRange, QueryParams, RateUnit, RawRecord,
    SortDirection, SortField, SortSpec,
};
pub use normalize::RecordNormalizer;
pub use service::{CatalogService, ExportPayload, RecordSource, DEFAULT_PAGE_SIZE};
