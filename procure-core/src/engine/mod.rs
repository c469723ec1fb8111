//! Query Engine
//!
//! Pure, stateless computations over an already-fetched collection of
//! normalized entries. Filtering, ordering, pagination and statistics all
//! run in memory after the per-kind fetches have been concatenated; none
//! of these components touch the store or the clock.

pub mod filter;
pub mod paginate;
pub mod sort;
pub mod stats;

pub use filter::FilterEngine;
pub use paginate::Paginator;
pub use sort::SortEngine;
pub use stats::StatsAggregator;
