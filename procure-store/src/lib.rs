//! Embedded record-store adapter for the procurement catalog engine
//!
//! Implements `RecordSource`, `ItemWriter` and `ActivitySink` over an
//! embedded SurrealDB (RocksDB engine) instance, plus store bootstrap
//! and logging setup.

pub mod activity;
pub mod logger;
pub mod source;
pub mod store;

pub use activity::ActivityLogger;
pub use logger::init_logger;
pub use store::{ProductSeed, ServiceSeed, StoreConfig, SurrealStore};
