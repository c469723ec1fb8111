//! Unified Error Handling
//!
//! Error taxonomy for the catalog engine and its store-facing traits.

use thiserror::Error;

/// Catalog engine error types
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Malformed source record rejected at the normalization boundary
    #[error("Validation error: {0}")]
    Validation(String),

    /// Bad caller-supplied argument (e.g. page/limit out of range)
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Entry does not exist (or belongs to another organization)
    #[error("Not found: {0}")]
    NotFound(String),

    /// Backing record store failure
    #[error("Store error: {0}")]
    Store(String),

    /// Activity sink failure; always swallowed by the caller
    #[error("Activity log error: {0}")]
    Activity(String),
}

/// Result type for catalog operations
pub type CatalogResult<T> = Result<T, CatalogError>;
