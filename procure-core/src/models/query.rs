//! Query DTOs
//!
//! Filter, sort and pagination specifications exposed to callers.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::entry::{CatalogEntry, EntryKind, EntryStatus};

/// Inclusive price bounds; either side may be open
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PriceRange {
    pub min: Option<f64>,
    pub max: Option<f64>,
}

/// Inclusive creation-date bounds; either side may be open
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DateRange {
    pub start: Option<DateTime<Utc>>,
    pub end: Option<DateTime<Utc>>,
}

/// Structured filter specification
///
/// All specified keys are ANDed together; unspecified keys impose no
/// constraint. `kind: None` means both record kinds.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterSpec {
    /// Case-insensitive substring match over name/description/category/supplier
    pub search: Option<String>,
    pub status: Option<EntryStatus>,
    pub category: Option<String>,
    pub supplier: Option<String>,
    pub price_range: Option<PriceRange>,
    pub date_range: Option<DateRange>,
    /// Overlap semantics: match if any listed tag is present on the entry
    pub tags: Option<Vec<String>>,
    pub kind: Option<EntryKind>,
}

impl FilterSpec {
    /// An empty spec is the identity filter
    pub fn is_empty(&self) -> bool {
        self.search.is_none()
            && self.status.is_none()
            && self.category.is_none()
            && self.supplier.is_none()
            && self.price_range.is_none()
            && self.date_range.is_none()
            && self.tags.is_none()
            && self.kind.is_none()
    }
}

/// Sortable entry fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortField {
    Name,
    Category,
    Supplier,
    Status,
    UnitPrice,
    CreatedAt,
    UpdatedAt,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    Asc,
    Desc,
}

/// Sort specification; defaults to newest-first
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SortSpec {
    pub field: SortField,
    pub direction: SortDirection,
}

impl Default for SortSpec {
    fn default() -> Self {
        Self {
            field: SortField::CreatedAt,
            direction: SortDirection::Desc,
        }
    }
}

/// One page of results
///
/// `total` is the count after filtering but before pagination.
#[derive(Debug, Clone, Serialize)]
pub struct PageResult {
    pub items: Vec<CatalogEntry>,
    pub total: usize,
    pub has_more: bool,
}

/// Caller-facing query parameters
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryParams {
    pub filters: Option<FilterSpec>,
    pub sort: Option<SortSpec>,
    /// 1-indexed page number; defaults to 1
    pub page: Option<usize>,
    /// Page size; defaults to 50
    pub limit: Option<usize>,
}
