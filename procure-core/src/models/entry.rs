//! Catalog Entry Model
//!
//! The normalized, tagged-union representation of one procurement record.
//! Products and services live in different source tables with different
//! price-bearing fields; after normalization every downstream component
//! works on `CatalogEntry` and matches on the variant instead of probing
//! for field presence.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Discriminant of the two source record kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryKind {
    Product,
    Service,
}

impl EntryKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntryKind::Product => "product",
            EntryKind::Service => "service",
        }
    }
}

/// Lifecycle status of an entry
///
/// Products use {active, inactive, discontinued}; services use
/// {active, inactive, suspended}. The normalizer enforces the per-kind set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryStatus {
    Active,
    Inactive,
    Discontinued,
    Suspended,
}

impl EntryStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntryStatus::Active => "active",
            EntryStatus::Inactive => "inactive",
            EntryStatus::Discontinued => "discontinued",
            EntryStatus::Suspended => "suspended",
        }
    }

    /// Whether this status is allowed for entries of the given kind
    pub fn allowed_for(&self, kind: EntryKind) -> bool {
        match self {
            EntryStatus::Active | EntryStatus::Inactive => true,
            EntryStatus::Discontinued => kind == EntryKind::Product,
            EntryStatus::Suspended => kind == EntryKind::Service,
        }
    }
}

/// Billing unit for service rates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RateUnit {
    Hour,
    Day,
    Week,
    Month,
    Project,
    Fixed,
}

impl RateUnit {
    pub fn as_str(&self) -> &'static str {
        match self {
            RateUnit::Hour => "hour",
            RateUnit::Day => "day",
            RateUnit::Week => "week",
            RateUnit::Month => "month",
            RateUnit::Project => "project",
            RateUnit::Fixed => "fixed",
        }
    }
}

/// Kind-specific payload; exactly one price-bearing field per entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EntryVariant {
    Product { price: f64, sku: Option<String> },
    Service { rate: f64, unit: RateUnit },
}

/// Normalized catalog entry
///
/// A read-time projection: built when source rows are fetched, discarded
/// at the end of the query cycle, never persisted itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub id: String,
    pub organization_id: String,
    pub name: String,
    pub description: Option<String>,
    pub category: Option<String>,
    pub supplier: Option<String>,
    pub status: EntryStatus,
    #[serde(default)]
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(flatten)]
    pub variant: EntryVariant,
}

impl CatalogEntry {
    pub fn kind(&self) -> EntryKind {
        match self.variant {
            EntryVariant::Product { .. } => EntryKind::Product,
            EntryVariant::Service { .. } => EntryKind::Service,
        }
    }

    /// Resolved price regardless of variant (`price` for products,
    /// `rate` for services)
    pub fn unit_price(&self) -> f64 {
        match self.variant {
            EntryVariant::Product { price, .. } => price,
            EntryVariant::Service { rate, .. } => rate,
        }
    }
}

/// Raw source row as fetched from one of the underlying tables
///
/// Everything is optional by design: identity and price invariants are
/// enforced by the normalizer, not by deserialization, so a malformed row
/// surfaces as a `Validation` error instead of a decode failure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RawRecord {
    pub id: Option<String>,
    pub organization_id: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub supplier: Option<String>,
    pub status: Option<EntryStatus>,
    pub tags: Vec<String>,
    /// Product price field
    pub price: Option<f64>,
    pub sku: Option<String>,
    /// Service rate field
    pub rate: Option<f64>,
    pub unit: Option<RateUnit>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}
