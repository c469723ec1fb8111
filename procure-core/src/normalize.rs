//! Record Normalizer
//!
//! Converts source-specific rows into the common `CatalogEntry` shape,
//! attaching the variant tag and reconciling the price/rate field alias.
//! Identity fields are never fabricated: a row without `organization_id`,
//! `id` or `name` is rejected so cross-tenant leakage stays structurally
//! impossible downstream.

use chrono::{DateTime, Utc};

use crate::error::{CatalogError, CatalogResult};
use crate::models::entry::{CatalogEntry, EntryKind, EntryStatus, EntryVariant, RateUnit, RawRecord};

pub struct RecordNormalizer;

impl RecordNormalizer {
    /// Normalize a single raw row into a `CatalogEntry`
    pub fn normalize(raw: RawRecord, kind: EntryKind) -> CatalogResult<CatalogEntry> {
        let id = Self::require(raw.id, "id")?;
        let organization_id = Self::require(raw.organization_id, "organization_id")?;
        let name = Self::require(raw.name, "name")?;

        let status = raw.status.unwrap_or(EntryStatus::Active);
        if !status.allowed_for(kind) {
            return Err(CatalogError::Validation(format!(
                "status '{}' is not allowed for {} '{}'",
                status.as_str(),
                kind.as_str(),
                id
            )));
        }

        let variant = match kind {
            EntryKind::Product => {
                let price = raw.price.ok_or_else(|| {
                    CatalogError::Validation(format!("product '{id}' is missing price"))
                })?;
                EntryVariant::Product { price, sku: raw.sku }
            }
            EntryKind::Service => {
                let rate = raw.rate.ok_or_else(|| {
                    CatalogError::Validation(format!("service '{id}' is missing rate"))
                })?;
                EntryVariant::Service {
                    rate,
                    unit: raw.unit.unwrap_or(RateUnit::Fixed),
                }
            }
        };

        Ok(CatalogEntry {
            id,
            organization_id,
            name,
            description: raw.description,
            category: raw.category,
            supplier: raw.supplier,
            status,
            tags: raw.tags,
            created_at: raw.created_at.unwrap_or(DateTime::<Utc>::UNIX_EPOCH),
            updated_at: raw.updated_at.unwrap_or(DateTime::<Utc>::UNIX_EPOCH),
            variant,
        })
    }

    /// Normalize a batch, skipping malformed rows
    ///
    /// One bad row must never poison a fetch: failures are logged and the
    /// remaining rows continue.
    pub fn normalize_all(rows: Vec<RawRecord>, kind: EntryKind) -> Vec<CatalogEntry> {
        rows.into_iter()
            .filter_map(|raw| match Self::normalize(raw, kind) {
                Ok(entry) => Some(entry),
                Err(e) => {
                    tracing::warn!(kind = kind.as_str(), error = %e, "Skipping malformed source row");
                    None
                }
            })
            .collect()
    }

    fn require(value: Option<String>, field: &str) -> CatalogResult<String> {
        match value {
            Some(v) if !v.is_empty() => Ok(v),
            _ => Err(CatalogError::Validation(format!(
                "source row is missing required field '{field}'"
            ))),
        }
    }
}
