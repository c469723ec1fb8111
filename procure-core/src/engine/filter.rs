//! Filter Engine
//!
//! Evaluates a `FilterSpec` against a collection of normalized entries.
//! All specified keys are ANDed; relative order of survivors is preserved.

use crate::models::entry::CatalogEntry;
use crate::models::query::{DateRange, FilterSpec, PriceRange};

pub struct FilterEngine;

impl FilterEngine {
    /// Return the matching subset; an empty spec is the identity
    pub fn apply(entries: Vec<CatalogEntry>, spec: &FilterSpec) -> Vec<CatalogEntry> {
        if spec.is_empty() {
            return entries;
        }
        entries
            .into_iter()
            .filter(|entry| Self::matches(entry, spec))
            .collect()
    }

    /// Whether a single entry satisfies every specified filter key
    pub fn matches(entry: &CatalogEntry, spec: &FilterSpec) -> bool {
        if let Some(kind) = spec.kind
            && entry.kind() != kind
        {
            return false;
        }

        if let Some(status) = spec.status
            && entry.status != status
        {
            return false;
        }

        if let Some(category) = &spec.category
            && entry.category.as_deref() != Some(category.as_str())
        {
            return false;
        }

        if let Some(supplier) = &spec.supplier
            && entry.supplier.as_deref() != Some(supplier.as_str())
        {
            return false;
        }

        if let Some(search) = &spec.search
            && !Self::matches_search(entry, search)
        {
            return false;
        }

        if let Some(range) = &spec.price_range
            && !Self::in_price_range(Some(entry.unit_price()), range)
        {
            return false;
        }

        if let Some(range) = &spec.date_range
            && !Self::in_date_range(Some(entry.created_at), range)
        {
            return false;
        }

        if let Some(tags) = &spec.tags
            && !tags.iter().any(|t| entry.tags.contains(t))
        {
            return false;
        }

        true
    }

    /// Case-insensitive substring match over the text fields;
    /// an empty search term matches everything
    fn matches_search(entry: &CatalogEntry, search: &str) -> bool {
        let needle = search.to_lowercase();
        if needle.is_empty() {
            return true;
        }
        let haystacks = [
            Some(entry.name.as_str()),
            entry.description.as_deref(),
            entry.category.as_deref(),
            entry.supplier.as_deref(),
        ];
        haystacks
            .iter()
            .flatten()
            .any(|field| field.to_lowercase().contains(&needle))
    }

    /// Inclusive bounds; a missing value cannot satisfy a specified bound
    fn in_price_range(value: Option<f64>, range: &PriceRange) -> bool {
        let Some(v) = value else {
            return range.min.is_none() && range.max.is_none();
        };
        if let Some(min) = range.min
            && v < min
        {
            return false;
        }
        if let Some(max) = range.max
            && v > max
        {
            return false;
        }
        true
    }

    fn in_date_range(value: Option<chrono::DateTime<chrono::Utc>>, range: &DateRange) -> bool {
        let Some(v) = value else {
            return range.start.is_none() && range.end.is_none();
        };
        if let Some(start) = range.start
            && v < start
        {
            return false;
        }
        if let Some(end) = range.end
            && v > end
        {
            return false;
        }
        true
    }
}
