//! Sort Engine
//!
//! Stable ordering by a named field and direction. Missing values rank
//! last in both directions; among present values `desc` is the exact
//! mirror of `asc`. Stability matters: pagination depends on repeated
//! calls with the same inputs producing the same order.

use std::cmp::Ordering;

use crate::models::entry::CatalogEntry;
use crate::models::query::{SortDirection, SortField, SortSpec};

pub struct SortEngine;

impl SortEngine {
    pub fn apply(mut entries: Vec<CatalogEntry>, spec: SortSpec) -> Vec<CatalogEntry> {
        // Vec::sort_by is stable, so equal keys keep their relative order
        entries.sort_by(|a, b| Self::compare(a, b, spec));
        entries
    }

    fn compare(a: &CatalogEntry, b: &CatalogEntry, spec: SortSpec) -> Ordering {
        match spec.field {
            SortField::Name => Self::cmp_str(Some(&a.name), Some(&b.name), spec.direction),
            SortField::Category => {
                Self::cmp_str(a.category.as_deref(), b.category.as_deref(), spec.direction)
            }
            SortField::Supplier => {
                Self::cmp_str(a.supplier.as_deref(), b.supplier.as_deref(), spec.direction)
            }
            SortField::Status => {
                Self::cmp_str(Some(a.status.as_str()), Some(b.status.as_str()), spec.direction)
            }
            SortField::UnitPrice => {
                Self::directed(a.unit_price().total_cmp(&b.unit_price()), spec.direction)
            }
            SortField::CreatedAt => Self::directed(a.created_at.cmp(&b.created_at), spec.direction),
            SortField::UpdatedAt => Self::directed(a.updated_at.cmp(&b.updated_at), spec.direction),
        }
    }

    /// Case-insensitive string ordering; `None` sorts after `Some`
    /// regardless of direction
    fn cmp_str(a: Option<&str>, b: Option<&str>, direction: SortDirection) -> Ordering {
        match (a, b) {
            (None, None) => Ordering::Equal,
            (None, Some(_)) => Ordering::Greater,
            (Some(_), None) => Ordering::Less,
            (Some(x), Some(y)) => {
                Self::directed(x.to_lowercase().cmp(&y.to_lowercase()), direction)
            }
        }
    }

    fn directed(ordering: Ordering, direction: SortDirection) -> Ordering {
        match direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    }
}
