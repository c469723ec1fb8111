//! Paginator
//!
//! Slices an ordered collection into a 1-indexed page. Pages past the end
//! are a valid empty result (scrolled-past-the-end semantics), not an error.

use crate::error::{CatalogError, CatalogResult};
use crate::models::entry::CatalogEntry;
use crate::models::query::PageResult;

pub struct Paginator;

impl Paginator {
    pub fn apply(entries: Vec<CatalogEntry>, page: usize, limit: usize) -> CatalogResult<PageResult> {
        if page < 1 {
            return Err(CatalogError::InvalidArgument(format!(
                "page must be >= 1, got {page}"
            )));
        }
        if limit < 1 {
            return Err(CatalogError::InvalidArgument(format!(
                "limit must be >= 1, got {limit}"
            )));
        }

        let total = entries.len();
        // An offset past usize::MAX is necessarily past the end of any
        // collection, so overflow degrades to the empty-page case
        let Some(start) = (page - 1).checked_mul(limit) else {
            return Ok(PageResult { items: vec![], total, has_more: false });
        };
        let items: Vec<CatalogEntry> = entries.into_iter().skip(start).take(limit).collect();
        let has_more = start + items.len() < total;

        Ok(PageResult { items, total, has_more })
    }
}
