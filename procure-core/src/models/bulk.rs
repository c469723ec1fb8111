//! Bulk Operation DTOs

use serde::{Deserialize, Serialize};

use super::entry::EntryStatus;

/// One logical action applied to a set of entry identifiers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "snake_case")]
pub enum BulkAction {
    Delete,
    UpdateStatus { status: EntryStatus },
    UpdateCategory { category: String },
    UpdateSupplier { supplier: String },
}

impl BulkAction {
    /// Stable action name for activity records
    pub fn kind(&self) -> &'static str {
        match self {
            BulkAction::Delete => "delete",
            BulkAction::UpdateStatus { .. } => "update_status",
            BulkAction::UpdateCategory { .. } => "update_category",
            BulkAction::UpdateSupplier { .. } => "update_supplier",
        }
    }
}

/// Aggregate outcome of a bulk action with independent per-item results
///
/// Each error line is `"{id}: {message}"`, in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BulkResult {
    pub success: usize,
    pub failed: usize,
    pub errors: Vec<String>,
}
