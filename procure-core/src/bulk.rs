//! Bulk Operation Executor
//!
//! Applies one action to a list of entry identifiers, one item at a time,
//! isolating per-item failures. Sequential execution bounds load on the
//! downstream store and keeps the success/failure accounting race-free;
//! the cost is O(n) latency in the number of items.

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use crate::audit::{log_best_effort, ActivityAction, ActivityEntry, ActivitySink};
use crate::error::CatalogResult;
use crate::models::bulk::{BulkAction, BulkResult};

/// Performs the actual single-item mutation against the external store
///
/// Each call is assumed atomic on its own; no cross-item transaction is
/// provided or expected.
#[async_trait]
pub trait ItemWriter: Send + Sync {
    async fn perform(
        &self,
        organization_id: &str,
        entry_id: &str,
        action: &BulkAction,
    ) -> CatalogResult<()>;
}

pub struct BulkOperationExecutor;

impl BulkOperationExecutor {
    /// Drive `action` over `entry_ids` sequentially
    ///
    /// A failing item is recorded as `"{id}: {message}"` and the loop
    /// continues; a signaled `cancel` token stops issuing further items
    /// and returns the partial result (already-issued operations are not
    /// rolled back). An empty id list is a no-op. One summary activity
    /// record is delivered best-effort after the loop.
    pub async fn execute(
        writer: &dyn ItemWriter,
        activity: &dyn ActivitySink,
        organization_id: &str,
        actor_id: &str,
        entry_ids: &[String],
        action: &BulkAction,
        cancel: &CancellationToken,
    ) -> BulkResult {
        if entry_ids.is_empty() {
            return BulkResult::default();
        }

        let mut result = BulkResult::default();
        for entry_id in entry_ids {
            if cancel.is_cancelled() {
                tracing::warn!(
                    action = action.kind(),
                    processed = result.success + result.failed,
                    requested = entry_ids.len(),
                    "Bulk operation cancelled, returning partial result"
                );
                break;
            }
            match writer.perform(organization_id, entry_id, action).await {
                Ok(()) => result.success += 1,
                Err(e) => {
                    result.failed += 1;
                    result.errors.push(format!("{entry_id}: {e}"));
                    tracing::warn!(entry_id = %entry_id, action = action.kind(), error = %e, "Bulk item failed");
                }
            }
        }

        let entry = ActivityEntry::new(
            organization_id,
            actor_id,
            ActivityAction::BulkOperation,
            "catalog_entry",
        )
        .with_details(serde_json::json!({
            "action": action.kind(),
            "requested": entry_ids.len(),
            "success": result.success,
            "failed": result.failed,
        }));
        log_best_effort(activity, entry).await;

        result
    }
}
