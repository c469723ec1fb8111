//! Activity Logging
//!
//! Fire-and-forget records of what mutation occurred, delivered to an
//! external sink. A failed activity write must never abort the primary
//! operation, so every call site goes through [`log_best_effort`], which
//! makes the "we intentionally ignore this" decision visible in review.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::CatalogResult;

/// Kind of auditable action
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityAction {
    Create,
    Update,
    Delete,
    BulkOperation,
    Export,
}

/// One activity record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityEntry {
    pub organization_id: String,
    pub actor_id: String,
    pub action: ActivityAction,
    /// Resource kind the action targeted, e.g. "catalog_entry"
    pub resource_type: String,
    pub resource_id: Option<String>,
    pub details: Option<serde_json::Value>,
}

impl ActivityEntry {
    pub fn new(
        organization_id: impl Into<String>,
        actor_id: impl Into<String>,
        action: ActivityAction,
        resource_type: impl Into<String>,
    ) -> Self {
        Self {
            organization_id: organization_id.into(),
            actor_id: actor_id.into(),
            action,
            resource_type: resource_type.into(),
            resource_id: None,
            details: None,
        }
    }

    pub fn with_resource_id(mut self, resource_id: impl Into<String>) -> Self {
        self.resource_id = Some(resource_id.into());
        self
    }

    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }
}

/// External activity sink
#[async_trait]
pub trait ActivitySink: Send + Sync {
    async fn log_activity(&self, entry: ActivityEntry) -> CatalogResult<()>;
}

/// Deliver an activity record, discarding any sink failure
pub async fn log_best_effort(sink: &dyn ActivitySink, entry: ActivityEntry) {
    let action = entry.action;
    if let Err(e) = sink.log_activity(entry).await {
        tracing::warn!(target: "activity", ?action, error = %e, "Activity record dropped");
    }
}
