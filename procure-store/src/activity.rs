//! Activity Logger
//!
//! Database-backed implementation of the engine's activity sink. Failed
//! writes fall back to a console record; the error is still reported so
//! the core's best-effort wrapper decides what to discard.

use async_trait::async_trait;
use procure_core::{ActivityEntry, ActivitySink, CatalogError, CatalogResult};
use surrealdb::engine::local::Db;
use surrealdb::Surreal;

use crate::store::store_err;

const TABLE: &str = "activity_log";

#[derive(Clone)]
pub struct ActivityLogger {
    db: Surreal<Db>,
}

impl ActivityLogger {
    pub fn new(db: Surreal<Db>) -> Self {
        Self { db }
    }

    /// Query the most recent activity records
    pub async fn query_recent(&self, limit: usize) -> CatalogResult<Vec<ActivityEntry>> {
        let mut result = self
            .db
            .query(format!("SELECT * FROM {TABLE} LIMIT $limit"))
            .bind(("limit", limit))
            .await
            .map_err(store_err)?;
        result.take(0).map_err(store_err)
    }

    fn log_to_console(entry: &ActivityEntry) {
        tracing::info!(
            target: "activity",
            organization_id = %entry.organization_id,
            actor_id = %entry.actor_id,
            action = ?entry.action,
            resource_type = %entry.resource_type,
            "Activity (console fallback)"
        );
    }
}

#[async_trait]
impl ActivitySink for ActivityLogger {
    async fn log_activity(&self, entry: ActivityEntry) -> CatalogResult<()> {
        let result: Result<Option<ActivityEntry>, surrealdb::Error> =
            self.db.create(TABLE).content(entry.clone()).await;

        match result {
            Ok(_) => Ok(()),
            Err(e) => {
                Self::log_to_console(&entry);
                Err(CatalogError::Activity(e.to_string()))
            }
        }
    }
}
