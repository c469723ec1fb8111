//! Record Source and Item Writer
//!
//! Store-backed implementations of the engine's consumed interfaces:
//! one SELECT per record kind for the read pipeline, and guarded per-item
//! DELETE/UPDATE statements for bulk actions. Every statement carries the
//! organization filter so a row from another tenant reads as not found.

use async_trait::async_trait;
use chrono::Utc;
use procure_core::{
    BulkAction, CatalogError, CatalogResult, EntryKind, ItemWriter, RawRecord, RecordSource,
};
use surrealdb::RecordId;

use crate::store::{store_err, SurrealStore};

impl SurrealStore {
    fn table_for(kind: EntryKind) -> &'static str {
        match kind {
            EntryKind::Product => "product",
            EntryKind::Service => "service",
        }
    }

    fn kind_for_table(table: &str) -> CatalogResult<EntryKind> {
        match table {
            "product" => Ok(EntryKind::Product),
            "service" => Ok(EntryKind::Service),
            other => Err(CatalogError::Validation(format!(
                "'{other}' is not a catalog table"
            ))),
        }
    }

    /// Parse a full record id and reject ids outside the catalog tables
    fn parse_entry_id(entry_id: &str) -> CatalogResult<(RecordId, EntryKind)> {
        let record_id: RecordId = entry_id
            .parse()
            .map_err(|_| CatalogError::Validation(format!("Invalid entry ID: {entry_id}")))?;
        let kind = Self::kind_for_table(record_id.table())?;
        Ok((record_id, kind))
    }

    /// Whether the row exists and belongs to the organization
    async fn owned_by(&self, record_id: &RecordId, organization_id: &str) -> CatalogResult<bool> {
        let mut result = self
            .db()
            .query("SELECT VALUE <string>id FROM $thing WHERE organization_id = $org")
            .bind(("thing", record_id.clone()))
            .bind(("org", organization_id.to_string()))
            .await
            .map_err(store_err)?;
        let ids: Vec<String> = result.take(0).map_err(store_err)?;
        Ok(!ids.is_empty())
    }
}

#[async_trait]
impl RecordSource for SurrealStore {
    async fn fetch_rows(
        &self,
        organization_id: &str,
        kind: EntryKind,
    ) -> CatalogResult<Vec<RawRecord>> {
        let table = Self::table_for(kind);
        // Cast the record id to its string form so the engine sees an
        // opaque "table:key" identifier
        let query = format!(
            "SELECT <string>id AS id, organization_id, name, description, category, \
             supplier, status, tags, price, sku, rate, unit, created_at, updated_at \
             FROM {table} WHERE organization_id = $org"
        );
        let mut result = self
            .db()
            .query(query)
            .bind(("org", organization_id.to_string()))
            .await
            .map_err(store_err)?;
        let rows: Vec<RawRecord> = result.take(0).map_err(store_err)?;
        Ok(rows)
    }
}

#[async_trait]
impl ItemWriter for SurrealStore {
    async fn perform(
        &self,
        organization_id: &str,
        entry_id: &str,
        action: &BulkAction,
    ) -> CatalogResult<()> {
        let (record_id, kind) = Self::parse_entry_id(entry_id)?;

        if !self.owned_by(&record_id, organization_id).await? {
            return Err(CatalogError::NotFound(format!("entry {entry_id} not found")));
        }

        match action {
            BulkAction::Delete => {
                self.db()
                    .query("DELETE $thing")
                    .bind(("thing", record_id))
                    .await
                    .map_err(store_err)?;
            }
            BulkAction::UpdateStatus { status } => {
                if !status.allowed_for(kind) {
                    return Err(CatalogError::Validation(format!(
                        "status '{}' is not allowed for {} '{entry_id}'",
                        status.as_str(),
                        kind.as_str()
                    )));
                }
                self.db()
                    .query("UPDATE $thing SET status = $status, updated_at = $now")
                    .bind(("thing", record_id))
                    .bind(("status", *status))
                    .bind(("now", Utc::now()))
                    .await
                    .map_err(store_err)?;
            }
            BulkAction::UpdateCategory { category } => {
                self.db()
                    .query("UPDATE $thing SET category = $category, updated_at = $now")
                    .bind(("thing", record_id))
                    .bind(("category", category.clone()))
                    .bind(("now", Utc::now()))
                    .await
                    .map_err(store_err)?;
            }
            BulkAction::UpdateSupplier { supplier } => {
                self.db()
                    .query("UPDATE $thing SET supplier = $supplier, updated_at = $now")
                    .bind(("thing", record_id))
                    .bind(("supplier", supplier.clone()))
                    .bind(("now", Utc::now()))
                    .await
                    .map_err(store_err)?;
            }
        }

        Ok(())
    }
}
