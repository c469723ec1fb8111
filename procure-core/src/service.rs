//! Catalog Service
//!
//! Orchestrates the read pipeline (fetch per kind → normalize →
//! filter → sort → paginate) and the mutation path (bulk actions with
//! per-item isolation) over injected store collaborators. Every call is
//! parameterized by `organization_id`; the normalizer refuses rows
//! without one, so entries from another tenant cannot enter the pipeline.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio_util::sync::CancellationToken;

use crate::audit::ActivitySink;
use crate::bulk::{BulkOperationExecutor, ItemWriter};
use crate::engine::{FilterEngine, Paginator, SortEngine, StatsAggregator};
use crate::error::CatalogResult;
use crate::export::{ExportFormat, ExportField, ExportSerializer};
use crate::models::bulk::{BulkAction, BulkResult};
use crate::models::entry::{CatalogEntry, EntryKind, RawRecord};
use crate::models::query::{FilterSpec, PageResult, QueryParams, SortSpec};
use crate::models::stats::CatalogStats;
use crate::normalize::RecordNormalizer;

/// Default page size when the caller does not specify a limit
pub const DEFAULT_PAGE_SIZE: usize = 50;

/// Underlying record source, one fetch per record kind
#[async_trait]
pub trait RecordSource: Send + Sync {
    async fn fetch_rows(
        &self,
        organization_id: &str,
        kind: EntryKind,
    ) -> CatalogResult<Vec<RawRecord>>;
}

/// Text payload produced by an export, MIME type attached
///
/// The filename is caller-supplied and not generated here.
#[derive(Debug, Clone)]
pub struct ExportPayload {
    pub content: String,
    pub mime_type: &'static str,
}

/// Unified catalog/vendor aggregation service
#[derive(Clone)]
pub struct CatalogService {
    source: Arc<dyn RecordSource>,
    writer: Arc<dyn ItemWriter>,
    activity: Arc<dyn ActivitySink>,
}

impl CatalogService {
    pub fn new(
        source: Arc<dyn RecordSource>,
        writer: Arc<dyn ItemWriter>,
        activity: Arc<dyn ActivitySink>,
    ) -> Self {
        Self { source, writer, activity }
    }

    /// Fetch, normalize and concatenate entries of the requested kinds
    ///
    /// A `kind` filter skips the other source entirely instead of
    /// discarding its rows after the fetch.
    async fn collect(
        &self,
        organization_id: &str,
        filters: Option<&FilterSpec>,
    ) -> CatalogResult<Vec<CatalogEntry>> {
        let kinds: &[EntryKind] = match filters.and_then(|f| f.kind) {
            Some(EntryKind::Product) => &[EntryKind::Product],
            Some(EntryKind::Service) => &[EntryKind::Service],
            None => &[EntryKind::Product, EntryKind::Service],
        };

        let mut entries = Vec::new();
        for &kind in kinds {
            let rows = self.source.fetch_rows(organization_id, kind).await?;
            let fetched = rows.len();
            let normalized = RecordNormalizer::normalize_all(rows, kind);
            tracing::debug!(
                organization_id,
                kind = kind.as_str(),
                fetched,
                normalized = normalized.len(),
                "Fetched source rows"
            );
            entries.extend(normalized);
        }
        Ok(entries)
    }

    /// Query one page of entries
    pub async fn list(
        &self,
        organization_id: &str,
        params: &QueryParams,
    ) -> CatalogResult<PageResult> {
        let entries = self.collect(organization_id, params.filters.as_ref()).await?;

        let filtered = match &params.filters {
            Some(spec) => FilterEngine::apply(entries, spec),
            None => entries,
        };
        let sorted = SortEngine::apply(filtered, params.sort.unwrap_or_default());
        Paginator::apply(
            sorted,
            params.page.unwrap_or(1),
            params.limit.unwrap_or(DEFAULT_PAGE_SIZE),
        )
    }

    /// Compute dashboard statistics over an independently filtered set
    ///
    /// `now` is injected by the caller; this service never reads the clock.
    pub async fn stats(
        &self,
        organization_id: &str,
        filters: Option<&FilterSpec>,
        now: DateTime<Utc>,
    ) -> CatalogResult<CatalogStats> {
        let entries = self.collect(organization_id, filters).await?;
        let filtered = match filters {
            Some(spec) => FilterEngine::apply(entries, spec),
            None => entries,
        };
        Ok(StatsAggregator::aggregate(&filtered, now))
    }

    /// Export the filtered, sorted collection as downloadable text
    pub async fn export(
        &self,
        organization_id: &str,
        filters: Option<&FilterSpec>,
        sort: Option<SortSpec>,
        format: ExportFormat,
        fields: &[ExportField],
        include_headers: bool,
    ) -> CatalogResult<ExportPayload> {
        let entries = self.collect(organization_id, filters).await?;
        let filtered = match filters {
            Some(spec) => FilterEngine::apply(entries, spec),
            None => entries,
        };
        let sorted = SortEngine::apply(filtered, sort.unwrap_or_default());

        let content = match format {
            ExportFormat::Csv => ExportSerializer::to_csv(&sorted, fields, include_headers),
            ExportFormat::Json => ExportSerializer::to_json(&sorted, fields)?,
        };
        Ok(ExportPayload { content, mime_type: format.mime_type() })
    }

    /// Apply one action to a list of entry ids with per-item isolation
    pub async fn execute_bulk(
        &self,
        organization_id: &str,
        actor_id: &str,
        entry_ids: &[String],
        action: &BulkAction,
        cancel: &CancellationToken,
    ) -> BulkResult {
        BulkOperationExecutor::execute(
            self.writer.as_ref(),
            self.activity.as_ref(),
            organization_id,
            actor_id,
            entry_ids,
            action,
            cancel,
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::ActivityEntry;
    use crate::models::entry::EntryStatus;
    use crate::models::query::{SortDirection, SortField};
    use chrono::TimeZone;

    /// In-memory source holding one row set per kind
    struct FixedSource {
        products: Vec<RawRecord>,
        services: Vec<RawRecord>,
    }

    #[async_trait]
    impl RecordSource for FixedSource {
        async fn fetch_rows(
            &self,
            organization_id: &str,
            kind: EntryKind,
        ) -> CatalogResult<Vec<RawRecord>> {
            let rows = match kind {
                EntryKind::Product => &self.products,
                EntryKind::Service => &self.services,
            };
            Ok(rows
                .iter()
                .filter(|r| r.organization_id.as_deref() == Some(organization_id))
                .cloned()
                .collect())
        }
    }

    struct NoopWriter;

    #[async_trait]
    impl ItemWriter for NoopWriter {
        async fn perform(
            &self,
            _organization_id: &str,
            _entry_id: &str,
            _action: &BulkAction,
        ) -> CatalogResult<()> {
            Ok(())
        }
    }

    struct NoopSink;

    #[async_trait]
    impl ActivitySink for NoopSink {
        async fn log_activity(&self, _entry: ActivityEntry) -> CatalogResult<()> {
            Ok(())
        }
    }

    fn raw(id: &str, org: &str, name: &str) -> RawRecord {
        RawRecord {
            id: Some(id.to_string()),
            organization_id: Some(org.to_string()),
            name: Some(name.to_string()),
            ..Default::default()
        }
    }

    fn service() -> CatalogService {
        let mut a = raw("a", "org:acme", "Grinder");
        a.price = Some(10.0);
        a.status = Some(EntryStatus::Active);
        a.created_at = Some(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap());

        let mut b = raw("b", "org:acme", "Cleaning");
        b.rate = Some(20.0);
        b.status = Some(EntryStatus::Inactive);
        b.created_at = Some(Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap());

        let mut other_tenant = raw("z", "org:other", "Leaked");
        other_tenant.price = Some(1.0);

        CatalogService::new(
            Arc::new(FixedSource {
                products: vec![a, other_tenant],
                services: vec![b],
            }),
            Arc::new(NoopWriter),
            Arc::new(NoopSink),
        )
    }

    #[tokio::test]
    async fn filters_sorts_and_paginates_across_both_kinds() {
        let svc = service();
        let params = QueryParams {
            filters: Some(FilterSpec {
                status: Some(EntryStatus::Active),
                ..Default::default()
            }),
            sort: Some(SortSpec {
                field: SortField::CreatedAt,
                direction: SortDirection::Desc,
            }),
            page: Some(1),
            limit: Some(10),
        };
        let page = svc.list("org:acme", &params).await.unwrap();
        assert_eq!(page.total, 1);
        assert!(!page.has_more);
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.items[0].id, "a");
    }

    #[tokio::test]
    async fn default_sort_is_created_at_desc() {
        let svc = service();
        let page = svc.list("org:acme", &QueryParams::default()).await.unwrap();
        let ids: Vec<&str> = page.items.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, ["b", "a"]);
    }

    #[tokio::test]
    async fn other_tenants_rows_never_surface() {
        let svc = service();
        let page = svc.list("org:acme", &QueryParams::default()).await.unwrap();
        assert!(page.items.iter().all(|e| e.organization_id == "org:acme"));
        assert_eq!(page.total, 2);
    }

    #[tokio::test]
    async fn kind_filter_skips_the_other_source() {
        let svc = service();
        let params = QueryParams {
            filters: Some(FilterSpec {
                kind: Some(EntryKind::Service),
                ..Default::default()
            }),
            ..Default::default()
        };
        let page = svc.list("org:acme", &params).await.unwrap();
        assert_eq!(page.total, 1);
        assert_eq!(page.items[0].id, "b");
    }

    #[tokio::test]
    async fn stats_run_over_the_full_filtered_set() {
        let svc = service();
        let now = Utc.with_ymd_and_hms(2024, 6, 3, 0, 0, 0).unwrap();
        let stats = svc.stats("org:acme", None, now).await.unwrap();
        assert_eq!(stats.total, 2);
        assert_eq!(stats.products, 1);
        assert_eq!(stats.services, 1);
        assert_eq!(stats.total_value, 30.0);
        assert_eq!(stats.average_price, 15.0);
        assert_eq!(stats.recently_added, 1);
    }

    #[tokio::test]
    async fn export_returns_payload_with_mime_type() {
        let svc = service();
        let payload = svc
            .export(
                "org:acme",
                None,
                None,
                ExportFormat::Csv,
                &[ExportField::Id, ExportField::UnitPrice],
                true,
            )
            .await
            .unwrap();
        assert_eq!(payload.mime_type, "text/csv");
        assert_eq!(payload.content, "id,unit_price\nb,20.0\na,10.0\n");
    }
}
