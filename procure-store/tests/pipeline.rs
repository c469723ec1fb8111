//! End-to-end pipeline tests against an embedded store
//! Run: cargo test -p procure-store --test pipeline

use std::sync::Arc;

use chrono::{TimeZone, Utc};
use procure_core::{
    ActivityAction, BulkAction, CatalogService, EntryKind, EntryStatus, ExportField, ExportFormat,
    FilterSpec, QueryParams,
};
use procure_store::{ActivityLogger, ProductSeed, ServiceSeed, SurrealStore};
use tokio_util::sync::CancellationToken;

async fn open_store() -> (tempfile::TempDir, SurrealStore) {
    let tmp = tempfile::tempdir().unwrap();
    let store = SurrealStore::open_at(tmp.path(), "procure", "test").await.unwrap();
    (tmp, store)
}

fn catalog_service(store: &SurrealStore) -> CatalogService {
    CatalogService::new(
        Arc::new(store.clone()),
        Arc::new(store.clone()),
        Arc::new(ActivityLogger::new(store.db().clone())),
    )
}

async fn seed(store: &SurrealStore) -> Vec<String> {
    let mut ids = Vec::new();

    let mut grinder = ProductSeed::new("org:acme", "Espresso Grinder", 450.0);
    grinder.category = Some("Equipment".to_string());
    grinder.supplier = Some("Acme, Inc.".to_string());
    grinder.created_at = Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap();
    ids.push(store.insert_product(grinder).await.unwrap());

    let mut tamper = ProductSeed::new("org:acme", "Tamper", 35.0);
    tamper.category = Some("Accessories".to_string());
    tamper.created_at = Utc.with_ymd_and_hms(2024, 1, 15, 0, 0, 0).unwrap();
    ids.push(store.insert_product(tamper).await.unwrap());

    let mut cleaning = ServiceSeed::new("org:acme", "Machine Cleaning", 80.0);
    cleaning.category = Some("Maintenance".to_string());
    cleaning.created_at = Utc.with_ymd_and_hms(2024, 5, 20, 0, 0, 0).unwrap();
    ids.push(store.insert_service(cleaning).await.unwrap());

    // Another tenant's row; must never surface for org:acme
    let other = ProductSeed::new("org:rival", "Leaked Grinder", 1.0);
    ids.push(store.insert_product(other).await.unwrap());

    ids
}

#[tokio::test]
async fn list_pipeline_merges_kinds_and_sorts_newest_first() {
    let (_tmp, store) = open_store().await;
    seed(&store).await;
    let svc = catalog_service(&store);

    let page = svc.list("org:acme", &QueryParams::default()).await.unwrap();
    assert_eq!(page.total, 3);
    assert!(!page.has_more);

    let names: Vec<&str> = page.items.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, ["Machine Cleaning", "Espresso Grinder", "Tamper"]);
    assert!(page.items.iter().all(|e| e.organization_id == "org:acme"));
}

#[tokio::test]
async fn tenant_rows_are_isolated() {
    let (_tmp, store) = open_store().await;
    seed(&store).await;
    let svc = catalog_service(&store);

    let page = svc.list("org:rival", &QueryParams::default()).await.unwrap();
    assert_eq!(page.total, 1);
    assert_eq!(page.items[0].name, "Leaked Grinder");
}

#[tokio::test]
async fn filtered_csv_export_round_trips_quoted_supplier() {
    let (_tmp, store) = open_store().await;
    seed(&store).await;
    let svc = catalog_service(&store);

    let filters = FilterSpec {
        kind: Some(EntryKind::Product),
        ..Default::default()
    };
    let payload = svc
        .export(
            "org:acme",
            Some(&filters),
            None,
            ExportFormat::Csv,
            &[ExportField::Name, ExportField::Supplier, ExportField::UnitPrice],
            true,
        )
        .await
        .unwrap();

    assert_eq!(payload.mime_type, "text/csv");
    assert_eq!(
        payload.content,
        "name,supplier,unit_price\nEspresso Grinder,\"Acme, Inc.\",450.0\nTamper,,35.0\n"
    );
}

#[tokio::test]
async fn stats_cover_both_kinds() {
    let (_tmp, store) = open_store().await;
    seed(&store).await;
    let svc = catalog_service(&store);

    let now = Utc.with_ymd_and_hms(2024, 5, 25, 0, 0, 0).unwrap();
    let stats = svc.stats("org:acme", None, now).await.unwrap();
    assert_eq!(stats.total, 3);
    assert_eq!(stats.products, 2);
    assert_eq!(stats.services, 1);
    assert_eq!(stats.active, 3);
    assert_eq!(stats.total_value, 565.0);
    // Only the cleaning service was created within the trailing week
    assert_eq!(stats.recently_added, 1);
}

#[tokio::test]
async fn bulk_delete_isolates_missing_rows_and_logs_activity() {
    let (_tmp, store) = open_store().await;
    let ids = seed(&store).await;
    let svc = catalog_service(&store);
    let logger = ActivityLogger::new(store.db().clone());

    let targets = vec![
        ids[0].clone(),
        "product:does_not_exist".to_string(),
        ids[1].clone(),
    ];
    let result = svc
        .execute_bulk(
            "org:acme",
            "user:ops",
            &targets,
            &BulkAction::Delete,
            &CancellationToken::new(),
        )
        .await;

    assert_eq!(result.success, 2);
    assert_eq!(result.failed, 1);
    assert_eq!(result.errors.len(), 1);
    assert!(result.errors[0].starts_with("product:does_not_exist: "));

    // The surviving rows really are gone
    let page = svc.list("org:acme", &QueryParams::default()).await.unwrap();
    assert_eq!(page.total, 1);
    assert_eq!(page.items[0].name, "Machine Cleaning");

    // One summary activity record landed in the store
    let recent = logger.query_recent(10).await.unwrap();
    assert_eq!(recent.len(), 1);
    assert!(matches!(recent[0].action, ActivityAction::BulkOperation));
    let details = recent[0].details.as_ref().unwrap();
    assert_eq!(details["success"], 2);
    assert_eq!(details["failed"], 1);
}

#[tokio::test]
async fn bulk_update_respects_per_kind_status_sets() {
    let (_tmp, store) = open_store().await;
    let ids = seed(&store).await;
    let svc = catalog_service(&store);

    // Suspended is a service-only status; the product id must fail
    let targets = vec![ids[0].clone(), ids[2].clone()];
    let result = svc
        .execute_bulk(
            "org:acme",
            "user:ops",
            &targets,
            &BulkAction::UpdateStatus { status: EntryStatus::Suspended },
            &CancellationToken::new(),
        )
        .await;

    assert_eq!(result.success, 1);
    assert_eq!(result.failed, 1);

    let filters = FilterSpec {
        status: Some(EntryStatus::Suspended),
        ..Default::default()
    };
    let params = QueryParams { filters: Some(filters), ..Default::default() };
    let page = svc.list("org:acme", &params).await.unwrap();
    assert_eq!(page.total, 1);
    assert_eq!(page.items[0].name, "Machine Cleaning");
}

#[tokio::test]
async fn mutating_another_tenants_row_reads_as_not_found() {
    let (_tmp, store) = open_store().await;
    let ids = seed(&store).await;
    let svc = catalog_service(&store);

    // ids[3] belongs to org:rival
    let result = svc
        .execute_bulk(
            "org:acme",
            "user:ops",
            &[ids[3].clone()],
            &BulkAction::Delete,
            &CancellationToken::new(),
        )
        .await;
    assert_eq!(result.success, 0);
    assert_eq!(result.failed, 1);

    // The row is still there for its owner
    let page = svc.list("org:rival", &QueryParams::default()).await.unwrap();
    assert_eq!(page.total, 1);
}
