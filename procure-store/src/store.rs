//! Embedded Record Store
//!
//! Owns the SurrealDB connection (embedded RocksDB engine) and the table
//! definitions for the two catalog tables and the activity log.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use procure_core::{CatalogError, CatalogResult, EntryStatus, RateUnit};
use serde::{Deserialize, Serialize};
use surrealdb::engine::local::{Db, RocksDb};
use surrealdb::{RecordId, Surreal};

/// Store configuration
#[derive(Debug, Clone)]
pub struct StoreConfig {
    pub path: PathBuf,
    pub namespace: String,
    pub database: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("./work_dir/procure.db"),
            namespace: "procure".to_string(),
            database: "main".to_string(),
        }
    }
}

/// Map a database failure into the engine's error type
pub(crate) fn store_err(e: surrealdb::Error) -> CatalogError {
    CatalogError::Store(e.to_string())
}

/// New-product row for insertion
#[derive(Debug, Clone, Serialize)]
pub struct ProductSeed {
    pub organization_id: String,
    pub name: String,
    pub description: Option<String>,
    pub category: Option<String>,
    pub supplier: Option<String>,
    pub status: EntryStatus,
    pub tags: Vec<String>,
    pub price: f64,
    pub sku: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ProductSeed {
    pub fn new(organization_id: impl Into<String>, name: impl Into<String>, price: f64) -> Self {
        let now = Utc::now();
        Self {
            organization_id: organization_id.into(),
            name: name.into(),
            description: None,
            category: None,
            supplier: None,
            status: EntryStatus::Active,
            tags: vec![],
            price,
            sku: None,
            created_at: now,
            updated_at: now,
        }
    }
}

/// New-service row for insertion
#[derive(Debug, Clone, Serialize)]
pub struct ServiceSeed {
    pub organization_id: String,
    pub name: String,
    pub description: Option<String>,
    pub category: Option<String>,
    pub supplier: Option<String>,
    pub status: EntryStatus,
    pub tags: Vec<String>,
    pub rate: f64,
    pub unit: RateUnit,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ServiceSeed {
    pub fn new(organization_id: impl Into<String>, name: impl Into<String>, rate: f64) -> Self {
        let now = Utc::now();
        Self {
            organization_id: organization_id.into(),
            name: name.into(),
            description: None,
            category: None,
            supplier: None,
            status: EntryStatus::Active,
            tags: vec![],
            rate,
            unit: RateUnit::Fixed,
            created_at: now,
            updated_at: now,
        }
    }
}

#[derive(Debug, Deserialize)]
struct Created {
    id: RecordId,
}

/// Embedded store over the `product`, `service` and `activity_log` tables
#[derive(Clone)]
pub struct SurrealStore {
    db: Surreal<Db>,
}

impl SurrealStore {
    /// Open (or create) the store at the configured path
    pub async fn open(config: &StoreConfig) -> CatalogResult<Self> {
        Self::open_at(&config.path, &config.namespace, &config.database).await
    }

    pub async fn open_at(path: &Path, namespace: &str, database: &str) -> CatalogResult<Self> {
        let db: Surreal<Db> = Surreal::new::<RocksDb>(path).await.map_err(store_err)?;
        db.use_ns(namespace).use_db(database).await.map_err(store_err)?;

        // Table definitions; rows stay schemaless, the engine validates at
        // the normalization boundary
        db.query(
            "DEFINE TABLE IF NOT EXISTS product SCHEMALESS;
             DEFINE INDEX IF NOT EXISTS product_org ON product FIELDS organization_id;
             DEFINE TABLE IF NOT EXISTS service SCHEMALESS;
             DEFINE INDEX IF NOT EXISTS service_org ON service FIELDS organization_id;
             DEFINE TABLE IF NOT EXISTS activity_log SCHEMALESS;",
        )
        .await
        .map_err(store_err)?
        .check()
        .map_err(store_err)?;

        tracing::info!(path = %path.display(), namespace, database, "Record store opened");
        Ok(Self { db })
    }

    pub fn db(&self) -> &Surreal<Db> {
        &self.db
    }

    /// Insert a product row, returning its full record id ("product:...")
    pub async fn insert_product(&self, seed: ProductSeed) -> CatalogResult<String> {
        self.insert("product", seed).await
    }

    /// Insert a service row, returning its full record id ("service:...")
    pub async fn insert_service(&self, seed: ServiceSeed) -> CatalogResult<String> {
        self.insert("service", seed).await
    }

    async fn insert(&self, table: &str, content: impl Serialize + 'static) -> CatalogResult<String> {
        let created: Option<Created> = self
            .db
            .create(table)
            .content(content)
            .await
            .map_err(store_err)?;
        created
            .map(|c| c.id.to_string())
            .ok_or_else(|| CatalogError::Store(format!("Failed to create {table} row")))
    }
}
