use chrono::{NaiveDateTime, Utc};

use crate::client::{ProductFetcher, PromClient};
use crate::db::{establish_connection_pool, run_migrations};
use crate::domain::product::{RawProduct, RawRecord, record_id, to_stored_record};
use crate::models::config::SyncConfig;
use crate::repository::{DieselRepository, ProductWriter};

use super::{RecordError, ServiceResult, SyncError};

/// A record that could not be synchronized.
#[derive(Debug)]
pub struct RecordFailure {
    /// Identifier from the listing, if the record carried one.
    pub product_id: Option<i64>,
    pub error: RecordError,
}

/// Outcome of a completed synchronization run.
#[derive(Debug)]
pub struct SyncReport {
    pub started_at: NaiveDateTime,
    pub finished_at: NaiveDateTime,
    /// Records received from the fetcher.
    pub processed: usize,
    /// Records written to the store.
    pub upserted: usize,
    pub failures: Vec<RecordFailure>,
}

impl SyncReport {
    /// Number of records that were skipped because of an error.
    pub fn failed(&self) -> usize {
        self.failures.len()
    }

    /// `true` when every fetched record was stored.
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

fn describe_id(id: Option<i64>) -> String {
    id.map_or_else(|| "<unknown>".to_string(), |id| id.to_string())
}

fn sync_product<W>(record: RawRecord, store: &mut W) -> Result<(), RecordError>
where
    W: ProductWriter + ?Sized,
{
    let raw = RawProduct::from_record(record)?;
    let product = to_stored_record(&raw)?;
    store.upsert_product(&product)?;
    Ok(())
}

/// Fetch the product listing and upsert every record into `store`.
///
/// Records are processed in listing order. A record that fails to decode, to
/// map or to be written is logged with its identifier and skipped. The store is
/// committed exactly once after the batch, even when the listing is empty.
/// A failed fetch returns [`SyncError::FetchFailed`] without touching the
/// store.
pub fn sync_products<F, W>(fetcher: &F, store: &mut W) -> ServiceResult<SyncReport>
where
    F: ProductFetcher + ?Sized,
    W: ProductWriter + ?Sized,
{
    let started_at = Utc::now().naive_utc();

    let records = fetcher.fetch_all()?;
    let processed = records.len();
    log::info!("Fetched {processed} products");

    let mut upserted = 0;
    let mut failures = Vec::new();

    for record in records {
        let product_id = record_id(&record);
        match sync_product(record, store) {
            Ok(()) => upserted += 1,
            Err(error) => {
                log::error!("Error updating product {}: {error}", describe_id(product_id));
                failures.push(RecordFailure { product_id, error });
            }
        }
    }

    store.commit().map_err(SyncError::CommitFailed)?;

    Ok(SyncReport {
        started_at,
        finished_at: Utc::now().naive_utc(),
        processed,
        upserted,
        failures,
    })
}

/// Run one full synchronization against the configured API and database.
///
/// Builds the HTTP client first, so a bad host fails before the data
/// directory is touched. Then opens (and if necessary creates) the database,
/// applies migrations, and synchronizes through a single exclusively held
/// connection.
pub fn run(config: &SyncConfig) -> ServiceResult<SyncReport> {
    let client = PromClient::new(config).map_err(|e| SyncError::Configuration(e.to_string()))?;

    let pool = establish_connection_pool(&config.database_url).map_err(SyncError::StoreSetup)?;
    run_migrations(&pool).map_err(SyncError::StoreSetup)?;

    let repo = DieselRepository::new(pool);
    let mut writer = repo.writer().map_err(SyncError::StoreSetup)?;

    let report = sync_products(&client, &mut writer)?;

    let elapsed = report.finished_at - report.started_at;
    log::info!(
        "Synchronized {} of {} products into {} ({} failed) in {} ms",
        report.upserted,
        report.processed,
        config.database_url,
        report.failed(),
        elapsed.num_milliseconds()
    );

    Ok(report)
}
