use thiserror::Error;

use crate::client::FetchError;
use crate::domain::product::ProductRecordError;
use crate::repository::RepositoryError;

/// Fatal errors that abort a synchronization run.
#[derive(Debug, Error)]
pub enum SyncError {
    /// Required configuration was missing or invalid.
    #[error("configuration error: {0}")]
    Configuration(String),
    /// The product listing could not be retrieved; the store was not touched.
    #[error("failed to fetch product listing: {0}")]
    FetchFailed(#[from] FetchError),
    /// The store could not be opened or its table created.
    #[error("failed to prepare product store: {0}")]
    StoreSetup(#[source] RepositoryError),
    /// The batch could not be committed; none of its writes were persisted.
    #[error("failed to commit product batch: {0}")]
    CommitFailed(#[source] RepositoryError),
}

/// Error isolated to a single record of the batch.
#[derive(Debug, Error)]
pub enum RecordError {
    /// The record could not be mapped onto the storage schema.
    #[error(transparent)]
    Record(#[from] ProductRecordError),
    /// The store rejected the write.
    #[error("store write failed: {0}")]
    StoreWrite(#[from] RepositoryError),
}

/// Convenient alias for results returned from service functions.
pub type ServiceResult<T> = Result<T, SyncError>;
