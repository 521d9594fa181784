//! Access to the remote product catalog.

use thiserror::Error;

use crate::domain::product::RawRecord;

pub mod prom;

pub use prom::PromClient;

/// Reasons the product listing could not be retrieved.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The request never produced a response.
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    /// The server answered with something other than `200 OK`.
    #[error("request to {url} returned status {status}")]
    Status { url: String, status: u16 },
    /// The body was not a `{"products": [...]}` envelope.
    #[error("invalid product listing from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

pub type FetchResult<T> = Result<T, FetchError>;

/// Reasons a client could not be constructed from the configuration.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The configured host does not form a valid URL.
    #[error("invalid API base URL `{url}`: {reason}")]
    InvalidBaseUrl { url: String, reason: String },
    /// The HTTP client itself could not be initialised.
    #[error("cannot build HTTP client: {0}")]
    Build(#[from] reqwest::Error),
}

/// Source of the full product listing.
pub trait ProductFetcher {
    /// Retrieve every listing entry in order, still undecoded.
    fn fetch_all(&self) -> FetchResult<Vec<RawRecord>>;
}

impl<F> ProductFetcher for F
where
    F: Fn() -> FetchResult<Vec<RawRecord>>,
{
    fn fetch_all(&self) -> FetchResult<Vec<RawRecord>> {
        self()
    }
}
