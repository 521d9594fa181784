use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::{StatusCode, Url};
use reqwest::header::CONTENT_TYPE;

use crate::client::{ClientError, FetchError, FetchResult, ProductFetcher};
use crate::domain::product::{ProductListing, RawRecord};
use crate::models::config::SyncConfig;

const PRODUCTS_LIST_PATH: &str = "/api/v1/products/list";

/// Blocking client for the prom.ua products API.
pub struct PromClient {
    http: Client,
    base_url: String,
    auth_token: String,
}

impl PromClient {
    /// Build a client from the run configuration.
    ///
    /// Fails when the configured host does not form a valid URL.
    pub fn new(config: &SyncConfig) -> Result<Self, ClientError> {
        let base_url = config.api_base_url();
        Url::parse(&base_url).map_err(|e| ClientError::InvalidBaseUrl {
            url: base_url.clone(),
            reason: e.to_string(),
        })?;

        let http = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url,
            auth_token: config.auth_token.clone(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl ProductFetcher for PromClient {
    fn fetch_all(&self) -> FetchResult<Vec<RawRecord>> {
        let url = self.url(PRODUCTS_LIST_PATH);
        log::debug!("GET {url}");

        let transport = |source| FetchError::Transport {
            url: url.clone(),
            source,
        };

        let response = self
            .http
            .get(&url)
            .bearer_auth(&self.auth_token)
            .header(CONTENT_TYPE, "application/json")
            .send()
            .map_err(transport)?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(FetchError::Status {
                url: url.clone(),
                status: status.as_u16(),
            });
        }

        let body = response.text().map_err(transport)?;
        let listing: ProductListing =
            serde_json::from_str(&body).map_err(|source| FetchError::Decode {
                url: url.clone(),
                source,
            })?;

        log::debug!("Fetched {} products from {url}", listing.products.len());
        Ok(listing.products)
    }
}
