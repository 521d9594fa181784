use config::{Config, Environment, File};
use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

/// Location of the optional YAML defaults, relative to the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "config/default";

const DEFAULT_DATABASE_URL: &str = "data/application.db";
const DEFAULT_REQUEST_TIMEOUT_SECS: i64 = 60;

/// Errors produced while assembling [`SyncConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A source could not be read or a required key was missing.
    #[error("failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),
    /// Values were present but failed validation.
    #[error("invalid configuration: {0}")]
    Invalid(#[from] ValidationErrors),
}

/// Configuration options for a synchronization run.
///
/// Built once at startup and passed by reference to the components that need
/// it: the HTTP client uses `auth_token`, `host` and `request_timeout_secs`,
/// the store uses `database_url`.
#[derive(Clone, Debug, Deserialize, Validate)]
pub struct SyncConfig {
    /// Bearer token for the catalog API.
    #[validate(length(min = 1))]
    pub auth_token: String,
    /// Shop host, e.g. `my.prom.ua`. A value with a scheme is used verbatim.
    #[validate(length(min = 1))]
    pub host: String,
    /// Path of the SQLite database file.
    #[validate(length(min = 1))]
    pub database_url: String,
    /// Timeout applied to each HTTP request.
    #[validate(range(min = 1))]
    pub request_timeout_secs: u64,
}

impl SyncConfig {
    /// Load configuration from `path` (YAML, optional) and the process
    /// environment. Environment variables win over file values.
    pub fn load(path: &str) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .set_default("database_url", DEFAULT_DATABASE_URL)?
            .set_default("request_timeout_secs", DEFAULT_REQUEST_TIMEOUT_SECS)?
            .add_source(File::with_name(path).required(false))
            .add_source(Environment::default().try_parsing(true))
            .build()?;

        Self::from_settings(settings)
    }

    /// Deserialize and validate an already assembled [`Config`].
    pub fn from_settings(settings: Config) -> Result<Self, ConfigError> {
        let config: SyncConfig = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Base URL of the catalog API without a trailing slash.
    pub fn api_base_url(&self) -> String {
        let host = self.host.trim().trim_end_matches('/');
        if host.starts_with("http://") || host.starts_with("https://") {
            host.to_string()
        } else {
            format!("https://{host}")
        }
    }
}
