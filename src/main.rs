use std::process::ExitCode;

use prom_sync::models::config::{DEFAULT_CONFIG_PATH, SyncConfig};
use prom_sync::services::{SyncError, sync};

fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let config = match SyncConfig::load(DEFAULT_CONFIG_PATH) {
        Ok(config) => config,
        Err(e) => {
            log::error!("{}", SyncError::from(e));
            return ExitCode::FAILURE;
        }
    };

    match sync::run(&config) {
        Ok(report) => {
            if !report.is_clean() {
                log::warn!("{} products were skipped, see errors above", report.failed());
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("Synchronization aborted: {e}");
            ExitCode::FAILURE
        }
    }
}
