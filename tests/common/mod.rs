//! Helpers for integration tests.

use prom_sync::db::{DbPool, establish_connection_pool, run_migrations};
use prom_sync::domain::product::RawProduct;
use serde_json::json;
use tempfile::NamedTempFile;

/// Temporary database used in integration tests.
pub struct TestDb {
    _tempfile: NamedTempFile,
    pool: DbPool,
}

impl TestDb {
    pub fn new() -> Self {
        let tempfile = NamedTempFile::new().expect("Failed to create temp file");
        let pool = establish_connection_pool(tempfile.path().to_str().unwrap())
            .expect("Failed to establish SQLite connection.");
        run_migrations(&pool).expect("Migrations failed");
        TestDb {
            _tempfile: tempfile,
            pool,
        }
    }

    pub fn pool(&self) -> DbPool {
        self.pool.clone()
    }
}

/// A complete listing record with no discount.
#[allow(dead_code)]
pub fn raw_product(id: i64, name: &str, price: f64) -> RawProduct {
    serde_json::from_value(json!({
        "id": id,
        "sku": format!("SKU-{id}"),
        "main_image": format!("https://images.example.com/{id}.png"),
        "name_multilang": {"ru": name, "uk": name},
        "description_multilang": {"ru": "описание", "uk": "опис"},
        "keywords": "tea, green",
        "status": "on_display",
        "price": price,
        "discount": null
    }))
    .expect("valid raw product")
}
