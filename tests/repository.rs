use diesel::prelude::*;
use prom_sync::domain::product::{StoredProduct, to_stored_record};
use prom_sync::domain::types::ProductId;
use prom_sync::repository::{DieselRepository, ProductReader, ProductWriter};
use prom_sync::schema::products;

mod common;

fn stored(id: i64, name: &str, price: f64) -> StoredProduct {
    to_stored_record(&common::raw_product(id, name, price)).expect("valid product")
}

#[test]
fn upsert_is_visible_only_after_commit() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());

    let mut writer = repo.writer().expect("writer");
    writer
        .upsert_product(&stored(1, "Sencha", 120.0))
        .expect("upsert");
    assert_eq!(repo.count_products().expect("count"), 0);

    writer.commit().expect("commit");
    assert_eq!(repo.count_products().expect("count"), 1);
}

#[test]
fn upsert_overwrites_every_column_of_existing_row() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());
    let id = ProductId::new(42).unwrap();

    let mut writer = repo.writer().expect("writer");
    writer.upsert_product(&stored(42, "Old", 100.0)).expect("insert");
    writer.commit().expect("commit");

    let mut replacement = stored(42, "New", 80.0);
    replacement.sku = None;
    replacement.description_ua = None;
    writer.upsert_product(&replacement).expect("update");
    writer.commit().expect("commit");

    let rows: i64 = products::table
        .filter(products::id.eq(42))
        .count()
        .get_result(&mut test_db.pool().get().unwrap())
        .unwrap();
    assert_eq!(rows, 1);

    let product = repo.get_product_by_id(id).expect("read").expect("present");
    assert_eq!(product, replacement);
    assert_eq!(product.sku, None);
    assert_eq!(product.price, 80.0);
}

#[test]
fn dropped_writer_discards_uncommitted_rows() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());

    {
        let mut writer = repo.writer().expect("writer");
        writer.upsert_product(&stored(7, "Lost", 1.0)).expect("upsert");
    }

    assert_eq!(repo.count_products().expect("count"), 0);
}

#[test]
fn commit_without_writes_is_a_no_op() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());

    repo.writer().expect("writer").commit().expect("commit");

    assert!(repo.list_products().expect("list").is_empty());
}

#[test]
fn lists_products_ordered_by_id() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());

    let mut writer = repo.writer().expect("writer");
    for (id, name) in [(3, "c"), (2_679_771_757, "big"), (1, "a")] {
        writer.upsert_product(&stored(id, name, 10.0)).expect("upsert");
    }
    writer.commit().expect("commit");

    let ids: Vec<i64> = repo
        .list_products()
        .expect("list")
        .into_iter()
        .map(|p| p.id.get())
        .collect();
    assert_eq!(ids, vec![1, 3, 2_679_771_757]);
}

#[test]
fn stores_negative_prices() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());

    let mut writer = repo.writer().expect("writer");
    writer.upsert_product(&stored(5, "Oversold", -15.0)).expect("upsert");
    writer.commit().expect("commit");

    let product = repo
        .get_product_by_id(ProductId::new(5).unwrap())
        .expect("read")
        .expect("present");
    assert_eq!(product.price, -15.0);
}
