use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::domain::discount::{Discount, RawDiscount, compute_price};
use crate::domain::types::{ProductId, ProductPrice, TypeConstraintError};

/// Language key for Russian localized fields.
pub const LANG_RU: &str = "ru";
/// Language key for Ukrainian localized fields.
pub const LANG_UK: &str = "uk";

/// Errors raised while turning a single listing record into a [`StoredProduct`].
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ProductRecordError {
    /// A required field was absent from the record.
    #[error("malformed record: missing `{0}`")]
    MalformedRecord(&'static str),
    /// A field had the wrong JSON type, e.g. a string where a number belongs.
    #[error("malformed record: {0}")]
    InvalidType(String),
    /// The discount descriptor named a kind other than `percent` or `amount`.
    #[error("unsupported discount kind `{0}`")]
    UnsupportedDiscountKind(String),
    /// A field was present but violated a value constraint.
    #[error("invalid value: {0}")]
    InvalidValue(#[from] TypeConstraintError),
}

/// A single, still undecoded entry of the listing payload.
pub type RawRecord = Value;

/// A product as returned by the remote listing endpoint.
///
/// Every field is optional: completeness is checked by [`to_stored_record`].
/// Localized maps are keyed by language code and tolerate `null` values.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct RawProduct {
    pub id: Option<i64>,
    pub sku: Option<String>,
    pub main_image: Option<String>,
    pub name_multilang: Option<BTreeMap<String, Option<String>>>,
    pub keywords: Option<String>,
    pub description_multilang: Option<BTreeMap<String, Option<String>>>,
    pub status: Option<String>,
    pub price: Option<f64>,
    pub discount: Option<RawDiscount>,
}

impl RawProduct {
    /// Decode one listing entry. Type mismatches are confined to this record.
    pub fn from_record(record: RawRecord) -> Result<Self, ProductRecordError> {
        serde_json::from_value(record).map_err(|e| ProductRecordError::InvalidType(e.to_string()))
    }
}

/// Best-effort product identifier of an undecoded entry, for error reports.
pub fn record_id(record: &RawRecord) -> Option<i64> {
    record.get("id").and_then(Value::as_i64)
}

/// Envelope of the listing endpoint response.
///
/// Entries stay undecoded so that one bad record never prevents the rest of
/// the listing from being read.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProductListing {
    pub products: Vec<RawRecord>,
}

/// A product row as persisted in the local store.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StoredProduct {
    pub id: ProductId,
    pub sku: Option<String>,
    pub image_url: Option<String>,
    pub name_ru: String,
    pub name_ua: String,
    pub keywords: Option<String>,
    pub description_ru: Option<String>,
    pub description_ua: Option<String>,
    /// Stored exactly as received.
    pub status: String,
    /// Price after the discount has been applied.
    pub price: ProductPrice,
}

fn required<T>(value: Option<T>, field: &'static str) -> Result<T, ProductRecordError> {
    value.ok_or(ProductRecordError::MalformedRecord(field))
}

/// Project a raw listing record onto the flat storage schema.
///
/// Computes the effective price from `price` and `discount`, extracts the
/// Russian and Ukrainian names and descriptions, and passes the remaining
/// fields through untouched.
pub fn to_stored_record(raw: &RawProduct) -> Result<StoredProduct, ProductRecordError> {
    let id = ProductId::new(required(raw.id, "id")?)?;

    let names = required(raw.name_multilang.as_ref(), "name_multilang")?;
    let name_ru = required(names.get(LANG_RU).cloned().flatten(), "name_multilang.ru")?;
    let name_ua = required(names.get(LANG_UK).cloned().flatten(), "name_multilang.uk")?;

    // A description key must be present but its value may be null.
    let descriptions = required(raw.description_multilang.as_ref(), "description_multilang")?;
    let description_ru = required(descriptions.get(LANG_RU), "description_multilang.ru")?.clone();
    let description_ua = required(descriptions.get(LANG_UK), "description_multilang.uk")?.clone();

    let status = required(raw.status.clone(), "status")?;

    let base_price = required(raw.price, "price")?;
    let discount = raw.discount.as_ref().map(Discount::try_from).transpose()?;
    let price = ProductPrice::new(compute_price(base_price, discount))?;

    Ok(StoredProduct {
        id,
        sku: raw.sku.clone(),
        image_url: raw.main_image.clone(),
        name_ru,
        name_ua,
        keywords: raw.keywords.clone(),
        description_ru,
        description_ua,
        status,
        price,
    })
}
