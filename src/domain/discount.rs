//! Discount rules applied to catalog base prices.

use serde::{Deserialize, Serialize};

use crate::domain::product::ProductRecordError;

/// Discount descriptor as it appears in the listing payload.
///
/// Both fields are optional so that an incomplete descriptor surfaces as a
/// per-record error instead of failing the whole listing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct RawDiscount {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub value: Option<f64>,
}

/// A recognised discount rule.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Discount {
    /// Reduce the price by `value` percent.
    Percent(f64),
    /// Subtract a fixed amount.
    Amount(f64),
}

impl Discount {
    /// Apply the rule to `base_price`. The result is not clamped at zero.
    pub fn apply(self, base_price: f64) -> f64 {
        match self {
            Discount::Percent(value) => base_price * (1.0 - value / 100.0),
            Discount::Amount(value) => base_price - value,
        }
    }
}

impl TryFrom<&RawDiscount> for Discount {
    type Error = ProductRecordError;

    fn try_from(raw: &RawDiscount) -> Result<Self, Self::Error> {
        let kind = raw
            .kind
            .as_deref()
            .ok_or(ProductRecordError::MalformedRecord("discount.type"))?;
        let value = raw
            .value
            .ok_or(ProductRecordError::MalformedRecord("discount.value"))?;

        match kind {
            "percent" => Ok(Discount::Percent(value)),
            "amount" => Ok(Discount::Amount(value)),
            other => Err(ProductRecordError::UnsupportedDiscountKind(
                other.to_string(),
            )),
        }
    }
}

/// Compute the effective sale price of a product.
pub fn compute_price(base_price: f64, discount: Option<Discount>) -> f64 {
    match discount {
        Some(discount) => discount.apply(base_price),
        None => base_price,
    }
}
