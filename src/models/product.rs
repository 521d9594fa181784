use diesel::prelude::*;

use crate::domain::product::StoredProduct;
use crate::domain::types::{ProductId, ProductPrice, TypeConstraintError};

/// Diesel representation of a row in the `Products` table.
#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::products)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Product {
    pub id: i64,
    pub sku: Option<String>,
    pub image_url: Option<String>,
    pub name_ru: String,
    pub name_ua: String,
    pub keywords: Option<String>,
    pub description_ru: Option<String>,
    pub description_ua: Option<String>,
    pub status: String,
    pub price: f64,
}

/// Values written by an upsert. `None` overwrites the column with `NULL`.
#[derive(Debug, Clone, Insertable, AsChangeset)]
#[diesel(table_name = crate::schema::products)]
#[diesel(treat_none_as_null = true)]
pub struct NewProduct {
    pub id: i64,
    pub sku: Option<String>,
    pub image_url: Option<String>,
    pub name_ru: String,
    pub name_ua: String,
    pub keywords: Option<String>,
    pub description_ru: Option<String>,
    pub description_ua: Option<String>,
    pub status: String,
    pub price: f64,
}

impl TryFrom<Product> for StoredProduct {
    type Error = TypeConstraintError;

    fn try_from(product: Product) -> Result<Self, Self::Error> {
        Ok(Self {
            id: ProductId::new(product.id)?,
            sku: product.sku,
            image_url: product.image_url,
            name_ru: product.name_ru,
            name_ua: product.name_ua,
            keywords: product.keywords,
            description_ru: product.description_ru,
            description_ua: product.description_ua,
            status: product.status,
            price: ProductPrice::new(product.price)?,
        })
    }
}

impl From<&StoredProduct> for NewProduct {
    fn from(product: &StoredProduct) -> Self {
        Self {
            id: product.id.get(),
            sku: product.sku.clone(),
            image_url: product.image_url.clone(),
            name_ru: product.name_ru.clone(),
            name_ua: product.name_ua.clone(),
            keywords: product.keywords.clone(),
            description_ru: product.description_ru.clone(),
            description_ua: product.description_ua.clone(),
            status: product.status.clone(),
            price: product.price.get(),
        }
    }
}
