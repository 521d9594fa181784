//! Domain entities and value objects for catalog synchronization.

pub mod discount;
pub mod product;
pub mod types;
