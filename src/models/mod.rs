//! Diesel row types and runtime configuration.

#[cfg(feature = "sync")]
pub mod config;
pub mod product;
