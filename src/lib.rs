//! Core library exports for the catalog synchronizer.
//!
//! This crate exposes the domain model, Diesel persistence layer, the
//! catalog HTTP client and the synchronization service used by the
//! `prom-sync` binary.

#[cfg(feature = "data")]
pub mod db;
#[cfg(feature = "data")]
pub mod domain;
#[cfg(feature = "data")]
pub mod error_conversions;
#[cfg(feature = "data")]
pub mod models;
#[cfg(feature = "data")]
pub mod repository;
#[cfg(feature = "data")]
pub mod schema;

#[cfg(feature = "sync")]
pub mod client;
#[cfg(feature = "sync")]
pub mod services;
