#![warn(missing_docs)]
#![doc = include_str!("../README.md")]

/// Core domain models for the product catalog.
///
/// The models in this module are plain data structures with no business
/// logic attached; persistence and transport concerns live in the adapter
/// crates.
pub mod models;

/// Interface traits for the product catalog.
///
/// These traits define the contract between the HTTP surface and the
/// storage adapter without naming a concrete implementation, so the store
/// can be swapped (or absent, in degraded mode) without touching the
/// route handlers.
pub mod ports;
