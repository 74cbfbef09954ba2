//! Propfolio Core - Domain entities, services, and traits.
//!
//! This crate contains the investor ledger, transaction attribution,
//! and profit distribution logic for Propfolio. It is storage-agnostic
//! and defines repository traits that are implemented by the
//! `storage-json` crate.

pub mod allocation;
pub mod constants;
pub mod distributions;
pub mod errors;
pub mod investments;
pub mod investors;
pub mod properties;
pub mod reports;
pub mod transactions;

#[cfg(test)]
pub(crate) mod test_support;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
