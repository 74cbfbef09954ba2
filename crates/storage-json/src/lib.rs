//! Propfolio JSON storage - key-value persistence and repositories.
//!
//! The durable store is a set of JSON documents, one whole collection per
//! key (last-writer-wins, no cross-process coordination). This crate
//! provides the `KeyValueStore` abstraction, an in-memory implementation
//! for tests, a file-backed implementation for production, and
//! implementations of every repository trait `propfolio-core` defines.

mod file_store;
mod repositories;
mod store;

pub use file_store::JsonFileStore;
pub use repositories::{
    KvDistributionRepository, KvInvestmentRepository, KvInvestorRepository,
    KvPropertyRepository, KvTransactionRepository,
};
pub use store::{KeyValueStore, MemoryStore, ScopedStore};
