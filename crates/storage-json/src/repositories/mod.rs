//! Key-value-backed implementations of the core repository traits.

mod collection;
mod distributions;
mod investments;
mod investors;
mod properties;
mod transactions;

pub(crate) use collection::Collection;
pub use distributions::KvDistributionRepository;
pub use investments::KvInvestmentRepository;
pub use investors::KvInvestorRepository;
pub use properties::KvPropertyRepository;
pub use transactions::KvTransactionRepository;
