//! Investment ledger module - domain models and traits.

mod investments_errors;
mod investments_model;
mod investments_traits;

#[cfg(test)]
mod investments_model_tests;

pub use investments_errors::InvestmentError;
pub use investments_model::{InvestmentStatus, NewPropertyInvestment, PropertyInvestment};
pub use investments_traits::InvestmentRepositoryTrait;
