//! Investors module - domain models, services, and traits.

mod investors_errors;
mod investors_model;
mod investors_service;
mod investors_traits;


pub use investors_errors::InvestorError;
pub use investors_model::{Investor, InvestorPerformance, NewInvestor};
pub use investors_service::InvestorService;
pub use investors_traits::{InvestorRepositoryTrait, InvestorServiceTrait};
