//! Distributions module - sale payout calculator, models, and traits.

mod distributions_errors;
mod distributions_model;
mod distributions_service;
mod distributions_traits;


pub use distributions_errors::DistributionError;
pub use distributions_model::{
    DistributionStatus, InvestorPayout, PayoutStatus, ProfitDistribution,
};
pub use distributions_service::DistributionService;
pub use distributions_traits::{DistributionRepositoryTrait, DistributionServiceTrait};
