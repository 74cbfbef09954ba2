use log::debug;
use num_traits::Zero;
use rust_decimal::Decimal;
use std::sync::Arc;

use crate::distributions::{DistributionRepositoryTrait, PayoutStatus};
use crate::investments::InvestmentRepositoryTrait;
use crate::investors::investors_errors::InvestorError;
use crate::investors::investors_model::{Investor, InvestorPerformance, NewInvestor};
use crate::investors::investors_traits::{InvestorRepositoryTrait, InvestorServiceTrait};
use crate::Result;

/// Service for managing investors and their aggregate stats.
pub struct InvestorService {
    investor_repository: Arc<dyn InvestorRepositoryTrait>,
    investment_repository: Arc<dyn InvestmentRepositoryTrait>,
    distribution_repository: Arc<dyn DistributionRepositoryTrait>,
}

impl InvestorService {
    /// Creates a new InvestorService instance with injected dependencies
    pub fn new(
        investor_repository: Arc<dyn InvestorRepositoryTrait>,
        investment_repository: Arc<dyn InvestmentRepositoryTrait>,
        distribution_repository: Arc<dyn DistributionRepositoryTrait>,
    ) -> Self {
        Self {
            investor_repository,
            investment_repository,
            distribution_repository,
        }
    }
}

impl InvestorServiceTrait for InvestorService {
    fn get_investor(&self, investor_id: &str) -> Result<Investor> {
        self.investor_repository
            .get_investor_by_id(investor_id)?
            .ok_or_else(|| {
                InvestorError::NotFound(format!("Investor '{}' not found", investor_id)).into()
            })
    }

    fn get_investors(&self) -> Result<Vec<Investor>> {
        self.investor_repository.get_investors()
    }

    fn create_investor(&self, new_investor: NewInvestor) -> Result<Investor> {
        self.investor_repository.create_investor(new_investor)
    }

    fn update_investor(&self, investor: Investor) -> Result<Investor> {
        self.investor_repository.update_investor(investor)
    }

    fn delete_investor(&self, investor_id: &str) -> Result<()> {
        self.investor_repository.delete_investor(investor_id)
    }

    fn get_investor_performance(&self, investor_id: &str) -> Result<InvestorPerformance> {
        debug!("Computing performance for investor '{}'", investor_id);
        let investments = self
            .investment_repository
            .get_investments_by_investor(investor_id)?;

        let mut performance = InvestorPerformance {
            investor_id: investor_id.to_string(),
            ..Default::default()
        };

        let mut weighted_roi_numerator = Decimal::ZERO;
        for entry in &investments {
            performance.total_invested += entry.investment_amount;
            performance.total_returned += entry.rental_income;
            if entry.is_active() {
                performance.active_investments += 1;
                performance.unrealized_profit += entry.unrealized_profit;
            } else {
                performance.completed_investments += 1;
            }
            weighted_roi_numerator += entry.roi * entry.investment_amount;
        }
        if !performance.total_invested.is_zero() {
            performance.weighted_roi = weighted_roi_numerator / performance.total_invested;
        }

        // Only paid-out payout lines count as returned capital.
        for distribution in self.distribution_repository.get_distributions()? {
            for payout in &distribution.distributions {
                if payout.investor_id == investor_id && payout.status == PayoutStatus::Paid {
                    performance.total_returned += payout.total_payout;
                }
            }
        }

        Ok(performance)
    }
}
