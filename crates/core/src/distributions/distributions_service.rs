use chrono::Utc;
use log::debug;
use num_traits::Zero;
use rust_decimal::Decimal;
use std::sync::Arc;
use uuid::Uuid;

use crate::constants::DECIMAL_PRECISION;
use crate::distributions::distributions_errors::DistributionError;
use crate::distributions::distributions_model::*;
use crate::distributions::distributions_traits::{
    DistributionRepositoryTrait, DistributionServiceTrait,
};
use crate::investments::InvestmentRepositoryTrait;
use crate::properties::PropertyRepositoryTrait;
use crate::Result;

/// Service computing the terminal payout when a property sells.
///
/// Eligibility failures are silent no-ops rather than errors: callers
/// invoke this speculatively from broader save flows, so only genuinely
/// broken inputs surface as `Err`.
pub struct DistributionService {
    distribution_repository: Arc<dyn DistributionRepositoryTrait>,
    investment_repository: Arc<dyn InvestmentRepositoryTrait>,
    property_repository: Arc<dyn PropertyRepositoryTrait>,
}

impl DistributionService {
    /// Creates a new DistributionService instance with injected dependencies
    pub fn new(
        distribution_repository: Arc<dyn DistributionRepositoryTrait>,
        investment_repository: Arc<dyn InvestmentRepositoryTrait>,
        property_repository: Arc<dyn PropertyRepositoryTrait>,
    ) -> Self {
        Self {
            distribution_repository,
            investment_repository,
            property_repository,
        }
    }
}

impl DistributionServiceTrait for DistributionService {
    fn get_distribution(&self, distribution_id: &str) -> Result<ProfitDistribution> {
        self.distribution_repository
            .get_distribution(distribution_id)?
            .ok_or_else(|| {
                DistributionError::NotFound(format!(
                    "Distribution '{}' not found",
                    distribution_id
                ))
                .into()
            })
    }

    fn get_distribution_by_property(
        &self,
        property_id: &str,
    ) -> Result<Option<ProfitDistribution>> {
        self.distribution_repository
            .get_distribution_by_property(property_id)
    }

    fn create_distribution_for_sale(
        &self,
        property_id: &str,
        transaction_id: Option<String>,
        calculated_by: &str,
    ) -> Result<Option<ProfitDistribution>> {
        let Some(property) = self.property_repository.get_property_by_id(property_id)? else {
            debug!("Skipping distribution: property '{}' not found", property_id);
            return Ok(None);
        };

        if !property.is_investor_funded() || !property.is_sold() {
            debug!(
                "Skipping distribution for property '{}': not an investor-funded sale",
                property_id
            );
            return Ok(None);
        }
        let Some(final_sale_price) = property.final_sale_price else {
            debug!(
                "Skipping distribution for property '{}': no recorded sale price",
                property_id
            );
            return Ok(None);
        };
        if property.total_cost_basis.is_zero() {
            debug!(
                "Skipping distribution for property '{}': no recorded cost basis",
                property_id
            );
            return Ok(None);
        }

        // At-most-once creation.
        if self
            .distribution_repository
            .get_distribution_by_property(property_id)?
            .is_some()
        {
            debug!(
                "Skipping distribution for property '{}': already distributed",
                property_id
            );
            return Ok(None);
        }

        let active_investments: Vec<_> = self
            .investment_repository
            .get_investments_by_property(property_id)?
            .into_iter()
            .filter(|entry| entry.is_active())
            .collect();
        if active_investments.is_empty() {
            debug!(
                "Skipping distribution for property '{}': no active investments",
                property_id
            );
            return Ok(None);
        }

        let commission_earned = property.commission_earned.unwrap_or(Decimal::ZERO);
        let total_net_profit = final_sale_price - property.total_cost_basis - commission_earned;

        let mut payouts = Vec::with_capacity(active_investments.len());
        for entry in &active_investments {
            let profit_amount = (total_net_profit * entry.profit_share_percentage
                / Decimal::ONE_HUNDRED)
                .round_dp(DECIMAL_PRECISION);
            payouts.push(InvestorPayout {
                investor_id: entry.investor_id.clone(),
                share_percentage: entry.profit_share_percentage,
                investment_amount: entry.investment_amount,
                profit_amount,
                total_payout: entry.investment_amount + profit_amount,
                status: PayoutStatus::Pending,
            });
        }

        let now = Utc::now();
        let distribution = ProfitDistribution {
            id: Uuid::new_v4().to_string(),
            property_id: property_id.to_string(),
            transaction_id,
            final_sale_price,
            total_cost_basis: property.total_cost_basis,
            commission_earned,
            total_net_profit,
            distributions: payouts,
            status: DistributionStatus::Calculated,
            calculated_by: calculated_by.to_string(),
            created_at: now,
            updated_at: now,
        };
        let distribution = self
            .distribution_repository
            .save_distribution(distribution)?;

        // Freeze the ledger: the sale fixes each entry's realized return.
        for mut entry in active_investments {
            let payout = distribution
                .distributions
                .iter()
                .find(|p| p.investor_id == entry.investor_id)
                .map(|p| p.total_payout)
                .unwrap_or(Decimal::ZERO);
            entry.complete(payout);
            self.investment_repository.upsert_investment(entry)?;
        }

        debug!(
            "Created distribution '{}' for property '{}' (net profit {})",
            distribution.id, property_id, total_net_profit
        );
        Ok(Some(distribution))
    }

    fn update_payout_status(
        &self,
        distribution_id: &str,
        investor_id: &str,
        status: PayoutStatus,
    ) -> Result<ProfitDistribution> {
        let mut distribution = self.get_distribution(distribution_id)?;
        let line = distribution
            .distributions
            .iter_mut()
            .find(|p| p.investor_id == investor_id)
            .ok_or_else(|| {
                DistributionError::NotFound(format!(
                    "No payout line for investor '{}' in distribution '{}'",
                    investor_id, distribution_id
                ))
            })?;
        line.status = status;
        distribution.updated_at = Utc::now();
        self.distribution_repository.save_distribution(distribution)
    }
}
