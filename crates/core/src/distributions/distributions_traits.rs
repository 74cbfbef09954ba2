use crate::errors::Result;
use crate::distributions::distributions_model::{PayoutStatus, ProfitDistribution};

/// Trait defining the contract for distribution repository operations.
pub trait DistributionRepositoryTrait: Send + Sync {
    fn get_distribution(&self, distribution_id: &str) -> Result<Option<ProfitDistribution>>;
    fn get_distributions(&self) -> Result<Vec<ProfitDistribution>>;
    fn get_distribution_by_property(&self, property_id: &str)
        -> Result<Option<ProfitDistribution>>;
    fn save_distribution(&self, distribution: ProfitDistribution) -> Result<ProfitDistribution>;
}

/// Trait defining the contract for distribution service operations.
pub trait DistributionServiceTrait: Send + Sync {
    fn get_distribution(&self, distribution_id: &str) -> Result<ProfitDistribution>;
    fn get_distribution_by_property(&self, property_id: &str)
        -> Result<Option<ProfitDistribution>>;
    /// Computes and stores the terminal payout for a sold property.
    ///
    /// Returns `Ok(None)` without creating anything when the property is
    /// ineligible or already distributed; designed to be called
    /// speculatively from broader save flows.
    fn create_distribution_for_sale(
        &self,
        property_id: &str,
        transaction_id: Option<String>,
        calculated_by: &str,
    ) -> Result<Option<ProfitDistribution>>;
    /// Advances one payout line's payment status.
    fn update_payout_status(
        &self,
        distribution_id: &str,
        investor_id: &str,
        status: PayoutStatus,
    ) -> Result<ProfitDistribution>;
}
