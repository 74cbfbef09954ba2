use crate::errors::Result;
use crate::investors::investors_model::{Investor, InvestorPerformance, NewInvestor};

/// Trait defining the contract for Investor repository operations.
pub trait InvestorRepositoryTrait: Send + Sync {
    fn get_investor_by_id(&self, investor_id: &str) -> Result<Option<Investor>>;
    fn get_investors(&self) -> Result<Vec<Investor>>;
    fn create_investor(&self, new_investor: NewInvestor) -> Result<Investor>;
    fn update_investor(&self, investor: Investor) -> Result<Investor>;
    fn delete_investor(&self, investor_id: &str) -> Result<()>;
}

/// Trait defining the contract for Investor service operations.
pub trait InvestorServiceTrait: Send + Sync {
    fn get_investor(&self, investor_id: &str) -> Result<Investor>;
    fn get_investors(&self) -> Result<Vec<Investor>>;
    fn create_investor(&self, new_investor: NewInvestor) -> Result<Investor>;
    fn update_investor(&self, investor: Investor) -> Result<Investor>;
    fn delete_investor(&self, investor_id: &str) -> Result<()>;
    /// Recomputes aggregate stats for one investor from the ledger and
    /// distribution stores.
    fn get_investor_performance(&self, investor_id: &str) -> Result<InvestorPerformance>;
}
