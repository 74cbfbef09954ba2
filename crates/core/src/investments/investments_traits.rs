use crate::errors::Result;
use crate::investments::investments_model::PropertyInvestment;

/// Trait defining the contract for investment ledger repository operations.
///
/// Lookups by (property, investor) pair are the hot path: every transaction
/// fans out to one active entry per attributed investor.
pub trait InvestmentRepositoryTrait: Send + Sync {
    fn get_investment(&self, investment_id: &str) -> Result<Option<PropertyInvestment>>;
    fn get_investments(&self) -> Result<Vec<PropertyInvestment>>;
    fn get_investments_by_property(&self, property_id: &str) -> Result<Vec<PropertyInvestment>>;
    fn get_investments_by_investor(&self, investor_id: &str) -> Result<Vec<PropertyInvestment>>;
    /// Finds the single active entry for a (property, investor) pair.
    fn find_active_investment(
        &self,
        property_id: &str,
        investor_id: &str,
    ) -> Result<Option<PropertyInvestment>>;
    /// Inserts or replaces an entry by id.
    fn upsert_investment(&self, investment: PropertyInvestment) -> Result<PropertyInvestment>;
    /// Replaces every entry for the given investors of a property in one
    /// write. Entries for other properties are untouched.
    fn upsert_investments(&self, investments: Vec<PropertyInvestment>) -> Result<usize>;
    fn delete_investment(&self, investment_id: &str) -> Result<()>;
    /// Removes every entry for a property. Idempotent.
    fn delete_investments_by_property(&self, property_id: &str) -> Result<usize>;
}
