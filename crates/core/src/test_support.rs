//! In-memory repository doubles shared by the service unit tests.

use std::sync::{Arc, Mutex};

use chrono::Utc;
use rust_decimal::Decimal;

use crate::distributions::{DistributionRepositoryTrait, ProfitDistribution};
use crate::investments::{InvestmentRepositoryTrait, PropertyInvestment};
use crate::investors::{Investor, InvestorRepositoryTrait, NewInvestor};
use crate::properties::{
    AcquisitionMethod, InvestorShare, Property, PropertyRepositoryTrait, PropertyStatus,
};
use crate::transactions::{InvestorTransaction, TransactionRepositoryTrait};
use crate::Result;

#[derive(Clone, Default)]
pub(crate) struct MockPropertyRepository {
    properties: Arc<Mutex<Vec<Property>>>,
}

impl MockPropertyRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&self, property: Property) {
        self.properties.lock().unwrap().push(property);
    }
}

impl PropertyRepositoryTrait for MockPropertyRepository {
    fn get_property_by_id(&self, property_id: &str) -> Result<Option<Property>> {
        Ok(self
            .properties
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.id == property_id)
            .cloned())
    }

    fn get_properties(&self) -> Result<Vec<Property>> {
        Ok(self.properties.lock().unwrap().clone())
    }

    fn save_property(&self, property: Property) -> Result<Property> {
        let mut properties = self.properties.lock().unwrap();
        properties.retain(|p| p.id != property.id);
        properties.push(property.clone());
        Ok(property)
    }

    fn delete_property(&self, property_id: &str) -> Result<()> {
        self.properties
            .lock()
            .unwrap()
            .retain(|p| p.id != property_id);
        Ok(())
    }
}

#[derive(Clone, Default)]
pub(crate) struct MockInvestmentRepository {
    investments: Arc<Mutex<Vec<PropertyInvestment>>>,
}

impl MockInvestmentRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&self, investment: PropertyInvestment) {
        self.investments.lock().unwrap().push(investment);
    }

    pub fn all(&self) -> Vec<PropertyInvestment> {
        self.investments.lock().unwrap().clone()
    }
}

impl InvestmentRepositoryTrait for MockInvestmentRepository {
    fn get_investment(&self, investment_id: &str) -> Result<Option<PropertyInvestment>> {
        Ok(self
            .investments
            .lock()
            .unwrap()
            .iter()
            .find(|i| i.id == investment_id)
            .cloned())
    }

    fn get_investments(&self) -> Result<Vec<PropertyInvestment>> {
        Ok(self.investments.lock().unwrap().clone())
    }

    fn get_investments_by_property(&self, property_id: &str) -> Result<Vec<PropertyInvestment>> {
        Ok(self
            .investments
            .lock()
            .unwrap()
            .iter()
            .filter(|i| i.property_id == property_id)
            .cloned()
            .collect())
    }

    fn get_investments_by_investor(&self, investor_id: &str) -> Result<Vec<PropertyInvestment>> {
        Ok(self
            .investments
            .lock()
            .unwrap()
            .iter()
            .filter(|i| i.investor_id == investor_id)
            .cloned()
            .collect())
    }

    fn find_active_investment(
        &self,
        property_id: &str,
        investor_id: &str,
    ) -> Result<Option<PropertyInvestment>> {
        Ok(self
            .investments
            .lock()
            .unwrap()
            .iter()
            .find(|i| {
                i.property_id == property_id && i.investor_id == investor_id && i.is_active()
            })
            .cloned())
    }

    fn upsert_investment(&self, investment: PropertyInvestment) -> Result<PropertyInvestment> {
        let mut investments = self.investments.lock().unwrap();
        if let Some(existing) = investments.iter_mut().find(|i| i.id == investment.id) {
            *existing = investment.clone();
        } else {
            investments.push(investment.clone());
        }
        Ok(investment)
    }

    fn upsert_investments(&self, batch: Vec<PropertyInvestment>) -> Result<usize> {
        let count = batch.len();
        for investment in batch {
            self.upsert_investment(investment)?;
        }
        Ok(count)
    }

    fn delete_investment(&self, investment_id: &str) -> Result<()> {
        self.investments
            .lock()
            .unwrap()
            .retain(|i| i.id != investment_id);
        Ok(())
    }

    fn delete_investments_by_property(&self, property_id: &str) -> Result<usize> {
        let mut investments = self.investments.lock().unwrap();
        let before = investments.len();
        investments.retain(|i| i.property_id != property_id);
        Ok(before - investments.len())
    }
}

#[derive(Clone, Default)]
pub(crate) struct MockTransactionRepository {
    transactions: Arc<Mutex<Vec<InvestorTransaction>>>,
}

impl MockTransactionRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&self, transaction: InvestorTransaction) {
        self.transactions.lock().unwrap().push(transaction);
    }

    pub fn all(&self) -> Vec<InvestorTransaction> {
        self.transactions.lock().unwrap().clone()
    }
}

impl TransactionRepositoryTrait for MockTransactionRepository {
    fn get_transaction(&self, transaction_id: &str) -> Result<Option<InvestorTransaction>> {
        Ok(self
            .transactions
            .lock()
            .unwrap()
            .iter()
            .find(|t| t.id == transaction_id)
            .cloned())
    }

    fn get_transactions(&self) -> Result<Vec<InvestorTransaction>> {
        Ok(self.transactions.lock().unwrap().clone())
    }

    fn get_transactions_by_property(
        &self,
        property_id: &str,
    ) -> Result<Vec<InvestorTransaction>> {
        Ok(self
            .transactions
            .lock()
            .unwrap()
            .iter()
            .filter(|t| t.property_id == property_id)
            .cloned()
            .collect())
    }

    fn get_transactions_by_investor(
        &self,
        investor_id: &str,
    ) -> Result<Vec<InvestorTransaction>> {
        Ok(self
            .transactions
            .lock()
            .unwrap()
            .iter()
            .filter(|t| {
                t.investor_attributions
                    .iter()
                    .any(|a| a.investor_id == investor_id)
            })
            .cloned()
            .collect())
    }

    fn save_transaction(&self, transaction: InvestorTransaction) -> Result<InvestorTransaction> {
        let mut transactions = self.transactions.lock().unwrap();
        transactions.retain(|t| t.id != transaction.id);
        transactions.push(transaction.clone());
        Ok(transaction)
    }

    fn delete_transaction(&self, transaction_id: &str) -> Result<()> {
        self.transactions
            .lock()
            .unwrap()
            .retain(|t| t.id != transaction_id);
        Ok(())
    }
}

#[derive(Clone, Default)]
pub(crate) struct MockDistributionRepository {
    distributions: Arc<Mutex<Vec<ProfitDistribution>>>,
}

impl MockDistributionRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn all(&self) -> Vec<ProfitDistribution> {
        self.distributions.lock().unwrap().clone()
    }
}

impl DistributionRepositoryTrait for MockDistributionRepository {
    fn get_distribution(&self, distribution_id: &str) -> Result<Option<ProfitDistribution>> {
        Ok(self
            .distributions
            .lock()
            .unwrap()
            .iter()
            .find(|d| d.id == distribution_id)
            .cloned())
    }

    fn get_distributions(&self) -> Result<Vec<ProfitDistribution>> {
        Ok(self.distributions.lock().unwrap().clone())
    }

    fn get_distribution_by_property(
        &self,
        property_id: &str,
    ) -> Result<Option<ProfitDistribution>> {
        Ok(self
            .distributions
            .lock()
            .unwrap()
            .iter()
            .find(|d| d.property_id == property_id)
            .cloned())
    }

    fn save_distribution(&self, distribution: ProfitDistribution) -> Result<ProfitDistribution> {
        let mut distributions = self.distributions.lock().unwrap();
        distributions.retain(|d| d.id != distribution.id);
        distributions.push(distribution.clone());
        Ok(distribution)
    }
}

#[derive(Clone, Default)]
pub(crate) struct MockInvestorRepository {
    investors: Arc<Mutex<Vec<Investor>>>,
}

impl MockInvestorRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl InvestorRepositoryTrait for MockInvestorRepository {
    fn get_investor_by_id(&self, investor_id: &str) -> Result<Option<Investor>> {
        Ok(self
            .investors
            .lock()
            .unwrap()
            .iter()
            .find(|i| i.id == investor_id)
            .cloned())
    }

    fn get_investors(&self) -> Result<Vec<Investor>> {
        Ok(self.investors.lock().unwrap().clone())
    }

    fn create_investor(&self, new_investor: NewInvestor) -> Result<Investor> {
        let investor = Investor::new(new_investor);
        self.investors.lock().unwrap().push(investor.clone());
        Ok(investor)
    }

    fn update_investor(&self, investor: Investor) -> Result<Investor> {
        let mut investors = self.investors.lock().unwrap();
        investors.retain(|i| i.id != investor.id);
        investors.push(investor.clone());
        Ok(investor)
    }

    fn delete_investor(&self, investor_id: &str) -> Result<()> {
        self.investors
            .lock()
            .unwrap()
            .retain(|i| i.id != investor_id);
        Ok(())
    }
}

/// An investor-funded property with equal shares for the given investors.
pub(crate) fn investor_funded_property(
    id: &str,
    cost_basis: Decimal,
    investor_ids: &[&str],
) -> Property {
    let share = Decimal::ONE_HUNDRED / Decimal::from(investor_ids.len() as u64);
    let now = Utc::now();
    Property {
        id: id.to_string(),
        name: format!("Property {}", id),
        acquisition_method: AcquisitionMethod::InvestorFunded,
        status: PropertyStatus::Active,
        total_cost_basis: cost_basis,
        investor_shares: investor_ids
            .iter()
            .map(|investor_id| InvestorShare {
                investor_id: investor_id.to_string(),
                share_percentage: share,
            })
            .collect(),
        final_sale_price: None,
        commission_earned: None,
        created_at: now,
        updated_at: now,
    }
}
