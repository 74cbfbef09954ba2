use std::sync::Arc;

use crate::repositories::Collection;
use crate::store::KeyValueStore;
use propfolio_core::constants::INVESTMENTS_KEY;
use propfolio_core::investments::{InvestmentRepositoryTrait, PropertyInvestment};
use propfolio_core::Result;

/// Investment ledger repository over the key-value store.
pub struct KvInvestmentRepository {
    collection: Collection<PropertyInvestment>,
}

impl KvInvestmentRepository {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            collection: Collection::new(store, INVESTMENTS_KEY),
        }
    }
}

impl InvestmentRepositoryTrait for KvInvestmentRepository {
    fn get_investment(&self, investment_id: &str) -> Result<Option<PropertyInvestment>> {
        Ok(self
            .collection
            .load()?
            .into_iter()
            .find(|i| i.id == investment_id))
    }

    fn get_investments(&self) -> Result<Vec<PropertyInvestment>> {
        self.collection.load()
    }

    fn get_investments_by_property(&self, property_id: &str) -> Result<Vec<PropertyInvestment>> {
        Ok(self
            .collection
            .load()?
            .into_iter()
            .filter(|i| i.property_id == property_id)
            .collect())
    }

    fn get_investments_by_investor(&self, investor_id: &str) -> Result<Vec<PropertyInvestment>> {
        Ok(self
            .collection
            .load()?
            .into_iter()
            .filter(|i| i.investor_id == investor_id)
            .collect())
    }

    fn find_active_investment(
        &self,
        property_id: &str,
        investor_id: &str,
    ) -> Result<Option<PropertyInvestment>> {
        Ok(self.collection.load()?.into_iter().find(|i| {
            i.property_id == property_id && i.investor_id == investor_id && i.is_active()
        }))
    }

    fn upsert_investment(&self, investment: PropertyInvestment) -> Result<PropertyInvestment> {
        self.collection.mutate(|investments| {
            match investments.iter_mut().find(|i| i.id == investment.id) {
                Some(existing) => *existing = investment.clone(),
                None => investments.push(investment.clone()),
            }
            investment
        })
    }

    fn upsert_investments(&self, batch: Vec<PropertyInvestment>) -> Result<usize> {
        self.collection.mutate(|investments| {
            let count = batch.len();
            for investment in batch {
                match investments.iter_mut().find(|i| i.id == investment.id) {
                    Some(existing) => *existing = investment,
                    None => investments.push(investment),
                }
            }
            count
        })
    }

    fn delete_investment(&self, investment_id: &str) -> Result<()> {
        self.collection
            .mutate(|investments| investments.retain(|i| i.id != investment_id))
    }

    fn delete_investments_by_property(&self, property_id: &str) -> Result<usize> {
        self.collection.mutate(|investments| {
            let before = investments.len();
            investments.retain(|i| i.property_id != property_id);
            before - investments.len()
        })
    }
}
