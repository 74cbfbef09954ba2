use std::sync::Arc;

use crate::repositories::Collection;
use crate::store::KeyValueStore;
use propfolio_core::constants::INVESTORS_KEY;
use propfolio_core::investors::{Investor, InvestorRepositoryTrait, NewInvestor};
use propfolio_core::Result;

/// Investor repository over the key-value store.
pub struct KvInvestorRepository {
    collection: Collection<Investor>,
}

impl KvInvestorRepository {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            collection: Collection::new(store, INVESTORS_KEY),
        }
    }
}

impl InvestorRepositoryTrait for KvInvestorRepository {
    fn get_investor_by_id(&self, investor_id: &str) -> Result<Option<Investor>> {
        Ok(self
            .collection
            .load()?
            .into_iter()
            .find(|i| i.id == investor_id))
    }

    fn get_investors(&self) -> Result<Vec<Investor>> {
        self.collection.load()
    }

    fn create_investor(&self, new_investor: NewInvestor) -> Result<Investor> {
        let investor = Investor::new(new_investor);
        self.collection.mutate(|investors| {
            investors.push(investor.clone());
            investor
        })
    }

    fn update_investor(&self, investor: Investor) -> Result<Investor> {
        self.collection.mutate(|investors| {
            match investors.iter_mut().find(|i| i.id == investor.id) {
                Some(existing) => *existing = investor.clone(),
                None => investors.push(investor.clone()),
            }
            investor
        })
    }

    fn delete_investor(&self, investor_id: &str) -> Result<()> {
        self.collection
            .mutate(|investors| investors.retain(|i| i.id != investor_id))
    }
}
