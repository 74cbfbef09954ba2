use std::sync::Arc;

use crate::repositories::Collection;
use crate::store::KeyValueStore;
use propfolio_core::constants::DISTRIBUTIONS_KEY;
use propfolio_core::distributions::{DistributionRepositoryTrait, ProfitDistribution};
use propfolio_core::Result;

/// Distribution repository over the key-value store.
pub struct KvDistributionRepository {
    collection: Collection<ProfitDistribution>,
}

impl KvDistributionRepository {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            collection: Collection::new(store, DISTRIBUTIONS_KEY),
        }
    }
}

impl DistributionRepositoryTrait for KvDistributionRepository {
    fn get_distribution(&self, distribution_id: &str) -> Result<Option<ProfitDistribution>> {
        Ok(self
            .collection
            .load()?
            .into_iter()
            .find(|d| d.id == distribution_id))
    }

    fn get_distributions(&self) -> Result<Vec<ProfitDistribution>> {
        self.collection.load()
    }

    fn get_distribution_by_property(
        &self,
        property_id: &str,
    ) -> Result<Option<ProfitDistribution>> {
        Ok(self
            .collection
            .load()?
            .into_iter()
            .find(|d| d.property_id == property_id))
    }

    fn save_distribution(&self, distribution: ProfitDistribution) -> Result<ProfitDistribution> {
        self.collection.mutate(|distributions| {
            match distributions.iter_mut().find(|d| d.id == distribution.id) {
                Some(existing) => *existing = distribution.clone(),
                None => distributions.push(distribution.clone()),
            }
            distribution
        })
    }
}
