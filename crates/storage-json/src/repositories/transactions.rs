use std::sync::Arc;

use crate::repositories::Collection;
use crate::store::KeyValueStore;
use propfolio_core::constants::TRANSACTIONS_KEY;
use propfolio_core::transactions::{InvestorTransaction, TransactionRepositoryTrait};
use propfolio_core::Result;

/// Transaction repository over the key-value store.
pub struct KvTransactionRepository {
    collection: Collection<InvestorTransaction>,
}

impl KvTransactionRepository {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            collection: Collection::new(store, TRANSACTIONS_KEY),
        }
    }
}

impl TransactionRepositoryTrait for KvTransactionRepository {
    fn get_transaction(&self, transaction_id: &str) -> Result<Option<InvestorTransaction>> {
        Ok(self
            .collection
            .load()?
            .into_iter()
            .find(|t| t.id == transaction_id))
    }

    fn get_transactions(&self) -> Result<Vec<InvestorTransaction>> {
        self.collection.load()
    }

    fn get_transactions_by_property(
        &self,
        property_id: &str,
    ) -> Result<Vec<InvestorTransaction>> {
        Ok(self
            .collection
            .load()?
            .into_iter()
            .filter(|t| t.property_id == property_id)
            .collect())
    }

    fn get_transactions_by_investor(
        &self,
        investor_id: &str,
    ) -> Result<Vec<InvestorTransaction>> {
        Ok(self
            .collection
            .load()?
            .into_iter()
            .filter(|t| {
                t.investor_attributions
                    .iter()
                    .any(|a| a.investor_id == investor_id)
            })
            .collect())
    }

    fn save_transaction(&self, transaction: InvestorTransaction) -> Result<InvestorTransaction> {
        self.collection.mutate(|transactions| {
            match transactions.iter_mut().find(|t| t.id == transaction.id) {
                Some(existing) => *existing = transaction.clone(),
                None => transactions.push(transaction.clone()),
            }
            transaction
        })
    }

    fn delete_transaction(&self, transaction_id: &str) -> Result<()> {
        self.collection
            .mutate(|transactions| transactions.retain(|t| t.id != transaction_id))
    }
}
