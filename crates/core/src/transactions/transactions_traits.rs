use crate::errors::Result;
use crate::transactions::transactions_model::{
    InvestorTransaction, NewTransaction, RecordedTransaction, TransactionUpdate,
};

/// Trait defining the contract for transaction repository operations.
pub trait TransactionRepositoryTrait: Send + Sync {
    fn get_transaction(&self, transaction_id: &str) -> Result<Option<InvestorTransaction>>;
    fn get_transactions(&self) -> Result<Vec<InvestorTransaction>>;
    fn get_transactions_by_property(&self, property_id: &str)
        -> Result<Vec<InvestorTransaction>>;
    /// Transactions carrying an attribution for the given investor.
    fn get_transactions_by_investor(&self, investor_id: &str)
        -> Result<Vec<InvestorTransaction>>;
    fn save_transaction(&self, transaction: InvestorTransaction) -> Result<InvestorTransaction>;
    fn delete_transaction(&self, transaction_id: &str) -> Result<()>;
}

/// Trait defining the contract for transaction service operations.
pub trait TransactionServiceTrait: Send + Sync {
    fn get_transaction(&self, transaction_id: &str) -> Result<InvestorTransaction>;
    fn get_transactions_by_property(&self, property_id: &str)
        -> Result<Vec<InvestorTransaction>>;
    fn get_transactions_by_investor(&self, investor_id: &str)
        -> Result<Vec<InvestorTransaction>>;
    /// Records an economic event and fans it out to every investor holding
    /// a share of the property. Fails loudly for ineligible properties.
    fn record_transaction(&self, new_transaction: NewTransaction) -> Result<RecordedTransaction>;
    /// Reverses the prior ledger impact, then reapplies the corrected
    /// amounts with attributions recomputed from current shares.
    fn update_transaction(&self, update: TransactionUpdate) -> Result<RecordedTransaction>;
    /// Reverses the ledger impact, then discards the transaction.
    /// `warnings` surfaces attributions with no active entry to reverse
    /// against, as record and update do.
    fn delete_transaction(&self, transaction_id: &str) -> Result<RecordedTransaction>;
}
