//! Transactions module - recorder, reversal engine, models, and traits.

mod posting;
mod transactions_errors;
mod transactions_model;
mod transactions_service;
mod transactions_traits;

#[cfg(test)]
mod posting_tests;


pub use posting::{apply_attribution, reverse_attribution};
pub use transactions_errors::TransactionError;
pub use transactions_model::{
    InvestorAttribution, InvestorTransaction, NewTransaction, RecordedTransaction,
    TransactionType, TransactionUpdate,
};
pub use transactions_service::TransactionService;
pub use transactions_traits::{TransactionRepositoryTrait, TransactionServiceTrait};
