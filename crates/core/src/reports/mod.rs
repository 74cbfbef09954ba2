//! Reports module - read-only summaries over the transaction store.

mod reports_model;
mod reports_service;


pub use reports_model::{
    ExpenseBreakdown, ExpenseBreakdownLine, InvestorTransactionSummary,
    PropertyTransactionSummary,
};
pub use reports_service::{ReportsService, ReportsServiceTrait};
