use log::debug;
use num_traits::Zero;
use rust_decimal::Decimal;
use std::collections::HashMap;
use std::sync::Arc;

use crate::reports::reports_model::*;
use crate::transactions::TransactionRepositoryTrait;
use crate::Result;

/// Trait defining the contract for reporting operations.
///
/// All methods are pure computations over the stored collections and are
/// safe to call at any time.
pub trait ReportsServiceTrait: Send + Sync {
    fn get_property_transaction_summary(
        &self,
        property_id: &str,
    ) -> Result<PropertyTransactionSummary>;
    fn get_investor_transaction_summary(
        &self,
        investor_id: &str,
    ) -> Result<InvestorTransactionSummary>;
    fn get_expense_breakdown(&self, property_id: &str) -> Result<ExpenseBreakdown>;
}

/// Service computing read-only summaries over the transaction store.
pub struct ReportsService {
    transaction_repository: Arc<dyn TransactionRepositoryTrait>,
}

impl ReportsService {
    /// Creates a new ReportsService instance with injected dependencies
    pub fn new(transaction_repository: Arc<dyn TransactionRepositoryTrait>) -> Self {
        Self {
            transaction_repository,
        }
    }
}

impl ReportsServiceTrait for ReportsService {
    fn get_property_transaction_summary(
        &self,
        property_id: &str,
    ) -> Result<PropertyTransactionSummary> {
        debug!("Computing transaction summary for property '{}'", property_id);
        let transactions = self
            .transaction_repository
            .get_transactions_by_property(property_id)?;

        let mut summary = PropertyTransactionSummary {
            property_id: property_id.to_string(),
            transaction_count: transactions.len(),
            ..Default::default()
        };
        for transaction in &transactions {
            if transaction.transaction_type.is_expense() {
                summary.total_expenses += transaction.amount;
            } else {
                summary.total_income += transaction.amount;
            }
            *summary
                .totals_by_type
                .entry(transaction.transaction_type)
                .or_insert(Decimal::ZERO) += transaction.amount;
        }
        summary.net_cash_flow = summary.total_income - summary.total_expenses;
        Ok(summary)
    }

    fn get_investor_transaction_summary(
        &self,
        investor_id: &str,
    ) -> Result<InvestorTransactionSummary> {
        let transactions = self
            .transaction_repository
            .get_transactions_by_investor(investor_id)?;

        let mut summary = InvestorTransactionSummary {
            investor_id: investor_id.to_string(),
            transaction_count: transactions.len(),
            ..Default::default()
        };
        for transaction in &transactions {
            let attributed = transaction
                .investor_attributions
                .iter()
                .filter(|a| a.investor_id == investor_id)
                .map(|a| a.amount)
                .sum::<Decimal>();
            if transaction.transaction_type.is_expense() {
                summary.expenses_attributed += attributed;
            } else {
                summary.income_attributed += attributed;
            }
        }
        summary.net_attributed = summary.income_attributed - summary.expenses_attributed;
        Ok(summary)
    }

    fn get_expense_breakdown(&self, property_id: &str) -> Result<ExpenseBreakdown> {
        let transactions = self
            .transaction_repository
            .get_transactions_by_property(property_id)?;

        let mut totals: HashMap<_, Decimal> = HashMap::new();
        let mut total_expenses = Decimal::ZERO;
        for transaction in &transactions {
            if !transaction.transaction_type.is_expense() {
                continue;
            }
            *totals
                .entry(transaction.transaction_type)
                .or_insert(Decimal::ZERO) += transaction.amount;
            total_expenses += transaction.amount;
        }

        let mut lines: Vec<ExpenseBreakdownLine> = totals
            .into_iter()
            .map(|(transaction_type, total)| ExpenseBreakdownLine {
                transaction_type,
                total,
                share_of_expenses: if total_expenses.is_zero() {
                    Decimal::ZERO
                } else {
                    total / total_expenses * Decimal::ONE_HUNDRED
                },
            })
            .collect();
        lines.sort_by(|a, b| b.total.cmp(&a.total));

        Ok(ExpenseBreakdown {
            property_id: property_id.to_string(),
            total_expenses,
            lines,
        })
    }
}
