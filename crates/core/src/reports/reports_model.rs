//! Summary models for transaction reporting.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::transactions::TransactionType;

/// Per-property transaction totals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct PropertyTransactionSummary {
    pub property_id: String,
    pub total_income: Decimal,
    pub total_expenses: Decimal,
    /// `total_income - total_expenses`.
    pub net_cash_flow: Decimal,
    pub transaction_count: usize,
    pub totals_by_type: HashMap<TransactionType, Decimal>,
}

/// Per-investor totals over that investor's attributions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct InvestorTransactionSummary {
    pub investor_id: String,
    pub income_attributed: Decimal,
    pub expenses_attributed: Decimal,
    /// `income_attributed - expenses_attributed`.
    pub net_attributed: Decimal,
    pub transaction_count: usize,
}

/// One expense type's share of a property's overall expenses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseBreakdownLine {
    pub transaction_type: TransactionType,
    pub total: Decimal,
    /// Fraction of overall expenses, as a percentage.
    pub share_of_expenses: Decimal,
}

/// Per-property expense composition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseBreakdown {
    pub property_id: String,
    pub total_expenses: Decimal,
    pub lines: Vec<ExpenseBreakdownLine>,
}
