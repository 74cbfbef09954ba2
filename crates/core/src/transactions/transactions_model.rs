//! Transaction domain models.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

/// Economic event types posted against a property.
///
/// Expense variants all serialize with an `EXPENSE_` prefix; posting logic
/// only distinguishes income from expense via [`TransactionType::is_expense`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionType {
    RentalIncome,
    ExpenseMaintenance,
    ExpenseTax,
    ExpenseInsurance,
    ExpenseManagement,
    ExpenseOther,
}

impl TransactionType {
    pub fn is_expense(&self) -> bool {
        !matches!(self, TransactionType::RentalIncome)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::RentalIncome => "RENTAL_INCOME",
            TransactionType::ExpenseMaintenance => "EXPENSE_MAINTENANCE",
            TransactionType::ExpenseTax => "EXPENSE_TAX",
            TransactionType::ExpenseInsurance => "EXPENSE_INSURANCE",
            TransactionType::ExpenseManagement => "EXPENSE_MANAGEMENT",
            TransactionType::ExpenseOther => "EXPENSE_OTHER",
        }
    }
}

/// The proportional share of a transaction amount assigned to one investor.
///
/// Invariant: the attributed amounts of one transaction sum to its total
/// amount (subject to rounding).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvestorAttribution {
    pub investor_id: String,
    pub share_percentage: Decimal,
    /// `total amount * share_percentage / 100`, computed at recording time.
    pub amount: Decimal,
}

/// Domain model representing an immutable economic event for a property.
///
/// Updates and deletes first reverse the event's prior ledger impact.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvestorTransaction {
    pub id: String,
    pub property_id: String,
    pub transaction_type: TransactionType,
    pub amount: Decimal,
    pub description: Option<String>,

    /// One entry per investor holding a share at recording time.
    pub investor_attributions: Vec<InvestorAttribution>,

    pub recorded_by: String,
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Value>,

    pub transaction_date: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl InvestorTransaction {
    pub fn new(input: NewTransaction, attributions: Vec<InvestorAttribution>) -> Self {
        let now = Utc::now();
        Self {
            id: input.id.unwrap_or_else(|| Uuid::new_v4().to_string()),
            property_id: input.property_id,
            transaction_type: input.transaction_type,
            amount: input.amount,
            description: input.description,
            investor_attributions: attributions,
            recorded_by: input.recorded_by,
            metadata: input.metadata,
            transaction_date: input.transaction_date.unwrap_or(now),
            created_at: now,
            updated_at: now,
        }
    }
}

/// Input model for recording a new transaction.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTransaction {
    pub id: Option<String>,
    pub property_id: String,
    pub transaction_type: TransactionType,
    pub amount: Decimal,
    pub description: Option<String>,
    pub recorded_by: String,
    pub metadata: Option<Value>,
    pub transaction_date: Option<DateTime<Utc>>,
}

/// Input model for correcting an existing transaction.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionUpdate {
    pub id: String,
    pub transaction_type: TransactionType,
    pub amount: Decimal,
    pub description: Option<String>,
}

/// Result of recording or correcting a transaction.
///
/// `warnings` surfaces partial application: the transaction was saved, but
/// one or more investors had no active ledger entry to post against.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordedTransaction {
    pub transaction: InvestorTransaction,
    pub warnings: Vec<String>,
}
