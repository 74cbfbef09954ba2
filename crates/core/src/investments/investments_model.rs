//! Investment ledger domain models.

use chrono::{DateTime, Utc};
use num_traits::Zero;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Lifecycle status of a ledger entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InvestmentStatus {
    /// The investor holds a live stake; transactions post against the entry.
    #[default]
    Active,
    /// Frozen at sale (or unassignment handling); no further posting.
    Completed,
}

/// One investor's stake record in one property (a ledger entry).
///
/// Running totals accumulate as transactions post; `roi` is derived and must
/// be recomputed after every mutation. The percentages of all active entries
/// for a given property sum to 100.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyInvestment {
    pub id: String,
    pub property_id: String,
    pub investor_id: String,

    /// Principal contributed. Fixed at creation.
    pub investment_amount: Decimal,
    /// Fraction of net profit/income/expense attributed to this investor.
    pub profit_share_percentage: Decimal,
    pub status: InvestmentStatus,

    // Running totals, mutated by posting/reversal
    pub rental_income: Decimal,
    pub total_expenses: Decimal,
    /// Cumulative income minus expenses while the entry is active.
    pub unrealized_profit: Decimal,
    pub appreciation_value: Decimal,

    /// Realized return, set exactly once at sale.
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actual_return: Option<Decimal>,

    /// Append-only audit trail of transactions posted to this entry.
    #[serde(default)]
    pub linked_transaction_ids: Vec<String>,

    /// Derived: `(rental_income + appreciation_value - total_expenses)
    /// / investment_amount * 100`.
    pub roi: Decimal,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input model for creating a new ledger entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPropertyInvestment {
    pub id: Option<String>,
    pub property_id: String,
    pub investor_id: String,
    pub investment_amount: Decimal,
    pub profit_share_percentage: Decimal,
}

impl PropertyInvestment {
    pub fn new(input: NewPropertyInvestment) -> Self {
        let now = Utc::now();
        Self {
            id: input.id.unwrap_or_else(|| Uuid::new_v4().to_string()),
            property_id: input.property_id,
            investor_id: input.investor_id,
            investment_amount: input.investment_amount,
            profit_share_percentage: input.profit_share_percentage,
            status: InvestmentStatus::Active,
            rental_income: Decimal::ZERO,
            total_expenses: Decimal::ZERO,
            unrealized_profit: Decimal::ZERO,
            appreciation_value: Decimal::ZERO,
            actual_return: None,
            linked_transaction_ids: Vec::new(),
            roi: Decimal::ZERO,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn is_active(&self) -> bool {
        self.status == InvestmentStatus::Active
    }

    /// Recomputes the derived `roi` field from the running totals.
    ///
    /// A zero principal yields zero ROI rather than a division error.
    pub fn recompute_roi(&mut self) {
        if self.investment_amount.is_zero() {
            self.roi = Decimal::ZERO;
            return;
        }
        self.roi = (self.rental_income + self.appreciation_value - self.total_expenses)
            / self.investment_amount
            * Decimal::ONE_HUNDRED;
    }

    /// Freezes the entry at sale: records the realized return and moves the
    /// entry to Completed. No further transactions post against it.
    pub fn complete(&mut self, actual_return: Decimal) {
        self.actual_return = Some(actual_return);
        self.status = InvestmentStatus::Completed;
        self.updated_at = Utc::now();
    }
}
