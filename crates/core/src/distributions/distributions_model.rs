//! Distribution domain models.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Record-level lifecycle. A distribution is immutable once calculated,
/// apart from per-line payment status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DistributionStatus {
    #[default]
    Calculated,
}

/// Payment lifecycle of one payout line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PayoutStatus {
    #[default]
    Pending,
    Approved,
    Paid,
}

/// One investor's payout line in a profit distribution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvestorPayout {
    pub investor_id: String,
    pub share_percentage: Decimal,
    /// Principal returned (the ledger entry's investment amount).
    pub investment_amount: Decimal,
    /// `net profit * share_percentage / 100`. Negative on a loss.
    pub profit_amount: Decimal,
    /// `investment_amount + profit_amount`.
    pub total_payout: Decimal,
    pub status: PayoutStatus,
}

/// Terminal payout computation for one sold property.
///
/// Produced at most once per property; `sum(total_payout)` equals
/// `sum(investment_amount) + total_net_profit` (subject to rounding).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfitDistribution {
    pub id: String,
    pub property_id: String,
    /// The sale transaction that triggered the calculation, if any.
    pub transaction_id: Option<String>,

    pub final_sale_price: Decimal,
    pub total_cost_basis: Decimal,
    pub commission_earned: Decimal,
    /// `final_sale_price - total_cost_basis - commission_earned`.
    /// Negative on a loss; losses propagate without special-casing.
    pub total_net_profit: Decimal,

    pub distributions: Vec<InvestorPayout>,
    pub status: DistributionStatus,
    pub calculated_by: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
