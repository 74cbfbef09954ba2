//! Investor domain models.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Domain model representing an investor.
///
/// Referenced by id everywhere else (ledger entries, attributions,
/// payouts); aggregate stats are recomputed on demand, never stored here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Investor {
    pub id: String,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input model for creating a new investor.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewInvestor {
    pub id: Option<String>,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub notes: Option<String>,
}

impl Investor {
    pub fn new(input: NewInvestor) -> Self {
        let now = Utc::now();
        Self {
            id: input.id.unwrap_or_else(|| Uuid::new_v4().to_string()),
            name: input.name,
            email: input.email,
            phone: input.phone,
            notes: input.notes,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Aggregate stats for one investor, recomputed on demand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct InvestorPerformance {
    pub investor_id: String,
    /// Sum of principal across all ledger entries.
    pub total_invested: Decimal,
    /// Realized payouts plus attributed rental income.
    pub total_returned: Decimal,
    /// Income minus expenses across still-active entries.
    pub unrealized_profit: Decimal,
    pub active_investments: usize,
    pub completed_investments: usize,
    /// Principal-weighted average ROI across all entries.
    pub weighted_roi: Decimal,
}
