//! Allocation policies for deriving ledger entries from assignments.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// How principal and profit share are split across assigned investors.
///
/// Sync always reapplies the active policy, so a manually edited
/// `profit_share_percentage` is overwritten on the next sync run. Unequal
/// splits only survive by never re-syncing the property, or by adding a
/// policy variant that preserves them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AllocationPolicy {
    /// Every assigned investor gets `cost basis / n` principal and
    /// `100 / n` percent profit share.
    #[default]
    EqualSplit,
}

impl AllocationPolicy {
    /// Returns (principal, profit share percentage) for one investor out of
    /// `investor_count` assigned to a property with the given cost basis.
    pub fn split(&self, total_cost_basis: Decimal, investor_count: usize) -> (Decimal, Decimal) {
        match self {
            AllocationPolicy::EqualSplit => {
                let count = Decimal::from(investor_count as u64);
                (
                    total_cost_basis / count,
                    Decimal::ONE_HUNDRED / count,
                )
            }
        }
    }
}
