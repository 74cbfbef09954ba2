//! Property domain models.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// How a property was funded at acquisition time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AcquisitionMethod {
    /// Funded directly by the company; no investor ledger entries exist.
    #[default]
    Direct,
    /// Funded by a syndicate of investors holding percentage shares.
    InvestorFunded,
}

/// Property lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PropertyStatus {
    #[default]
    Active,
    Sold,
}

/// One investor's percentage share of a property.
///
/// The shares list on the property is the authoritative attribution source
/// at transaction time, independent of the investment ledger.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvestorShare {
    pub investor_id: String,
    pub share_percentage: Decimal,
}

/// Domain model representing a property.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    pub id: String,
    pub name: String,
    pub acquisition_method: AcquisitionMethod,
    pub status: PropertyStatus,

    /// Everything paid to acquire and prepare the property.
    pub total_cost_basis: Decimal,

    /// Assigned investors and their shares. Empty for direct acquisitions.
    #[serde(default)]
    pub investor_shares: Vec<InvestorShare>,

    // Sale outcome, populated when status becomes Sold
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub final_sale_price: Option<Decimal>,
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commission_earned: Option<Decimal>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Property {
    /// Whether investor ledger bookkeeping applies to this property.
    pub fn is_investor_funded(&self) -> bool {
        self.acquisition_method == AcquisitionMethod::InvestorFunded
    }

    pub fn is_sold(&self) -> bool {
        self.status == PropertyStatus::Sold
    }

    /// Looks up the share held by the given investor, if any.
    pub fn share_for(&self, investor_id: &str) -> Option<&InvestorShare> {
        self.investor_shares
            .iter()
            .find(|s| s.investor_id == investor_id)
    }
}
