use chrono::Utc;
use log::debug;
use std::sync::Arc;

use crate::allocation::allocation_policy::AllocationPolicy;
use crate::investments::{
    InvestmentRepositoryTrait, NewPropertyInvestment, PropertyInvestment,
};
use crate::properties::Property;
use crate::Result;

/// Trait defining the contract for allocation sync operations.
pub trait AllocationServiceTrait: Send + Sync {
    /// Reconciles the ledger with the property's investor assignments.
    ///
    /// Returns the resulting active entries for the property (empty when
    /// the property carries no investor bookkeeping).
    fn sync_property_allocations(&self, property: &Property)
        -> Result<Vec<PropertyInvestment>>;
}

/// Service deriving ledger entries from a property's assignment metadata.
///
/// Never throws for ineligible properties: sync is called speculatively
/// from broader save flows, and an ineligible property simply has its
/// ledger entries cleared.
pub struct AllocationService {
    investment_repository: Arc<dyn InvestmentRepositoryTrait>,
    policy: AllocationPolicy,
}

impl AllocationService {
    /// Creates a new AllocationService instance with injected dependencies
    pub fn new(investment_repository: Arc<dyn InvestmentRepositoryTrait>) -> Self {
        Self {
            investment_repository,
            policy: AllocationPolicy::default(),
        }
    }

    pub fn with_policy(
        investment_repository: Arc<dyn InvestmentRepositoryTrait>,
        policy: AllocationPolicy,
    ) -> Self {
        Self {
            investment_repository,
            policy,
        }
    }
}

impl AllocationServiceTrait for AllocationService {
    fn sync_property_allocations(
        &self,
        property: &Property,
    ) -> Result<Vec<PropertyInvestment>> {
        if !property.is_investor_funded() || property.investor_shares.is_empty() {
            let removed = self
                .investment_repository
                .delete_investments_by_property(&property.id)?;
            if removed > 0 {
                debug!(
                    "Cleared {} ledger entries for property '{}' with no investor assignments",
                    removed, property.id
                );
            }
            return Ok(Vec::new());
        }

        let existing = self
            .investment_repository
            .get_investments_by_property(&property.id)?;

        // Drop active entries for investors no longer assigned.
        for entry in &existing {
            if entry.is_active() && property.share_for(&entry.investor_id).is_none() {
                self.investment_repository.delete_investment(&entry.id)?;
                debug!(
                    "Removed stale ledger entry '{}' for unassigned investor '{}'",
                    entry.id, entry.investor_id
                );
            }
        }

        let (investment_amount, profit_share_percentage) = self
            .policy
            .split(property.total_cost_basis, property.investor_shares.len());

        let mut synced = Vec::with_capacity(property.investor_shares.len());
        for share in &property.investor_shares {
            let active = existing
                .iter()
                .find(|e| e.investor_id == share.investor_id && e.is_active());
            let entry = match active {
                // Stable identity across re-sync: id and created_at survive.
                Some(current) => {
                    let mut updated = current.clone();
                    updated.investment_amount = investment_amount;
                    updated.profit_share_percentage = profit_share_percentage;
                    updated.recompute_roi();
                    if updated != *current {
                        updated.updated_at = Utc::now();
                    }
                    updated
                }
                None => {
                    // Completed entries are frozen at sale; never reconcile
                    // or resurrect them.
                    if existing.iter().any(|e| e.investor_id == share.investor_id) {
                        continue;
                    }
                    PropertyInvestment::new(NewPropertyInvestment {
                        id: None,
                        property_id: property.id.clone(),
                        investor_id: share.investor_id.clone(),
                        investment_amount,
                        profit_share_percentage,
                    })
                }
            };
            synced.push(entry);
        }

        self.investment_repository
            .upsert_investments(synced.clone())?;
        Ok(synced)
    }
}
