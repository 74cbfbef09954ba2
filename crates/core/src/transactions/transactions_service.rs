use chrono::Utc;
use log::{debug, warn};
use num_traits::Zero;
use std::sync::Arc;

use crate::constants::DECIMAL_PRECISION;
use crate::investments::InvestmentRepositoryTrait;
use crate::properties::{InvestorShare, Property, PropertyRepositoryTrait};
use crate::transactions::posting::{apply_attribution, reverse_attribution};
use crate::transactions::transactions_errors::TransactionError;
use crate::transactions::transactions_model::*;
use crate::transactions::transactions_traits::{
    TransactionRepositoryTrait, TransactionServiceTrait,
};
use crate::Result;
use rust_decimal::Decimal;

/// Service for recording, correcting, and deleting investor transactions.
///
/// Attributions are computed from the property's live investor shares at
/// recording time; the ledger is only the posting target, never the
/// attribution source.
pub struct TransactionService {
    transaction_repository: Arc<dyn TransactionRepositoryTrait>,
    investment_repository: Arc<dyn InvestmentRepositoryTrait>,
    property_repository: Arc<dyn PropertyRepositoryTrait>,
}

impl TransactionService {
    /// Creates a new TransactionService instance with injected dependencies
    pub fn new(
        transaction_repository: Arc<dyn TransactionRepositoryTrait>,
        investment_repository: Arc<dyn InvestmentRepositoryTrait>,
        property_repository: Arc<dyn PropertyRepositoryTrait>,
    ) -> Self {
        Self {
            transaction_repository,
            investment_repository,
            property_repository,
        }
    }

    /// Splits `amount` across the property's investor shares.
    fn compute_attributions(
        shares: &[InvestorShare],
        amount: Decimal,
    ) -> Vec<InvestorAttribution> {
        shares
            .iter()
            .map(|share| InvestorAttribution {
                investor_id: share.investor_id.clone(),
                share_percentage: share.share_percentage,
                amount: (amount * share.share_percentage / Decimal::ONE_HUNDRED)
                    .round_dp(DECIMAL_PRECISION),
            })
            .collect()
    }

    /// Loads the property and checks transaction eligibility.
    fn eligible_property(&self, property_id: &str) -> Result<Property> {
        let property = self
            .property_repository
            .get_property_by_id(property_id)?
            .ok_or_else(|| {
                TransactionError::NotFound(format!("Property '{}' not found", property_id))
            })?;

        if !property.is_investor_funded() {
            return Err(TransactionError::InvalidState(format!(
                "Property '{}' is not investor funded",
                property.id
            ))
            .into());
        }
        if property.investor_shares.is_empty() {
            return Err(TransactionError::InvalidState(format!(
                "Property '{}' has no investor shares",
                property.id
            ))
            .into());
        }
        Ok(property)
    }

    /// Posts a transaction's attributions to the ledger.
    ///
    /// A missing active entry is the partial-application mode: the investor
    /// is skipped, a warning is logged and collected, and the transaction
    /// remains recorded.
    fn apply_to_ledger(&self, transaction: &InvestorTransaction) -> Result<Vec<String>> {
        let mut warnings = Vec::new();
        for attribution in &transaction.investor_attributions {
            match self
                .investment_repository
                .find_active_investment(&transaction.property_id, &attribution.investor_id)?
            {
                Some(mut entry) => {
                    apply_attribution(
                        &mut entry,
                        &transaction.id,
                        transaction.transaction_type,
                        attribution.amount,
                    );
                    self.investment_repository.upsert_investment(entry)?;
                }
                None => {
                    let message = format!(
                        "No active investment for investor '{}' on property '{}'; transaction '{}' not reflected in their ledger",
                        attribution.investor_id, transaction.property_id, transaction.id
                    );
                    warn!("{}", message);
                    warnings.push(message);
                }
            }
        }
        Ok(warnings)
    }

    /// Exactly undoes a transaction's prior ledger impact using its stored
    /// attributions.
    fn reverse_from_ledger(&self, transaction: &InvestorTransaction) -> Result<Vec<String>> {
        let mut warnings = Vec::new();
        for attribution in &transaction.investor_attributions {
            match self
                .investment_repository
                .find_active_investment(&transaction.property_id, &attribution.investor_id)?
            {
                Some(mut entry) => {
                    reverse_attribution(
                        &mut entry,
                        &transaction.id,
                        transaction.transaction_type,
                        attribution.amount,
                    );
                    self.investment_repository.upsert_investment(entry)?;
                }
                None => {
                    let message = format!(
                        "No active investment for investor '{}' on property '{}'; transaction '{}' could not be reversed from their ledger",
                        attribution.investor_id, transaction.property_id, transaction.id
                    );
                    warn!("{}", message);
                    warnings.push(message);
                }
            }
        }
        Ok(warnings)
    }
}

impl TransactionServiceTrait for TransactionService {
    fn get_transaction(&self, transaction_id: &str) -> Result<InvestorTransaction> {
        self.transaction_repository
            .get_transaction(transaction_id)?
            .ok_or_else(|| {
                TransactionError::NotFound(format!("Transaction '{}' not found", transaction_id))
                    .into()
            })
    }

    fn get_transactions_by_property(
        &self,
        property_id: &str,
    ) -> Result<Vec<InvestorTransaction>> {
        self.transaction_repository
            .get_transactions_by_property(property_id)
    }

    fn get_transactions_by_investor(
        &self,
        investor_id: &str,
    ) -> Result<Vec<InvestorTransaction>> {
        self.transaction_repository
            .get_transactions_by_investor(investor_id)
    }

    fn record_transaction(&self, new_transaction: NewTransaction) -> Result<RecordedTransaction> {
        if new_transaction.amount <= Decimal::zero() {
            return Err(TransactionError::InvalidData(
                "Transaction amount must be positive".to_string(),
            )
            .into());
        }

        let property = self.eligible_property(&new_transaction.property_id)?;
        let attributions =
            Self::compute_attributions(&property.investor_shares, new_transaction.amount);
        let transaction = InvestorTransaction::new(new_transaction, attributions);

        // Record first: a partially applied transaction must still exist.
        let transaction = self.transaction_repository.save_transaction(transaction)?;
        let warnings = self.apply_to_ledger(&transaction)?;

        debug!(
            "Recorded {} transaction '{}' for property '{}' across {} investors",
            transaction.transaction_type.as_str(),
            transaction.id,
            transaction.property_id,
            transaction.investor_attributions.len()
        );

        Ok(RecordedTransaction {
            transaction,
            warnings,
        })
    }

    fn update_transaction(&self, update: TransactionUpdate) -> Result<RecordedTransaction> {
        if update.amount <= Decimal::zero() {
            return Err(TransactionError::InvalidData(
                "Transaction amount must be positive".to_string(),
            )
            .into());
        }

        let existing = self.get_transaction(&update.id)?;
        let property = self.eligible_property(&existing.property_id)?;

        let mut warnings = self.reverse_from_ledger(&existing)?;

        // A correction is a fresh recording: attributions come from the
        // property's current shares, not the stale ones.
        let attributions = Self::compute_attributions(&property.investor_shares, update.amount);
        let mut corrected = existing;
        corrected.transaction_type = update.transaction_type;
        corrected.amount = update.amount;
        corrected.description = update.description;
        corrected.investor_attributions = attributions;
        corrected.updated_at = Utc::now();

        let corrected = self.transaction_repository.save_transaction(corrected)?;
        warnings.extend(self.apply_to_ledger(&corrected)?);

        Ok(RecordedTransaction {
            transaction: corrected,
            warnings,
        })
    }

    fn delete_transaction(&self, transaction_id: &str) -> Result<RecordedTransaction> {
        let existing = self.get_transaction(transaction_id)?;
        let warnings = self.reverse_from_ledger(&existing)?;
        self.transaction_repository
            .delete_transaction(transaction_id)?;
        debug!("Deleted transaction '{}'", transaction_id);
        Ok(RecordedTransaction {
            transaction: existing,
            warnings,
        })
    }
}
