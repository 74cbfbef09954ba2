//! Pure posting and reversal arithmetic over one ledger entry.
//!
//! `reverse_attribution(apply_attribution(entry))` restores the entry
//! field-by-field; the service layer relies on this to implement
//! update (reverse-old, apply-new) and delete (reverse, discard).

use rust_decimal::Decimal;

use crate::investments::PropertyInvestment;
use crate::transactions::transactions_model::TransactionType;

/// Posts one attributed amount to a ledger entry.
///
/// Rental income adds to `rental_income` and `unrealized_profit`; any
/// expense type adds to `total_expenses` and subtracts from
/// `unrealized_profit`. Appends the transaction id to the audit trail and
/// recomputes ROI.
pub fn apply_attribution(
    entry: &mut PropertyInvestment,
    transaction_id: &str,
    transaction_type: TransactionType,
    amount: Decimal,
) {
    if transaction_type.is_expense() {
        entry.total_expenses += amount;
        entry.unrealized_profit -= amount;
    } else {
        entry.rental_income += amount;
        entry.unrealized_profit += amount;
    }
    entry
        .linked_transaction_ids
        .push(transaction_id.to_string());
    entry.recompute_roi();
}

/// Exactly undoes [`apply_attribution`] for the same transaction.
///
/// Removes one occurrence of the transaction id from the audit trail,
/// inverts the numeric effect, and recomputes ROI.
pub fn reverse_attribution(
    entry: &mut PropertyInvestment,
    transaction_id: &str,
    transaction_type: TransactionType,
    amount: Decimal,
) {
    if transaction_type.is_expense() {
        entry.total_expenses -= amount;
        entry.unrealized_profit += amount;
    } else {
        entry.rental_income -= amount;
        entry.unrealized_profit -= amount;
    }
    if let Some(pos) = entry
        .linked_transaction_ids
        .iter()
        .position(|id| id == transaction_id)
    {
        entry.linked_transaction_ids.remove(pos);
    }
    entry.recompute_roi();
}
