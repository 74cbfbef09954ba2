#[cfg(test)]
mod tests {
    use crate::investments::{NewPropertyInvestment, PropertyInvestment};
    use crate::transactions::posting::{apply_attribution, reverse_attribution};
    use crate::transactions::TransactionType;
    use rust_decimal_macros::dec;

    fn entry() -> PropertyInvestment {
        let mut entry = PropertyInvestment::new(NewPropertyInvestment {
            id: Some("pi-1".to_string()),
            property_id: "prop-1".to_string(),
            investor_id: "inv-a".to_string(),
            investment_amount: dec!(500000),
            profit_share_percentage: dec!(50),
        });
        entry.rental_income = dec!(20000);
        entry.total_expenses = dec!(5000);
        entry.unrealized_profit = dec!(15000);
        entry.linked_transaction_ids = vec!["tx-0".to_string()];
        entry.recompute_roi();
        entry
    }

    #[test]
    fn test_apply_income_posts_to_income_and_unrealized() {
        let mut e = entry();
        apply_attribution(&mut e, "tx-1", TransactionType::RentalIncome, dec!(50000));

        assert_eq!(e.rental_income, dec!(70000));
        assert_eq!(e.total_expenses, dec!(5000));
        assert_eq!(e.unrealized_profit, dec!(65000));
        assert_eq!(
            e.linked_transaction_ids,
            vec!["tx-0".to_string(), "tx-1".to_string()]
        );
        // (70000 + 0 - 5000) / 500000 * 100 = 13
        assert_eq!(e.roi, dec!(13));
    }

    #[test]
    fn test_apply_expense_posts_to_expenses_and_unrealized() {
        let mut e = entry();
        apply_attribution(&mut e, "tx-2", TransactionType::ExpenseMaintenance, dec!(3000));

        assert_eq!(e.rental_income, dec!(20000));
        assert_eq!(e.total_expenses, dec!(8000));
        assert_eq!(e.unrealized_profit, dec!(12000));
    }

    #[test]
    fn test_reverse_is_exact_inverse_for_income() {
        let before = entry();
        let mut e = before.clone();
        apply_attribution(&mut e, "tx-1", TransactionType::RentalIncome, dec!(50000));
        reverse_attribution(&mut e, "tx-1", TransactionType::RentalIncome, dec!(50000));
        assert_eq!(e, before);
    }

    #[test]
    fn test_reverse_is_exact_inverse_for_expense() {
        let before = entry();
        let mut e = before.clone();
        apply_attribution(&mut e, "tx-3", TransactionType::ExpenseTax, dec!(1234.56));
        reverse_attribution(&mut e, "tx-3", TransactionType::ExpenseTax, dec!(1234.56));
        assert_eq!(e, before);
    }

    #[test]
    fn test_reverse_removes_only_one_audit_occurrence() {
        let mut e = entry();
        apply_attribution(&mut e, "tx-0", TransactionType::RentalIncome, dec!(100));
        assert_eq!(e.linked_transaction_ids.len(), 2);
        reverse_attribution(&mut e, "tx-0", TransactionType::RentalIncome, dec!(100));
        assert_eq!(e.linked_transaction_ids, vec!["tx-0".to_string()]);
    }
}
