#[cfg(test)]
mod tests {
    use crate::investments::{InvestmentStatus, NewPropertyInvestment, PropertyInvestment};
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn sample_entry() -> PropertyInvestment {
        PropertyInvestment::new(NewPropertyInvestment {
            id: None,
            property_id: "prop-1".to_string(),
            investor_id: "inv-1".to_string(),
            investment_amount: dec!(500000),
            profit_share_percentage: dec!(50),
        })
    }

    #[test]
    fn test_new_entry_starts_active_and_zeroed() {
        let entry = sample_entry();
        assert_eq!(entry.status, InvestmentStatus::Active);
        assert_eq!(entry.rental_income, Decimal::ZERO);
        assert_eq!(entry.total_expenses, Decimal::ZERO);
        assert_eq!(entry.unrealized_profit, Decimal::ZERO);
        assert_eq!(entry.roi, Decimal::ZERO);
        assert!(entry.actual_return.is_none());
        assert!(entry.linked_transaction_ids.is_empty());
        assert!(!entry.id.is_empty());
    }

    #[test]
    fn test_recompute_roi_matches_formula() {
        let mut entry = sample_entry();
        entry.rental_income = dec!(60000);
        entry.total_expenses = dec!(10000);
        entry.appreciation_value = dec!(25000);
        entry.recompute_roi();

        // (60000 + 25000 - 10000) / 500000 * 100 = 15
        assert_eq!(entry.roi, dec!(15));
    }

    #[test]
    fn test_recompute_roi_zero_principal_is_zero() {
        let mut entry = sample_entry();
        entry.investment_amount = Decimal::ZERO;
        entry.rental_income = dec!(1000);
        entry.recompute_roi();
        assert_eq!(entry.roi, Decimal::ZERO);
    }

    #[test]
    fn test_complete_freezes_entry() {
        let mut entry = sample_entry();
        entry.complete(dec!(550000));
        assert_eq!(entry.status, InvestmentStatus::Completed);
        assert_eq!(entry.actual_return, Some(dec!(550000)));
        assert!(!entry.is_active());
    }

    #[test]
    fn test_serde_round_trip_uses_camel_case() {
        let entry = sample_entry();
        let json = serde_json::to_value(&entry).unwrap();
        assert!(json.get("investmentAmount").is_some());
        assert!(json.get("profitSharePercentage").is_some());
        assert!(json.get("linkedTransactionIds").is_some());
        let back: PropertyInvestment = serde_json::from_value(json).unwrap();
        assert_eq!(back, entry);
    }
}
