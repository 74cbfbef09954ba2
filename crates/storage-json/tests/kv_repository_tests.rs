//! Integration tests for the key-value repositories over the file store.

use std::sync::Arc;

use chrono::Utc;
use rust_decimal_macros::dec;

use propfolio_core::investments::{
    InvestmentRepositoryTrait, NewPropertyInvestment, PropertyInvestment,
};
use propfolio_core::investors::{InvestorRepositoryTrait, NewInvestor};
use propfolio_core::properties::{
    AcquisitionMethod, Property, PropertyRepositoryTrait, PropertyStatus,
};
use propfolio_storage_json::{
    JsonFileStore, KvInvestmentRepository, KvInvestorRepository, KvPropertyRepository,
};

fn entry(property_id: &str, investor_id: &str) -> PropertyInvestment {
    PropertyInvestment::new(NewPropertyInvestment {
        id: None,
        property_id: property_id.to_string(),
        investor_id: investor_id.to_string(),
        investment_amount: dec!(250000),
        profit_share_percentage: dec!(25),
    })
}

#[test]
fn test_investments_survive_store_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let created = {
        let store = Arc::new(JsonFileStore::new(dir.path()).unwrap());
        let repository = KvInvestmentRepository::new(store);
        repository.upsert_investment(entry("P1", "A")).unwrap()
    };

    let store = Arc::new(JsonFileStore::new(dir.path()).unwrap());
    let repository = KvInvestmentRepository::new(store);
    let loaded = repository.get_investment(&created.id).unwrap().unwrap();
    assert_eq!(loaded, created);
}

#[test]
fn test_find_active_investment_skips_completed_entries() {
    let dir = tempfile::tempdir().unwrap();
    let store = Arc::new(JsonFileStore::new(dir.path()).unwrap());
    let repository = KvInvestmentRepository::new(store);

    let mut completed = entry("P1", "A");
    completed.complete(dec!(300000));
    repository.upsert_investment(completed).unwrap();

    assert!(repository
        .find_active_investment("P1", "A")
        .unwrap()
        .is_none());

    let active = repository.upsert_investment(entry("P1", "A")).unwrap();
    assert_eq!(
        repository
            .find_active_investment("P1", "A")
            .unwrap()
            .unwrap()
            .id,
        active.id
    );
}

#[test]
fn test_delete_investments_by_property_reports_count() {
    let dir = tempfile::tempdir().unwrap();
    let store = Arc::new(JsonFileStore::new(dir.path()).unwrap());
    let repository = KvInvestmentRepository::new(store);

    repository.upsert_investment(entry("P1", "A")).unwrap();
    repository.upsert_investment(entry("P1", "B")).unwrap();
    repository.upsert_investment(entry("P2", "A")).unwrap();

    assert_eq!(repository.delete_investments_by_property("P1").unwrap(), 2);
    assert_eq!(repository.delete_investments_by_property("P1").unwrap(), 0);
    assert_eq!(repository.get_investments().unwrap().len(), 1);
}

#[test]
fn test_property_and_investor_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let store = Arc::new(JsonFileStore::new(dir.path()).unwrap());
    let properties = KvPropertyRepository::new(store.clone());
    let investors = KvInvestorRepository::new(store);

    let now = Utc::now();
    let property = Property {
        id: "P1".to_string(),
        name: "12 Main St".to_string(),
        acquisition_method: AcquisitionMethod::InvestorFunded,
        status: PropertyStatus::Active,
        total_cost_basis: dec!(1000000),
        investor_shares: Vec::new(),
        final_sale_price: None,
        commission_earned: None,
        created_at: now,
        updated_at: now,
    };
    properties.save_property(property.clone()).unwrap();
    assert_eq!(
        properties.get_property_by_id("P1").unwrap().unwrap().name,
        "12 Main St"
    );

    let investor = investors
        .create_investor(NewInvestor {
            id: None,
            name: "Alice".to_string(),
            email: None,
            phone: None,
            notes: None,
        })
        .unwrap();
    assert_eq!(
        investors.get_investor_by_id(&investor.id).unwrap().unwrap(),
        investor
    );

    investors.delete_investor(&investor.id).unwrap();
    assert!(investors.get_investors().unwrap().is_empty());
}
