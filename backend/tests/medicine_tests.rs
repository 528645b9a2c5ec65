//! Medicine catalogue tests
//!
//! Covers creation, deletion, selling, and the audit side effects of each
//! operation, against an ephemeral store.

use pharmacy_inventory_backend::services::medicine::{
    CreateMedicineInput, MedicineService, SellInput,
};
use pharmacy_inventory_backend::store::Store;
use proptest::prelude::*;
use rust_decimal::Decimal;

fn setup() -> (Store, MedicineService) {
    let store = Store::ephemeral();
    let service = MedicineService::new(store.clone());
    (store, service)
}

fn input(name: &str, price: i64, quantity: u32) -> CreateMedicineInput {
    CreateMedicineInput {
        name: name.to_string(),
        price: Decimal::new(price, 0),
        quantity,
    }
}

#[test]
fn test_create_assigns_sequential_ids() {
    let (_, service) = setup();

    let a = service.create(input("Paracetamol 500mg", 12_000, 100)).unwrap();
    let b = service.create(input("Amoxicillin 250mg", 35_000, 40)).unwrap();
    let c = service.create(input("Vitamin C 1000mg", 8_000, 200)).unwrap();

    assert_eq!((a.id, b.id, c.id), (1, 2, 3));

    let listed = service.list();
    assert_eq!(listed.len(), 3);
    assert_eq!(listed[0].name, "Paracetamol 500mg");
    assert_eq!(listed[1].price, Decimal::new(35_000, 0));
    assert_eq!(listed[2].quantity, 200);
}

#[test]
fn test_create_records_import_entry() {
    let (store, service) = setup();

    let medicine = service.create(input("Ibuprofen 400mg", 15_000, 60)).unwrap();

    let inventory = store.read();
    assert_eq!(inventory.import_log.len(), 1);
    let entry = &inventory.import_log[0];
    assert_eq!(entry.medicine_id, medicine.id);
    assert_eq!(entry.medicine_name, "Ibuprofen 400mg");
    assert_eq!(entry.quantity, 60);
    assert_eq!(entry.price, Decimal::new(15_000, 0));
}

#[test]
fn test_create_without_stock_skips_import_entry() {
    let (store, service) = setup();

    service.create(input("Insulin pen", 250_000, 0)).unwrap();

    assert!(store.read().import_log.is_empty());
}

#[test]
fn test_create_rejects_blank_name() {
    let (_, service) = setup();

    let result = service.create(input("   ", 10_000, 5));
    assert!(result.is_err());
    assert!(service.list().is_empty());
}

#[test]
fn test_create_rejects_negative_price() {
    let (_, service) = setup();

    let result = service.create(CreateMedicineInput {
        name: "Aspirin 100mg".to_string(),
        price: Decimal::new(-1, 0),
        quantity: 10,
    });
    assert!(result.is_err());
}

#[test]
fn test_create_trims_name() {
    let (_, service) = setup();

    let medicine = service.create(input("  Cough syrup  ", 22_000, 30)).unwrap();
    assert_eq!(medicine.name, "Cough syrup");
}

#[test]
fn test_sell_decrements_stock_and_records_export() {
    let (store, service) = setup();
    let medicine = service.create(input("Paracetamol 500mg", 12_000, 100)).unwrap();

    let updated = service.sell(SellInput { id: medicine.id, amount: 30 }).unwrap();
    assert_eq!(updated.quantity, 70);

    let inventory = store.read();
    assert_eq!(inventory.export_log.len(), 1);
    let entry = &inventory.export_log[0];
    assert_eq!(entry.medicine_id, medicine.id);
    assert_eq!(entry.amount, 30);
    assert_eq!(entry.price, Decimal::new(12_000, 0));
}

#[test]
fn test_sell_insufficient_stock_rejected_without_mutation() {
    let (store, service) = setup();
    let medicine = service.create(input("Paracetamol 500mg", 12_000, 5)).unwrap();

    let err = service
        .sell(SellInput { id: medicine.id, amount: 10 })
        .unwrap_err();
    assert_eq!(err.to_string(), "Not enough quantity. Available: 5");

    let inventory = store.read();
    assert_eq!(inventory.medicine(medicine.id).unwrap().quantity, 5);
    assert!(inventory.export_log.is_empty());
}

#[test]
fn test_sell_exact_stock_empties_medicine() {
    let (_, service) = setup();
    let medicine = service.create(input("Paracetamol 500mg", 12_000, 8)).unwrap();

    let updated = service.sell(SellInput { id: medicine.id, amount: 8 }).unwrap();
    assert_eq!(updated.quantity, 0);
}

#[test]
fn test_sell_unknown_medicine() {
    let (_, service) = setup();

    let err = service.sell(SellInput { id: 99, amount: 1 }).unwrap_err();
    assert_eq!(err.to_string(), "Medicine not found");
}

#[test]
fn test_sell_zero_amount_rejected() {
    let (_, service) = setup();
    let medicine = service.create(input("Paracetamol 500mg", 12_000, 5)).unwrap();

    assert!(service.sell(SellInput { id: medicine.id, amount: 0 }).is_err());
}

#[test]
fn test_delete_removes_from_listing() {
    let (_, service) = setup();
    let a = service.create(input("Paracetamol 500mg", 12_000, 100)).unwrap();
    let b = service.create(input("Amoxicillin 250mg", 35_000, 40)).unwrap();

    service.delete(a.id).unwrap();

    let listed = service.list();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id, b.id);

    let err = service.delete(a.id).unwrap_err();
    assert_eq!(err.to_string(), "Medicine not found");
}

#[test]
fn test_delete_keeps_audit_history() {
    let (store, service) = setup();
    let medicine = service.create(input("Paracetamol 500mg", 12_000, 100)).unwrap();
    service.sell(SellInput { id: medicine.id, amount: 10 }).unwrap();

    service.delete(medicine.id).unwrap();

    let inventory = store.read();
    assert_eq!(inventory.import_log.len(), 1);
    assert_eq!(inventory.export_log.len(), 1);
}

#[test]
fn test_ids_not_recycled_after_delete() {
    let (_, service) = setup();
    let a = service.create(input("Paracetamol 500mg", 12_000, 100)).unwrap();
    service.delete(a.id).unwrap();

    let b = service.create(input("Amoxicillin 250mg", 35_000, 40)).unwrap();
    assert_eq!(b.id, 2);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Selling can never drive the stock count negative, and every accepted
    /// sale appends exactly one export entry.
    #[test]
    fn prop_sell_never_oversells(
        initial in 0u32..500,
        amounts in prop::collection::vec(1u32..100, 1..20)
    ) {
        let (store, service) = setup();
        let medicine = service
            .create(input("Paracetamol 500mg", 12_000, initial))
            .unwrap();

        let mut expected = initial;
        let mut accepted = 0usize;
        for amount in amounts {
            match service.sell(SellInput { id: medicine.id, amount }) {
                Ok(updated) => {
                    expected -= amount;
                    accepted += 1;
                    prop_assert_eq!(updated.quantity, expected);
                }
                Err(_) => prop_assert!(amount > expected),
            }
        }

        let inventory = store.read();
        prop_assert_eq!(inventory.medicine(medicine.id).unwrap().quantity, expected);
        prop_assert_eq!(inventory.export_log.len(), accepted);
    }
}
