//! Stock-status report tests
//!
//! Tests for the daily stock-status computation including:
//! - Conservation law: beginning + receiving - issuance == ending
//! - Idempotence of the report computation
//! - Reorder quantity and EOQ derivation
//! - Interior/Exterior bucketing

use chrono::NaiveDate;
use proptest::prelude::*;
use rust_decimal::Decimal;
use uuid::Uuid;

use shared::models::{ProductBaseSnapshot, TransactionSnapshot, TransactionType};
use shared::stock_status::daily_stock_status;

fn as_of() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, 10).unwrap()
}

fn snapshot(category: &str, stock: i32, min: Option<i32>, max: Option<i32>) -> ProductBaseSnapshot {
    ProductBaseSnapshot {
        product_id: Uuid::new_v4(),
        base_id: Uuid::new_v4(),
        product_name: "Weathershield".to_string(),
        category: category.to_string(),
        size: Some("10L".to_string()),
        base_name: "Base B".to_string(),
        stock_level: stock,
        min_stock_level: min,
        max_stock_level: max,
        unit_price: Decimal::from(500),
    }
}

fn tx_for(
    price: &ProductBaseSnapshot,
    ty: TransactionType,
    qty: i32,
    on: NaiveDate,
) -> TransactionSnapshot {
    TransactionSnapshot {
        product_id: price.product_id,
        base_id: price.base_id,
        transaction_type: ty,
        quantity: qty,
        transaction_date: on,
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[test]
fn test_day_movement_reconstruction() {
    let price = snapshot("Exterior Paint", 27, Some(10), Some(50));
    let txs = vec![
        tx_for(&price, TransactionType::Purchase, 10, as_of()),
        tx_for(&price, TransactionType::Sale, 3, as_of()),
    ];

    let report = daily_stock_status(as_of(), &[price], &txs);
    let row = &report.exterior[0];

    assert_eq!(row.daily_receiving, 10);
    assert_eq!(row.daily_issuance, 3);
    assert_eq!(row.ending_balance, 27);
    assert_eq!(row.beginning_balance, 20);
}

#[test]
fn test_reorder_recommendation() {
    let price = snapshot("Interior Paint", 30, Some(10), Some(50));

    let report = daily_stock_status(as_of(), &[price], &[]);
    let row = &report.interior[0];

    assert_eq!(row.economic_order_quantity, 40);
    assert_eq!(row.quantity_to_order, 20);
}

#[test]
fn test_returns_do_not_count_as_receiving() {
    let price = snapshot("Interior Paint", 10, None, None);
    let txs = vec![tx_for(&price, TransactionType::Return, 4, as_of())];

    let report = daily_stock_status(as_of(), &[price], &txs);
    let row = &report.interior[0];

    assert_eq!(row.daily_receiving, 0);
    assert_eq!(row.daily_issuance, 0);
}

#[test]
fn test_bucketing_is_case_insensitive() {
    let price = snapshot("INTERIOR emulsion", 5, None, None);

    let report = daily_stock_status(as_of(), &[price], &[]);
    assert_eq!(report.interior.len(), 1);
    assert!(report.exterior.is_empty());
}

// ============================================================================
// Property-Based Tests
// ============================================================================

fn stock_strategy() -> impl Strategy<Value = i32> {
    0..1000i32
}

fn quantity_strategy() -> impl Strategy<Value = i32> {
    1..200i32
}

fn threshold_strategy() -> impl Strategy<Value = Option<i32>> {
    prop_oneof![Just(None), (0..500i32).prop_map(Some)]
}

fn movement_type_strategy() -> impl Strategy<Value = TransactionType> {
    prop_oneof![
        Just(TransactionType::Sale),
        Just(TransactionType::Purchase),
        Just(TransactionType::StockIn),
        Just(TransactionType::StockOut),
        Just(TransactionType::Return),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Conservation law: beginning + receiving - issuance == ending whenever
    /// the derived beginning balance was not clamped at zero
    #[test]
    fn prop_conservation_law(
        stock in stock_strategy(),
        movements in prop::collection::vec((movement_type_strategy(), quantity_strategy()), 0..10)
    ) {
        let price = snapshot("Interior Paint", stock, Some(10), Some(50));
        let txs: Vec<TransactionSnapshot> = movements
            .iter()
            .map(|(ty, qty)| tx_for(&price, *ty, *qty, as_of()))
            .collect();

        let report = daily_stock_status(as_of(), &[price], &txs);
        let row = &report.interior[0];

        if row.beginning_balance > 0 {
            prop_assert_eq!(
                row.beginning_balance + row.daily_receiving - row.daily_issuance,
                row.ending_balance
            );
        } else {
            // Clamped case: the naive formula would have gone negative
            prop_assert!(row.ending_balance - row.daily_receiving + row.daily_issuance <= 0);
        }
    }

    /// The computation is a pure function: identical inputs give identical reports
    #[test]
    fn prop_idempotent(
        stock in stock_strategy(),
        min in threshold_strategy(),
        max in threshold_strategy(),
        movements in prop::collection::vec((movement_type_strategy(), quantity_strategy()), 0..10)
    ) {
        let price = snapshot("Interior and Exterior", stock, min, max);
        let txs: Vec<TransactionSnapshot> = movements
            .iter()
            .map(|(ty, qty)| tx_for(&price, *ty, *qty, as_of()))
            .collect();

        let first = daily_stock_status(as_of(), std::slice::from_ref(&price), &txs);
        let second = daily_stock_status(as_of(), std::slice::from_ref(&price), &txs);

        prop_assert_eq!(first, second);
    }

    /// Quantity to order and beginning balance are never negative
    #[test]
    fn prop_derived_quantities_non_negative(
        stock in stock_strategy(),
        min in threshold_strategy(),
        max in threshold_strategy(),
        movements in prop::collection::vec((movement_type_strategy(), quantity_strategy()), 0..10)
    ) {
        let price = snapshot("Interior Paint", stock, min, max);
        let txs: Vec<TransactionSnapshot> = movements
            .iter()
            .map(|(ty, qty)| tx_for(&price, *ty, *qty, as_of()))
            .collect();

        let report = daily_stock_status(as_of(), &[price], &txs);
        let row = &report.interior[0];

        prop_assert!(row.quantity_to_order >= 0);
        prop_assert!(row.beginning_balance >= 0);
    }

    /// Variation is the signed distance between ending balance and reorder point
    #[test]
    fn prop_variation_identity(
        stock in stock_strategy(),
        min in threshold_strategy(),
        max in threshold_strategy()
    ) {
        let price = snapshot("Interior Paint", stock, min, max);

        let report = daily_stock_status(as_of(), &[price], &[]);
        let row = &report.interior[0];

        prop_assert_eq!(row.variation, row.ending_balance - row.reorder_point);
    }

    /// Every report row lands in a bucket its category names
    #[test]
    fn prop_bucket_membership(
        stock in stock_strategy(),
        interior in any::<bool>(),
        exterior in any::<bool>()
    ) {
        let mut category = String::from("Specialty");
        if interior {
            category.push_str(" Interior");
        }
        if exterior {
            category.push_str(" Exterior");
        }
        let price = snapshot(&category, stock, None, None);

        let report = daily_stock_status(as_of(), &[price], &[]);

        prop_assert_eq!(report.interior.len(), usize::from(interior));
        prop_assert_eq!(report.exterior.len(), usize::from(exterior));
    }
}
