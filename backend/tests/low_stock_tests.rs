//! Low-stock classification tests
//!
//! Tests for the dashboard low-stock panel including:
//! - Monotonic urgency ordering (critical before warning before low)
//! - Cap invariant (never more entries than the limit)
//! - Exclusion boundary (zero stock never appears)

use proptest::prelude::*;
use rust_decimal::Decimal;
use uuid::Uuid;

use shared::low_stock::{classify_low_stock, Urgency, DEFAULT_LOW_STOCK_LIMIT};
use shared::models::ProductBaseSnapshot;

fn row(stock: i32, min: Option<i32>) -> ProductBaseSnapshot {
    ProductBaseSnapshot {
        product_id: Uuid::new_v4(),
        base_id: Uuid::new_v4(),
        product_name: "Primer".to_string(),
        category: "Interior Paint".to_string(),
        size: None,
        base_name: "Base A".to_string(),
        stock_level: stock,
        min_stock_level: min,
        max_stock_level: None,
        unit_price: Decimal::from(120),
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[test]
fn test_urgency_tiers() {
    // 25% inclusive boundary -> critical
    let critical = classify_low_stock(&[row(5, Some(20))], DEFAULT_LOW_STOCK_LIMIT);
    assert_eq!(critical[0].urgency, Urgency::Critical);

    // 50% inclusive boundary -> warning
    let warning = classify_low_stock(&[row(10, Some(20))], DEFAULT_LOW_STOCK_LIMIT);
    assert_eq!(warning[0].urgency, Urgency::Warning);

    // 75% -> low
    let low = classify_low_stock(&[row(15, Some(20))], DEFAULT_LOW_STOCK_LIMIT);
    assert_eq!(low[0].urgency, Urgency::Low);
}

#[test]
fn test_stock_at_threshold_is_low() {
    let entries = classify_low_stock(&[row(20, Some(20))], DEFAULT_LOW_STOCK_LIMIT);
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].stock_percentage, 100.0);
    assert_eq!(entries[0].urgency, Urgency::Low);
}

#[test]
fn test_zero_stock_never_flagged() {
    let entries = classify_low_stock(&[row(0, Some(20))], DEFAULT_LOW_STOCK_LIMIT);
    assert!(entries.is_empty());
}

// ============================================================================
// Property-Based Tests
// ============================================================================

fn stock_strategy() -> impl Strategy<Value = i32> {
    0..100i32
}

fn threshold_strategy() -> impl Strategy<Value = Option<i32>> {
    prop_oneof![Just(None), (0..80i32).prop_map(Some)]
}

fn rows_strategy() -> impl Strategy<Value = Vec<ProductBaseSnapshot>> {
    prop::collection::vec(
        (stock_strategy(), threshold_strategy()).prop_map(|(stock, min)| row(stock, min)),
        0..40,
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Urgency ranks appear in non-decreasing order
    #[test]
    fn prop_monotonic_urgency_ordering(rows in rows_strategy()) {
        let entries = classify_low_stock(&rows, DEFAULT_LOW_STOCK_LIMIT);
        for pair in entries.windows(2) {
            prop_assert!(pair[0].urgency.rank() <= pair[1].urgency.rank());
        }
    }

    /// Never more entries than the limit, regardless of input size
    #[test]
    fn prop_cap_invariant(rows in rows_strategy(), limit in 0usize..15) {
        let entries = classify_low_stock(&rows, limit);
        prop_assert!(entries.len() <= limit);
    }

    /// Every emitted entry satisfies 0 < stock <= min, so zero-stock pairs
    /// and untracked pairs never appear
    #[test]
    fn prop_exclusion_boundary(rows in rows_strategy()) {
        let entries = classify_low_stock(&rows, usize::MAX);
        for entry in &entries {
            prop_assert!(entry.current_stock > 0);
            prop_assert!(entry.current_stock <= entry.min_stock);
            prop_assert!(entry.min_stock > 0);
        }
    }

    /// The classifier is a pure function of its inputs
    #[test]
    fn prop_idempotent(rows in rows_strategy()) {
        let first = classify_low_stock(&rows, DEFAULT_LOW_STOCK_LIMIT);
        let second = classify_low_stock(&rows, DEFAULT_LOW_STOCK_LIMIT);
        prop_assert_eq!(first, second);
    }

    /// The urgency tier matches the percentage thresholds
    #[test]
    fn prop_urgency_matches_percentage(rows in rows_strategy()) {
        let entries = classify_low_stock(&rows, usize::MAX);
        for entry in &entries {
            let expected = if entry.stock_percentage <= 25.0 {
                Urgency::Critical
            } else if entry.stock_percentage <= 50.0 {
                Urgency::Warning
            } else {
                Urgency::Low
            };
            prop_assert_eq!(entry.urgency, expected);
        }
    }
}
