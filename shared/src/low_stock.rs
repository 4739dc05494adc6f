//! Low-stock classification for the dashboard restock panel
//!
//! Flags (product, base) pairs sitting at or below their reorder threshold and
//! ranks them by urgency. Pairs with zero stock are deliberately excluded:
//! fully-depleted inventory belongs to the separate out-of-stock bucket,
//! which the dashboard computes by plain equality.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::ProductBaseSnapshot;

/// Dashboard panel size; a display limit, not a domain rule
pub const DEFAULT_LOW_STOCK_LIMIT: usize = 10;

/// How close a stock level is to its reorder threshold
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Urgency {
    Critical,
    Warning,
    Low,
}

impl Urgency {
    /// Sort rank: critical first, low last
    pub fn rank(&self) -> u8 {
        match self {
            Urgency::Critical => 0,
            Urgency::Warning => 1,
            Urgency::Low => 2,
        }
    }

    /// Classify a stock level expressed as a percentage of its threshold
    pub fn from_percentage(stock_percentage: f64) -> Self {
        if stock_percentage <= 25.0 {
            Urgency::Critical
        } else if stock_percentage <= 50.0 {
            Urgency::Warning
        } else {
            Urgency::Low
        }
    }
}

/// One entry of the ranked low-stock list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LowStockEntry {
    pub product_id: Uuid,
    pub base_id: Uuid,
    pub product_name: String,
    pub base_name: String,
    pub current_stock: i32,
    pub min_stock: i32,
    pub stock_percentage: f64,
    pub urgency: Urgency,
}

/// Classify the under-stocked (product, base) pairs and rank them by urgency.
///
/// A pair qualifies only when `0 < stock_level <= min_stock_level`; pairs with
/// no threshold set are not trackable and are skipped. The result is stably
/// sorted by urgency rank and truncated to `limit` entries.
pub fn classify_low_stock(price_rows: &[ProductBaseSnapshot], limit: usize) -> Vec<LowStockEntry> {
    let mut entries: Vec<LowStockEntry> = price_rows
        .iter()
        .filter_map(|row| {
            let min_stock = match row.min_stock_level {
                Some(min) if min > 0 => min,
                _ => return None,
            };
            if row.stock_level <= 0 || row.stock_level > min_stock {
                return None;
            }

            let stock_percentage = f64::from(row.stock_level) / f64::from(min_stock) * 100.0;
            Some(LowStockEntry {
                product_id: row.product_id,
                base_id: row.base_id,
                product_name: row.product_name.clone(),
                base_name: row.base_name.clone(),
                current_stock: row.stock_level,
                min_stock,
                stock_percentage,
                urgency: Urgency::from_percentage(stock_percentage),
            })
        })
        .collect();

    // sort_by_key is stable, so ties keep their input order
    entries.sort_by_key(|e| e.urgency.rank());
    entries.truncate(limit);
    entries
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(name: &str, stock: i32, min: Option<i32>) -> ProductBaseSnapshot {
        ProductBaseSnapshot {
            product_id: Uuid::new_v4(),
            base_id: Uuid::new_v4(),
            product_name: name.to_string(),
            category: "Interior Paint".to_string(),
            size: None,
            base_name: "Base C".to_string(),
            stock_level: stock,
            min_stock_level: min,
            max_stock_level: None,
            unit_price: rust_decimal::Decimal::from(100),
        }
    }

    #[test]
    fn quarter_of_threshold_is_critical() {
        // 5 of 20 = 25%, the boundary is inclusive
        let entries = classify_low_stock(&[row("Gloss", 5, Some(20))], DEFAULT_LOW_STOCK_LIMIT);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].stock_percentage, 25.0);
        assert_eq!(entries[0].urgency, Urgency::Critical);
    }

    #[test]
    fn three_quarters_of_threshold_is_low() {
        // 15 of 20 = 75%
        let entries = classify_low_stock(&[row("Matt", 15, Some(20))], DEFAULT_LOW_STOCK_LIMIT);
        assert_eq!(entries[0].stock_percentage, 75.0);
        assert_eq!(entries[0].urgency, Urgency::Low);
    }

    #[test]
    fn at_threshold_is_low_not_warning() {
        let entries = classify_low_stock(&[row("Satin", 20, Some(20))], DEFAULT_LOW_STOCK_LIMIT);
        assert_eq!(entries[0].stock_percentage, 100.0);
        assert_eq!(entries[0].urgency, Urgency::Low);
    }

    #[test]
    fn half_of_threshold_is_warning() {
        let entries = classify_low_stock(&[row("Primer", 10, Some(20))], DEFAULT_LOW_STOCK_LIMIT);
        assert_eq!(entries[0].urgency, Urgency::Warning);
    }

    #[test]
    fn zero_stock_is_excluded() {
        let entries = classify_low_stock(&[row("Gloss", 0, Some(20))], DEFAULT_LOW_STOCK_LIMIT);
        assert!(entries.is_empty());
    }

    #[test]
    fn missing_or_zero_threshold_is_not_trackable() {
        let rows = vec![row("NoMin", 3, None), row("ZeroMin", 3, Some(0))];
        assert!(classify_low_stock(&rows, DEFAULT_LOW_STOCK_LIMIT).is_empty());
    }

    #[test]
    fn above_threshold_is_not_flagged() {
        let entries = classify_low_stock(&[row("Gloss", 21, Some(20))], DEFAULT_LOW_STOCK_LIMIT);
        assert!(entries.is_empty());
    }

    #[test]
    fn sorted_by_urgency_with_stable_ties() {
        let rows = vec![
            row("LowA", 18, Some(20)),   // 90% -> low
            row("Critical", 2, Some(20)), // 10% -> critical
            row("LowB", 16, Some(20)),   // 80% -> low
            row("Warning", 8, Some(20)), // 40% -> warning
        ];
        let entries = classify_low_stock(&rows, DEFAULT_LOW_STOCK_LIMIT);
        let names: Vec<&str> = entries.iter().map(|e| e.product_name.as_str()).collect();
        assert_eq!(names, vec!["Critical", "Warning", "LowA", "LowB"]);
    }

    #[test]
    fn result_is_capped_at_limit() {
        let rows: Vec<ProductBaseSnapshot> =
            (0..25).map(|i| row(&format!("P{i}"), 1, Some(10))).collect();
        let entries = classify_low_stock(&rows, DEFAULT_LOW_STOCK_LIMIT);
        assert_eq!(entries.len(), DEFAULT_LOW_STOCK_LIMIT);

        // The cap is a parameter, not a domain rule
        assert_eq!(classify_low_stock(&rows, 3).len(), 3);
        assert_eq!(classify_low_stock(&rows, 100).len(), 25);
    }
}
