//! Daily stock-status report computation
//!
//! Reconstructs one report day's stock movement per (product, base) pair from
//! the current price-row snapshot and the transaction log, and recommends a
//! reorder quantity. Pure and stateless: every call derives the report from
//! its inputs alone.
//!
//! The snapshot's `stock_level` reflects stock as of now, not historical
//! end-of-day state; the report treats it as the day's ending balance and
//! derives the beginning balance backward from it. This is a known
//! approximation that assumes no transactions have posted for the pair since
//! the report day.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::{ProductBaseSnapshot, TransactionSnapshot, TransactionType};

/// Trailing window used for the average daily sale rate
pub const RECENT_SALES_WINDOW_DAYS: i64 = 7;

/// One (product, base) row of the daily stock-status report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockStatusRow {
    pub product_id: Uuid,
    pub base_id: Uuid,
    pub product_name: String,
    pub size: Option<String>,
    pub base_name: String,
    pub beginning_balance: i32,
    pub daily_receiving: i32,
    pub daily_issuance: i32,
    pub ending_balance: i32,
    pub reorder_point: i32,
    pub variation: i32,
    pub economic_order_quantity: i32,
    pub maximum_stock: i32,
    pub quantity_to_order: i32,
    /// Trailing average daily sale quantity over the last
    /// [`RECENT_SALES_WINDOW_DAYS`] days. Carried on the row for future EOQ
    /// refinement but not blended into `economic_order_quantity`.
    pub avg_daily_sales: Decimal,
}

/// Daily stock-status report, split into the two export buckets
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockStatusReport {
    pub as_of: NaiveDate,
    pub interior: Vec<StockStatusRow>,
    pub exterior: Vec<StockStatusRow>,
}

/// Compute the daily stock-status report for `as_of`.
///
/// `price_rows` is the current snapshot of every (product, base) pair being
/// reported; `transactions` is the transaction log available to the caller
/// (filtered internally to the report day and the trailing sales window).
/// Empty inputs yield an empty report, never an error.
pub fn daily_stock_status(
    as_of: NaiveDate,
    price_rows: &[ProductBaseSnapshot],
    transactions: &[TransactionSnapshot],
) -> StockStatusReport {
    let window_start = as_of - chrono::Duration::days(RECENT_SALES_WINDOW_DAYS);

    let mut interior = Vec::new();
    let mut exterior = Vec::new();

    for price in price_rows {
        let mut receiving = 0i32;
        let mut issuance = 0i32;
        let mut recent_sales = 0i32;

        for tx in transactions {
            if tx.product_id != price.product_id || tx.base_id != price.base_id {
                continue;
            }
            if tx.transaction_date == as_of {
                match tx.transaction_type {
                    TransactionType::StockIn | TransactionType::Purchase => {
                        receiving += tx.quantity
                    }
                    TransactionType::Sale | TransactionType::StockOut => issuance += tx.quantity,
                    TransactionType::Return => {}
                }
            } else if tx.transaction_date >= window_start
                && tx.transaction_date < as_of
                && tx.transaction_type == TransactionType::Sale
            {
                recent_sales += tx.quantity;
            }
        }

        // The snapshot is the ending balance; derive the beginning balance
        // backward so that beginning + receiving - issuance == ending, floored
        // at zero against inconsistent data.
        let ending = price.stock_level;
        let beginning = (ending - receiving + issuance).max(0);

        let reorder_point = price.min_stock_level.unwrap_or(0);
        let economic_order_quantity = match (price.min_stock_level, price.max_stock_level) {
            (Some(min), Some(max)) => max - min,
            _ => 0,
        };
        let maximum_stock = price
            .max_stock_level
            .unwrap_or(reorder_point + economic_order_quantity);
        let quantity_to_order = (maximum_stock - ending).max(0);

        let avg_daily_sales =
            Decimal::from(recent_sales) / Decimal::from(RECENT_SALES_WINDOW_DAYS);

        let row = StockStatusRow {
            product_id: price.product_id,
            base_id: price.base_id,
            product_name: price.product_name.clone(),
            size: price.size.clone(),
            base_name: price.base_name.clone(),
            beginning_balance: beginning,
            daily_receiving: receiving,
            daily_issuance: issuance,
            ending_balance: ending,
            reorder_point,
            variation: ending - reorder_point,
            economic_order_quantity,
            maximum_stock,
            quantity_to_order,
            avg_daily_sales,
        };

        // Buckets are checked independently: a category mentioning both words
        // lands in both, one mentioning neither lands in neither.
        let category = price.category.to_lowercase();
        if category.contains("interior") {
            interior.push(row.clone());
        }
        if category.contains("exterior") {
            exterior.push(row);
        }
    }

    StockStatusReport {
        as_of,
        interior,
        exterior,
    }
}
