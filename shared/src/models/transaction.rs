//! Stock transaction models

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Types of stock transactions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionType {
    Sale,
    Purchase,
    StockIn,
    StockOut,
    Return,
}

/// Direction of a transaction's effect on the pair's stock level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StockEffect {
    Increase,
    Decrease,
}

impl TransactionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Sale => "sale",
            TransactionType::Purchase => "purchase",
            TransactionType::StockIn => "stock_in",
            TransactionType::StockOut => "stock_out",
            TransactionType::Return => "return",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "sale" => Some(TransactionType::Sale),
            "purchase" => Some(TransactionType::Purchase),
            "stock_in" => Some(TransactionType::StockIn),
            "stock_out" => Some(TransactionType::StockOut),
            "return" => Some(TransactionType::Return),
            _ => None,
        }
    }

    /// Sign of the stock effect: purchases, stock-ins and returns add to the
    /// pair's stock level; sales and stock-outs remove from it
    pub fn stock_effect(&self) -> StockEffect {
        match self {
            TransactionType::Purchase | TransactionType::StockIn | TransactionType::Return => {
                StockEffect::Increase
            }
            TransactionType::Sale | TransactionType::StockOut => StockEffect::Decrease,
        }
    }
}

/// Resolve the price fields to persist with a transaction.
///
/// The quoted unit price wins over the pair's list price; the total defaults
/// to the effective unit price times the quantity when not quoted explicitly.
pub fn resolve_pricing(
    quoted_unit_price: Option<Decimal>,
    list_price: Decimal,
    quantity: i32,
    quoted_total: Option<Decimal>,
) -> (Decimal, Decimal) {
    let unit_price = quoted_unit_price.unwrap_or(list_price);
    let total = quoted_total.unwrap_or_else(|| unit_price * Decimal::from(quantity));
    (unit_price, total)
}

/// A posted stock transaction
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StockTransaction {
    pub id: Uuid,
    pub product_id: Uuid,
    pub base_price_id: Uuid,
    pub transaction_type: TransactionType,
    pub quantity: i32,
    pub unit_price: Option<Decimal>,
    pub total_amount: Decimal,
    /// Buyer/supplier name for sales and purchases
    pub counterparty: Option<String>,
    pub notes: Option<String>,
    pub transaction_date: NaiveDate,
    pub created_at: DateTime<Utc>,
}

/// Snapshot of one transaction as fed into the stock-status computation.
///
/// `transaction_date` is the posting date at day granularity (the report
/// ignores time-of-day); the query boundary falls back to the creation
/// timestamp's date when no explicit posting date was recorded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransactionSnapshot {
    pub product_id: Uuid,
    pub base_id: Uuid,
    pub transaction_type: TransactionType,
    pub quantity: i32,
    pub transaction_date: NaiveDate,
}
