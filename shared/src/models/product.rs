//! Paint product and base price models
//!
//! Stock and pricing are tracked per (product, base) pair: each product carries
//! one base price row per color/tint base, and all stock thresholds are set
//! independently per base.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A paint product
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: Uuid,
    pub name: String,
    /// Free-text category; the stock-status report buckets rows by
    /// substring-matching this against "interior"/"exterior"
    pub category: String,
    /// Container size, e.g. "1L", "4L", "Pail"
    pub size: Option<String>,
    pub description: Option<String>,
    pub supplier_id: Option<Uuid>,
    /// Product-level reorder threshold, used as a fallback when a base price
    /// row has no threshold of its own
    pub min_stock_level: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A base price row: stock level, thresholds, and unit price for one
/// (product, color base) pair
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BasePrice {
    pub id: Uuid,
    pub product_id: Uuid,
    pub base_name: String,
    pub stock_level: i32,
    pub min_stock_level: Option<i32>,
    pub max_stock_level: Option<i32>,
    pub unit_price: Decimal,
}

/// Snapshot of one (product, base) pair as fed into the report computations.
///
/// This is the flattened join of a product and one of its base price rows,
/// shaped at the query boundary: `min_stock_level` here is already the
/// effective threshold (base-level value, falling back to the product-level
/// one when the base has none).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductBaseSnapshot {
    pub product_id: Uuid,
    pub base_id: Uuid,
    pub product_name: String,
    pub category: String,
    pub size: Option<String>,
    pub base_name: String,
    pub stock_level: i32,
    pub min_stock_level: Option<i32>,
    pub max_stock_level: Option<i32>,
    pub unit_price: Decimal,
}
