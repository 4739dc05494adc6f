//! Reporting service for the dashboard and daily stock-status report
//!
//! Fetches (product, base) snapshots and transaction history from the
//! database, feeds them to the pure report computations in the shared crate,
//! and formats the stock-status report for CSV export.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use shared::low_stock::{classify_low_stock, LowStockEntry};
use shared::models::{ProductBaseSnapshot, TransactionSnapshot, TransactionType};
use shared::stock_status::{
    daily_stock_status, StockStatusReport, StockStatusRow, RECENT_SALES_WINDOW_DAYS,
};

use crate::error::{AppError, AppResult};

/// Reporting service
#[derive(Clone)]
pub struct ReportService {
    db: PgPool,
}

/// Dashboard KPI metrics
#[derive(Debug, Serialize)]
pub struct DashboardMetrics {
    pub total_products: i64,
    pub total_stock_units: i64,
    pub inventory_value: Decimal,
    /// Pairs with 0 < stock <= threshold; uncapped count
    pub low_stock_count: usize,
    /// Pairs with exactly zero stock; tracked separately from low stock
    pub out_of_stock_count: usize,
    pub today_sales_total: Decimal,
    pub today_transactions: i64,
}

/// Per-day sales/purchase totals for the dashboard chart
#[derive(Debug, Serialize, FromRow)]
pub struct TransactionSummaryPoint {
    pub period: NaiveDate,
    pub sales_total: Decimal,
    pub purchase_total: Decimal,
    pub transaction_count: i64,
}

/// Row for the snapshot query
#[derive(Debug, FromRow)]
struct SnapshotRow {
    product_id: Uuid,
    base_id: Uuid,
    product_name: String,
    category: String,
    size: Option<String>,
    base_name: String,
    stock_level: i32,
    min_stock_level: Option<i32>,
    max_stock_level: Option<i32>,
    unit_price: Decimal,
}

impl From<SnapshotRow> for ProductBaseSnapshot {
    fn from(row: SnapshotRow) -> Self {
        ProductBaseSnapshot {
            product_id: row.product_id,
            base_id: row.base_id,
            product_name: row.product_name,
            category: row.category,
            size: row.size,
            base_name: row.base_name,
            stock_level: row.stock_level,
            min_stock_level: row.min_stock_level,
            max_stock_level: row.max_stock_level,
            unit_price: row.unit_price,
        }
    }
}

/// Row for the transaction snapshot query
#[derive(Debug, FromRow)]
struct TransactionSnapshotRow {
    product_id: Uuid,
    base_id: Uuid,
    transaction_type: String,
    quantity: i32,
    transaction_date: NaiveDate,
}

/// Spreadsheet headers for the stock-status export. Column order and
/// spellings (including "Begining balance") match the legacy export format
/// that downstream consumers key on.
const STOCK_STATUS_HEADERS: [&str; 12] = [
    "Product",
    "Size",
    "Base",
    "Begining balance",
    "Daily receiving(pcs)",
    "Daily issuance(pcs)",
    "Ending balance",
    "Reorder point",
    "Variation",
    "EOQ",
    "Maximum stock",
    "Quantity to order",
];

impl ReportService {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// Fetch the current snapshot of every (product, base) pair.
    ///
    /// The effective minimum stock level is resolved here: base-level value
    /// with product-level fallback.
    async fn fetch_snapshots(&self) -> AppResult<Vec<ProductBaseSnapshot>> {
        let rows = sqlx::query_as::<_, SnapshotRow>(
            r#"
            SELECT p.id as product_id,
                   bp.id as base_id,
                   p.name as product_name,
                   p.category,
                   p.size,
                   bp.base_name,
                   bp.stock_level,
                   COALESCE(bp.min_stock_level, p.min_stock_level) as min_stock_level,
                   bp.max_stock_level,
                   bp.unit_price
            FROM base_prices bp
            JOIN products p ON p.id = bp.product_id
            ORDER BY p.name, bp.base_name
            "#,
        )
        .fetch_all(&self.db)
        .await?;

        Ok(rows.into_iter().map(ProductBaseSnapshot::from).collect())
    }

    /// Fetch transactions posted within `[start, end]`, shaped for the
    /// stock-status computation
    async fn fetch_transaction_snapshots(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> AppResult<Vec<TransactionSnapshot>> {
        let rows = sqlx::query_as::<_, TransactionSnapshotRow>(
            r#"
            SELECT product_id,
                   base_price_id as base_id,
                   transaction_type,
                   quantity,
                   COALESCE(transaction_date, created_at::date) as transaction_date
            FROM stock_transactions
            WHERE COALESCE(transaction_date, created_at::date) BETWEEN $1 AND $2
            "#,
        )
        .bind(start)
        .bind(end)
        .fetch_all(&self.db)
        .await?;

        rows.into_iter()
            .map(|row| {
                let transaction_type = TransactionType::from_str(&row.transaction_type)
                    .ok_or_else(|| {
                        AppError::Internal(format!(
                            "Unknown transaction type: {}",
                            row.transaction_type
                        ))
                    })?;
                Ok(TransactionSnapshot {
                    product_id: row.product_id,
                    base_id: row.base_id,
                    transaction_type,
                    quantity: row.quantity,
                    transaction_date: row.transaction_date,
                })
            })
            .collect()
    }

    /// Compute the daily stock-status report for `as_of`
    pub async fn get_stock_status(&self, as_of: NaiveDate) -> AppResult<StockStatusReport> {
        let snapshots = self.fetch_snapshots().await?;
        let window_start = as_of - chrono::Duration::days(RECENT_SALES_WINDOW_DAYS);
        let transactions = self
            .fetch_transaction_snapshots(window_start, as_of)
            .await?;

        Ok(daily_stock_status(as_of, &snapshots, &transactions))
    }

    /// The ranked, capped low-stock panel
    pub async fn get_low_stock(&self, limit: usize) -> AppResult<Vec<LowStockEntry>> {
        let snapshots = self.fetch_snapshots().await?;
        Ok(classify_low_stock(&snapshots, limit))
    }

    /// Dashboard KPI metrics
    pub async fn get_dashboard_metrics(&self) -> AppResult<DashboardMetrics> {
        let total_products: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM products")
            .fetch_one(&self.db)
            .await?;

        let totals: (i64, Decimal) = sqlx::query_as(
            r#"
            SELECT COALESCE(SUM(stock_level), 0)::bigint,
                   COALESCE(SUM(stock_level * unit_price), 0)
            FROM base_prices
            "#,
        )
        .fetch_one(&self.db)
        .await?;

        let today: (Decimal, i64) = sqlx::query_as(
            r#"
            SELECT COALESCE(SUM(total_amount) FILTER (WHERE transaction_type = 'sale'), 0),
                   COUNT(*)
            FROM stock_transactions
            WHERE transaction_date = CURRENT_DATE
            "#,
        )
        .fetch_one(&self.db)
        .await?;

        // Low stock and out of stock are distinct buckets: the classifier
        // only sees pairs with stock remaining, zero-stock pairs are counted
        // by plain equality.
        let snapshots = self.fetch_snapshots().await?;
        let low_stock_count = classify_low_stock(&snapshots, usize::MAX).len();
        let out_of_stock_count = snapshots.iter().filter(|s| s.stock_level == 0).count();

        Ok(DashboardMetrics {
            total_products,
            total_stock_units: totals.0,
            inventory_value: totals.1,
            low_stock_count,
            out_of_stock_count,
            today_sales_total: today.0,
            today_transactions: today.1,
        })
    }

    /// Per-day sales/purchase totals over a date range
    pub async fn get_transaction_summary(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> AppResult<Vec<TransactionSummaryPoint>> {
        let points = sqlx::query_as::<_, TransactionSummaryPoint>(
            r#"
            SELECT transaction_date as period,
                   COALESCE(SUM(total_amount) FILTER (WHERE transaction_type = 'sale'), 0) as sales_total,
                   COALESCE(SUM(total_amount) FILTER (WHERE transaction_type = 'purchase'), 0) as purchase_total,
                   COUNT(*) as transaction_count
            FROM stock_transactions
            WHERE transaction_date BETWEEN $1 AND $2
            GROUP BY transaction_date
            ORDER BY transaction_date ASC
            "#,
        )
        .bind(start)
        .bind(end)
        .fetch_all(&self.db)
        .await?;

        Ok(points)
    }

    /// Render one stock-status bucket as CSV with the legacy export headers
    pub fn stock_status_to_csv(rows: &[StockStatusRow]) -> AppResult<String> {
        let mut wtr = csv::Writer::from_writer(vec![]);
        wtr.write_record(STOCK_STATUS_HEADERS)
            .map_err(|e| AppError::Internal(format!("CSV serialization error: {}", e)))?;

        for row in rows {
            let record = [
                row.product_name.clone(),
                row.size.clone().unwrap_or_default(),
                row.base_name.clone(),
                row.beginning_balance.to_string(),
                row.daily_receiving.to_string(),
                row.daily_issuance.to_string(),
                row.ending_balance.to_string(),
                row.reorder_point.to_string(),
                row.variation.to_string(),
                row.economic_order_quantity.to_string(),
                row.maximum_stock.to_string(),
                row.quantity_to_order.to_string(),
            ];
            wtr.write_record(&record)
                .map_err(|e| AppError::Internal(format!("CSV serialization error: {}", e)))?;
        }

        let csv_data = String::from_utf8(
            wtr.into_inner()
                .map_err(|e| AppError::Internal(format!("CSV writer error: {}", e)))?,
        )
        .map_err(|e| AppError::Internal(format!("UTF-8 conversion error: {}", e)))?;
        Ok(csv_data)
    }
}
