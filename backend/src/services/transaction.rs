//! Stock transaction service
//!
//! Posting a transaction and adjusting the pair's stock level happen inside
//! one database transaction, so the snapshot the reports read is always the
//! sum of what was posted.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::Deserialize;
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::models::{resolve_pricing, StockEffect, StockTransaction, TransactionType};

/// Transaction service for posting and listing stock transactions
#[derive(Clone)]
pub struct TransactionService {
    db: PgPool,
}

/// Input for posting a stock transaction
#[derive(Debug, Deserialize)]
pub struct RecordTransactionInput {
    pub product_id: Uuid,
    pub base_price_id: Uuid,
    pub transaction_type: TransactionType,
    pub quantity: i32,
    pub unit_price: Option<Decimal>,
    pub total_amount: Option<Decimal>,
    pub counterparty: Option<String>,
    pub notes: Option<String>,
    pub transaction_date: Option<NaiveDate>,
}

/// Filter for listing transactions
#[derive(Debug, Default, Deserialize)]
pub struct TransactionFilter {
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub transaction_type: Option<TransactionType>,
    pub product_id: Option<Uuid>,
}

/// Row for transaction queries
#[derive(Debug, FromRow)]
struct TransactionRow {
    id: Uuid,
    product_id: Uuid,
    base_price_id: Uuid,
    transaction_type: String,
    quantity: i32,
    unit_price: Option<Decimal>,
    total_amount: Decimal,
    counterparty: Option<String>,
    notes: Option<String>,
    transaction_date: NaiveDate,
    created_at: DateTime<Utc>,
}

impl TryFrom<TransactionRow> for StockTransaction {
    type Error = AppError;

    fn try_from(row: TransactionRow) -> Result<Self, Self::Error> {
        let transaction_type = TransactionType::from_str(&row.transaction_type).ok_or_else(|| {
            AppError::Internal(format!("Unknown transaction type: {}", row.transaction_type))
        })?;

        Ok(StockTransaction {
            id: row.id,
            product_id: row.product_id,
            base_price_id: row.base_price_id,
            transaction_type,
            quantity: row.quantity,
            unit_price: row.unit_price,
            total_amount: row.total_amount,
            counterparty: row.counterparty,
            notes: row.notes,
            transaction_date: row.transaction_date,
            created_at: row.created_at,
        })
    }
}

const TRANSACTION_COLUMNS: &str = "id, product_id, base_price_id, transaction_type, quantity, \
     unit_price, total_amount, counterparty, notes, transaction_date, created_at";

impl TransactionService {
    /// Create a new TransactionService instance
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// Post a stock transaction and adjust the pair's stock level
    pub async fn record_transaction(
        &self,
        input: RecordTransactionInput,
    ) -> AppResult<StockTransaction> {
        if input.quantity <= 0 {
            return Err(AppError::Validation {
                field: "quantity".to_string(),
                message: "Quantity must be positive".to_string(),
            });
        }

        let mut tx = self.db.begin().await?;

        // Lock the base price row so concurrent posts serialize on the pair
        let pair = sqlx::query_as::<_, (i32, Decimal)>(
            r#"
            SELECT stock_level, unit_price
            FROM base_prices
            WHERE id = $1 AND product_id = $2
            FOR UPDATE
            "#,
        )
        .bind(input.base_price_id)
        .bind(input.product_id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or_else(|| AppError::NotFound("Base price".to_string()))?;

        let (stock_level, list_price) = pair;

        let new_level = match input.transaction_type.stock_effect() {
            StockEffect::Increase => stock_level + input.quantity,
            StockEffect::Decrease => {
                if stock_level < input.quantity {
                    return Err(AppError::InsufficientStock(format!(
                        "Requested {} but only {} in stock",
                        input.quantity, stock_level
                    )));
                }
                stock_level - input.quantity
            }
        };

        sqlx::query("UPDATE base_prices SET stock_level = $1 WHERE id = $2")
            .bind(new_level)
            .bind(input.base_price_id)
            .execute(&mut *tx)
            .await?;

        let (unit_price, total_amount) = resolve_pricing(
            input.unit_price,
            list_price,
            input.quantity,
            input.total_amount,
        );
        let transaction_date = input
            .transaction_date
            .unwrap_or_else(|| Utc::now().date_naive());

        let row = sqlx::query_as::<_, TransactionRow>(&format!(
            r#"
            INSERT INTO stock_transactions (
                product_id, base_price_id, transaction_type, quantity,
                unit_price, total_amount, counterparty, notes, transaction_date
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING {}
            "#,
            TRANSACTION_COLUMNS
        ))
        .bind(input.product_id)
        .bind(input.base_price_id)
        .bind(input.transaction_type.as_str())
        .bind(input.quantity)
        .bind(unit_price)
        .bind(total_amount)
        .bind(&input.counterparty)
        .bind(&input.notes)
        .bind(transaction_date)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        row.try_into()
    }

    /// List transactions, newest first, with optional filters
    pub async fn list_transactions(
        &self,
        filter: &TransactionFilter,
    ) -> AppResult<Vec<StockTransaction>> {
        let rows = sqlx::query_as::<_, TransactionRow>(&format!(
            r#"
            SELECT {}
            FROM stock_transactions
            WHERE ($1::date IS NULL OR transaction_date >= $1)
              AND ($2::date IS NULL OR transaction_date <= $2)
              AND ($3::text IS NULL OR transaction_type = $3)
              AND ($4::uuid IS NULL OR product_id = $4)
            ORDER BY transaction_date DESC, created_at DESC
            "#,
            TRANSACTION_COLUMNS
        ))
        .bind(filter.start_date)
        .bind(filter.end_date)
        .bind(filter.transaction_type.map(|t| t.as_str()))
        .bind(filter.product_id)
        .fetch_all(&self.db)
        .await?;

        rows.into_iter().map(StockTransaction::try_from).collect()
    }

    /// Get transactions for one (product, base) pair, newest first
    pub async fn get_pair_transactions(
        &self,
        product_id: Uuid,
        base_price_id: Uuid,
    ) -> AppResult<Vec<StockTransaction>> {
        let rows = sqlx::query_as::<_, TransactionRow>(&format!(
            r#"
            SELECT {}
            FROM stock_transactions
            WHERE product_id = $1 AND base_price_id = $2
            ORDER BY transaction_date DESC, created_at DESC
            "#,
            TRANSACTION_COLUMNS
        ))
        .bind(product_id)
        .bind(base_price_id)
        .fetch_all(&self.db)
        .await?;

        rows.into_iter().map(StockTransaction::try_from).collect()
    }
}
