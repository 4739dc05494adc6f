//! HTTP handlers for stock transaction endpoints

use axum::{
    extract::{Path, Query, State},
    Json,
};
use uuid::Uuid;

use crate::error::AppResult;
use crate::models::StockTransaction;
use crate::services::transaction::{
    RecordTransactionInput, TransactionFilter, TransactionService,
};
use crate::AppState;

/// Post a stock transaction
pub async fn record_transaction(
    State(state): State<AppState>,
    Json(input): Json<RecordTransactionInput>,
) -> AppResult<Json<StockTransaction>> {
    let service = TransactionService::new(state.db);
    let transaction = service.record_transaction(input).await?;
    Ok(Json(transaction))
}

/// List transactions with optional filters
pub async fn list_transactions(
    State(state): State<AppState>,
    Query(filter): Query<TransactionFilter>,
) -> AppResult<Json<Vec<StockTransaction>>> {
    let service = TransactionService::new(state.db);
    let transactions = service.list_transactions(&filter).await?;
    Ok(Json(transactions))
}

/// Get transactions for one (product, base) pair
pub async fn get_pair_transactions(
    State(state): State<AppState>,
    Path((product_id, base_id)): Path<(Uuid, Uuid)>,
) -> AppResult<Json<Vec<StockTransaction>>> {
    let service = TransactionService::new(state.db);
    let transactions = service.get_pair_transactions(product_id, base_id).await?;
    Ok(Json(transactions))
}
