//! Dashboard handlers: KPI metrics and the low-stock panel

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;

use shared::low_stock::{LowStockEntry, DEFAULT_LOW_STOCK_LIMIT};

use crate::error::AppResult;
use crate::services::report::{DashboardMetrics, ReportService};
use crate::AppState;

#[derive(Deserialize)]
pub struct LowStockQuery {
    /// Panel size; defaults to 10
    pub limit: Option<usize>,
}

/// Get dashboard KPI metrics
pub async fn get_dashboard_metrics(
    State(state): State<AppState>,
) -> AppResult<Json<DashboardMetrics>> {
    let service = ReportService::new(state.db);
    let metrics = service.get_dashboard_metrics().await?;
    Ok(Json(metrics))
}

/// Get the ranked low-stock panel
pub async fn get_low_stock(
    State(state): State<AppState>,
    Query(query): Query<LowStockQuery>,
) -> AppResult<Json<Vec<LowStockEntry>>> {
    let service = ReportService::new(state.db);
    let entries = service
        .get_low_stock(query.limit.unwrap_or(DEFAULT_LOW_STOCK_LIMIT))
        .await?;
    Ok(Json(entries))
}
