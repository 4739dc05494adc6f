//! Reporting handlers for the stock-status report and data export

use axum::{
    extract::{Query, State},
    http::header,
    response::IntoResponse,
    Json,
};
use chrono::{NaiveDate, Utc};
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::services::report::{ReportService, TransactionSummaryPoint};
use crate::AppState;

#[derive(Deserialize)]
pub struct StockStatusQuery {
    /// Report day; defaults to today
    pub date: Option<NaiveDate>,
    /// "json" or "csv"
    pub format: Option<String>,
    /// Bucket to export when format=csv: "interior" (default) or "exterior"
    pub bucket: Option<String>,
}

#[derive(Deserialize)]
pub struct SummaryQuery {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

/// Get the daily stock-status report
pub async fn get_stock_status(
    State(state): State<AppState>,
    Query(query): Query<StockStatusQuery>,
) -> AppResult<impl IntoResponse> {
    let service = ReportService::new(state.db.clone());
    let as_of = query.date.unwrap_or_else(|| Utc::now().date_naive());
    let report = service.get_stock_status(as_of).await?;

    if query.format.as_deref() == Some("csv") {
        let (rows, filename) = match query.bucket.as_deref().unwrap_or("interior") {
            "interior" => (&report.interior, "stock_status_interior.csv"),
            "exterior" => (&report.exterior, "stock_status_exterior.csv"),
            other => {
                return Err(AppError::Validation {
                    field: "bucket".to_string(),
                    message: format!("Unknown bucket: {}", other),
                })
            }
        };
        let csv = ReportService::stock_status_to_csv(rows)?;
        Ok((
            [
                (header::CONTENT_TYPE, "text/csv".to_string()),
                (
                    header::CONTENT_DISPOSITION,
                    format!("attachment; filename=\"{}\"", filename),
                ),
            ],
            csv,
        )
            .into_response())
    } else {
        Ok(Json(report).into_response())
    }
}

/// Get per-day sales/purchase totals over a date range
pub async fn get_transaction_summary(
    State(state): State<AppState>,
    Query(query): Query<SummaryQuery>,
) -> AppResult<Json<Vec<TransactionSummaryPoint>>> {
    if query.end_date < query.start_date {
        return Err(AppError::Validation {
            field: "end_date".to_string(),
            message: "End date must not precede start date".to_string(),
        });
    }

    let service = ReportService::new(state.db);
    let summary = service
        .get_transaction_summary(query.start_date, query.end_date)
        .await?;
    Ok(Json(summary))
}
