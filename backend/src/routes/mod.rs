//! Route definitions for the Paint Inventory Dashboard

use axum::{
    routing::{get, put},
    Router,
};

use crate::{handlers, AppState};

/// Create API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Health check
        .route("/health", get(handlers::health_check))
        // Product and base price management
        .nest("/products", product_routes())
        // Supplier management
        .nest("/suppliers", supplier_routes())
        // Stock transactions
        .nest("/transactions", transaction_routes())
        // Reports
        .nest("/reports", report_routes())
        // Dashboard
        .nest("/dashboard", dashboard_routes())
}

/// Product and base price management routes
fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::list_products).post(handlers::create_product))
        .route(
            "/:product_id",
            get(handlers::get_product)
                .put(handlers::update_product)
                .delete(handlers::delete_product),
        )
        .route(
            "/:product_id/bases",
            get(handlers::list_base_prices).post(handlers::add_base_price),
        )
        .route(
            "/:product_id/bases/:base_id",
            put(handlers::update_base_price).delete(handlers::delete_base_price),
        )
        .route(
            "/:product_id/bases/:base_id/transactions",
            get(handlers::get_pair_transactions),
        )
}

/// Supplier management routes
fn supplier_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::list_suppliers).post(handlers::create_supplier))
        .route(
            "/:supplier_id",
            get(handlers::get_supplier)
                .put(handlers::update_supplier)
                .delete(handlers::delete_supplier),
        )
}

/// Stock transaction routes
fn transaction_routes() -> Router<AppState> {
    Router::new().route(
        "/",
        get(handlers::list_transactions).post(handlers::record_transaction),
    )
}

/// Report routes
fn report_routes() -> Router<AppState> {
    Router::new()
        .route("/stock-status", get(handlers::get_stock_status))
        .route("/transactions/summary", get(handlers::get_transaction_summary))
}

/// Dashboard routes
fn dashboard_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::get_dashboard_metrics))
        .route("/low-stock", get(handlers::get_low_stock))
}
