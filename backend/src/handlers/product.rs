//! HTTP handlers for product and base price endpoints

use axum::{
    extract::{Path, State},
    Json,
};
use uuid::Uuid;

use crate::error::AppResult;
use crate::models::{BasePrice, Product};
use crate::services::product::{
    CreateBasePriceInput, CreateProductInput, ProductService, ProductWithBases,
    UpdateBasePriceInput, UpdateProductInput,
};
use crate::AppState;

/// List all products
pub async fn list_products(State(state): State<AppState>) -> AppResult<Json<Vec<Product>>> {
    let service = ProductService::new(state.db);
    let products = service.list_products().await?;
    Ok(Json(products))
}

/// Get a product with its base price rows
pub async fn get_product(
    State(state): State<AppState>,
    Path(product_id): Path<Uuid>,
) -> AppResult<Json<ProductWithBases>> {
    let service = ProductService::new(state.db);
    let product = service.get_product(product_id).await?;
    Ok(Json(product))
}

/// Create a product
pub async fn create_product(
    State(state): State<AppState>,
    Json(input): Json<CreateProductInput>,
) -> AppResult<Json<Product>> {
    let service = ProductService::new(state.db);
    let product = service.create_product(input).await?;
    Ok(Json(product))
}

/// Update a product
pub async fn update_product(
    State(state): State<AppState>,
    Path(product_id): Path<Uuid>,
    Json(input): Json<UpdateProductInput>,
) -> AppResult<Json<Product>> {
    let service = ProductService::new(state.db);
    let product = service.update_product(product_id, input).await?;
    Ok(Json(product))
}

/// Delete a product
pub async fn delete_product(
    State(state): State<AppState>,
    Path(product_id): Path<Uuid>,
) -> AppResult<Json<()>> {
    let service = ProductService::new(state.db);
    service.delete_product(product_id).await?;
    Ok(Json(()))
}

/// List base price rows for a product
pub async fn list_base_prices(
    State(state): State<AppState>,
    Path(product_id): Path<Uuid>,
) -> AppResult<Json<Vec<BasePrice>>> {
    let service = ProductService::new(state.db);
    let bases = service.list_base_prices(product_id).await?;
    Ok(Json(bases))
}

/// Add a base price row to a product
pub async fn add_base_price(
    State(state): State<AppState>,
    Path(product_id): Path<Uuid>,
    Json(input): Json<CreateBasePriceInput>,
) -> AppResult<Json<BasePrice>> {
    let service = ProductService::new(state.db);
    let base = service.add_base_price(product_id, input).await?;
    Ok(Json(base))
}

/// Update a base price row
pub async fn update_base_price(
    State(state): State<AppState>,
    Path((product_id, base_id)): Path<(Uuid, Uuid)>,
    Json(input): Json<UpdateBasePriceInput>,
) -> AppResult<Json<BasePrice>> {
    let service = ProductService::new(state.db);
    let base = service.update_base_price(product_id, base_id, input).await?;
    Ok(Json(base))
}

/// Delete a base price row
pub async fn delete_base_price(
    State(state): State<AppState>,
    Path((product_id, base_id)): Path<(Uuid, Uuid)>,
) -> AppResult<Json<()>> {
    let service = ProductService::new(state.db);
    service.delete_base_price(product_id, base_id).await?;
    Ok(Json(()))
}
