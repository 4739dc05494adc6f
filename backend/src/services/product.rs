//! Product and base price management service

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::models::{BasePrice, Product};

/// Product service for managing paint products and their color bases
#[derive(Clone)]
pub struct ProductService {
    db: PgPool,
}

/// Input for creating a product
#[derive(Debug, Deserialize)]
pub struct CreateProductInput {
    pub name: String,
    pub category: String,
    pub size: Option<String>,
    pub description: Option<String>,
    pub supplier_id: Option<Uuid>,
    pub min_stock_level: Option<i32>,
}

/// Input for updating a product
#[derive(Debug, Deserialize)]
pub struct UpdateProductInput {
    pub name: Option<String>,
    pub category: Option<String>,
    pub size: Option<String>,
    pub description: Option<String>,
    pub supplier_id: Option<Uuid>,
    pub min_stock_level: Option<i32>,
}

/// Input for creating a base price row
#[derive(Debug, Deserialize)]
pub struct CreateBasePriceInput {
    pub base_name: String,
    pub stock_level: Option<i32>,
    pub min_stock_level: Option<i32>,
    pub max_stock_level: Option<i32>,
    pub unit_price: Decimal,
}

/// Input for updating a base price row
#[derive(Debug, Deserialize)]
pub struct UpdateBasePriceInput {
    pub base_name: Option<String>,
    pub min_stock_level: Option<i32>,
    pub max_stock_level: Option<i32>,
    pub unit_price: Option<Decimal>,
}

/// A product together with its base price rows
#[derive(Debug, Serialize)]
pub struct ProductWithBases {
    #[serde(flatten)]
    pub product: Product,
    pub bases: Vec<BasePrice>,
}

/// Row for product queries
#[derive(Debug, FromRow)]
struct ProductRow {
    id: Uuid,
    name: String,
    category: String,
    size: Option<String>,
    description: Option<String>,
    supplier_id: Option<Uuid>,
    min_stock_level: Option<i32>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<ProductRow> for Product {
    fn from(row: ProductRow) -> Self {
        Product {
            id: row.id,
            name: row.name,
            category: row.category,
            size: row.size,
            description: row.description,
            supplier_id: row.supplier_id,
            min_stock_level: row.min_stock_level,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// Row for base price queries
#[derive(Debug, FromRow)]
struct BasePriceRow {
    id: Uuid,
    product_id: Uuid,
    base_name: String,
    stock_level: i32,
    min_stock_level: Option<i32>,
    max_stock_level: Option<i32>,
    unit_price: Decimal,
}

impl From<BasePriceRow> for BasePrice {
    fn from(row: BasePriceRow) -> Self {
        BasePrice {
            id: row.id,
            product_id: row.product_id,
            base_name: row.base_name,
            stock_level: row.stock_level,
            min_stock_level: row.min_stock_level,
            max_stock_level: row.max_stock_level,
            unit_price: row.unit_price,
        }
    }
}

const PRODUCT_COLUMNS: &str =
    "id, name, category, size, description, supplier_id, min_stock_level, created_at, updated_at";

const BASE_PRICE_COLUMNS: &str =
    "id, product_id, base_name, stock_level, min_stock_level, max_stock_level, unit_price";

impl ProductService {
    /// Create a new ProductService instance
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// List all products
    pub async fn list_products(&self) -> AppResult<Vec<Product>> {
        let rows = sqlx::query_as::<_, ProductRow>(&format!(
            "SELECT {} FROM products ORDER BY name", PRODUCT_COLUMNS
        ))
        .fetch_all(&self.db)
        .await?;

        Ok(rows.into_iter().map(Product::from).collect())
    }

    /// Get a product with its base price rows
    pub async fn get_product(&self, product_id: Uuid) -> AppResult<ProductWithBases> {
        let row = sqlx::query_as::<_, ProductRow>(&format!(
            "SELECT {} FROM products WHERE id = $1", PRODUCT_COLUMNS
        ))
        .bind(product_id)
        .fetch_optional(&self.db)
        .await?
        .ok_or_else(|| AppError::NotFound("Product".to_string()))?;

        let bases = self.list_base_prices(product_id).await?;

        Ok(ProductWithBases {
            product: row.into(),
            bases,
        })
    }

    /// Create a product
    pub async fn create_product(&self, input: CreateProductInput) -> AppResult<Product> {
        if input.name.trim().is_empty() {
            return Err(AppError::Validation {
                field: "name".to_string(),
                message: "Product name must not be empty".to_string(),
            });
        }
        if let Some(min) = input.min_stock_level {
            if min < 0 {
                return Err(AppError::Validation {
                    field: "min_stock_level".to_string(),
                    message: "Minimum stock level cannot be negative".to_string(),
                });
            }
        }

        let row = sqlx::query_as::<_, ProductRow>(&format!(
            r#"
            INSERT INTO products (name, category, size, description, supplier_id, min_stock_level)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING {}
            "#,
            PRODUCT_COLUMNS
        ))
        .bind(&input.name)
        .bind(&input.category)
        .bind(&input.size)
        .bind(&input.description)
        .bind(input.supplier_id)
        .bind(input.min_stock_level)
        .fetch_one(&self.db)
        .await?;

        Ok(row.into())
    }

    /// Update a product
    pub async fn update_product(
        &self,
        product_id: Uuid,
        input: UpdateProductInput,
    ) -> AppResult<Product> {
        let existing = sqlx::query_as::<_, ProductRow>(&format!(
            "SELECT {} FROM products WHERE id = $1", PRODUCT_COLUMNS
        ))
        .bind(product_id)
        .fetch_optional(&self.db)
        .await?
        .ok_or_else(|| AppError::NotFound("Product".to_string()))?;

        let name = input.name.unwrap_or(existing.name);
        let category = input.category.unwrap_or(existing.category);
        let size = input.size.or(existing.size);
        let description = input.description.or(existing.description);
        let supplier_id = input.supplier_id.or(existing.supplier_id);
        let min_stock_level = input.min_stock_level.or(existing.min_stock_level);

        if name.trim().is_empty() {
            return Err(AppError::Validation {
                field: "name".to_string(),
                message: "Product name must not be empty".to_string(),
            });
        }

        let row = sqlx::query_as::<_, ProductRow>(&format!(
            r#"
            UPDATE products
            SET name = $1, category = $2, size = $3, description = $4,
                supplier_id = $5, min_stock_level = $6, updated_at = NOW()
            WHERE id = $7
            RETURNING {}
            "#,
            PRODUCT_COLUMNS
        ))
        .bind(&name)
        .bind(&category)
        .bind(&size)
        .bind(&description)
        .bind(supplier_id)
        .bind(min_stock_level)
        .bind(product_id)
        .fetch_one(&self.db)
        .await?;

        Ok(row.into())
    }

    /// Delete a product and its base price rows
    pub async fn delete_product(&self, product_id: Uuid) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(product_id)
            .execute(&self.db)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Product".to_string()));
        }

        Ok(())
    }

    /// List base price rows for a product
    pub async fn list_base_prices(&self, product_id: Uuid) -> AppResult<Vec<BasePrice>> {
        let rows = sqlx::query_as::<_, BasePriceRow>(&format!(
            "SELECT {} FROM base_prices WHERE product_id = $1 ORDER BY base_name",
            BASE_PRICE_COLUMNS
        ))
        .bind(product_id)
        .fetch_all(&self.db)
        .await?;

        Ok(rows.into_iter().map(BasePrice::from).collect())
    }

    /// Add a base price row to a product
    pub async fn add_base_price(
        &self,
        product_id: Uuid,
        input: CreateBasePriceInput,
    ) -> AppResult<BasePrice> {
        let product_exists =
            sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM products WHERE id = $1)")
                .bind(product_id)
                .fetch_one(&self.db)
                .await?;

        if !product_exists {
            return Err(AppError::NotFound("Product".to_string()));
        }

        if input.unit_price < Decimal::ZERO {
            return Err(AppError::Validation {
                field: "unit_price".to_string(),
                message: "Unit price cannot be negative".to_string(),
            });
        }

        let duplicate = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM base_prices WHERE product_id = $1 AND base_name = $2)",
        )
        .bind(product_id)
        .bind(&input.base_name)
        .fetch_one(&self.db)
        .await?;

        if duplicate {
            return Err(AppError::DuplicateEntry("base_name".to_string()));
        }

        let row = sqlx::query_as::<_, BasePriceRow>(&format!(
            r#"
            INSERT INTO base_prices (product_id, base_name, stock_level, min_stock_level, max_stock_level, unit_price)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING {}
            "#,
            BASE_PRICE_COLUMNS
        ))
        .bind(product_id)
        .bind(&input.base_name)
        .bind(input.stock_level.unwrap_or(0))
        .bind(input.min_stock_level)
        .bind(input.max_stock_level)
        .bind(input.unit_price)
        .fetch_one(&self.db)
        .await?;

        Ok(row.into())
    }

    /// Update a base price row
    ///
    /// Stock levels are not editable here; they change only through posted
    /// transactions.
    pub async fn update_base_price(
        &self,
        product_id: Uuid,
        base_id: Uuid,
        input: UpdateBasePriceInput,
    ) -> AppResult<BasePrice> {
        let existing = sqlx::query_as::<_, BasePriceRow>(&format!(
            "SELECT {} FROM base_prices WHERE id = $1 AND product_id = $2",
            BASE_PRICE_COLUMNS
        ))
        .bind(base_id)
        .bind(product_id)
        .fetch_optional(&self.db)
        .await?
        .ok_or_else(|| AppError::NotFound("Base price".to_string()))?;

        let base_name = input.base_name.unwrap_or(existing.base_name);
        let min_stock_level = input.min_stock_level.or(existing.min_stock_level);
        let max_stock_level = input.max_stock_level.or(existing.max_stock_level);
        let unit_price = input.unit_price.unwrap_or(existing.unit_price);

        if unit_price < Decimal::ZERO {
            return Err(AppError::Validation {
                field: "unit_price".to_string(),
                message: "Unit price cannot be negative".to_string(),
            });
        }

        let row = sqlx::query_as::<_, BasePriceRow>(&format!(
            r#"
            UPDATE base_prices
            SET base_name = $1, min_stock_level = $2, max_stock_level = $3, unit_price = $4
            WHERE id = $5
            RETURNING {}
            "#,
            BASE_PRICE_COLUMNS
        ))
        .bind(&base_name)
        .bind(min_stock_level)
        .bind(max_stock_level)
        .bind(unit_price)
        .bind(base_id)
        .fetch_one(&self.db)
        .await?;

        Ok(row.into())
    }

    /// Delete a base price row
    pub async fn delete_base_price(&self, product_id: Uuid, base_id: Uuid) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM base_prices WHERE id = $1 AND product_id = $2")
            .bind(base_id)
            .bind(product_id)
            .execute(&self.db)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Base price".to_string()));
        }

        Ok(())
    }
}
