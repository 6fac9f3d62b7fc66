// server/src/store/postgres.rs

use async_trait::async_trait;
use catalog::{Product, ProductId};
use sqlx::postgres::{PgPool, PgPoolOptions};
use std::time::Duration;
use tracing::{error, info, instrument};

use super::ProductStore;
use crate::errors::{AppError, Result};
use crate::models::{ProductRecord, ProductRow};

const PRODUCT_COLUMNS: &str = "id, name, description, price_cents, created_at, updated_at";

/// Products in Postgres, queried at runtime (no compile-time database needed).
#[derive(Debug, Clone)]
pub struct PgProductStore {
  pool: PgPool,
}

impl PgProductStore {
  /// Opens a pool and brings the schema up to date.
  pub async fn connect(database_url: &str) -> Result<Self> {
    let pool = PgPoolOptions::new()
      .max_connections(20)
      .min_connections(1)
      .acquire_timeout(Duration::from_secs(8))
      .idle_timeout(Duration::from_secs(300))
      .connect(database_url)
      .await?;
    info!("Successfully connected to the database.");

    sqlx::migrate!("./migrations").run(&pool).await?;
    info!("Database migrations applied.");

    Ok(Self { pool })
  }
}

fn rows_to_products(rows: Vec<ProductRow>) -> Result<Vec<Product>> {
  rows.into_iter().map(Product::try_from).collect()
}

fn log_db_error(action: &'static str) -> impl Fn(sqlx::Error) -> AppError {
  move |e| {
    error!("Database error while {}: {}", action, e);
    AppError::Sqlx(e)
  }
}

#[async_trait]
impl ProductStore for PgProductStore {
  #[instrument(name = "store::all", skip(self))]
  async fn all(&self) -> Result<Vec<Product>> {
    let rows: Vec<ProductRow> = sqlx::query_as(&format!("SELECT {} FROM products ORDER BY id ASC", PRODUCT_COLUMNS))
      .fetch_all(&self.pool)
      .await
      .map_err(log_db_error("listing products"))?;
    rows_to_products(rows)
  }

  #[instrument(name = "store::find", skip(self), fields(product_id = %id))]
  async fn find(&self, id: ProductId) -> Result<Option<Product>> {
    let row: Option<ProductRow> = sqlx::query_as(&format!("SELECT {} FROM products WHERE id = $1", PRODUCT_COLUMNS))
      .bind(id.0)
      .fetch_optional(&self.pool)
      .await
      .map_err(log_db_error("fetching a product"))?;
    row.map(Product::try_from).transpose()
  }

  #[instrument(name = "store::insert", skip(self, record))]
  async fn insert(&self, record: ProductRecord) -> Result<Product> {
    let row: ProductRow = sqlx::query_as(&format!(
      "INSERT INTO products (name, description, price_cents) VALUES ($1, $2, $3) RETURNING {}",
      PRODUCT_COLUMNS
    ))
    .bind(&record.name)
    .bind(&record.description)
    .bind(record.price.cents())
    .fetch_one(&self.pool)
    .await
    .map_err(log_db_error("inserting a product"))?;
    Product::try_from(row)
  }

  #[instrument(name = "store::update", skip(self, record), fields(product_id = %id))]
  async fn update(&self, id: ProductId, record: ProductRecord) -> Result<Option<Product>> {
    let row: Option<ProductRow> = sqlx::query_as(&format!(
      "UPDATE products SET name = $2, description = $3, price_cents = $4, updated_at = NOW() \
       WHERE id = $1 RETURNING {}",
      PRODUCT_COLUMNS
    ))
    .bind(id.0)
    .bind(&record.name)
    .bind(&record.description)
    .bind(record.price.cents())
    .fetch_optional(&self.pool)
    .await
    .map_err(log_db_error("updating a product"))?;
    row.map(Product::try_from).transpose()
  }

  #[instrument(name = "store::delete", skip(self), fields(product_id = %id))]
  async fn delete(&self, id: ProductId) -> Result<bool> {
    let result = sqlx::query("DELETE FROM products WHERE id = $1")
      .bind(id.0)
      .execute(&self.pool)
      .await
      .map_err(log_db_error("deleting a product"))?;
    Ok(result.rows_affected() > 0)
  }
}
