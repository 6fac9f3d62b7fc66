// server/src/models/product.rs

use catalog::{Price, Product, ProductId};
use chrono::{DateTime, Utc};
use sqlx::FromRow;

use crate::errors::AppError;

/// One row of the `products` table.
#[derive(Debug, Clone, FromRow)]
pub struct ProductRow {
  pub id: i64,
  pub name: String,
  pub description: String,
  pub price_cents: i64,
  pub created_at: DateTime<Utc>,
  pub updated_at: DateTime<Utc>,
}

impl TryFrom<ProductRow> for Product {
  type Error = AppError;

  fn try_from(row: ProductRow) -> Result<Self, Self::Error> {
    let price = Price::from_cents(row.price_cents)
      .map_err(|e| AppError::Internal(format!("Stored price for product {} is invalid: {}", row.id, e)))?;
    Ok(Product {
      id: ProductId(row.id),
      name: row.name,
      price,
      description: row.description,
    })
  }
}

/// Validated field values ready to be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductRecord {
  pub name: String,
  pub price: Price,
  pub description: String,
}

impl ProductRecord {
  pub fn into_product(self, id: ProductId) -> Product {
    Product {
      id,
      name: self.name,
      price: self.price,
      description: self.description,
    }
  }
}
