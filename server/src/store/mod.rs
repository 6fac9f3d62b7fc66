// server/src/store/mod.rs

//! Product persistence behind one async trait, with a Postgres and an in-memory backing.

pub mod memory;
pub mod postgres;

pub use memory::MemoryProductStore;
pub use postgres::PgProductStore;

use async_trait::async_trait;
use catalog::{Product, ProductId};

use crate::errors::Result;
use crate::models::ProductRecord;

#[async_trait]
pub trait ProductStore: Send + Sync {
  /// Every product, oldest first.
  async fn all(&self) -> Result<Vec<Product>>;

  async fn find(&self, id: ProductId) -> Result<Option<Product>>;

  async fn insert(&self, record: ProductRecord) -> Result<Product>;

  /// Replaces the editable fields; `None` when `id` does not exist.
  async fn update(&self, id: ProductId, record: ProductRecord) -> Result<Option<Product>>;

  /// `false` when `id` does not exist.
  async fn delete(&self, id: ProductId) -> Result<bool>;
}
