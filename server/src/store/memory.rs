// server/src/store/memory.rs

use async_trait::async_trait;
use catalog::{Product, ProductId};
use parking_lot::RwLock;
use std::collections::BTreeMap;

use super::ProductStore;
use crate::errors::Result;
use crate::models::ProductRecord;

#[derive(Debug, Default)]
struct Inner {
  last_id: i64,
  products: BTreeMap<ProductId, Product>,
}

/// Keeps products in process memory. Used when no `DATABASE_URL` is set, and by tests.
#[derive(Debug, Default)]
pub struct MemoryProductStore {
  inner: RwLock<Inner>,
}

impl MemoryProductStore {
  pub fn new() -> Self {
    Self::default()
  }
}

#[async_trait]
impl ProductStore for MemoryProductStore {
  async fn all(&self) -> Result<Vec<Product>> {
    Ok(self.inner.read().products.values().cloned().collect())
  }

  async fn find(&self, id: ProductId) -> Result<Option<Product>> {
    Ok(self.inner.read().products.get(&id).cloned())
  }

  async fn insert(&self, record: ProductRecord) -> Result<Product> {
    let mut inner = self.inner.write();
    inner.last_id += 1;
    let product = record.into_product(ProductId(inner.last_id));
    inner.products.insert(product.id, product.clone());
    Ok(product)
  }

  async fn update(&self, id: ProductId, record: ProductRecord) -> Result<Option<Product>> {
    let mut inner = self.inner.write();
    Ok(inner.products.get_mut(&id).map(|existing| {
      *existing = record.into_product(id);
      existing.clone()
    }))
  }

  async fn delete(&self, id: ProductId) -> Result<bool> {
    Ok(self.inner.write().products.remove(&id).is_some())
  }
}
