// catalog/src/backend.rs

//! The typed contract between the views and whatever persists products.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::BackendResult;
use crate::model::{Product, ProductId, ProductPayload};

/// Where the backend sends the user after a successful write, plus the
/// one-shot message to show there.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Redirect {
  #[serde(rename = "redirect")]
  pub location: String,
  #[serde(rename = "message", default, skip_serializing_if = "Option::is_none")]
  pub flash: Option<String>,
}

impl Redirect {
  pub fn to(location: impl Into<String>) -> Self {
    Self {
      location: location.into(),
      flash: None,
    }
  }

  pub fn with_flash(mut self, message: impl Into<String>) -> Self {
    self.flash = Some(message.into());
    self
  }
}

/// The four product endpoints (plus a single-record read used to seed the
/// edit and detail views).
///
/// Implemented in-process by the server's product service and over HTTP by
/// the terminal client.
#[async_trait]
pub trait CatalogBackend: Send + Sync {
  async fn list_products(&self) -> BackendResult<Vec<Product>>;

  async fn find_product(&self, id: ProductId) -> BackendResult<Product>;

  async fn create_product(&self, payload: ProductPayload) -> BackendResult<Redirect>;

  /// Full replacement of the editable fields of `id`.
  async fn update_product(&self, id: ProductId, payload: ProductPayload) -> BackendResult<Redirect>;

  async fn delete_product(&self, id: ProductId) -> BackendResult<Redirect>;
}
