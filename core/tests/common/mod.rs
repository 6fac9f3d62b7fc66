// tests/common/mod.rs
#![allow(dead_code)] // Allow unused code in this common test module

use async_trait::async_trait;
use catalog::{BackendError, BackendResult, CatalogBackend, FieldErrors, Price, Product, ProductId, ProductPayload, Redirect};
use parking_lot::Mutex;
use std::sync::Arc;
use tokio::sync::Notify;
use tracing::Level;

// --- What the backend was asked to do ---
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
  List,
  Find(ProductId),
  Create(ProductPayload),
  Update(ProductId, ProductPayload),
  Delete(ProductId),
}

#[derive(Debug, Clone)]
pub enum Reply {
  Accept,
  Reject(FieldErrors),
  Unavailable,
}

/// In-memory backend that records every call and answers writes with a
/// programmable reply. With a gate installed, writes wait for the gate
/// before answering, which keeps a request "in flight" for as long as a
/// test needs.
pub struct RecordingBackend {
  products: Vec<Product>,
  calls: Mutex<Vec<Call>>,
  reply: Mutex<Reply>,
  gate: Option<Arc<Notify>>,
}

impl RecordingBackend {
  pub fn new(products: Vec<Product>) -> Self {
    Self {
      products,
      calls: Mutex::new(Vec::new()),
      reply: Mutex::new(Reply::Accept),
      gate: None,
    }
  }

  pub fn gated(products: Vec<Product>) -> (Self, Arc<Notify>) {
    let gate = Arc::new(Notify::new());
    let backend = Self {
      gate: Some(gate.clone()),
      ..Self::new(products)
    };
    (backend, gate)
  }

  pub fn set_reply(&self, reply: Reply) {
    *self.reply.lock() = reply;
  }

  pub fn calls(&self) -> Vec<Call> {
    self.calls.lock().clone()
  }

  pub fn write_calls(&self) -> usize {
    self
      .calls
      .lock()
      .iter()
      .filter(|c| !matches!(c, Call::List | Call::Find(_)))
      .count()
  }

  async fn answer(&self, call: Call, flash: &str) -> BackendResult<Redirect> {
    self.calls.lock().push(call);
    if let Some(gate) = &self.gate {
      gate.notified().await;
    }
    let reply = self.reply.lock().clone();
    match reply {
      Reply::Accept => Ok(Redirect::to("/products").with_flash(flash)),
      Reply::Reject(errors) => Err(BackendError::Rejected(errors)),
      Reply::Unavailable => Err(BackendError::Status {
        status: 503,
        message: "Service Unavailable".to_string(),
      }),
    }
  }
}

#[async_trait]
impl CatalogBackend for RecordingBackend {
  async fn list_products(&self) -> BackendResult<Vec<Product>> {
    self.calls.lock().push(Call::List);
    Ok(self.products.clone())
  }

  async fn find_product(&self, id: ProductId) -> BackendResult<Product> {
    self.calls.lock().push(Call::Find(id));
    self
      .products
      .iter()
      .find(|p| p.id == id)
      .cloned()
      .ok_or(BackendError::NotFound(id))
  }

  async fn create_product(&self, payload: ProductPayload) -> BackendResult<Redirect> {
    self.answer(Call::Create(payload), "Product created successfully.").await
  }

  async fn update_product(&self, id: ProductId, payload: ProductPayload) -> BackendResult<Redirect> {
    self.answer(Call::Update(id, payload), "Product updated successfully.").await
  }

  async fn delete_product(&self, id: ProductId) -> BackendResult<Redirect> {
    self.answer(Call::Delete(id), "Product deleted successfully.").await
  }
}

// --- Fixtures ---
pub fn product(id: i64, name: &str, price: &str, description: &str) -> Product {
  Product::new(id, name, Price::parse(price).unwrap(), description)
}

pub fn sample_products() -> Vec<Product> {
  vec![
    product(1, "Desk Lamp", "24.99", "Adjustable arm, warm white LED."),
    product(2, "Standing Desk", "499.00", "Electric height adjustment with memory presets."),
    product(3, "Cable Tray", "15.50", ""),
  ]
}

pub fn rejection() -> FieldErrors {
  let mut errors = FieldErrors::new();
  errors.insert("name", "The name field is required.");
  errors.insert("price", "The price field must be a number.");
  errors
}

/// Polls until `condition` holds, yielding to other tasks in between.
pub async fn wait_until(mut condition: impl FnMut() -> bool) {
  for _ in 0..10_000 {
    if condition() {
      return;
    }
    tokio::task::yield_now().await;
  }
  panic!("condition never became true");
}

// --- Helper for Tracing Setup (call once per test run if needed) ---
use once_cell::sync::Lazy;
static TRACING_INIT: Lazy<()> = Lazy::new(|| {
  tracing_subscriber::fmt()
    .with_max_level(Level::DEBUG)
    .with_test_writer()
    .try_init()
    .ok();
});

pub fn setup_tracing() {
  Lazy::force(&TRACING_INIT);
}
