// catalog/src/model/product.rs

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

use super::Price;

/// Server-assigned product identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub i64);

impl From<i64> for ProductId {
  fn from(id: i64) -> Self {
    Self(id)
  }
}

impl fmt::Display for ProductId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.0)
  }
}

/// A persisted catalog entry as the backend reports it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
  pub id: ProductId,
  pub name: String,
  pub price: Price,
  #[serde(default, deserialize_with = "null_as_empty")]
  pub description: String,
}

impl Product {
  pub fn new(id: impl Into<ProductId>, name: impl Into<String>, price: Price, description: impl Into<String>) -> Self {
    Self {
      id: id.into(),
      name: name.into(),
      price,
      description: description.into(),
    }
  }
}

/// Body of a create or update request: the three editable fields as typed.
///
/// `price` stays text on purpose. Turning it into a [`Price`] is the
/// backend's job, and so is rejecting it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductPayload {
  #[serde(default)]
  pub name: String,
  #[serde(default, deserialize_with = "super::text_or_number")]
  pub price: String,
  #[serde(default, deserialize_with = "null_as_empty")]
  pub description: String,
}

fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
  Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
