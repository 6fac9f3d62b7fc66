// catalog/src/model/mod.rs

//! Records exchanged with the catalog backend.

pub mod price;
pub mod product;
pub mod user;

pub use price::Price;
pub use product::{Product, ProductId, ProductPayload};
pub use user::User;

use serde::{Deserialize, Deserializer};

/// Accepts a JSON string or number and hands it back as text.
///
/// Form values arrive as strings while JSON clients often send numbers;
/// both have to reach the same parser.
pub(crate) fn text_or_number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
  #[derive(Deserialize)]
  #[serde(untagged)]
  enum Raw {
    Text(String),
    Integer(i64),
    Float(f64),
  }

  Ok(match Raw::deserialize(deserializer)? {
    Raw::Text(text) => text,
    Raw::Integer(n) => n.to_string(),
    Raw::Float(n) => n.to_string(),
  })
}
