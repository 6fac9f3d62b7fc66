// catalog/src/views/draft.rs

use std::fmt;
use std::str::FromStr;

use crate::model::{Product, ProductPayload};

/// Soft limit shown next to the description input. Not enforced by the view.
pub const DESCRIPTION_GUIDANCE: usize = 500;

/// The editable fields of a product form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftField {
  Name,
  Price,
  Description,
}

impl DraftField {
  pub const ALL: [DraftField; 3] = [DraftField::Name, DraftField::Price, DraftField::Description];

  pub fn key(self) -> &'static str {
    match self {
      DraftField::Name => "name",
      DraftField::Price => "price",
      DraftField::Description => "description",
    }
  }

  pub fn label(self) -> &'static str {
    match self {
      DraftField::Name => "Product Name",
      DraftField::Price => "Price",
      DraftField::Description => "Description",
    }
  }
}

impl fmt::Display for DraftField {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.key())
  }
}

impl FromStr for DraftField {
  type Err = String;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    DraftField::ALL
      .into_iter()
      .find(|field| field.key() == s)
      .ok_or_else(|| format!("unknown product field '{}'", s))
  }
}

/// View-local copy of a product's editable fields, held as typed text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductDraft {
  pub name: String,
  pub price: String,
  pub description: String,
}

impl ProductDraft {
  pub fn from_product(product: &Product) -> Self {
    Self {
      name: product.name.clone(),
      price: product.price.to_string(),
      description: product.description.clone(),
    }
  }

  pub fn get(&self, field: DraftField) -> &str {
    match field {
      DraftField::Name => &self.name,
      DraftField::Price => &self.price,
      DraftField::Description => &self.description,
    }
  }

  pub fn set(&mut self, field: DraftField, value: impl Into<String>) {
    let value = value.into();
    match field {
      DraftField::Name => self.name = value,
      DraftField::Price => self.price = value,
      DraftField::Description => self.description = value,
    }
  }

  pub fn to_payload(&self) -> ProductPayload {
    ProductPayload {
      name: self.name.clone(),
      price: self.price.clone(),
      description: self.description.clone(),
    }
  }

  /// `"<chars>/500"`, counted in characters rather than bytes.
  pub fn description_counter(&self) -> String {
    format!("{}/{}", self.description.chars().count(), DESCRIPTION_GUIDANCE)
  }
}

impl From<ProductPayload> for ProductDraft {
  fn from(payload: ProductPayload) -> Self {
    Self {
      name: payload.name,
      price: payload.price,
      description: payload.description,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::model::Price;

  #[test]
  fn seeds_price_as_two_decimal_text() {
    let product = Product::new(3, "Mug", Price::from_cents(450).unwrap(), "Stoneware");
    let draft = ProductDraft::from_product(&product);
    assert_eq!(draft.price, "4.50");
    assert_eq!(draft.get(DraftField::Name), "Mug");
  }

  #[test]
  fn counter_counts_characters() {
    let mut draft = ProductDraft::default();
    draft.set(DraftField::Description, "café");
    assert_eq!(draft.description_counter(), "4/500");
  }

  #[test]
  fn field_keys_parse_back() {
    for field in DraftField::ALL {
      assert_eq!(field.key().parse::<DraftField>().unwrap(), field);
    }
    assert!("stock".parse::<DraftField>().is_err());
  }
}
