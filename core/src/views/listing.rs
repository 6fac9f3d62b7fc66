// catalog/src/views/listing.rs

//! The product list page: rows, summary statistics, and confirmed deletes.

use tracing::{debug, info, instrument, warn};

use crate::backend::{CatalogBackend, Redirect};
use crate::model::{Price, Product, ProductId};
use crate::state::ViewState;
use crate::validation::FieldErrors;

/// Row descriptions are cut to this many characters.
pub const DESCRIPTION_PREVIEW_LEN: usize = 60;

/// Cuts `description` to `max_chars` characters and marks the cut with `...`.
pub fn truncate_description(description: &str, max_chars: usize) -> String {
  match description.char_indices().nth(max_chars) {
    None => description.to_string(),
    Some((byte_idx, _)) => format!("{}...", &description[..byte_idx]),
  }
}

/// Summary figures shown under the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListingStats {
  pub count: usize,
  pub total_value: Price,
  /// Zero for an empty list.
  pub max_price: Price,
}

impl ListingStats {
  pub fn from_products(products: &[Product]) -> Self {
    Self {
      count: products.len(),
      total_value: products.iter().map(|p| p.price).sum(),
      max_price: products.iter().map(|p| p.price).max().unwrap_or(Price::ZERO),
    }
  }

  pub fn total_value_label(&self) -> String {
    self.total_value.format_usd()
  }

  pub fn max_price_label(&self) -> String {
    self.max_price.format_usd()
  }
}

/// Asks the user whether a delete should go ahead.
pub trait DeleteConfirmation {
  fn confirm(&self, prompt: &str) -> bool;
}

impl<F> DeleteConfirmation for F
where
  F: Fn(&str) -> bool,
{
  fn confirm(&self, prompt: &str) -> bool {
    self(prompt)
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
  Deleted(Redirect),
  /// The user said no; no request was sent.
  Declined,
  /// Another delete is in flight; no prompt was shown and no request was sent.
  Ignored,
  Failed(FieldErrors),
  /// The id is not one of the listed products.
  NotListed(ProductId),
}

#[derive(Debug, Default)]
struct ListingData {
  pending_delete: Option<ProductId>,
  errors: FieldErrors,
}

/// The list page for one set of products and an optional flash message.
#[derive(Debug, Clone)]
pub struct ProductListing {
  products: Vec<Product>,
  flash: Option<String>,
  stats: ListingStats,
  state: ViewState<ListingData>,
}

impl ProductListing {
  pub fn new(products: Vec<Product>, flash: Option<String>) -> Self {
    let stats = ListingStats::from_products(&products);
    Self {
      products,
      flash: flash.filter(|message| !message.trim().is_empty()),
      stats,
      state: ViewState::default(),
    }
  }

  pub fn products(&self) -> &[Product] {
    &self.products
  }

  pub fn product(&self, id: ProductId) -> Option<&Product> {
    self.products.iter().find(|p| p.id == id)
  }

  pub fn is_empty(&self) -> bool {
    self.products.is_empty()
  }

  pub fn flash(&self) -> Option<&str> {
    self.flash.as_deref()
  }

  pub fn stats(&self) -> ListingStats {
    self.stats
  }

  /// "Total 1 product" / "Total 4 products".
  pub fn summary_label(&self) -> String {
    let n = self.products.len();
    format!("Total {} product{}", n, if n == 1 { "" } else { "s" })
  }

  pub fn badge_label(&self) -> String {
    format!("{} items", self.products.len())
  }

  pub fn delete_prompt(product: &Product) -> String {
    format!(
      "Are you sure you want to delete \"{}\"? This action cannot be undone.",
      product.name
    )
  }

  /// True while a delete request is in flight; every delete control is disabled.
  pub fn is_processing(&self) -> bool {
    self.state.read().pending_delete.is_some()
  }

  pub fn errors(&self) -> FieldErrors {
    self.state.read().errors.clone()
  }

  /// Asks `confirmation` about the named record and, on a yes, deletes it.
  #[instrument(name = "listing::request_delete", skip(self, confirmation, backend), fields(product_id = %id))]
  pub async fn request_delete<C, B>(&self, id: ProductId, confirmation: &C, backend: &B) -> DeleteOutcome
  where
    C: DeleteConfirmation + ?Sized,
    B: CatalogBackend + ?Sized,
  {
    let Some(product) = self.product(id) else {
      warn!("Delete requested for a product that is not listed.");
      return DeleteOutcome::NotListed(id);
    };
    if self.is_processing() {
      debug!("Delete ignored: another delete is in flight.");
      return DeleteOutcome::Ignored;
    }

    if !confirmation.confirm(&Self::delete_prompt(product)) {
      info!("Delete declined by the user.");
      return DeleteOutcome::Declined;
    }

    let claimed = self.state.update(|listing| {
      if listing.pending_delete.is_some() {
        return false;
      }
      listing.pending_delete = Some(id);
      true
    });
    if !claimed {
      debug!("Delete ignored: another delete started while confirming.");
      return DeleteOutcome::Ignored;
    }

    let result = backend.delete_product(id).await;

    self.state.update(|listing| {
      listing.pending_delete = None;
      match result {
        Ok(redirect) => {
          info!("Product deleted.");
          listing.errors.clear();
          DeleteOutcome::Deleted(redirect)
        }
        Err(err) => {
          warn!(error = %err, "Delete failed.");
          let errors = err.into_field_errors();
          listing.errors = errors.clone();
          DeleteOutcome::Failed(errors)
        }
      }
    })
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn truncates_on_character_boundaries() {
    assert_eq!(truncate_description("short", 60), "short");
    assert_eq!(truncate_description("abcdef", 3), "abc...");
    assert_eq!(truncate_description("ééééé", 2), "éé...");
    let exact = "x".repeat(DESCRIPTION_PREVIEW_LEN);
    assert_eq!(truncate_description(&exact, DESCRIPTION_PREVIEW_LEN), exact);
  }

  #[test]
  fn labels_pluralize() {
    let one = ProductListing::new(vec![Product::new(1, "A", Price::ZERO, "")], None);
    assert_eq!(one.summary_label(), "Total 1 product");
    assert_eq!(one.badge_label(), "1 items");
    let none = ProductListing::new(vec![], Some("  ".to_string()));
    assert_eq!(none.summary_label(), "Total 0 products");
    assert_eq!(none.flash(), None);
  }
}
