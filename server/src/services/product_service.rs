// server/src/services/product_service.rs

//! The backend side of the catalog: validates payloads, persists products,
//! and answers writes with a redirect plus flash message.

use async_trait::async_trait;
use catalog::{
  routes, BackendError, BackendResult, CatalogBackend, FieldErrors, Price, PriceError, Product, ProductId,
  ProductPayload, Redirect,
};
use std::borrow::Cow;
use std::sync::Arc;
use tracing::{debug, error, info, instrument, warn};
use validator::{Validate, ValidationError};

use crate::errors::AppError;
use crate::models::ProductRecord;
use crate::store::ProductStore;

pub const CREATED_MESSAGE: &str = "Product created successfully.";
pub const UPDATED_MESSAGE: &str = "Product updated successfully.";
pub const DELETED_MESSAGE: &str = "Product deleted successfully.";

/// Field order used when reporting validation errors.
const FIELDS: [&str; 3] = ["name", "price", "description"];

fn rule(code: &'static str, message: &'static str) -> ValidationError {
  let mut err = ValidationError::new(code);
  err.message = Some(Cow::Borrowed(message));
  err
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
  if value.trim().is_empty() {
    return Err(rule("required", "The name field is required."));
  }
  Ok(())
}

fn decimal_amount(value: &str) -> Result<(), ValidationError> {
  match Price::parse(value) {
    Ok(_) => Ok(()),
    Err(PriceError::Empty) => Err(rule("required", "The price field is required.")),
    Err(PriceError::NotANumber(_)) => Err(rule("numeric", "The price field must be a number.")),
    Err(PriceError::Negative) => Err(rule("min", "The price field must be at least 0.")),
    Err(PriceError::TooManyDecimals) => Err(rule("decimal", "The price field must have 0-2 decimal places.")),
    Err(PriceError::TooLarge) => Err(rule("max", "The price field must not be greater than 99999999.99.")),
  }
}

/// Incoming product fields with their server-side rules.
#[derive(Debug, Validate)]
struct ProductInput<'a> {
  #[validate(
    custom(function = "not_blank"),
    length(max = 255, message = "The name field must not be greater than 255 characters.")
  )]
  name: &'a str,
  #[validate(custom(function = "decimal_amount"))]
  price: &'a str,
  #[validate(length(max = 500, message = "The description field must not be greater than 500 characters."))]
  description: &'a str,
}

/// Checks `payload` and turns it into a record ready to store.
///
/// # Returns
/// The normalized record (trimmed name, parsed price), or one message per
/// failing field in form order.
pub fn validate_payload(payload: &ProductPayload) -> Result<ProductRecord, FieldErrors> {
  let input = ProductInput {
    name: &payload.name,
    price: &payload.price,
    description: &payload.description,
  };

  if let Err(report) = input.validate() {
    let by_field = report.field_errors();
    let mut errors = FieldErrors::new();
    for field in FIELDS {
      if let Some(first) = by_field.get(field).and_then(|list| list.first()) {
        let message = first
          .message
          .as_ref()
          .map(|m| m.to_string())
          .unwrap_or_else(|| format!("The {} field is invalid.", field));
        errors.insert(field, message);
      }
    }
    return Err(errors);
  }

  let price = Price::parse(&payload.price).map_err(|_| FieldErrors::single("price", "The price field must be a number."))?;
  Ok(ProductRecord {
    name: payload.name.trim().to_string(),
    price,
    description: payload.description.clone(),
  })
}

fn storage_failure(err: AppError) -> BackendError {
  error!(error = %err, "Product storage failed.");
  BackendError::Internal(err.to_string())
}

/// Product operations over a [`ProductStore`]; this is what the HTTP handlers call.
#[derive(Clone)]
pub struct ProductService {
  store: Arc<dyn ProductStore>,
}

impl ProductService {
  pub fn new(store: Arc<dyn ProductStore>) -> Self {
    Self { store }
  }

  fn checked(&self, payload: &ProductPayload) -> BackendResult<ProductRecord> {
    validate_payload(payload).map_err(|errors| {
      debug!(fields = errors.len(), "Payload failed validation.");
      BackendError::Rejected(errors)
    })
  }
}

#[async_trait]
impl CatalogBackend for ProductService {
  #[instrument(name = "service::list_products", skip(self))]
  async fn list_products(&self) -> BackendResult<Vec<Product>> {
    let products = self.store.all().await.map_err(storage_failure)?;
    info!("Successfully fetched {} products.", products.len());
    Ok(products)
  }

  #[instrument(name = "service::find_product", skip(self), fields(product_id = %id))]
  async fn find_product(&self, id: ProductId) -> BackendResult<Product> {
    match self.store.find(id).await.map_err(storage_failure)? {
      Some(product) => Ok(product),
      None => {
        warn!("Product with ID {} not found.", id);
        Err(BackendError::NotFound(id))
      }
    }
  }

  #[instrument(name = "service::create_product", skip(self, payload))]
  async fn create_product(&self, payload: ProductPayload) -> BackendResult<Redirect> {
    let record = self.checked(&payload)?;
    let product = self.store.insert(record).await.map_err(storage_failure)?;
    info!(product_id = %product.id, "Product created.");
    Ok(Redirect::to(routes::PRODUCTS).with_flash(CREATED_MESSAGE))
  }

  #[instrument(name = "service::update_product", skip(self, payload), fields(product_id = %id))]
  async fn update_product(&self, id: ProductId, payload: ProductPayload) -> BackendResult<Redirect> {
    let record = self.checked(&payload)?;
    match self.store.update(id, record).await.map_err(storage_failure)? {
      Some(_) => {
        info!("Product updated.");
        Ok(Redirect::to(routes::PRODUCTS).with_flash(UPDATED_MESSAGE))
      }
      None => {
        warn!("Update for missing product {}.", id);
        Err(BackendError::NotFound(id))
      }
    }
  }

  #[instrument(name = "service::delete_product", skip(self), fields(product_id = %id))]
  async fn delete_product(&self, id: ProductId) -> BackendResult<Redirect> {
    if self.store.delete(id).await.map_err(storage_failure)? {
      info!("Product deleted.");
      Ok(Redirect::to(routes::PRODUCTS).with_flash(DELETED_MESSAGE))
    } else {
      warn!("Delete for missing product {}.", id);
      Err(BackendError::NotFound(id))
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::store::MemoryProductStore;
  use catalog::{DraftField, ProductForm, SubmitOutcome};

  fn payload(name: &str, price: &str, description: &str) -> ProductPayload {
    ProductPayload {
      name: name.to_string(),
      price: price.to_string(),
      description: description.to_string(),
    }
  }

  fn service() -> ProductService {
    ProductService::new(Arc::new(MemoryProductStore::new()))
  }

  #[test]
  fn accepts_and_normalizes_valid_payload() {
    let record = validate_payload(&payload("  Desk Lamp ", "24.5", "Warm light")).unwrap();
    assert_eq!(record.name, "Desk Lamp");
    assert_eq!(record.price.cents(), 2450);
    assert_eq!(record.description, "Warm light");
  }

  #[test]
  fn reports_each_failing_field_in_form_order() {
    let long_description = "d".repeat(501);
    let errors = validate_payload(&payload(" ", "-4", &long_description)).unwrap_err();
    let reported: Vec<(&str, &str)> = errors.iter().collect();
    assert_eq!(
      reported,
      vec![
        ("name", "The name field is required."),
        ("price", "The price field must be at least 0."),
        ("description", "The description field must not be greater than 500 characters."),
      ]
    );
  }

  #[test]
  fn price_messages_match_the_failure() {
    let message = |price: &str| validate_payload(&payload("A", price, "")).unwrap_err().get("price").map(str::to_string);
    assert_eq!(message("").as_deref(), Some("The price field is required."));
    assert_eq!(message("ten").as_deref(), Some("The price field must be a number."));
    assert_eq!(message("1.234").as_deref(), Some("The price field must have 0-2 decimal places."));
    assert_eq!(message("100000000").as_deref(), Some("The price field must not be greater than 99999999.99."));
  }

  #[test]
  fn name_length_is_counted_in_characters() {
    assert!(validate_payload(&payload(&"é".repeat(255), "1", "")).is_ok());
    let errors = validate_payload(&payload(&"é".repeat(256), "1", "")).unwrap_err();
    assert_eq!(errors.get("name"), Some("The name field must not be greater than 255 characters."));
  }

  #[actix_web::test]
  async fn create_update_delete_round() {
    let service = service();

    let created = service.create_product(payload("Mug", "4.50", "")).await.unwrap();
    assert_eq!(created.flash.as_deref(), Some(CREATED_MESSAGE));
    let id = service.list_products().await.unwrap()[0].id;

    let updated = service.update_product(id, payload("Mug", "5", "Bigger")).await.unwrap();
    assert_eq!(updated.flash.as_deref(), Some(UPDATED_MESSAGE));
    assert_eq!(service.find_product(id).await.unwrap().price.cents(), 500);

    let deleted = service.delete_product(id).await.unwrap();
    assert_eq!(deleted.flash.as_deref(), Some(DELETED_MESSAGE));
    assert!(matches!(service.delete_product(id).await, Err(BackendError::NotFound(_))));
  }

  #[actix_web::test]
  async fn rejected_update_does_not_touch_the_record() {
    let service = service();
    service.create_product(payload("Mug", "4.50", "")).await.unwrap();
    let id = ProductId(1);

    let result = service.update_product(id, payload("", "4.50", "")).await;

    assert!(matches!(result, Err(BackendError::Rejected(ref e)) if e.contains("name")));
    assert_eq!(service.find_product(id).await.unwrap().name, "Mug");
  }

  #[actix_web::test]
  async fn edit_form_against_the_service_reports_missing_records() {
    let service = service();
    service.create_product(payload("Mug", "4.50", "")).await.unwrap();
    let product = service.find_product(ProductId(1)).await.unwrap();
    service.delete_product(product.id).await.unwrap();

    let form = ProductForm::edit(product);
    form.set_field(DraftField::Name, "Cup");
    let outcome = form.submit(&service).await;

    let SubmitOutcome::Rejected(errors) = outcome else {
      panic!("Expected the missing record to be reported");
    };
    assert_eq!(errors.get("form"), Some("Product #1 was not found."));
  }
}
