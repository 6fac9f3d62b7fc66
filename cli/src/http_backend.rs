// cli/src/http_backend.rs

//! [`CatalogBackend`] over the server's `/api/v1` JSON endpoints.

use async_trait::async_trait;
use catalog::{BackendError, BackendResult, CatalogBackend, FieldErrors, Product, ProductId, ProductPayload, Redirect};
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::{debug, instrument};

#[derive(Deserialize)]
struct ProductsEnvelope {
  products: Vec<Product>,
}

#[derive(Deserialize)]
struct ProductEnvelope {
  product: Product,
}

#[derive(Deserialize, Default)]
struct ErrorBody {
  #[serde(default)]
  message: Option<String>,
  #[serde(default)]
  errors: Option<FieldErrors>,
}

/// Turns a non-success response into the matching [`BackendError`].
///
/// `target` is the record the request was about, if any, so a 404 can name it.
pub fn decode_error(status: u16, body: &str, target: Option<ProductId>) -> BackendError {
  let parsed: ErrorBody = serde_json::from_str(body).unwrap_or_default();
  match (status, target) {
    (422, _) => {
      let errors = parsed.errors.filter(|e| !e.is_empty()).unwrap_or_else(|| {
        FieldErrors::single(
          FieldErrors::FORM_KEY,
          parsed.message.unwrap_or_else(|| "The given data was invalid.".to_string()),
        )
      });
      BackendError::Rejected(errors)
    }
    (404, Some(id)) => BackendError::NotFound(id),
    _ => BackendError::Status {
      status,
      message: parsed.message.unwrap_or_else(|| body.trim().to_string()),
    },
  }
}

fn transport(err: reqwest::Error) -> BackendError {
  BackendError::from(anyhow::Error::new(err))
}

#[derive(Debug, Clone)]
pub struct HttpBackend {
  client: Client,
  base_url: String,
}

impl HttpBackend {
  pub fn new(base_url: impl Into<String>) -> Self {
    Self {
      client: Client::new(),
      base_url: base_url.into(),
    }
  }

  fn url(&self, path: &str) -> String {
    format!("{}/api/v1/products{}", self.base_url, path)
  }

  async fn send<T: DeserializeOwned>(&self, request: RequestBuilder, target: Option<ProductId>) -> BackendResult<T> {
    let response = request.send().await.map_err(transport)?;
    let status = response.status();
    let body = response.text().await.map_err(transport)?;
    debug!(status = status.as_u16(), "Catalog server responded.");

    if status.is_success() {
      serde_json::from_str(&body).map_err(|e| BackendError::Internal(format!("Unexpected response body: {}", e)))
    } else {
      Err(decode_error(status.as_u16(), &body, target))
    }
  }
}

#[async_trait]
impl CatalogBackend for HttpBackend {
  #[instrument(name = "http::list_products", skip(self))]
  async fn list_products(&self) -> BackendResult<Vec<Product>> {
    let envelope: ProductsEnvelope = self.send(self.client.get(self.url("")), None).await?;
    Ok(envelope.products)
  }

  #[instrument(name = "http::find_product", skip(self), fields(product_id = %id))]
  async fn find_product(&self, id: ProductId) -> BackendResult<Product> {
    let request = self.client.get(self.url(&format!("/{}", id)));
    let envelope: ProductEnvelope = self.send(request, Some(id)).await?;
    Ok(envelope.product)
  }

  #[instrument(name = "http::create_product", skip(self, payload))]
  async fn create_product(&self, payload: ProductPayload) -> BackendResult<Redirect> {
    self.send(self.client.post(self.url("")).json(&payload), None).await
  }

  #[instrument(name = "http::update_product", skip(self, payload), fields(product_id = %id))]
  async fn update_product(&self, id: ProductId, payload: ProductPayload) -> BackendResult<Redirect> {
    let request = self.client.put(self.url(&format!("/{}", id))).json(&payload);
    self.send(request, Some(id)).await
  }

  #[instrument(name = "http::delete_product", skip(self), fields(product_id = %id))]
  async fn delete_product(&self, id: ProductId) -> BackendResult<Redirect> {
    self.send(self.client.delete(self.url(&format!("/{}", id))), Some(id)).await
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn validation_response_becomes_field_errors_in_server_order() {
    let body = r#"{"message":"The given data was invalid.","errors":{"name":"The name field is required.","price":"The price field must be a number."}}"#;
    let BackendError::Rejected(errors) = decode_error(422, body, None) else {
      panic!("422 should be a rejection");
    };
    let fields: Vec<&str> = errors.iter().map(|(f, _)| f).collect();
    assert_eq!(fields, vec!["name", "price"]);
  }

  #[test]
  fn other_failures_keep_status_and_message() {
    assert!(matches!(
      decode_error(404, r#"{"message":"Product with ID 3 not found."}"#, Some(ProductId(3))),
      BackendError::NotFound(ProductId(3))
    ));

    let err = decode_error(500, r#"{"message":"An internal error occurred"}"#, None);
    assert_eq!(err.into_field_errors().get("form"), Some("Backend responded with status 500: An internal error occurred"));

    let err = decode_error(502, "Bad Gateway\n", None);
    assert!(matches!(err, BackendError::Status { status: 502, ref message } if message == "Bad Gateway"));
  }

  #[test]
  fn builds_api_urls() {
    let backend = HttpBackend::new("http://127.0.0.1:8080");
    assert_eq!(backend.url(""), "http://127.0.0.1:8080/api/v1/products");
    assert_eq!(backend.url("/4"), "http://127.0.0.1:8080/api/v1/products/4");
  }
}
