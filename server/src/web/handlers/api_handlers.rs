// server/src/web/handlers/api_handlers.rs

//! JSON flavour of the catalog endpoints, used by the terminal client.

use actix_web::{web, HttpResponse};
use catalog::{CatalogBackend, ProductId, ProductPayload};
use serde_json::json;
use tracing::{info, instrument};

use crate::errors::AppError;
use crate::state::AppState;

pub async fn health_check_handler() -> HttpResponse {
  HttpResponse::Ok().json(json!({ "status": "ok" }))
}

#[instrument(name = "api::list_products", skip(app_state))]
pub async fn list_products_handler(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
  let products = app_state.products.list_products().await?;
  Ok(HttpResponse::Ok().json(json!({ "products": products })))
}

#[instrument(name = "api::get_product", skip(app_state, path), fields(product_id = %path.as_ref()))]
pub async fn get_product_handler(
  app_state: web::Data<AppState>,
  path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
  let product = app_state.products.find_product(ProductId(path.into_inner())).await?;
  Ok(HttpResponse::Ok().json(json!({ "product": product })))
}

#[instrument(name = "api::create_product", skip(app_state, payload))]
pub async fn create_product_handler(
  app_state: web::Data<AppState>,
  payload: web::Json<ProductPayload>,
) -> Result<HttpResponse, AppError> {
  let redirect = app_state.products.create_product(payload.into_inner()).await?;
  info!(location = %redirect.location, "Product created via API.");
  Ok(HttpResponse::Created().json(redirect))
}

#[instrument(name = "api::update_product", skip(app_state, path, payload), fields(product_id = %path.as_ref()))]
pub async fn update_product_handler(
  app_state: web::Data<AppState>,
  path: web::Path<i64>,
  payload: web::Json<ProductPayload>,
) -> Result<HttpResponse, AppError> {
  let redirect = app_state
    .products
    .update_product(ProductId(path.into_inner()), payload.into_inner())
    .await?;
  Ok(HttpResponse::Ok().json(redirect))
}

#[instrument(name = "api::delete_product", skip(app_state, path), fields(product_id = %path.as_ref()))]
pub async fn delete_product_handler(
  app_state: web::Data<AppState>,
  path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
  let redirect = app_state.products.delete_product(ProductId(path.into_inner())).await?;
  Ok(HttpResponse::Ok().json(redirect))
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::web::configure_app_routes;
  use actix_web::http::StatusCode;
  use actix_web::{test, App};
  use serde_json::Value;

  #[actix_web::test]
  async fn create_then_list_over_json() {
    let app = test::init_service(
      App::new()
        .app_data(web::Data::new(AppState::in_memory()))
        .configure(configure_app_routes),
    )
    .await;

    let req = test::TestRequest::post()
      .uri("/api/v1/products")
      .set_json(json!({ "name": "Desk Lamp", "price": 24.99, "description": null }))
      .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({ "redirect": "/products", "message": "Product created successfully." }));

    let req = test::TestRequest::get().uri("/api/v1/products").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(
      body,
      json!({ "products": [{ "id": 1, "name": "Desk Lamp", "price": "24.99", "description": "" }] })
    );
  }

  #[actix_web::test]
  async fn validation_and_missing_records_use_json_error_bodies() {
    let app = test::init_service(
      App::new()
        .app_data(web::Data::new(AppState::in_memory()))
        .configure(configure_app_routes),
    )
    .await;

    let req = test::TestRequest::post()
      .uri("/api/v1/products")
      .set_json(json!({ "name": "", "price": "" }))
      .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["errors"]["name"], "The name field is required.");
    assert_eq!(body["errors"]["price"], "The price field is required.");

    let req = test::TestRequest::delete().uri("/api/v1/products/9").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let req = test::TestRequest::get().uri("/api/v1/health").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["status"], "ok");
  }
}
