// server/src/web/handlers/product_handlers.rs

//! HTML pages for the product catalog. Writes answer with a `303` plus flash
//! cookie on success, or re-render the form with a `422` on rejection.

use actix_web::http::header::ContentType;
use actix_web::{web, HttpRequest, HttpResponse};
use catalog::{CatalogBackend, ProductForm, ProductId, ProductListing, ProductPayload, SubmitOutcome};
use maud::Markup;
use serde::Deserialize;
use tracing::{info, instrument, warn};

use crate::errors::AppError;
use crate::state::AppState;
use crate::web::flash;
use crate::web::views::products::{form_page, index_page, show_page};

/// Fields posted by the create and edit forms.
#[derive(Deserialize, Debug, Default)]
pub struct ProductFormBody {
  #[serde(default)]
  pub name: String,
  #[serde(default)]
  pub price: String,
  #[serde(default)]
  pub description: String,
  /// Browsers only send GET and POST; edit and delete forms name the real verb here.
  #[serde(rename = "_method", default)]
  pub method: Option<String>,
}

impl ProductFormBody {
  fn into_payload(self) -> ProductPayload {
    ProductPayload {
      name: self.name,
      price: self.price,
      description: self.description,
    }
  }
}

fn html(page: Markup) -> HttpResponse {
  HttpResponse::Ok().content_type(ContentType::html()).body(page.into_string())
}

async fn submit_form(form: ProductForm, app_state: &AppState) -> Result<HttpResponse, AppError> {
  match form.submit(&app_state.products).await {
    SubmitOutcome::Redirected(redirect) => Ok(flash::see_other(&redirect)),
    SubmitOutcome::Rejected(errors) => {
      info!(fields = errors.len(), "Re-rendering form with errors.");
      Ok(
        HttpResponse::UnprocessableEntity()
          .content_type(ContentType::html())
          .body(form_page(&form.snapshot(), &app_state.user_menu()).into_string()),
      )
    }
    // A fresh form per request never has one in flight.
    SubmitOutcome::Ignored => Err(AppError::Internal("Form was already submitted.".to_string())),
  }
}

#[instrument(name = "handler::products_index", skip(app_state, req))]
pub async fn index(app_state: web::Data<AppState>, req: HttpRequest) -> Result<HttpResponse, AppError> {
  let products = app_state.products.list_products().await?;
  let message = flash::read(&req);
  let had_flash = message.is_some();
  let listing = ProductListing::new(products, message);

  let mut response = HttpResponse::Ok();
  response.content_type(ContentType::html());
  if had_flash {
    response.cookie(flash::removal_cookie());
  }
  Ok(response.body(index_page(&listing, &app_state.user_menu()).into_string()))
}

#[instrument(name = "handler::products_create", skip(app_state))]
pub async fn create(app_state: web::Data<AppState>) -> HttpResponse {
  html(form_page(&ProductForm::create().snapshot(), &app_state.user_menu()))
}

#[instrument(name = "handler::products_store", skip(app_state, body))]
pub async fn store(
  app_state: web::Data<AppState>,
  body: web::Form<ProductFormBody>,
) -> Result<HttpResponse, AppError> {
  let form = ProductForm::create();
  form.replace_draft(body.into_inner().into_payload().into());
  submit_form(form, &app_state).await
}

#[instrument(name = "handler::products_show", skip(app_state, path), fields(product_id = %path.as_ref()))]
pub async fn show(app_state: web::Data<AppState>, path: web::Path<i64>) -> Result<HttpResponse, AppError> {
  let product = app_state.products.find_product(ProductId(path.into_inner())).await?;
  Ok(html(show_page(&product, &app_state.user_menu())))
}

#[instrument(name = "handler::products_edit", skip(app_state, path), fields(product_id = %path.as_ref()))]
pub async fn edit(app_state: web::Data<AppState>, path: web::Path<i64>) -> Result<HttpResponse, AppError> {
  let product = app_state.products.find_product(ProductId(path.into_inner())).await?;
  Ok(html(form_page(&ProductForm::edit(product).snapshot(), &app_state.user_menu())))
}

async fn update_product(app_state: &AppState, id: ProductId, payload: ProductPayload) -> Result<HttpResponse, AppError> {
  // Seeding from the stored record keeps Reset pointing at the saved values on a 422 page.
  let product = app_state.products.find_product(id).await?;
  let form = ProductForm::edit(product);
  form.replace_draft(payload.into());
  submit_form(form, app_state).await
}

async fn delete_product(app_state: &AppState, id: ProductId) -> Result<HttpResponse, AppError> {
  let redirect = app_state.products.delete_product(id).await?;
  Ok(flash::see_other(&redirect))
}

#[instrument(name = "handler::products_update", skip(app_state, path, body), fields(product_id = %path.as_ref()))]
pub async fn update(
  app_state: web::Data<AppState>,
  path: web::Path<i64>,
  body: web::Form<ProductFormBody>,
) -> Result<HttpResponse, AppError> {
  update_product(&app_state, ProductId(path.into_inner()), body.into_inner().into_payload()).await
}

#[instrument(name = "handler::products_destroy", skip(app_state, path), fields(product_id = %path.as_ref()))]
pub async fn destroy(app_state: web::Data<AppState>, path: web::Path<i64>) -> Result<HttpResponse, AppError> {
  delete_product(&app_state, ProductId(path.into_inner())).await
}

/// `POST /products/{id}` carrying `_method=PUT` or `_method=DELETE`.
#[instrument(name = "handler::products_method_override", skip(app_state, path, body), fields(product_id = %path.as_ref()))]
pub async fn method_override(
  app_state: web::Data<AppState>,
  path: web::Path<i64>,
  body: web::Form<ProductFormBody>,
) -> Result<HttpResponse, AppError> {
  let id = ProductId(path.into_inner());
  let body = body.into_inner();
  let method = body.method.as_deref().unwrap_or_default().to_ascii_uppercase();
  match method.as_str() {
    "PUT" | "PATCH" => update_product(&app_state, id, body.into_payload()).await,
    "DELETE" => delete_product(&app_state, id).await,
    other => {
      warn!(method = other, "Unsupported method override.");
      Ok(HttpResponse::MethodNotAllowed().finish())
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::web::configure_app_routes;
  use crate::web::flash::FLASH_COOKIE;
  use actix_web::cookie::Cookie;
  use actix_web::http::{header, StatusCode};
  use actix_web::{test, App};

  fn body_text(bytes: web::Bytes) -> String {
    String::from_utf8(bytes.to_vec()).unwrap()
  }

  #[actix_web::test]
  async fn create_redirects_with_flash_and_list_consumes_it() {
    let app = test::init_service(
      App::new()
        .app_data(web::Data::new(AppState::in_memory()))
        .configure(configure_app_routes),
    )
    .await;

    let req = test::TestRequest::post()
      .uri("/products")
      .set_form([("name", "Desk Lamp"), ("price", "24.99"), ("description", "Warm light")])
      .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(resp.headers().get(header::LOCATION).unwrap(), "/products");
    let cookie = resp.response().cookies().find(|c| c.name() == FLASH_COOKIE).unwrap();
    assert_eq!(cookie.value(), "Product created successfully.");

    let req = test::TestRequest::get()
      .uri("/products")
      .cookie(Cookie::new(FLASH_COOKIE, "Product created successfully."))
      .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let removal = resp.response().cookies().find(|c| c.name() == FLASH_COOKIE).unwrap();
    assert_eq!(removal.value(), "");
    let page = body_text(test::read_body(resp).await);
    assert!(page.contains("Product created successfully."));
    assert!(page.contains("Desk Lamp"));
    assert!(page.contains("$24.99"));
  }

  #[actix_web::test]
  async fn rejected_create_rerenders_with_messages_and_typed_values() {
    let app = test::init_service(
      App::new()
        .app_data(web::Data::new(AppState::in_memory()))
        .configure(configure_app_routes),
    )
    .await;

    let req = test::TestRequest::post()
      .uri("/products")
      .set_form([("name", ""), ("price", "abc"), ("description", "kept")])
      .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let page = body_text(test::read_body(resp).await);
    assert!(page.contains("The name field is required."));
    assert!(page.contains("The price field must be a number."));
    assert!(page.contains(r#"value="abc""#));
    assert!(page.contains(">kept</textarea>"));
  }

  #[actix_web::test]
  async fn method_override_updates_and_deletes() {
    let state = AppState::in_memory();
    let app = test::init_service(
      App::new()
        .app_data(web::Data::new(state.clone()))
        .configure(configure_app_routes),
    )
    .await;

    let req = test::TestRequest::post()
      .uri("/products")
      .set_form([("name", "Mug"), ("price", "4.50"), ("description", "")])
      .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::SEE_OTHER);

    let req = test::TestRequest::post()
      .uri("/products/1")
      .set_form([("_method", "PUT"), ("name", "Big Mug"), ("price", "6"), ("description", "")])
      .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    let product = state.products.find_product(ProductId(1)).await.unwrap();
    assert_eq!(product.name, "Big Mug");
    assert_eq!(product.price.cents(), 600);

    let req = test::TestRequest::post()
      .uri("/products/1")
      .set_form([("_method", "DELETE")])
      .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    let cookie = resp.response().cookies().find(|c| c.name() == FLASH_COOKIE).unwrap();
    assert_eq!(cookie.value(), "Product deleted successfully.");
    assert!(state.products.list_products().await.unwrap().is_empty());
  }

  #[actix_web::test]
  async fn rejected_edit_keeps_saved_values_for_reset() {
    let state = AppState::in_memory();
    let app = test::init_service(
      App::new()
        .app_data(web::Data::new(state.clone()))
        .configure(configure_app_routes),
    )
    .await;
    state
      .products
      .create_product(ProductPayload {
        name: "Mug".into(),
        price: "4.50".into(),
        description: String::new(),
      })
      .await
      .unwrap();

    let req = test::TestRequest::put()
      .uri("/products/1")
      .set_form([("name", "   "), ("price", "5"), ("description", "")])
      .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let page = body_text(test::read_body(resp).await);
    assert!(page.contains(r#"data-original="Mug""#));
    assert!(page.contains(r#"value="5" data-original="4.50""#));
    assert!(page.contains("The name field is required."));
  }

  #[actix_web::test]
  async fn empty_list_and_unknown_product() {
    let app = test::init_service(
      App::new()
        .app_data(web::Data::new(AppState::in_memory()))
        .configure(configure_app_routes),
    )
    .await;

    let page = body_text(test::call_and_read_body(&app, test::TestRequest::get().uri("/products").to_request()).await);
    assert!(page.contains("Create Your First Product"));

    let resp = test::call_service(&app, test::TestRequest::get().uri("/products/42/edit").to_request()).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let resp = test::call_service(&app, test::TestRequest::get().uri("/products/create").to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);
  }
}
