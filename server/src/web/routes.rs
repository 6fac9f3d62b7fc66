// server/src/web/routes.rs

use actix_web::{http::header, web, HttpResponse};
use catalog::routes;

use crate::web::handlers::{account_handlers, api_handlers, product_handlers};

async fn home_handler() -> HttpResponse {
  HttpResponse::Found()
    .insert_header((header::LOCATION, routes::PRODUCTS))
    .finish()
}

// This function will be called in `main.rs` to configure services for the Actix App.
pub fn configure_app_routes(cfg: &mut web::ServiceConfig) {
  cfg
    .route("/", web::get().to(home_handler))
    .route(routes::SETTINGS_PROFILE, web::get().to(account_handlers::settings_profile_handler))
    .route(routes::LOGOUT, web::post().to(account_handlers::logout_handler))
    // HTML pages. `/create` must be registered before `/{product_id}`.
    .service(
      web::scope(routes::PRODUCTS)
        .route("", web::get().to(product_handlers::index))
        .route("", web::post().to(product_handlers::store))
        .route("/create", web::get().to(product_handlers::create))
        .route("/{product_id}", web::get().to(product_handlers::show))
        .route("/{product_id}", web::put().to(product_handlers::update))
        .route("/{product_id}", web::delete().to(product_handlers::destroy))
        .route("/{product_id}", web::post().to(product_handlers::method_override))
        .route("/{product_id}/edit", web::get().to(product_handlers::edit)),
    )
    .service(
      web::scope("/api/v1") // Base path for API version 1
        .route("/health", web::get().to(api_handlers::health_check_handler))
        .service(
          web::scope("/products")
            .route("", web::get().to(api_handlers::list_products_handler))
            .route("", web::post().to(api_handlers::create_product_handler))
            .route("/{product_id}", web::get().to(api_handlers::get_product_handler))
            .route("/{product_id}", web::put().to(api_handlers::update_product_handler))
            .route("/{product_id}", web::delete().to(api_handlers::delete_product_handler)),
        ),
    );
}
