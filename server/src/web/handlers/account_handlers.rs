// server/src/web/handlers/account_handlers.rs

//! Targets of the user menu. Accounts and sessions belong to the sign-in
//! service in front of the catalog, so these only lead back to the product list.

use actix_web::HttpResponse;
use catalog::{routes, Redirect};
use tracing::{info, instrument};

use crate::web::flash;

#[instrument(name = "handler::settings_profile")]
pub async fn settings_profile_handler() -> HttpResponse {
  info!("Profile settings are managed by the sign-in service.");
  flash::see_other(&Redirect::to(routes::PRODUCTS))
}

#[instrument(name = "handler::logout")]
pub async fn logout_handler() -> HttpResponse {
  info!("Logout is handled by the sign-in service.");
  flash::see_other(&Redirect::to(routes::PRODUCTS))
}

#[cfg(test)]
mod tests {
  use crate::state::AppState;
  use crate::web::configure_app_routes;
  use actix_web::http::{header, StatusCode};
  use actix_web::{test, web, App};

  #[actix_web::test]
  async fn menu_targets_lead_back_to_the_catalog() {
    let app = test::init_service(
      App::new()
        .app_data(web::Data::new(AppState::in_memory()))
        .configure(configure_app_routes),
    )
    .await;

    for req in [
      test::TestRequest::get().uri("/settings/profile").to_request(),
      test::TestRequest::post().uri("/logout").to_request(),
    ] {
      let resp = test::call_service(&app, req).await;
      assert_eq!(resp.status(), StatusCode::SEE_OTHER);
      assert_eq!(resp.headers().get(header::LOCATION).unwrap(), "/products");
    }
  }
}
