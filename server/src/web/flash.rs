// server/src/web/flash.rs

//! One-shot flash messages carried across a redirect in a cookie.

use actix_web::cookie::{Cookie, SameSite};
use actix_web::http::header;
use actix_web::{HttpRequest, HttpResponse};
use catalog::Redirect;

pub const FLASH_COOKIE: &str = "catalog_flash";

/// `303 See Other` to the redirect's location, setting the flash cookie when there is a message.
pub fn see_other(redirect: &Redirect) -> HttpResponse {
  let mut response = HttpResponse::SeeOther();
  response.insert_header((header::LOCATION, redirect.location.as_str()));
  if let Some(message) = &redirect.flash {
    response.cookie(
      Cookie::build(FLASH_COOKIE, message.clone())
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .finish(),
    );
  }
  response.finish()
}

/// The pending flash message, if any. Pair with [`removal_cookie`] so it shows once.
pub fn read(req: &HttpRequest) -> Option<String> {
  req
    .cookie(FLASH_COOKIE)
    .map(|cookie| cookie.value().to_string())
    .filter(|message| !message.is_empty())
}

pub fn removal_cookie() -> Cookie<'static> {
  let mut cookie = Cookie::build(FLASH_COOKIE, "").path("/").finish();
  cookie.make_removal();
  cookie
}
