// catalog/src/routes.rs

//! Page locations shared by the server routes, redirects, and rendered links.

use crate::model::ProductId;

pub const PRODUCTS: &str = "/products";
pub const CREATE_PRODUCT: &str = "/products/create";
pub const SETTINGS_PROFILE: &str = "/settings/profile";
pub const LOGOUT: &str = "/logout";

pub fn product(id: ProductId) -> String {
  format!("{}/{}", PRODUCTS, id)
}

pub fn edit_product(id: ProductId) -> String {
  format!("{}/{}/edit", PRODUCTS, id)
}
