// server/src/web/handlers/mod.rs

pub mod account_handlers;
pub mod api_handlers;
pub mod product_handlers;
