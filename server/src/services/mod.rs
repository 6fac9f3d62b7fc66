// server/src/services/mod.rs

pub mod product_service;
pub mod seed;

pub use product_service::ProductService;
