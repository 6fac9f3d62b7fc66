// server/src/web/views/mod.rs

//! Server-rendered HTML, built with `maud` from the catalog view models.

pub mod layout;
pub mod products;

pub use layout::{layout, Crumb};
