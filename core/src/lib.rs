// src/lib.rs

//! Catalog: view models and the typed backend contract for a product catalog.
//!
//! The crate covers the data-entry side of a product CRUD interface:
//!  - A product list with derived statistics (count, total value, highest price).
//!  - Create and edit forms holding a view-local draft, with one request in flight at a time.
//!  - Backend-supplied field errors kept verbatim for display.
//!  - Deletes that only go out after an explicit confirmation naming the record.
//!  - The user menu fragment.
//!
//! Everything that talks to storage goes through [`CatalogBackend`]. The
//! backend stays the system of record: a draft is only ever a copy.

pub mod backend;
pub mod error;
pub mod model;
pub mod routes;
pub mod state;
pub mod validation;
pub mod views;

// --- Re-exports for the Public API ---

pub use crate::backend::{CatalogBackend, Redirect};
pub use crate::error::{BackendError, BackendResult, PriceError};
pub use crate::model::{Price, Product, ProductId, ProductPayload, User};
pub use crate::state::ViewState;
pub use crate::validation::FieldErrors;
pub use crate::views::{
  DeleteConfirmation, DeleteOutcome, DraftField, FormMode, FormPhase, FormSnapshot, ListingStats, ProductDraft,
  ProductForm, ProductListing, SubmitOutcome, UserMenu,
};
