// catalog/src/views/mod.rs

//! Page view models. Rendering (HTML, terminal) lives with each front end;
//! these types own the state and the rules.

pub mod draft;
pub mod form;
pub mod listing;
pub mod menu;

pub use draft::{DraftField, ProductDraft, DESCRIPTION_GUIDANCE};
pub use form::{FormMode, FormPhase, FormSnapshot, ProductForm, SubmitOutcome};
pub use listing::{
  truncate_description, DeleteConfirmation, DeleteOutcome, ListingStats, ProductListing, DESCRIPTION_PREVIEW_LEN,
};
pub use menu::{MenuItem, MenuMethod, UserMenu};
