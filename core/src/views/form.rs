// catalog/src/views/form.rs

//! Create and edit forms.
//!
//! Both share one state machine:
//!
//! ```text
//! Idle --submit--> Submitting --ok--> Completed (the backend's redirect takes over)
//!                      |
//!                      +--error--> Idle, with the error set attached
//! ```
//!
//! A submit issued while another is in flight, or after completion, is
//! ignored. The draft is never touched by a submission; only the user (or
//! [`ProductForm::reset`]) changes it.

use tracing::{debug, info, instrument, warn};

use super::draft::{DraftField, ProductDraft};
use crate::backend::{CatalogBackend, Redirect};
use crate::model::{Product, ProductId};
use crate::state::ViewState;
use crate::validation::FieldErrors;

/// What the form is for. An edit form remembers the record it was seeded from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMode {
  Create,
  Edit(Product),
}

impl FormMode {
  pub fn product_id(&self) -> Option<ProductId> {
    match self {
      FormMode::Create => None,
      FormMode::Edit(product) => Some(product.id),
    }
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormPhase {
  Idle,
  Submitting,
  Completed,
}

/// Result of one call to [`ProductForm::submit`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
  /// Accepted. The caller should follow the redirect.
  Redirected(Redirect),
  /// Refused. The same errors are now attached to the form.
  Rejected(FieldErrors),
  /// A request was already in flight (or the form already completed); nothing was sent.
  Ignored,
}

#[derive(Debug)]
struct FormData {
  mode: FormMode,
  seed: ProductDraft,
  draft: ProductDraft,
  errors: FieldErrors,
  phase: FormPhase,
}

/// A point-in-time copy of a form, used for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormSnapshot {
  pub mode: FormMode,
  pub draft: ProductDraft,
  pub seed: ProductDraft,
  pub errors: FieldErrors,
  pub phase: FormPhase,
}

impl FormSnapshot {
  pub fn is_processing(&self) -> bool {
    self.phase == FormPhase::Submitting
  }

  /// Document title.
  pub fn title(&self) -> String {
    match &self.mode {
      FormMode::Create => "Create a New Product".to_string(),
      FormMode::Edit(product) => format!("Edit {}", product.name),
    }
  }

  pub fn heading(&self) -> &'static str {
    match self.mode {
      FormMode::Create => "Create New Product",
      FormMode::Edit(_) => "Edit Product",
    }
  }

  pub fn submit_label(&self) -> &'static str {
    match (&self.mode, self.is_processing()) {
      (FormMode::Create, false) => "Create Product",
      (FormMode::Create, true) => "Creating...",
      (FormMode::Edit(_), false) => "Update Product",
      (FormMode::Edit(_), true) => "Updating...",
    }
  }

  pub fn can_submit(&self) -> bool {
    self.phase == FormPhase::Idle
  }

  /// Reset is offered on edit forms, and not while a request is out.
  pub fn can_reset(&self) -> bool {
    matches!(self.mode, FormMode::Edit(_)) && !self.is_processing()
  }

  pub fn error_for(&self, field: DraftField) -> Option<&str> {
    self.errors.get(field.key())
  }
}

/// A product form with its draft, error set, and submission state.
///
/// Cheap to clone; clones share the same state.
#[derive(Debug, Clone)]
pub struct ProductForm {
  state: ViewState<FormData>,
}

impl ProductForm {
  /// An empty create form.
  pub fn create() -> Self {
    Self::with_mode(FormMode::Create, ProductDraft::default())
  }

  /// An edit form seeded from `product`.
  pub fn edit(product: Product) -> Self {
    let seed = ProductDraft::from_product(&product);
    Self::with_mode(FormMode::Edit(product), seed)
  }

  fn with_mode(mode: FormMode, seed: ProductDraft) -> Self {
    Self {
      state: ViewState::new(FormData {
        mode,
        draft: seed.clone(),
        seed,
        errors: FieldErrors::new(),
        phase: FormPhase::Idle,
      }),
    }
  }

  pub fn mode(&self) -> FormMode {
    self.state.read().mode.clone()
  }

  pub fn phase(&self) -> FormPhase {
    self.state.read().phase
  }

  pub fn is_processing(&self) -> bool {
    self.phase() == FormPhase::Submitting
  }

  pub fn draft(&self) -> ProductDraft {
    self.state.read().draft.clone()
  }

  /// The values the form started from (empty for a create form).
  pub fn seed(&self) -> ProductDraft {
    self.state.read().seed.clone()
  }

  pub fn errors(&self) -> FieldErrors {
    self.state.read().errors.clone()
  }

  pub fn set_field(&self, field: DraftField, value: impl Into<String>) {
    let value = value.into();
    self.state.update(|form| form.draft.set(field, value));
  }

  pub fn replace_draft(&self, draft: ProductDraft) {
    self.state.update(|form| form.draft = draft);
  }

  /// Throws away unsaved edits by restoring the seeded values.
  ///
  /// Returns `false` (and changes nothing) while a submission is in flight.
  pub fn reset(&self) -> bool {
    self.state.update(|form| {
      if form.phase == FormPhase::Submitting {
        return false;
      }
      form.draft = form.seed.clone();
      true
    })
  }

  pub fn snapshot(&self) -> FormSnapshot {
    let form = self.state.read();
    FormSnapshot {
      mode: form.mode.clone(),
      draft: form.draft.clone(),
      seed: form.seed.clone(),
      errors: form.errors.clone(),
      phase: form.phase,
    }
  }

  /// Sends the draft to `backend`: a create for a create form, an update
  /// keyed by the seeded record's id for an edit form.
  #[instrument(name = "form::submit", skip(self, backend))]
  pub async fn submit<B>(&self, backend: &B) -> SubmitOutcome
  where
    B: CatalogBackend + ?Sized,
  {
    let request = self.state.update(|form| {
      if form.phase != FormPhase::Idle {
        return None;
      }
      form.phase = FormPhase::Submitting;
      Some((form.mode.product_id(), form.draft.to_payload()))
    });

    let Some((target, payload)) = request else {
      debug!("Submission ignored: a request is already in flight or the form has completed.");
      return SubmitOutcome::Ignored;
    };

    let result = match target {
      None => backend.create_product(payload).await,
      Some(id) => backend.update_product(id, payload).await,
    };

    self.state.update(|form| match result {
      Ok(redirect) => {
        info!(location = %redirect.location, "Submission accepted.");
        form.phase = FormPhase::Completed;
        form.errors.clear();
        SubmitOutcome::Redirected(redirect)
      }
      Err(err) => {
        warn!(error = %err, "Submission rejected.");
        let errors = err.into_field_errors();
        form.errors = errors.clone();
        form.phase = FormPhase::Idle;
        SubmitOutcome::Rejected(errors)
      }
    })
  }
}
