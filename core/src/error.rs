// catalog/src/error.rs
use anyhow::Error as AnyhowError;
use thiserror::Error;

use crate::model::ProductId;
use crate::validation::FieldErrors;

/// Failure reported by a [`CatalogBackend`](crate::CatalogBackend) call.
///
/// Only `Rejected` carries field-level messages. Every other variant is still
/// shown to the user as an error set, see [`BackendError::into_field_errors`].
#[derive(Debug, Error)]
pub enum BackendError {
  #[error("The given data was invalid.")]
  Rejected(FieldErrors),

  #[error("Product #{0} was not found.")]
  NotFound(ProductId),

  #[error("Backend responded with status {status}: {message}")]
  Status { status: u16, message: String },

  #[error("Request to the catalog backend failed. Source: {source}")]
  Transport {
    #[source]
    source: AnyhowError,
  },

  #[error("Internal backend error: {0}")]
  Internal(String),
}

impl BackendError {
  /// Folds any failure into the error set a view displays.
  ///
  /// Validation failures pass through untouched; everything else becomes a
  /// single message under [`FieldErrors::FORM_KEY`].
  pub fn into_field_errors(self) -> FieldErrors {
    match self {
      BackendError::Rejected(errors) => errors,
      other => FieldErrors::single(FieldErrors::FORM_KEY, other.to_string()),
    }
  }
}

impl From<AnyhowError> for BackendError {
  fn from(err: AnyhowError) -> Self {
    BackendError::Transport { source: err }
  }
}

/// Reasons a price string could not be turned into a [`Price`](crate::Price).
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PriceError {
  #[error("price is empty")]
  Empty,

  #[error("'{0}' is not a number")]
  NotANumber(String),

  #[error("price cannot be negative")]
  Negative,

  #[error("price has more than two decimal places")]
  TooManyDecimals,

  #[error("price exceeds the maximum of 99999999.99")]
  TooLarge,
}

pub type BackendResult<T, E = BackendError> = std::result::Result<T, E>;
