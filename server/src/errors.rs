// server/src/errors.rs

use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use catalog::{BackendError, FieldErrors};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
  #[error("The given data was invalid.")]
  Validation(FieldErrors),

  #[error("Resource Not Found: {0}")]
  NotFound(String),

  #[error("Configuration Error: {0}")]
  Config(String),

  #[error("Database Error: {0}")]
  Sqlx(#[from] sqlx::Error),

  #[error("Migration Error: {0}")]
  Migration(#[from] sqlx::migrate::MigrateError),

  #[error("Internal Server Error: {0}")]
  Internal(String), // For miscellaneous errors
}

// Allow anyhow::Error to be converted into AppError::Internal for convenience
impl From<anyhow::Error> for AppError {
  fn from(err: anyhow::Error) -> Self {
    AppError::Internal(err.to_string())
  }
}

// Product service calls come back as BackendError; the HTTP layer speaks AppError.
impl From<BackendError> for AppError {
  fn from(err: BackendError) -> Self {
    match err {
      BackendError::Rejected(errors) => AppError::Validation(errors),
      BackendError::NotFound(id) => AppError::NotFound(format!("Product with ID {} not found.", id)),
      other => AppError::Internal(other.to_string()),
    }
  }
}

impl ResponseError for AppError {
  fn status_code(&self) -> StatusCode {
    match self {
      AppError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
      AppError::NotFound(_) => StatusCode::NOT_FOUND,
      AppError::Config(_) | AppError::Sqlx(_) | AppError::Migration(_) | AppError::Internal(_) => {
        StatusCode::INTERNAL_SERVER_ERROR
      }
    }
  }

  fn error_response(&self) -> HttpResponse {
    let status = self.status_code();
    if status.is_server_error() {
      // Log the full error when it's turned into a response
      tracing::error!(application_error = %self, "Responding with error");
    } else {
      tracing::debug!(application_error = %self, "Responding with client error");
    }
    let mut builder = HttpResponse::build(status);
    match self {
      AppError::Validation(errors) => builder.json(json!({"message": self.to_string(), "errors": errors})),
      AppError::NotFound(m) => builder.json(json!({"message": m})),
      AppError::Config(m) => builder.json(json!({"message": "Configuration issue", "detail": m})),
      AppError::Sqlx(_) | AppError::Migration(_) => builder.json(json!({"message": "Database operation failed"})),
      AppError::Internal(m) => builder.json(json!({"message": "An internal error occurred", "detail": m})),
    }
  }
}

// Define a Result type alias for the application
pub type Result<T, E = AppError> = std::result::Result<T, E>;
