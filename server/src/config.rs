// server/src/config.rs

use crate::errors::{AppError, Result}; // Use AppError specific Result
use catalog::User;
use dotenvy::dotenv;
use std::env;

/// How log lines are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
  Pretty,
  Json,
}

#[derive(Debug, Clone)] // Clone is useful if parts of config are passed around
pub struct AppConfig {
  pub server_host: String,
  pub server_port: u16,
  /// Postgres connection string. Without one the server keeps products in memory.
  pub database_url: Option<String>,
  pub app_base_url: String,

  /// Account shown in the user menu. Sign-in lives outside this service.
  pub display_user: User,

  pub log_format: LogFormat,

  // Optional: for seeding demo products on startup
  pub seed_db: bool,
}

impl AppConfig {
  pub fn from_env() -> Result<Self> {
    dotenv().ok(); // Load .env file if present

    let get_env = |var_name: &str| {
      env::var(var_name).map_err(|e| AppError::Config(format!("Missing environment variable '{}': {}", var_name, e)))
    };

    let server_host = get_env("SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
    let server_port = get_env("SERVER_PORT")
      .unwrap_or_else(|_| "8080".to_string())
      .parse::<u16>()
      .map_err(|e| AppError::Config(format!("Invalid SERVER_PORT: {}", e)))?;
    let database_url = get_env("DATABASE_URL").ok().filter(|url| !url.trim().is_empty());
    let app_base_url = get_env("APP_BASE_URL").unwrap_or_else(|_| format!("http://{}:{}", server_host, server_port));

    let display_user = User::new(
      get_env("CATALOG_USER_NAME").unwrap_or_else(|_| "Catalog Admin".to_string()),
      get_env("CATALOG_USER_EMAIL").unwrap_or_else(|_| "admin@example.com".to_string()),
    );

    let log_format = match get_env("LOG_FORMAT").unwrap_or_default().to_ascii_lowercase().as_str() {
      "" | "pretty" | "text" => LogFormat::Pretty,
      "json" => LogFormat::Json,
      other => return Err(AppError::Config(format!("Invalid LOG_FORMAT value: {}", other))),
    };

    let seed_db = get_env("SEED_DB")
      .unwrap_or_else(|_| "false".to_string())
      .parse::<bool>()
      .map_err(|e| AppError::Config(format!("Invalid SEED_DB value: {}", e)))?;

    // Avoid logging secrets: only whether a database is configured.
    tracing::info!(
      persistent = database_url.is_some(),
      "Application configuration loaded successfully."
    );

    Ok(Self {
      server_host,
      server_port,
      database_url,
      app_base_url,
      display_user,
      log_format,
      seed_db,
    })
  }

  pub fn bind_address(&self) -> String {
    format!("{}:{}", self.server_host, self.server_port)
  }
}
