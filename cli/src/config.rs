// cli/src/config.rs

use dotenvy::dotenv;
use std::env;
use thiserror::Error;

pub const DEFAULT_CATALOG_URL: &str = "http://127.0.0.1:8080";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
  #[error("CATALOG_URL must start with http:// or https://, got '{0}'")]
  InvalidUrl(String),
}

#[derive(Debug, Clone)]
pub struct CliConfig {
  /// Where the catalog server listens, without a trailing slash.
  pub base_url: String,
}

impl CliConfig {
  /// Reads `CATALOG_URL` (after loading `.env`); `override_url` wins when given.
  pub fn from_env(override_url: Option<String>) -> Result<Self, ConfigError> {
    dotenv().ok();
    let raw = override_url
      .or_else(|| env::var("CATALOG_URL").ok())
      .filter(|url| !url.trim().is_empty())
      .unwrap_or_else(|| DEFAULT_CATALOG_URL.to_string());
    let base_url = raw.trim().trim_end_matches('/').to_string();
    if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
      return Err(ConfigError::InvalidUrl(base_url));
    }
    Ok(Self { base_url })
  }
}
