// server/src/main.rs

// Declare modules for the application
mod config;
mod errors;
mod models;
mod services;
mod state;
mod store;
mod web;

use crate::config::{AppConfig, LogFormat};
use crate::services::{seed::seed_demo_products, ProductService};
use crate::state::AppState;
use crate::store::{MemoryProductStore, PgProductStore, ProductStore};

use actix_web::{web as actix_data, App, HttpServer}; // Renamed web to actix_data
use std::sync::Arc;
use tracing_subscriber::fmt::format::FmtSpan; // For span events in tracing
use tracing_subscriber::EnvFilter;

fn init_tracing(format: LogFormat) {
  // RUST_LOG overrides the default level.
  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
  let builder = tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_span_events(FmtSpan::CLOSE); // Log when spans close, showing duration
  match format {
    LogFormat::Json => builder.json().init(),
    LogFormat::Pretty => builder.init(),
  }
}

// Main function
#[actix_web::main]
async fn main() -> std::io::Result<()> {
  // Configuration comes first so LOG_FORMAT can pick the subscriber.
  let app_config = match AppConfig::from_env() {
    Ok(cfg) => Arc::new(cfg), // Arc the config for sharing
    Err(e) => {
      eprintln!("Configuration error: {}", e);
      return Err(std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string()));
    }
  };
  init_tracing(app_config.log_format);

  tracing::info!("Starting product catalog server...");

  let store: Arc<dyn ProductStore> = match &app_config.database_url {
    Some(url) => match PgProductStore::connect(url).await {
      Ok(store) => {
        tracing::info!("Using the Postgres product store.");
        Arc::new(store)
      }
      Err(e) => {
        tracing::error!(error = %e, "Failed to connect to the database.");
        return Err(std::io::Error::new(std::io::ErrorKind::Other, e.to_string()));
      }
    },
    None => {
      tracing::warn!("DATABASE_URL is not set; products are kept in memory and lost on restart.");
      Arc::new(MemoryProductStore::new())
    }
  };

  if app_config.seed_db {
    match seed_demo_products(store.as_ref()).await {
      Ok(added) => tracing::info!(added, "Demo products seeded."),
      Err(e) => tracing::error!(error = %e, "Failed to seed demo products."),
    }
  }

  let app_state = AppState {
    products: ProductService::new(store),
    config: app_config.clone(), // Clone Arc for AppState
  };

  // Configure and Start Actix Web Server
  let server_address = app_config.bind_address();
  tracing::info!(base_url = %app_config.app_base_url, "Attempting to bind server to {}...", server_address);

  HttpServer::new(move || {
    App::new()
      .app_data(actix_data::Data::new(app_state.clone())) // Share AppState with handlers
      .wrap(tracing_actix_web::TracingLogger::default()) // Actix middleware for tracing requests
      .configure(web::configure_app_routes)
  })
  .bind(&server_address)?
  .run()
  .await
}
