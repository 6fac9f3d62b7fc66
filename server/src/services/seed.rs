// server/src/services/seed.rs

use catalog::Price;
use tracing::{info, instrument};

use crate::errors::{AppError, Result};
use crate::models::ProductRecord;
use crate::store::ProductStore;

const DEMO_PRODUCTS: [(&str, &str, &str); 4] = [
  ("Desk Lamp", "24.99", "Adjustable arm with a warm white LED and a weighted base."),
  ("Standing Desk", "499.00", "Electric height adjustment with three memory presets."),
  ("Monitor Arm", "89.50", "Gas spring arm for screens up to 32 inches."),
  ("Cable Tray", "15.50", "Under-desk steel tray that keeps power strips off the floor."),
];

/// Fills an empty store with a few demo products. Returns how many were added.
#[instrument(name = "seed::demo_products", skip(store))]
pub async fn seed_demo_products(store: &dyn ProductStore) -> Result<usize> {
  if !store.all().await?.is_empty() {
    info!("Store already has products; skipping seed.");
    return Ok(0);
  }
  for (name, price, description) in DEMO_PRODUCTS {
    let price = Price::parse(price).map_err(|e| AppError::Internal(format!("Bad demo price {}: {}", price, e)))?;
    store
      .insert(ProductRecord {
        name: name.to_string(),
        price,
        description: description.to_string(),
      })
      .await?;
  }
  info!("Seeded {} demo products.", DEMO_PRODUCTS.len());
  Ok(DEMO_PRODUCTS.len())
}
