// cli/src/render.rs

//! Plain-text rendering of the catalog view models.

use catalog::views::{truncate_description, DraftField, ProductListing, DESCRIPTION_PREVIEW_LEN};
use catalog::{FieldErrors, Product};

fn pad(text: &str, width: usize) -> String {
  let len = text.chars().count();
  format!("{}{}", text, " ".repeat(width.saturating_sub(len)))
}

pub fn listing(listing: &ProductListing) -> String {
  let mut out = String::new();
  if let Some(message) = listing.flash() {
    out.push_str(&format!("{}\n\n", message));
  }
  if listing.is_empty() {
    out.push_str("No products found.\nGet started by creating your first product: catalog create\n");
    return out;
  }

  out.push_str(&format!("{} ({})\n\n", listing.summary_label(), listing.badge_label()));
  let rows: Vec<[String; 4]> = listing
    .products()
    .iter()
    .map(|p| {
      [
        format!("#{}", p.id),
        p.name.clone(),
        p.price.format_usd(),
        truncate_description(&p.description, DESCRIPTION_PREVIEW_LEN),
      ]
    })
    .collect();

  let headers = ["ID", "Name", "Price", "Description"];
  let mut widths = headers.map(|h| h.chars().count());
  for row in &rows {
    for (width, cell) in widths.iter_mut().zip(row) {
      *width = (*width).max(cell.chars().count());
    }
  }

  let line = |cells: [&str; 4]| {
    let joined: Vec<String> = cells.iter().zip(widths).map(|(c, w)| pad(c, w)).collect();
    format!("{}\n", joined.join("  ").trim_end())
  };
  out.push_str(&line(headers));
  for row in &rows {
    out.push_str(&line([&row[0], &row[1], &row[2], &row[3]]));
  }

  let stats = listing.stats();
  out.push_str(&format!(
    "\nTotal Products:          {}\nTotal Inventory Value:   {}\nHighest Priced Product:  {}\n",
    stats.count,
    stats.total_value_label(),
    stats.max_price_label()
  ));
  out
}

pub fn product_details(product: &Product) -> String {
  let description = if product.description.is_empty() {
    "No description"
  } else {
    product.description.as_str()
  };
  format!(
    "{} (#{})\nPrice:        {}\nDescription:  {}\n",
    product.name,
    product.id,
    product.price.format_usd(),
    description
  )
}

pub fn errors(errors: &FieldErrors) -> String {
  let mut out = String::from("Please fix the following errors:\n");
  for (field, message) in errors.iter() {
    match field.parse::<DraftField>() {
      Ok(known) => out.push_str(&format!("  - {}: {}\n", known.label(), message)),
      Err(_) => out.push_str(&format!("  - {}\n", message)),
    }
  }
  out
}
