// server/src/web/views/products.rs

use catalog::views::{
  truncate_description, DraftField, FormMode, FormSnapshot, ProductListing, DESCRIPTION_GUIDANCE,
  DESCRIPTION_PREVIEW_LEN,
};
use catalog::{routes, FieldErrors, Product, UserMenu};
use maud::{html, Markup};

use super::{layout, Crumb};

const DESCRIPTION_COUNTER_ID: &str = "description-counter";

fn flash_alert(message: &str) -> Markup {
  html! {
    div class="alert alert-success" role="status" { (message) }
  }
}

fn error_alert(errors: &FieldErrors) -> Markup {
  html! {
    @if !errors.is_empty() {
      div class="alert alert-error" role="alert" {
        strong { "Please fix the following errors:" }
        ul {
          @for message in errors.messages() {
            li { (message) }
          }
        }
      }
    }
  }
}

fn description_cell(description: &str) -> Markup {
  html! {
    @if description.is_empty() {
      span class="muted" { "No description" }
    } @else {
      (truncate_description(description, DESCRIPTION_PREVIEW_LEN))
    }
  }
}

/// The product list: table, statistics, and per-row actions, or an empty state.
pub fn index_page(listing: &ProductListing, menu: &UserMenu) -> Markup {
  let stats = listing.stats();
  let body = html! {
    section class="page-header" {
      div {
        h1 { "Products" }
        p { "Manage your product inventory" }
      }
      a class="button" href=(routes::CREATE_PRODUCT) { "Create Product" }
    }
    @if let Some(message) = listing.flash() {
      (flash_alert(message))
    }
    (error_alert(&listing.errors()))

    @if listing.is_empty() {
      section class="empty-state" {
        h2 { "No products found" }
        p { "Get started by creating your first product." }
        a class="button" href=(routes::CREATE_PRODUCT) { "Create Your First Product" }
      }
    } @else {
      section class="card" {
        header {
          h2 { "All Products" }
          span class="summary" { (listing.summary_label()) }
          span class="badge" { (listing.badge_label()) }
        }
        table {
          thead {
            tr { th { "ID" } th { "Name" } th { "Price" } th { "Description" } th { "Actions" } }
          }
          tbody {
            @for product in listing.products() {
              tr {
                td { "#" (product.id.0) }
                td { (product.name) }
                td { (product.price.format_usd()) }
                td { (description_cell(&product.description)) }
                td class="actions" {
                  a href=(routes::product(product.id)) { "View" }
                  " "
                  a href=(routes::edit_product(product.id)) { "Edit" }
                  " "
                  form method="post" action=(routes::product(product.id))
                    data-confirm=(ProductListing::delete_prompt(product)) {
                    input type="hidden" name="_method" value="DELETE";
                    button type="submit" data-delete disabled[listing.is_processing()] { "Delete" }
                  }
                }
              }
            }
          }
        }
      }
      section class="stats" {
        div { span { "Total Products" } strong { (stats.count) } }
        div { span { "Total Inventory Value" } strong { (stats.total_value_label()) } }
        div { span { "Highest Priced Product" } strong { (stats.max_price_label()) } }
      }
    }
  };

  layout("Products", &[Crumb { title: "Products", href: routes::PRODUCTS }], menu, body)
}

fn field_input(form: &FormSnapshot, field: DraftField) -> Markup {
  let key = field.key();
  let value = form.draft.get(field);
  let original = form.seed.get(field);
  let invalid = form.error_for(field).map(|_| "true");
  html! {
    div class="field" {
      label for=(key) { (field.label()) }
      @match field {
        DraftField::Name => {
          input id=(key) name=(key) type="text" value=(value) data-original=(original)
            placeholder="Enter product name" aria-invalid=[invalid];
        }
        DraftField::Price => {
          input id=(key) name=(key) type="number" step="0.01" min="0" value=(value) data-original=(original)
            placeholder="0.00" aria-invalid=[invalid];
        }
        DraftField::Description => {
          textarea id=(key) name=(key) rows="4" data-original=(original) data-counter=(DESCRIPTION_COUNTER_ID)
            placeholder="Enter product description (optional)" aria-invalid=[invalid] { (value) }
          small id=(DESCRIPTION_COUNTER_ID) class="counter" data-limit=(DESCRIPTION_GUIDANCE) {
            (form.draft.description_counter())
          }
        }
      }
      @if let Some(message) = form.error_for(field) {
        p class="field-error" { (message) }
      }
    }
  }
}

/// The create or edit form, with any errors from the last submission inline.
pub fn form_page(form: &FormSnapshot, menu: &UserMenu) -> Markup {
  let (action, subtitle, busy_label) = match &form.mode {
    FormMode::Create => (
      routes::PRODUCTS.to_string(),
      "Add a new product to your inventory".to_string(),
      "Creating...",
    ),
    FormMode::Edit(product) => (
      routes::product(product.id),
      format!("Update product information. ID: #{}", product.id),
      "Updating...",
    ),
  };

  let body = html! {
    section class="page-header" {
      div {
        h1 { (form.heading()) }
        p { (subtitle) }
      }
      a class="button secondary" href=(routes::PRODUCTS) { "Back to Products" }
    }
    (error_alert(&form.errors))
    form method="post" action=(action) data-single-submit {
      @if let FormMode::Edit(_) = form.mode {
        input type="hidden" name="_method" value="PUT";
      }
      @for field in DraftField::ALL {
        (field_input(form, field))
      }
      div class="actions" {
        a class="button secondary" href=(routes::PRODUCTS) { "Cancel" }
        @if let FormMode::Edit(_) = form.mode {
          button type="button" data-reset disabled[!form.can_reset()] { "Reset Changes" }
        }
        button type="submit" data-busy-label=(busy_label) disabled[!form.can_submit()] { (form.submit_label()) }
      }
    }
  };

  let title = form.title();
  match &form.mode {
    FormMode::Create => layout(
      &title,
      &[Crumb { title: "Create a New Product", href: routes::CREATE_PRODUCT }],
      menu,
      body,
    ),
    FormMode::Edit(product) => {
      let edit_href = routes::edit_product(product.id);
      layout(
        &title,
        &[
          Crumb { title: "Products", href: routes::PRODUCTS },
          Crumb { title: &product.name, href: &action },
          Crumb { title: "Edit", href: &edit_href },
        ],
        menu,
        body,
      )
    }
  }
}

pub fn show_page(product: &Product, menu: &UserMenu) -> Markup {
  let self_href = routes::product(product.id);
  let body = html! {
    section class="page-header" {
      div {
        h1 { (product.name) }
        p { "Product #" (product.id.0) }
      }
      a class="button" href=(routes::edit_product(product.id)) { "Edit" }
      " "
      a class="button secondary" href=(routes::PRODUCTS) { "Back to Products" }
    }
    dl class="card" {
      dt { "Price" }
      dd { (product.price.format_usd()) }
      dt { "Description" }
      dd {
        @if product.description.is_empty() {
          span class="muted" { "No description" }
        } @else {
          (product.description)
        }
      }
    }
  };
  layout(
    &product.name,
    &[Crumb { title: "Products", href: routes::PRODUCTS }, Crumb { title: &product.name, href: &self_href }],
    menu,
    body,
  )
}
