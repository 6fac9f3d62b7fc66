// cli/src/main.rs

mod config;
mod http_backend;
mod render;
mod session;
mod terminal;

use anyhow::Context;
use catalog::{CatalogBackend, DeleteOutcome, DraftField, ProductForm, ProductId, ProductListing};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::config::CliConfig;
use crate::http_backend::HttpBackend;
use crate::terminal::Terminal;

#[derive(Parser)]
#[command(name = "catalog")]
#[command(about = "Manage the product catalog from the terminal")]
struct Cli {
  /// Catalog server base URL (defaults to CATALOG_URL, then http://127.0.0.1:8080).
  #[arg(long, global = true)]
  url: Option<String>,
  #[command(subcommand)]
  command: Command,
}

/// Field values given on the command line. Anything missing is asked for.
#[derive(clap::Args)]
struct FieldArgs {
  #[arg(long)]
  name: Option<String>,
  #[arg(long)]
  price: Option<String>,
  #[arg(long)]
  description: Option<String>,
}

impl FieldArgs {
  fn is_complete(&self) -> bool {
    self.name.is_some() && self.price.is_some() && self.description.is_some()
  }

  fn apply(self, form: &ProductForm) {
    for (field, value) in [
      (DraftField::Name, self.name),
      (DraftField::Price, self.price),
      (DraftField::Description, self.description),
    ] {
      if let Some(value) = value {
        form.set_field(field, value);
      }
    }
  }
}

#[derive(Subcommand)]
enum Command {
  /// List every product with totals.
  List,
  /// Show one product.
  Show { id: i64 },
  /// Create a product.
  Create {
    #[command(flatten)]
    fields: FieldArgs,
  },
  /// Edit a product; blank answers keep the saved value.
  Edit {
    id: i64,
    #[command(flatten)]
    fields: FieldArgs,
  },
  /// Delete a product after confirmation.
  Delete {
    id: i64,
    /// Skip the confirmation prompt.
    #[arg(long, short = 'y', default_value_t = false)]
    yes: bool,
  },
}

type Stdio = Terminal<std::io::StdinLock<'static>, std::io::Stdout>;

async fn submit(form: ProductForm, fields: FieldArgs, backend: &HttpBackend, terminal: &Stdio) -> anyhow::Result<()> {
  let interactive = !fields.is_complete();
  fields.apply(&form);
  if interactive && !terminal.fill_draft(&form)? {
    terminal.say("Cancelled.")?;
    return Ok(());
  }
  match session::run_form(&form, backend, terminal).await? {
    Some(redirect) => terminal.say(redirect.flash.as_deref().unwrap_or("Saved."))?,
    None => terminal.say("Nothing was saved.")?,
  }
  Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
    .with_writer(std::io::stderr)
    .init();

  let cli = Cli::parse();
  let config = CliConfig::from_env(cli.url)?;
  tracing::debug!(base_url = %config.base_url, "Using catalog server.");
  let backend = HttpBackend::new(config.base_url.clone());
  let terminal = Terminal::stdio();

  match cli.command {
    Command::List => {
      let products = backend
        .list_products()
        .await
        .with_context(|| format!("Could not load products from {}", config.base_url))?;
      print!("{}", render::listing(&ProductListing::new(products, None)));
    }
    Command::Show { id } => {
      let product = backend.find_product(ProductId(id)).await?;
      print!("{}", render::product_details(&product));
    }
    Command::Create { fields } => {
      submit(ProductForm::create(), fields, &backend, &terminal).await?;
    }
    Command::Edit { id, fields } => {
      let product = backend.find_product(ProductId(id)).await?;
      submit(ProductForm::edit(product), fields, &backend, &terminal).await?;
    }
    Command::Delete { id, yes } => {
      let listing = ProductListing::new(backend.list_products().await?, None);
      let id = ProductId(id);
      let outcome = if yes {
        listing.request_delete(id, &|_: &str| true, &backend).await
      } else {
        listing.request_delete(id, &terminal, &backend).await
      };
      match outcome {
        DeleteOutcome::Deleted(redirect) => terminal.say(redirect.flash.as_deref().unwrap_or("Deleted."))?,
        DeleteOutcome::Declined => terminal.say("Kept.")?,
        DeleteOutcome::Ignored => terminal.say("Another delete is in progress.")?,
        DeleteOutcome::Failed(errors) => {
          terminal.say(&render::errors(&errors))?;
          anyhow::bail!("Product #{} was not deleted", id);
        }
        DeleteOutcome::NotListed(id) => anyhow::bail!("Product #{} was not found", id),
      }
    }
  }
  Ok(())
}
