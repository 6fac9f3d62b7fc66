// cli/src/session.rs

use catalog::{CatalogBackend, ProductForm, Redirect, SubmitOutcome};
use std::io::{BufRead, Write};
use tracing::debug;

use crate::render;
use crate::terminal::{NextStep, Terminal};

/// Submits `form` until the server accepts it or the user gives up.
///
/// Each rejection prints the server's messages and lets the user edit the
/// fields (or reset an edit form) before the next attempt. Returns the
/// server's redirect, or `None` when the user quit.
pub async fn run_form<B, R, W>(form: &ProductForm, backend: &B, terminal: &Terminal<R, W>) -> anyhow::Result<Option<Redirect>>
where
  B: CatalogBackend + ?Sized,
  R: BufRead,
  W: Write,
{
  loop {
    match form.submit(backend).await {
      SubmitOutcome::Redirected(redirect) => return Ok(Some(redirect)),
      SubmitOutcome::Ignored => {
        debug!("Form already submitted.");
        return Ok(None);
      }
      SubmitOutcome::Rejected(errors) => {
        terminal.say(&render::errors(&errors))?;
        match terminal.choose_after_rejection(form.snapshot().can_reset())? {
          NextStep::Edit => {}
          NextStep::Reset => {
            form.reset();
          }
          NextStep::Quit => return Ok(None),
        }
        if !terminal.fill_draft(form)? {
          return Ok(None);
        }
      }
    }
  }
}
