// cli/src/terminal.rs

//! Line-oriented prompts over any reader/writer pair (stdin/stdout in practice).

use catalog::views::{DeleteConfirmation, DraftField, ProductForm};
use std::cell::RefCell;
use std::io::{self, BufRead, Stdout, StdinLock, Write};

/// What to do after the server rejected a submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NextStep {
  Edit,
  Reset,
  Quit,
}

/// Typed at a field prompt to empty the field.
pub const CLEAR_ANSWER: &str = "-";

pub fn parse_yes(answer: &str) -> bool {
  matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

pub struct Terminal<R, W> {
  input: RefCell<R>,
  output: RefCell<W>,
}

impl Terminal<StdinLock<'static>, Stdout> {
  pub fn stdio() -> Self {
    Self::new(io::stdin().lock(), io::stdout())
  }
}

impl<R: BufRead, W: Write> Terminal<R, W> {
  pub fn new(input: R, output: W) -> Self {
    Self {
      input: RefCell::new(input),
      output: RefCell::new(output),
    }
  }

  #[cfg(test)]
  pub fn into_output(self) -> W {
    self.output.into_inner()
  }

  pub fn say(&self, text: &str) -> io::Result<()> {
    let mut out = self.output.borrow_mut();
    out.write_all(text.as_bytes())?;
    if !text.ends_with('\n') {
      out.write_all(b"\n")?;
    }
    out.flush()
  }

  /// Shows `prompt` and reads one line. `None` at end of input.
  pub fn ask(&self, prompt: &str) -> io::Result<Option<String>> {
    {
      let mut out = self.output.borrow_mut();
      out.write_all(prompt.as_bytes())?;
      out.flush()?;
    }
    let mut line = String::new();
    if self.input.borrow_mut().read_line(&mut line)? == 0 {
      return Ok(None);
    }
    Ok(Some(line.trim_end_matches(&['\r', '\n'][..]).to_string()))
  }

  /// Walks through every field. An empty answer keeps the current value and
  /// [`CLEAR_ANSWER`] empties it.
  ///
  /// Returns `false` if input ran out before the last field.
  pub fn fill_draft(&self, form: &ProductForm) -> io::Result<bool> {
    self.say(&format!("Press Enter to keep a value, or type {} to clear it.", CLEAR_ANSWER))?;
    for field in DraftField::ALL {
      let current = form.draft().get(field).to_string();
      let Some(answer) = self.ask(&format!("{} [{}]: ", field.label(), current))? else {
        return Ok(false);
      };
      match answer.as_str() {
        "" => {}
        CLEAR_ANSWER => form.set_field(field, ""),
        _ => form.set_field(field, answer),
      }
    }
    self.say(&format!("Description: {}", form.draft().description_counter()))?;
    Ok(true)
  }

  pub fn choose_after_rejection(&self, can_reset: bool) -> io::Result<NextStep> {
    let prompt = if can_reset {
      "[e]dit fields, [r]eset to saved values, or [q]uit: "
    } else {
      "[e]dit fields or [q]uit: "
    };
    loop {
      let Some(answer) = self.ask(prompt)? else {
        return Ok(NextStep::Quit);
      };
      match answer.trim().to_ascii_lowercase().as_str() {
        "e" | "edit" => return Ok(NextStep::Edit),
        "r" | "reset" if can_reset => return Ok(NextStep::Reset),
        "" | "q" | "quit" => return Ok(NextStep::Quit),
        _ => self.say("Please answer e, r, or q.")?,
      }
    }
  }
}

impl<R: BufRead, W: Write> DeleteConfirmation for Terminal<R, W> {
  fn confirm(&self, prompt: &str) -> bool {
    match self.ask(&format!("{} [y/N] ", prompt)) {
      Ok(Some(answer)) => parse_yes(&answer),
      _ => false,
    }
  }
}
