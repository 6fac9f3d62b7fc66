// catalog/src/model/user.rs

use serde::{Deserialize, Serialize};

/// The signed-in account shown at the top of the user menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
  pub name: String,
  pub email: String,
}

impl User {
  pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
    Self {
      name: name.into(),
      email: email.into(),
    }
  }

  /// First letter of the first and last word, uppercased ("Ada Lovelace" → "AL").
  pub fn initials(&self) -> String {
    let words: Vec<&str> = self.name.split_whitespace().collect();
    match words.as_slice() {
      [] => String::new(),
      [only] => first_letter(only),
      [first, .., last] => first_letter(first) + &first_letter(last),
    }
  }
}

fn first_letter(word: &str) -> String {
  word.chars().next().map(|c| c.to_uppercase().collect()).unwrap_or_default()
}
