// catalog/src/validation.rs

//! The field-keyed error set a backend returns when it rejects a submission.

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Mapping from field name to one human-readable message.
///
/// Entries keep the order the backend reported them in, so a view lists
/// them in form order (name, price, description) rather than alphabetically.
/// Serializes as a plain JSON object.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
  entries: Vec<(String, String)>,
}

impl FieldErrors {
  /// Key used for failures that do not belong to a single field.
  pub const FORM_KEY: &'static str = "form";

  pub fn new() -> Self {
    Self::default()
  }

  pub fn single(field: impl Into<String>, message: impl Into<String>) -> Self {
    let mut errors = Self::new();
    errors.insert(field, message);
    errors
  }

  /// Sets the message for `field`, replacing an earlier one in place.
  pub fn insert(&mut self, field: impl Into<String>, message: impl Into<String>) {
    let field = field.into();
    let message = message.into();
    match self.entries.iter_mut().find(|(name, _)| *name == field) {
      Some(entry) => entry.1 = message,
      None => self.entries.push((field, message)),
    }
  }

  pub fn get(&self, field: &str) -> Option<&str> {
    self
      .entries
      .iter()
      .find(|(name, _)| name == field)
      .map(|(_, message)| message.as_str())
  }

  pub fn contains(&self, field: &str) -> bool {
    self.get(field).is_some()
  }

  pub fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }

  pub fn len(&self) -> usize {
    self.entries.len()
  }

  pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
    self.entries.iter().map(|(f, m)| (f.as_str(), m.as_str()))
  }

  pub fn messages(&self) -> impl Iterator<Item = &str> {
    self.entries.iter().map(|(_, m)| m.as_str())
  }

  pub fn clear(&mut self) {
    self.entries.clear();
  }
}

impl FromIterator<(String, String)> for FieldErrors {
  fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
    let mut errors = FieldErrors::new();
    for (field, message) in iter {
      errors.insert(field, message);
    }
    errors
  }
}

impl Serialize for FieldErrors {
  fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    let mut map = serializer.serialize_map(Some(self.entries.len()))?;
    for (field, message) in &self.entries {
      map.serialize_entry(field, message)?;
    }
    map.end()
  }
}

struct FieldErrorsVisitor;

impl<'de> Visitor<'de> for FieldErrorsVisitor {
  type Value = FieldErrors;

  fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
    f.write_str("a map of field names to messages")
  }

  fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
    let mut errors = FieldErrors::new();
    while let Some((field, message)) = access.next_entry::<String, FieldMessage>()? {
      errors.insert(field, message.0);
    }
    Ok(errors)
  }
}

impl<'de> Deserialize<'de> for FieldErrors {
  fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
    deserializer.deserialize_map(FieldErrorsVisitor)
  }
}

// Some backends report a list of messages per field; the first one wins.
struct FieldMessage(String);

impl<'de> Deserialize<'de> for FieldMessage {
  fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
      One(String),
      Many(Vec<String>),
    }

    match Raw::deserialize(deserializer)? {
      Raw::One(message) => Ok(FieldMessage(message)),
      Raw::Many(messages) => Ok(FieldMessage(messages.into_iter().next().unwrap_or_default())),
    }
  }
}
