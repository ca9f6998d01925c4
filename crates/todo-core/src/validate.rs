//! Form input validation.
//!
//! Validation is an explicit function over the raw submission rather than
//! anything model-introspecting: it takes the fields as they arrive on the
//! wire and returns either a [`NewItem`] or a field-keyed error report that
//! the caller renders back to the submitter. Pure — nothing is persisted
//! here.

use serde::Deserialize;
use thiserror::Error;

use crate::item::NewItem;

/// Maximum name length, in Unicode scalar values.
pub const NAME_MAX_LEN: usize = 50;

/// The fields an item form exposes, in render order.
pub const FORM_FIELDS: [&str; 2] = ["name", "done"];

// ─── Input ───────────────────────────────────────────────────────────────────

/// Raw form submission, before validation.
///
/// Both fields are optional because an HTML form omits an unticked checkbox
/// entirely, and a hand-crafted request may omit anything.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ItemInput {
  pub name: Option<String>,
  pub done: Option<String>,
}

impl ItemInput {
  /// Prefill an input from an existing item, for edit forms.
  pub fn from_item(item: &crate::item::Item) -> Self {
    Self {
      name: Some(item.name.clone()),
      done: item.done.then(|| "on".to_string()),
    }
  }
}

// ─── Errors ──────────────────────────────────────────────────────────────────

/// Field-keyed validation error report, e.g.
/// `{"name": "This field is required."}`.
///
/// Iteration order follows [`FORM_FIELDS`] since errors are recorded in
/// field order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Error)]
pub struct ValidationErrors {
  errors: Vec<(&'static str, String)>,
}

impl ValidationErrors {
  fn add(&mut self, field: &'static str, message: String) {
    self.errors.push((field, message));
  }

  /// The error message for `field`, if any.
  pub fn get(&self, field: &str) -> Option<&str> {
    self
      .errors
      .iter()
      .find(|(f, _)| *f == field)
      .map(|(_, m)| m.as_str())
  }

  pub fn is_empty(&self) -> bool {
    self.errors.is_empty()
  }

  pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
    self.errors.iter().map(|(f, m)| (*f, m.as_str()))
  }
}

impl std::fmt::Display for ValidationErrors {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "validation failed:")?;
    for (field, message) in &self.errors {
      write!(f, " {field}: {message}")?;
    }
    Ok(())
  }
}

// ─── Validation ──────────────────────────────────────────────────────────────

/// Validate a raw submission into a [`NewItem`].
///
/// - `name` is trimmed of surrounding whitespace, then must be non-empty and
///   at most [`NAME_MAX_LEN`] characters.
/// - `done` defaults to `false` when absent; checkbox-style truthy values
///   (`on`, `true`, `1`) parse as `true`.
pub fn validate(input: &ItemInput) -> Result<NewItem, ValidationErrors> {
  let mut errors = ValidationErrors::default();

  let name = input.name.as_deref().unwrap_or("").trim();
  if name.is_empty() {
    errors.add("name", "This field is required.".to_string());
  } else {
    let len = name.chars().count();
    if len > NAME_MAX_LEN {
      errors.add(
        "name",
        format!(
          "Ensure this value has at most {NAME_MAX_LEN} characters (it has {len})."
        ),
      );
    }
  }

  if !errors.is_empty() {
    return Err(errors);
  }

  Ok(NewItem {
    name: name.to_string(),
    done: parse_done(input.done.as_deref()),
  })
}

fn parse_done(raw: Option<&str>) -> bool {
  matches!(raw, Some("on" | "true" | "1"))
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use super::*;

  fn input(name: Option<&str>, done: Option<&str>) -> ItemInput {
    ItemInput {
      name: name.map(str::to_string),
      done: done.map(str::to_string),
    }
  }

  #[test]
  fn name_is_required() {
    let err = validate(&input(Some(""), None)).unwrap_err();
    assert_eq!(err.get("name"), Some("This field is required."));
  }

  #[test]
  fn missing_name_is_required() {
    let err = validate(&input(None, None)).unwrap_err();
    assert_eq!(err.get("name"), Some("This field is required."));
  }

  #[test]
  fn whitespace_only_name_is_required() {
    let err = validate(&input(Some("   "), None)).unwrap_err();
    assert_eq!(err.get("name"), Some("This field is required."));
  }

  #[test]
  fn done_is_not_required() {
    let new = validate(&input(Some("Test Todo Item"), None)).unwrap();
    assert_eq!(new.name, "Test Todo Item");
    assert!(!new.done);
  }

  #[test]
  fn checkbox_value_sets_done() {
    let new = validate(&input(Some("Test Todo Item"), Some("on"))).unwrap();
    assert!(new.done);
  }

  #[test]
  fn unrecognised_done_value_is_false() {
    let new = validate(&input(Some("Test Todo Item"), Some("off"))).unwrap();
    assert!(!new.done);
  }

  #[test]
  fn name_at_limit_is_accepted() {
    let name = "a".repeat(50);
    let new = validate(&input(Some(&name), None)).unwrap();
    assert_eq!(new.name.chars().count(), 50);
  }

  #[test]
  fn name_over_limit_is_rejected() {
    let name = "a".repeat(51);
    let err = validate(&input(Some(&name), None)).unwrap_err();
    assert_eq!(
      err.get("name"),
      Some("Ensure this value has at most 50 characters (it has 51).")
    );
  }

  #[test]
  fn length_counts_characters_not_bytes() {
    // 50 multi-byte characters must pass even though the byte length is 100.
    let name = "é".repeat(50);
    assert!(validate(&input(Some(&name), None)).is_ok());
  }

  #[test]
  fn name_is_trimmed() {
    let new = validate(&input(Some("  Test Todo Item  "), None)).unwrap();
    assert_eq!(new.name, "Test Todo Item");
  }

  #[test]
  fn form_fields_are_explicit_and_ordered() {
    assert_eq!(FORM_FIELDS, ["name", "done"]);
  }
}
