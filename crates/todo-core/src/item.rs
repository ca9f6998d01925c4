//! Item — the persisted to-do record.
//!
//! An item is an explicit struct rather than anything framework-derived;
//! the store assigns the id, everything else comes from validated input.

use serde::{Deserialize, Serialize};

/// Row identifier assigned by the storage backend.
pub type ItemId = i64;

/// A persisted to-do item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
  pub id:   ItemId,
  pub name: String,
  pub done: bool,
}

impl std::fmt::Display for Item {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.write_str(&self.name)
  }
}

/// Validated input for creating or overwriting an item.
///
/// Only produced by [`validate`](crate::validate::validate), so the name
/// invariants (non-empty, at most 50 characters) already hold.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewItem {
  pub name: String,
  pub done: bool,
}
