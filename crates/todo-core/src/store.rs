//! The `ItemStore` trait.
//!
//! The trait is implemented by storage backends (e.g. `todo-store-sqlite`).
//! Higher layers (`todo-web`) depend on this abstraction, not on any
//! concrete backend.
//!
//! Not-found is part of the contract, not an error: point operations return
//! `Option`/`bool` so callers can map an absent id to a 404 without
//! inspecting the backend's error type. Backend errors mean the store
//! itself failed.

use std::future::Future;

use crate::item::{Item, ItemId, NewItem};

/// Abstraction over durable CRUD operations on items.
///
/// Every operation is a single synchronous read-modify-write against the
/// backend, executed under its native transactional guarantees. All methods
/// return `Send` futures so the trait can be used in multi-threaded async
/// runtimes (e.g. tokio with `axum`).
pub trait ItemStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// List all items in insertion order.
  fn list(
    &self,
  ) -> impl Future<Output = Result<Vec<Item>, Self::Error>> + Send + '_;

  /// Retrieve an item by id. Returns `None` if not found.
  fn get(
    &self,
    id: ItemId,
  ) -> impl Future<Output = Result<Option<Item>, Self::Error>> + Send + '_;

  /// Persist a new item. The id is assigned by the store.
  fn create(
    &self,
    input: NewItem,
  ) -> impl Future<Output = Result<Item, Self::Error>> + Send + '_;

  /// Overwrite an existing item's fields. Returns the updated item, or
  /// `None` (persisting nothing) if the id is absent.
  fn update(
    &self,
    id: ItemId,
    input: NewItem,
  ) -> impl Future<Output = Result<Option<Item>, Self::Error>> + Send + '_;

  /// Flip an item's `done` flag and persist it. Returns the updated item,
  /// or `None` if the id is absent.
  fn toggle(
    &self,
    id: ItemId,
  ) -> impl Future<Output = Result<Option<Item>, Self::Error>> + Send + '_;

  /// Remove an item. Returns `true` if a row was deleted, `false` if the id
  /// was absent — deleting an absent id is reported, never a silent success.
  fn delete(
    &self,
    id: ItemId,
  ) -> impl Future<Output = Result<bool, Self::Error>> + Send + '_;
}
