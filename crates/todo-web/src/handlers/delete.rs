//! `GET /delete/{item_id}` — remove an item.
//!
//! Deletion is immediate and irreversible; an absent id is a 404, never a
//! silent success.

use std::sync::Arc;

use axum::{
  extract::{Path, State},
  response::Redirect,
};
use todo_core::{item::ItemId, store::ItemStore};

use crate::error::Error;

pub async fn handler<S>(
  State(store): State<Arc<S>>,
  Path(item_id): Path<ItemId>,
) -> Result<Redirect, Error>
where
  S: ItemStore,
{
  let deleted = store
    .delete(item_id)
    .await
    .map_err(|e| Error::Store(Box::new(e)))?;
  if !deleted {
    return Err(Error::NotFound);
  }
  tracing::info!(id = item_id, "deleted item");
  Ok(Redirect::to("/"))
}
