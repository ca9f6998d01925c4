//! `GET /toggle/{item_id}` — flip an item's done flag.

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
  let item = store
    .toggle(item_id)
    .await
    .map_err(|e| Error::Store(Box::new(e)))?
    .ok_or(Error::NotFound)?;
  tracing::info!(id = item.id, done = item.done, "toggled item");
  Ok(Redirect::to("/"))
}
