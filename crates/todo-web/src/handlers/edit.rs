//! `GET|POST /edit/{item_id}` — the edit-item form and its submission.

use std::sync::Arc;

use axum::{
  Form,
  extract::{Path, State},
  response::{Html, IntoResponse, Redirect, Response},
};
use todo_core::{
  item::ItemId,
  store::ItemStore,
  validate::ItemInput,
};

use crate::{error::Error, views};

/// `GET /edit/{item_id}` — render the form prefilled with the item's
/// current values, or 404.
pub async fn form<S>(
  State(store): State<Arc<S>>,
  Path(item_id): Path<ItemId>,
) -> Result<Html<String>, Error>
where
  S: ItemStore,
{
  let item = store
    .get(item_id)
    .await
    .map_err(|e| Error::Store(Box::new(e)))?
    .ok_or(Error::NotFound)?;
  Ok(Html(views::edit_item(
    item.id,
    &ItemInput::from_item(&item),
    &Default::default(),
  )))
}

/// `POST /edit/{item_id}` — validate and overwrite, re-render with errors,
/// or 404 when the id is absent.
pub async fn submit<S>(
  State(store): State<Arc<S>>,
  Path(item_id): Path<ItemId>,
  Form(input): Form<ItemInput>,
) -> Result<Response, Error>
where
  S: ItemStore,
{
  // The id must resolve before the submission is considered at all.
  store
    .get(item_id)
    .await
    .map_err(|e| Error::Store(Box::new(e)))?
    .ok_or(Error::NotFound)?;

  match todo_core::validate(&input) {
    Ok(new_item) => {
      store
        .update(item_id, new_item)
        .await
        .map_err(|e| Error::Store(Box::new(e)))?
        .ok_or(Error::NotFound)?;
      tracing::info!(id = item_id, "updated item");
      Ok(Redirect::to("/").into_response())
    }
    Err(errors) => {
      Ok(Html(views::edit_item(item_id, &input, &errors)).into_response())
    }
  }
}
