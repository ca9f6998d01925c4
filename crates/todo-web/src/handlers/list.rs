//! `GET /` — the to-do list page.

use std::sync::Arc;

use axum::{extract::State, response::Html};
use todo_core::store::ItemStore;

use crate::{error::Error, views};

pub async fn handler<S>(
  State(store): State<Arc<S>>,
) -> Result<Html<String>, Error>
where
  S: ItemStore,
{
  let items = store
    .list()
    .await
    .map_err(|e| Error::Store(Box::new(e)))?;
  Ok(Html(views::todo_list(&items)))
}
