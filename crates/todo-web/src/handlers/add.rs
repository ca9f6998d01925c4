//! `GET|POST /add` — the add-item form and its submission.

use std::sync::Arc;

use axum::{
  Form,
  extract::State,
  response::{Html, IntoResponse, Redirect, Response},
};
use todo_core::{store::ItemStore, validate::ItemInput};

use crate::{error::Error, views};

/// `GET /add` — render an empty form.
pub async fn form() -> Html<String> {
  Html(views::add_item(
    &ItemInput::default(),
    &Default::default(),
  ))
}

/// `POST /add` — validate and create, or re-render the form with errors.
pub async fn submit<S>(
  State(store): State<Arc<S>>,
  Form(input): Form<ItemInput>,
) -> Result<Response, Error>
where
  S: ItemStore,
{
  match todo_core::validate(&input) {
    Ok(new_item) => {
      let item = store
        .create(new_item)
        .await
        .map_err(|e| Error::Store(Box::new(e)))?;
      tracing::info!(id = item.id, "created item");
      Ok(Redirect::to("/").into_response())
    }
    Err(errors) => Ok(Html(views::add_item(&input, &errors)).into_response()),
  }
}
