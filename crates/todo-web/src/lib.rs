//! HTTP layer for the todo service.
//!
//! Exposes an axum [`Router`] of server-rendered CRUD pages backed by any
//! [`ItemStore`]. Each request is independent; the store is the only shared
//! resource.

pub mod error;
pub mod handlers;
pub mod views;

pub use error::Error;

use std::{path::PathBuf, sync::Arc};

use axum::{Router, routing::get};
use serde::Deserialize;
use todo_core::store::ItemStore;
use tower_http::trace::TraceLayer;

use handlers::{add, delete, edit, list, toggle};

// ─── Configuration ────────────────────────────────────────────────────────────

/// Runtime server configuration, deserialised from `config.toml` and
/// `TODO_`-prefixed environment variables.
#[derive(Deserialize, Clone)]
pub struct ServerConfig {
  pub host:       String,
  pub port:       u16,
  pub store_path: PathBuf,
}

// ─── Router ───────────────────────────────────────────────────────────────────

/// Build the full route table for `store`.
///
/// | Route | Method(s) | Behavior |
/// |-------|-----------|----------|
/// | `/` | GET | render the list |
/// | `/add` | GET, POST | add-item form / submit |
/// | `/edit/{item_id}` | GET, POST | edit-item form / submit |
/// | `/toggle/{item_id}` | GET | flip done, redirect |
/// | `/delete/{item_id}` | GET | remove item, redirect |
///
/// Toggle and delete are deliberately plain fetches: this is a single-user
/// service with no session, so there is no CSRF token to couple a
/// state-changing verb to.
pub fn router<S>(store: Arc<S>) -> Router<()>
where
  S: ItemStore + 'static,
{
  Router::new()
    .route("/", get(list::handler::<S>))
    .route("/add", get(add::form).post(add::submit::<S>))
    .route(
      "/edit/{item_id}",
      get(edit::form::<S>).post(edit::submit::<S>),
    )
    .route("/toggle/{item_id}", get(toggle::handler::<S>))
    .route("/delete/{item_id}", get(delete::handler::<S>))
    .layer(TraceLayer::new_for_http())
    .with_state(store)
}

// ─── Integration tests ────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use super::*;

  use axum::{
    body::Body,
    http::{Request, StatusCode, header},
  };
  use todo_core::{item::NewItem, store::ItemStore as _};
  use todo_store_sqlite::SqliteStore;
  use tower::ServiceExt as _;

  async fn app() -> (Router, Arc<SqliteStore>) {
    let store = Arc::new(SqliteStore::open_in_memory().await.unwrap());
    (router(store.clone()), store)
  }

  async fn get(app: &Router, uri: &str) -> axum::response::Response {
    let req = Request::builder()
      .method("GET")
      .uri(uri)
      .body(Body::empty())
      .unwrap();
    app.clone().oneshot(req).await.unwrap()
  }

  async fn post_form(
    app:  &Router,
    uri:  &str,
    body: &str,
  ) -> axum::response::Response {
    let req = Request::builder()
      .method("POST")
      .uri(uri)
      .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
      .body(Body::from(body.to_string()))
      .unwrap();
    app.clone().oneshot(req).await.unwrap()
  }

  async fn body_string(resp: axum::response::Response) -> String {
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
      .await
      .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
  }

  fn assert_redirects_home(resp: &axum::response::Response) {
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(resp.headers().get(header::LOCATION).unwrap(), "/");
  }

  async fn seed(store: &SqliteStore, name: &str, done: bool) -> i64 {
    store
      .create(NewItem {
        name: name.to_string(),
        done,
      })
      .await
      .unwrap()
      .id
  }

  // ── List ────────────────────────────────────────────────────────────────────

  #[tokio::test]
  async fn todo_list_returns_200() {
    let (app, _) = app().await;
    let resp = get(&app, "/").await;
    assert_eq!(resp.status(), StatusCode::OK);
  }

  #[tokio::test]
  async fn todo_list_shows_every_item() {
    let (app, store) = app().await;
    seed(&store, "buy milk", false).await;
    seed(&store, "walk the dog", true).await;

    let resp = get(&app, "/").await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_string(resp).await;
    assert!(body.contains("buy milk"), "body: {body}");
    assert!(body.contains("walk the dog"), "body: {body}");
  }

  // ── Add ─────────────────────────────────────────────────────────────────────

  #[tokio::test]
  async fn get_add_page_returns_form() {
    let (app, _) = app().await;
    let resp = get(&app, "/add").await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_string(resp).await;
    let name_pos = body.find("name=\"name\"").expect("name field");
    let done_pos = body.find("name=\"done\"").expect("done field");
    assert!(name_pos < done_pos);
  }

  #[tokio::test]
  async fn can_add_item() {
    let (app, store) = app().await;
    let resp = post_form(&app, "/add", "name=Test+Added+Item").await;
    assert_redirects_home(&resp);

    let items = store.list().await.unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].name, "Test Added Item");
    assert!(!items[0].done);
  }

  #[tokio::test]
  async fn add_with_empty_name_rerenders_with_error() {
    let (app, store) = app().await;
    let resp = post_form(&app, "/add", "name=").await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_string(resp).await;
    assert!(body.contains("This field is required."), "body: {body}");
    assert!(store.list().await.unwrap().is_empty());
  }

  #[tokio::test]
  async fn add_keeps_submitted_values_on_error() {
    let (app, _) = app().await;
    let long = "a".repeat(51);
    let resp = post_form(&app, "/add", &format!("name={long}")).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_string(resp).await;
    assert!(body.contains(&long), "submitted name not re-rendered");
    assert!(body.contains("at most 50 characters"), "body: {body}");
  }

  // ── Edit ────────────────────────────────────────────────────────────────────

  #[tokio::test]
  async fn get_edit_page_is_prefilled() {
    let (app, store) = app().await;
    let id = seed(&store, "Test Todo Item", false).await;

    let resp = get(&app, &format!("/edit/{id}")).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_string(resp).await;
    assert!(body.contains("value=\"Test Todo Item\""), "body: {body}");
  }

  #[tokio::test]
  async fn get_edit_missing_returns_404() {
    let (app, _) = app().await;
    let resp = get(&app, "/edit/99").await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
  }

  #[tokio::test]
  async fn can_edit_item() {
    let (app, store) = app().await;
    let id = seed(&store, "Test Todo Item", false).await;

    let resp =
      post_form(&app, &format!("/edit/{id}"), "name=Updated+Name").await;
    assert_redirects_home(&resp);

    let updated = store.get(id).await.unwrap().unwrap();
    assert_eq!(updated.name, "Updated Name");
  }

  #[tokio::test]
  async fn edit_missing_returns_404() {
    let (app, _) = app().await;
    let resp = post_form(&app, "/edit/99", "name=Updated+Name").await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
  }

  #[tokio::test]
  async fn edit_with_empty_name_rerenders_with_error() {
    let (app, store) = app().await;
    let id = seed(&store, "Test Todo Item", false).await;

    let resp = post_form(&app, &format!("/edit/{id}"), "name=").await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_string(resp).await;
    assert!(body.contains("This field is required."), "body: {body}");

    // Nothing persisted.
    let item = store.get(id).await.unwrap().unwrap();
    assert_eq!(item.name, "Test Todo Item");
  }

  // ── Toggle ──────────────────────────────────────────────────────────────────

  #[tokio::test]
  async fn can_toggle_item() {
    let (app, store) = app().await;
    let id = seed(&store, "Test Todo Item", true).await;

    let resp = get(&app, &format!("/toggle/{id}")).await;
    assert_redirects_home(&resp);

    let updated = store.get(id).await.unwrap().unwrap();
    assert!(!updated.done);
  }

  #[tokio::test]
  async fn toggling_twice_restores_done() {
    let (app, store) = app().await;
    let id = seed(&store, "Test Todo Item", false).await;

    get(&app, &format!("/toggle/{id}")).await;
    get(&app, &format!("/toggle/{id}")).await;

    let item = store.get(id).await.unwrap().unwrap();
    assert!(!item.done);
  }

  #[tokio::test]
  async fn toggle_missing_returns_404() {
    let (app, _) = app().await;
    let resp = get(&app, "/toggle/99").await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
  }

  // ── Delete ──────────────────────────────────────────────────────────────────

  #[tokio::test]
  async fn can_delete_item() {
    let (app, store) = app().await;
    let id = seed(&store, "Test Todo Item", false).await;

    let resp = get(&app, &format!("/delete/{id}")).await;
    assert_redirects_home(&resp);

    assert_eq!(store.get(id).await.unwrap(), None);
    assert!(store.list().await.unwrap().is_empty());
  }

  #[tokio::test]
  async fn delete_missing_returns_404() {
    let (app, _) = app().await;
    let resp = get(&app, "/delete/99").await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
  }
}
