//! [`SqliteStore`] — the SQLite implementation of [`ItemStore`].

use std::path::Path;

use rusqlite::OptionalExtension as _;
use todo_core::{
  item::{Item, ItemId, NewItem},
  store::ItemStore,
};

use crate::{Error, Result, schema::SCHEMA};

fn item_from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Item> {
  Ok(Item {
    id:   row.get(0)?,
    name: row.get(1)?,
    done: row.get(2)?,
  })
}

// ─── Store ───────────────────────────────────────────────────────────────────

/// An item store backed by a single SQLite file.
///
/// Cloning is cheap — the inner connection is reference-counted. Each
/// operation runs as one `conn.call` closure, so it executes atomically
/// under SQLite's own transactional guarantees.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store — useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }
}

// ─── ItemStore impl ──────────────────────────────────────────────────────────

impl ItemStore for SqliteStore {
  type Error = Error;

  async fn list(&self) -> Result<Vec<Item>> {
    let items = self
      .conn
      .call(|conn| {
        let mut stmt =
          conn.prepare("SELECT id, name, done FROM items ORDER BY id")?;
        let rows = stmt
          .query_map([], item_from_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;
    Ok(items)
  }

  async fn get(&self, id: ItemId) -> Result<Option<Item>> {
    let item = self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(
              "SELECT id, name, done FROM items WHERE id = ?1",
              rusqlite::params![id],
              item_from_row,
            )
            .optional()?,
        )
      })
      .await?;
    Ok(item)
  }

  async fn create(&self, input: NewItem) -> Result<Item> {
    let item = self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO items (name, done) VALUES (?1, ?2)",
          rusqlite::params![input.name, input.done],
        )?;
        let id = conn.last_insert_rowid();
        Ok(Item {
          id,
          name: input.name,
          done: input.done,
        })
      })
      .await?;
    Ok(item)
  }

  async fn update(&self, id: ItemId, input: NewItem) -> Result<Option<Item>> {
    let item = self
      .conn
      .call(move |conn| {
        let affected = conn.execute(
          "UPDATE items SET name = ?2, done = ?3 WHERE id = ?1",
          rusqlite::params![id, input.name, input.done],
        )?;
        if affected == 0 {
          return Ok(None);
        }
        Ok(Some(Item {
          id,
          name: input.name,
          done: input.done,
        }))
      })
      .await?;
    Ok(item)
  }

  async fn toggle(&self, id: ItemId) -> Result<Option<Item>> {
    let item = self
      .conn
      .call(move |conn| {
        let affected = conn.execute(
          "UPDATE items SET done = NOT done WHERE id = ?1",
          rusqlite::params![id],
        )?;
        if affected == 0 {
          return Ok(None);
        }
        Ok(
          conn
            .query_row(
              "SELECT id, name, done FROM items WHERE id = ?1",
              rusqlite::params![id],
              item_from_row,
            )
            .optional()?,
        )
      })
      .await?;
    Ok(item)
  }

  async fn delete(&self, id: ItemId) -> Result<bool> {
    let affected = self
      .conn
      .call(move |conn| {
        Ok(conn.execute(
          "DELETE FROM items WHERE id = ?1",
          rusqlite::params![id],
        )?)
      })
      .await?;
    Ok(affected > 0)
  }
}
