//! Core types and trait definitions for the todo item store.
//!
//! This crate is deliberately free of HTTP and database dependencies.
//! All other crates depend on it; it depends on nothing proprietary.

pub mod item;
pub mod store;
pub mod validate;

pub use item::{Item, ItemId, NewItem};
pub use validate::{ItemInput, ValidationErrors, validate};
