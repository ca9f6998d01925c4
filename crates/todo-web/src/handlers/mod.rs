//! Per-route handlers, one module per operation.
//!
//! Each handler is generic over the store backend and translates one HTTP
//! request into store operations and a response: a rendered view, a
//! redirect back to the list, or a 404.

pub mod add;
pub mod delete;
pub mod edit;
pub mod list;
pub mod toggle;
