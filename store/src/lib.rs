//! In-memory store core for the todo service.
//!
//! # Overview
//! Owns the collection of todo records and their identity: sequential ids,
//! creation timestamps, and insertion order. No HTTP, no serialization
//! framework beyond serde derives, no I/O — the server crate maps endpoints
//! onto these operations.
//!
//! # Design
//! - `TodoStore` is a plain owned value; the host decides where it lives
//!   and how access is serialized.
//! - Each operation is a single atomic transition of the store's contents.
//! - `NotFound` is the store's only error; payload shape validation is the
//!   adapter's job.

pub mod error;
pub mod store;
pub mod types;

pub use error::StoreError;
pub use store::TodoStore;
pub use types::{TodoInput, TodoRecord};
