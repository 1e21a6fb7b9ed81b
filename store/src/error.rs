//! Error type for the todo store.
//!
//! # Design
//! `NotFound` is the only failure the store can produce: every fallible
//! operation is an id-based lookup. Validation of request payloads happens
//! at the HTTP boundary, so the store trusts its inputs.

use std::fmt;

/// Errors returned by `TodoStore` operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// No record with the given id exists in the store.
    NotFound { id: u64 },
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::NotFound { id } => write!(f, "todo {id} not found"),
        }
    }
}

impl std::error::Error for StoreError {}
