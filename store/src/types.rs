//! Record and payload types for the todo store.
//!
//! # Design
//! `TodoRecord` is the fixed-shape record owned by the store; `TodoInput`
//! is the client-supplied payload shared by create and update. `title` is
//! required at the serde level, so a body without it never reaches the
//! store — that is the adapter's 422 path.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single todo item.
///
/// `id` and `created_at` are assigned by the store at creation and never
/// change afterwards. `created_at` serializes as an RFC 3339 string.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TodoRecord {
    pub id: u64,
    pub title: String,
    pub description: Option<String>,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
}

/// Request payload for creating or replacing a todo.
///
/// `description` and `completed` may be omitted from the JSON; they default
/// to `None` and `false`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TodoInput {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub completed: bool,
}
