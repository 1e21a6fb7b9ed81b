//! HTTP adapter for the todo store.
//!
//! # Design
//! Maps five endpoints onto `TodoStore` operations and nothing more. The
//! store itself is not safe for concurrent mutation, so it sits behind a
//! `tokio::sync::RwLock`; the lock serializes every operation against it.
//! The store lives for the lifetime of the process and is dropped without
//! a persistence step at shutdown.
//!
//! Error bodies carry a `detail` message, e.g.
//! `{"detail": "To-do item not found"}` for 404.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};
use todo_store::{StoreError, TodoInput, TodoRecord, TodoStore};
use tracing::info;

pub type Db = Arc<RwLock<TodoStore>>;

/// Errors surfaced to the client by the adapter.
#[derive(Debug)]
pub enum ApiError {
    /// The requested todo does not exist — 404.
    NotFound,

    /// The request body failed validation beyond its JSON shape — 422.
    Validation(&'static str),
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound { .. } => ApiError::NotFound,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, detail) = match self {
            ApiError::NotFound => (StatusCode::NOT_FOUND, "To-do item not found"),
            ApiError::Validation(detail) => (StatusCode::UNPROCESSABLE_ENTITY, detail),
        };
        (status, Json(serde_json::json!({ "detail": detail }))).into_response()
    }
}

/// Response body for a successful delete.
#[derive(Debug, Serialize, Deserialize)]
pub struct Deleted {
    pub message: String,
    pub deleted_item: TodoRecord,
}

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(TodoStore::new()));
    Router::new()
        .route("/todos", get(list_todos).post(create_todo))
        .route(
            "/todos/{id}",
            get(get_todo).put(update_todo).delete(delete_todo),
        )
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

/// The JSON shape guarantees `title` is a string; the adapter additionally
/// requires it to be non-empty.
fn validate(input: &TodoInput) -> Result<(), ApiError> {
    if input.title.is_empty() {
        return Err(ApiError::Validation("title must not be empty"));
    }
    Ok(())
}

async fn list_todos(State(db): State<Db>) -> Json<Vec<TodoRecord>> {
    let store = db.read().await;
    Json(store.list().to_vec())
}

async fn get_todo(
    State(db): State<Db>,
    Path(id): Path<u64>,
) -> Result<Json<TodoRecord>, ApiError> {
    let store = db.read().await;
    Ok(Json(store.get(id)?.clone()))
}

async fn create_todo(
    State(db): State<Db>,
    Json(input): Json<TodoInput>,
) -> Result<Json<TodoRecord>, ApiError> {
    validate(&input)?;
    let mut store = db.write().await;
    let record = store.create(input);
    info!(id = record.id, "created todo");
    Ok(Json(record))
}

async fn update_todo(
    State(db): State<Db>,
    Path(id): Path<u64>,
    Json(input): Json<TodoInput>,
) -> Result<Json<TodoRecord>, ApiError> {
    validate(&input)?;
    let mut store = db.write().await;
    let record = store.update(id, input)?.clone();
    info!(id, "updated todo");
    Ok(Json(record))
}

async fn delete_todo(
    State(db): State<Db>,
    Path(id): Path<u64>,
) -> Result<Json<Deleted>, ApiError> {
    let mut store = db.write().await;
    let deleted_item = store.delete(id)?;
    info!(id, "deleted todo");
    Ok(Json(Deleted {
        message: "To-do item deleted successfully".to_string(),
        deleted_item,
    }))
}
