//! HTTP handlers for `/` and `/todos`.

use axum::{
    body::Bytes,
    extract::{rejection::QueryRejection, Query, State},
    http::StatusCode,
    response::Html,
    Json,
};
use serde::de::DeserializeOwned;

use crate::error::AppError;
use crate::types::{CreateTodo, Envelope, Todo, UpdateTodo};
use crate::Db;

const INDEX_HTML: &str = include_str!("../static/index.html");

pub(crate) async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

pub(crate) async fn list_todos(State(db): State<Db>) -> Json<Envelope<Vec<Todo>>> {
    let store = db.read().await;
    tracing::debug!(count = store.len(), "listing todos");
    Json(Envelope::success(store.list().to_vec()))
}

pub(crate) async fn create_todo(
    State(db): State<Db>,
    body: Bytes,
) -> Result<(StatusCode, Json<Envelope<Todo>>), AppError> {
    let input: CreateTodo = decode(&body, "Failed to create todo")?;
    let todo = db.write().await.create(
        input.title.as_deref().unwrap_or_default(),
        input.description.as_deref(),
    )?;
    tracing::info!(id = %todo.id, "created todo");
    Ok((StatusCode::CREATED, Json(Envelope::success(todo))))
}

pub(crate) async fn update_todo(
    State(db): State<Db>,
    body: Bytes,
) -> Result<Json<Envelope<Todo>>, AppError> {
    let input: UpdateTodo = decode(&body, "Failed to update todo")?;
    let (id, patch) = input.into_parts();
    let id = required_id(id)?;
    let todo = db.write().await.update(&id, &patch)?;
    tracing::info!(%id, completed = todo.completed, "updated todo");
    Ok(Json(Envelope::success(todo)))
}

pub(crate) async fn delete_todo(
    State(db): State<Db>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<Json<Envelope<Todo>>, AppError> {
    let Query(pairs) = query.map_err(|err| AppError::unexpected("Failed to delete todo", err))?;
    let id = required_id(first_id(pairs))?;
    let todo = db.write().await.delete(&id)?;
    tracing::info!(%id, "deleted todo");
    Ok(Json(Envelope::success(todo)))
}

/// Bodies are parsed as JSON whatever the `Content-Type` says.
fn decode<T: DeserializeOwned>(body: &[u8], message: &'static str) -> Result<T, AppError> {
    serde_json::from_slice(body).map_err(|err| AppError::unexpected(message, err))
}

/// First `id` in the query string; later repeats are ignored.
fn first_id(pairs: Vec<(String, String)>) -> Option<String> {
    pairs
        .into_iter()
        .find_map(|(key, value)| (key == "id").then_some(value))
}

fn required_id(id: Option<String>) -> Result<String, AppError> {
    id.filter(|id| !id.is_empty()).ok_or_else(AppError::missing_id)
}
