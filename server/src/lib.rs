//! In-memory todo service.
//!
//! # Overview
//! Serves a JSON CRUD API on `/todos` and a single browser page on `/`.
//! Every `/todos` response is wrapped in `{success, data?, error?}`.
//!
//! # Design
//! - `TodoStore` is an owned value; `app_with_store` injects it so tests
//!   start from a known state instead of process-wide globals.
//! - Handlers hold the store lock for the whole operation; there is no
//!   versioning, so concurrent writes to one record are last-write-wins.
//! - Request DTOs are independent of the `todo-core` client types;
//!   the client's integration tests catch schema drift.

pub mod config;
pub mod error;
pub mod logging;
mod routes;
pub mod store;
pub mod types;

use std::{future::Future, sync::Arc};

use axum::{routing::get, Router};
use tokio::{net::TcpListener, sync::RwLock};

pub use error::AppError;
pub use store::{StoreError, TodoStore};
pub use types::{CreateTodo, Envelope, Todo, TodoPatch, UpdateTodo};

pub type Db = Arc<RwLock<TodoStore>>;

/// Router over a fresh, empty store.
pub fn app() -> Router {
    app_with_store(TodoStore::new())
}

pub fn app_with_store(store: TodoStore) -> Router {
    let db: Db = Arc::new(RwLock::new(store));
    Router::new()
        .route("/", get(routes::index))
        .route(
            "/todos",
            get(routes::list_todos)
                .post(routes::create_todo)
                .patch(routes::update_todo)
                .delete(routes::delete_todo),
        )
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    run_until(listener, std::future::pending()).await
}

/// Serve until `shutdown` resolves, then drain in-flight requests.
pub async fn run_until<F>(listener: TcpListener, shutdown: F) -> Result<(), std::io::Error>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, app()).with_graceful_shutdown(shutdown).await
}
