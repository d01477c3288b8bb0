//! In-memory todo store.
//!
//! # Design
//! `TodoStore` is a plain owned value: an insertion-ordered `Vec` plus a
//! monotonic counter for ids. It knows nothing about HTTP or locking; the
//! router wraps it in `Arc<RwLock<_>>` and each handler holds the lock for
//! one whole operation. Concurrent updates of the same record are
//! last-write-wins.
//!
//! # Invariants
//! - Ids are `todo-<n>` with `n` strictly increasing; a deleted id is never
//!   handed out again.
//! - A stored title is never empty after trimming.
//! - `updated_at >= created_at` for every record.

use chrono::Utc;
use thiserror::Error;

use crate::types::{Todo, TodoPatch};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("Title is required")]
    EmptyTitle,

    #[error("Todo not found")]
    NotFound { id: String },
}

#[derive(Debug)]
pub struct TodoStore {
    todos: Vec<Todo>,
    next_id: u64,
}

impl Default for TodoStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TodoStore {
    pub fn new() -> Self {
        Self {
            todos: Vec::new(),
            next_id: 1,
        }
    }

    /// All records in insertion order.
    pub fn list(&self) -> &[Todo] {
        &self.todos
    }

    pub fn get(&self, id: &str) -> Result<&Todo, StoreError> {
        self.todos
            .iter()
            .find(|todo| todo.id == id)
            .ok_or_else(|| not_found(id))
    }

    pub fn len(&self) -> usize {
        self.todos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.todos.is_empty()
    }

    /// Append a new, incomplete record. Both timestamps are the same instant.
    pub fn create(&mut self, title: &str, description: Option<&str>) -> Result<Todo, StoreError> {
        let title = required_title(title)?;
        let now = Utc::now();
        let todo = Todo {
            id: self.allocate_id(),
            title,
            description: normalize_description(description),
            completed: false,
            created_at: now,
            updated_at: now,
        };
        self.todos.push(todo.clone());
        Ok(todo)
    }

    /// Merge the fields present in `patch` into the record with `id`.
    ///
    /// A title that trims to empty is rejected and the record is left as it
    /// was. A description that trims to empty clears the stored one.
    pub fn update(&mut self, id: &str, patch: &TodoPatch) -> Result<Todo, StoreError> {
        let todo = self
            .todos
            .iter_mut()
            .find(|todo| todo.id == id)
            .ok_or_else(|| not_found(id))?;

        let title = patch.title.as_deref().map(required_title).transpose()?;
        if let Some(title) = title {
            todo.title = title;
        }
        if let Some(description) = patch.description.as_deref() {
            todo.description = normalize_description(Some(description));
        }
        if let Some(completed) = patch.completed {
            todo.completed = completed;
        }
        // Clamp in case the wall clock stepped backwards since creation.
        todo.updated_at = Utc::now().max(todo.created_at);

        Ok(todo.clone())
    }

    /// Remove the record with `id` and hand it back.
    pub fn delete(&mut self, id: &str) -> Result<Todo, StoreError> {
        let index = self
            .todos
            .iter()
            .position(|todo| todo.id == id)
            .ok_or_else(|| not_found(id))?;
        Ok(self.todos.remove(index))
    }

    fn allocate_id(&mut self) -> String {
        let id = format!("todo-{}", self.next_id);
        self.next_id += 1;
        id
    }
}

fn not_found(id: &str) -> StoreError {
    StoreError::NotFound { id: id.to_string() }
}

/// Trims whitespace and U+FEFF from both ends.
fn trim_text(text: &str) -> &str {
    text.trim_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}')
}

fn required_title(title: &str) -> Result<String, StoreError> {
    let title = trim_text(title);
    if title.is_empty() {
        return Err(StoreError::EmptyTitle);
    }
    Ok(title.to_string())
}

fn normalize_description(description: Option<&str>) -> Option<String> {
    description
        .map(trim_text)
        .filter(|d| !d.is_empty())
        .map(str::to_string)
}
