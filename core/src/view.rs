//! Local list state for a todo UI.
//!
//! # Design
//! `TodoListView` owns the client-side copy of the list and reconciles it
//! from the results of `TodoClient::parse_*`. It never performs I/O: gesture
//! methods return the request payload to send, and `apply_*` methods take
//! the parsed outcome. A failed outcome is logged and leaves the view as it
//! was.
//!
//! The view differs from the server's natural order in one way: freshly
//! created records are prepended.

use std::collections::HashMap;

use crate::error::ApiError;
use crate::types::{CreateTodo, Todo, UpdateTodo};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewStatus {
    Loading,
    Loaded,
}

/// Unsaved edits for one record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditDraft {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone)]
pub struct TodoListView {
    status: ViewStatus,
    todos: Vec<Todo>,
    drafts: HashMap<String, EditDraft>,
}

impl Default for TodoListView {
    fn default() -> Self {
        Self::new()
    }
}

impl TodoListView {
    pub fn new() -> Self {
        Self {
            status: ViewStatus::Loading,
            todos: Vec::new(),
            drafts: HashMap::new(),
        }
    }

    pub fn status(&self) -> ViewStatus {
        self.status
    }

    pub fn todos(&self) -> &[Todo] {
        &self.todos
    }

    pub fn len(&self) -> usize {
        self.todos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.todos.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Todo> {
        self.todos.iter().find(|todo| todo.id == id)
    }

    /// Initial load. The view is `Loaded` afterwards even if the fetch failed.
    pub fn apply_list(&mut self, result: Result<Vec<Todo>, ApiError>) {
        match result {
            Ok(todos) => self.todos = todos,
            Err(err) => tracing::warn!(error = %err, "failed to fetch todos"),
        }
        self.status = ViewStatus::Loaded;
    }

    /// Payload for the create form, or `None` when the title is blank.
    pub fn create_request(&self, title: &str, description: &str) -> Option<CreateTodo> {
        let title = title.trim();
        if title.is_empty() {
            return None;
        }
        let description = description.trim();
        Some(CreateTodo {
            title: title.to_string(),
            description: (!description.is_empty()).then(|| description.to_string()),
        })
    }

    pub fn apply_created(&mut self, result: Result<Todo, ApiError>) {
        match result {
            Ok(todo) => self.todos.insert(0, todo),
            Err(err) => tracing::warn!(error = %err, "failed to create todo"),
        }
    }

    /// Flip `completed` for `id`. `None` if the record is not in the view.
    pub fn toggle_request(&self, id: &str) -> Option<UpdateTodo> {
        self.get(id)
            .map(|todo| UpdateTodo::new(&todo.id).completed(!todo.completed))
    }

    pub fn apply_updated(&mut self, result: Result<Todo, ApiError>) {
        match result {
            Ok(updated) => {
                self.drafts.remove(&updated.id);
                if let Some(slot) = self.todos.iter_mut().find(|todo| todo.id == updated.id) {
                    *slot = updated;
                }
            }
            Err(err) => tracing::warn!(error = %err, "failed to update todo"),
        }
    }

    pub fn apply_deleted(&mut self, id: &str, result: Result<Todo, ApiError>) {
        match result {
            Ok(_) => {
                self.todos.retain(|todo| todo.id != id);
                self.drafts.remove(id);
            }
            Err(err) => tracing::warn!(%id, error = %err, "failed to delete todo"),
        }
    }

    /// Switch `id` to editing, seeding the draft from the current record.
    /// Returns false if the record is not in the view.
    pub fn begin_edit(&mut self, id: &str) -> bool {
        let Some(todo) = self.get(id) else {
            return false;
        };
        let draft = EditDraft {
            title: todo.title.clone(),
            description: todo.description.clone().unwrap_or_default(),
        };
        self.drafts.insert(id.to_string(), draft);
        true
    }

    pub fn is_editing(&self, id: &str) -> bool {
        self.drafts.contains_key(id)
    }

    pub fn draft(&self, id: &str) -> Option<&EditDraft> {
        self.drafts.get(id)
    }

    pub fn edit_title(&mut self, id: &str, title: impl Into<String>) {
        if let Some(draft) = self.drafts.get_mut(id) {
            draft.title = title.into();
        }
    }

    pub fn edit_description(&mut self, id: &str, description: impl Into<String>) {
        if let Some(draft) = self.drafts.get_mut(id) {
            draft.description = description.into();
        }
    }

    /// Drop the draft; the record shows its stored values again.
    pub fn cancel_edit(&mut self, id: &str) {
        self.drafts.remove(id);
    }

    /// Payload for saving the draft. The draft stays open until the
    /// update result is applied.
    pub fn save_request(&self, id: &str) -> Option<UpdateTodo> {
        self.drafts.get(id).map(|draft| {
            UpdateTodo::new(id)
                .title(draft.title.trim())
                .description(draft.description.trim())
        })
    }
}
