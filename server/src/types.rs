//! Wire types for the todo API.
//!
//! # Design
//! Field names are camelCase on the wire (`createdAt`, `updatedAt`) and
//! timestamps are RFC 3339 strings. Request payloads keep every field
//! optional so a missing `title` or `id` reaches the handler and is
//! reported as a validation failure instead of a decode failure.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single todo record as stored and returned by the server.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// `POST /todos` body.
#[derive(Debug, Default, Deserialize)]
pub struct CreateTodo {
    pub title: Option<String>,
    pub description: Option<String>,
}

/// `PATCH /todos` body. The target id travels in the body, not the path.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateTodo {
    pub id: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub completed: Option<bool>,
}

impl UpdateTodo {
    /// Split the request into the target id and the fields to merge.
    pub fn into_parts(self) -> (Option<String>, TodoPatch) {
        let patch = TodoPatch {
            title: self.title,
            description: self.description,
            completed: self.completed,
        };
        (self.id, patch)
    }
}

/// Partial update applied by [`crate::store::TodoStore::update`]. `None`
/// leaves the stored field untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub completed: Option<bool>,
}

/// Uniform response wrapper: `{success, data?, error?}`.
#[derive(Debug, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct Envelope<T> {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> Envelope<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Todo {
        let at = "2024-05-01T12:00:00Z".parse().unwrap();
        Todo {
            id: "todo-1".to_string(),
            title: "Test".to_string(),
            description: None,
            completed: false,
            created_at: at,
            updated_at: at,
        }
    }

    #[test]
    fn todo_serializes_with_camel_case_timestamps() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["id"], "todo-1");
        assert_eq!(json["title"], "Test");
        assert_eq!(json["completed"], false);
        assert_eq!(json["createdAt"], "2024-05-01T12:00:00Z");
        assert_eq!(json["updatedAt"], "2024-05-01T12:00:00Z");
        assert!(json.get("description").is_none());
    }

    #[test]
    fn create_todo_tolerates_missing_title() {
        let input: CreateTodo = serde_json::from_str(r#"{"description":"only"}"#).unwrap();
        assert!(input.title.is_none());
        assert_eq!(input.description.as_deref(), Some("only"));
    }

    #[test]
    fn create_todo_rejects_non_string_title() {
        let result: Result<CreateTodo, _> = serde_json::from_str(r#"{"title":42}"#);
        assert!(result.is_err());
    }

    #[test]
    fn update_todo_splits_into_id_and_patch() {
        let input: UpdateTodo =
            serde_json::from_str(r#"{"id":"todo-3","completed":true}"#).unwrap();
        let (id, patch) = input.into_parts();
        assert_eq!(id.as_deref(), Some("todo-3"));
        assert_eq!(
            patch,
            TodoPatch {
                completed: Some(true),
                ..TodoPatch::default()
            }
        );
    }

    #[test]
    fn failure_envelope_omits_data() {
        let json = serde_json::to_value(Envelope::<Todo>::failure("Todo not found")).unwrap();
        assert_eq!(json, serde_json::json!({"success": false, "error": "Todo not found"}));
    }
}
