//! Domain DTOs for the todo store.
//!
//! These mirror the backend's JSON schema but are defined independently of
//! the mock-server crate; the integration tests catch schema drift.

use serde::{Deserialize, Serialize};

/// Server-assigned todo identifier. The client never generates one.
pub type TodoId = u64;

/// A single todo item as stored by the backend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Todo {
    pub id: TodoId,
    pub content: String,
    pub completed: bool,
}

impl Todo {
    /// Copy of this todo with `completed` flipped, ready to be sent as a
    /// full replacement.
    pub fn toggled(&self) -> Self {
        Self {
            completed: !self.completed,
            ..self.clone()
        }
    }
}

/// Create payload. Carries no id.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewTodo {
    pub content: String,
    #[serde(default)]
    pub completed: bool,
}

impl NewTodo {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            completed: false,
        }
    }
}
