//! Wire and domain types for the todo service.
//!
//! # Design
//! Field names follow the public JSON contract (`todo_id`, `todo_name`, ...)
//! through serde renames, while the Rust side uses short names. `Priority` is
//! encoded as its integer value, with HIGH as the numerically smallest.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Store-assigned identifier of a todo.
pub type TodoId = u64;

/// Urgency of a todo. Serialized as `1`, `2` or `3`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Priority {
    High = 1,
    Medium = 2,
    #[default]
    Low = 3,
}

impl From<Priority> for u8 {
    fn from(priority: Priority) -> Self {
        priority as u8
    }
}

impl TryFrom<u8> for Priority {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Priority::High),
            2 => Ok(Priority::Medium),
            3 => Ok(Priority::Low),
            other => Err(format!("priority must be 1, 2 or 3, got {other}")),
        }
    }
}

/// A todo as stored and returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    #[serde(rename = "todo_id")]
    pub id: TodoId,
    #[serde(rename = "todo_name")]
    pub name: String,
    #[serde(rename = "todo_description")]
    pub description: String,
    pub priority: Priority,
}

impl Todo {
    fn sample(id: TodoId, name: &str, description: &str, priority: Priority) -> Self {
        Self {
            id,
            name: name.to_string(),
            description: description.to_string(),
            priority,
        }
    }

    /// The five todos the service ships with.
    pub fn samples() -> Vec<Todo> {
        vec![
            Todo::sample(1, "Sports", "Go to the gym", Priority::High),
            Todo::sample(2, "Read", "Read 10 pages", Priority::Medium),
            Todo::sample(3, "Shop", "Go shopping", Priority::Low),
            Todo::sample(4, "Study", "Study for exam", Priority::Medium),
            Todo::sample(5, "Meditate", "Meditate 20 minutes", Priority::Low),
        ]
    }
}

/// Payload of `POST /todos`.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct TodoCreate {
    #[serde(rename = "todo_name")]
    #[validate(length(min = 3, max = 512, message = "todo_name must be between 3 and 512 characters"))]
    pub name: String,
    #[serde(rename = "todo_description")]
    pub description: String,
    #[serde(default)]
    pub priority: Priority,
}

/// Payload of `PUT /todos/{id}`. Only the fields present are applied.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct TodoUpdate {
    #[serde(rename = "todo_name")]
    #[validate(length(min = 3, max = 512, message = "todo_name must be between 3 and 512 characters"))]
    pub name: Option<String>,
    #[serde(rename = "todo_description")]
    pub description: Option<String>,
    pub priority: Option<Priority>,
}

impl TodoUpdate {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.description.is_none() && self.priority.is_none()
    }
}

/// One page of todos plus the numbers needed to walk the rest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    pub items: Vec<Todo>,
    pub total_items: usize,
    pub total_pages: usize,
    pub current_page: usize,
    pub page_size: usize,
}
