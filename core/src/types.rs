//! Domain DTOs for the todo API.
//!
//! # Design
//! These types mirror the server's wire schema but are defined independently,
//! so the client does not link axum. Integration tests catch any schema drift
//! between the two crates.

use serde::{Deserialize, Serialize};

/// Urgency of a todo, sent as `1` (high) to `3` (low).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
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
            other => Err(format!("unknown priority {other}")),
        }
    }
}

/// A single todo item returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Todo {
    pub todo_id: u64,
    pub todo_name: String,
    pub todo_description: String,
    pub priority: Priority,
}

/// Request payload for creating a new todo. A missing priority means low.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TodoCreate {
    pub todo_name: String,
    pub todo_description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
}

/// Request payload for updating an existing todo. Only the fields present in
/// the JSON are applied; omitted fields remain unchanged on the server.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TodoUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub todo_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub todo_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
}

/// One page of the todo list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    pub items: Vec<Todo>,
    pub total_items: u64,
    pub total_pages: u64,
    pub current_page: u64,
    pub page_size: u64,
}

/// Which page to ask for. `None` leaves the server default in place
/// (3 items, first page).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PageQuery {
    pub first_n: Option<i64>,
    pub page_no: Option<i64>,
}

impl PageQuery {
    pub fn new(first_n: i64, page_no: i64) -> Self {
        Self {
            first_n: Some(first_n),
            page_no: Some(page_no),
        }
    }

    /// Render as a query string including the leading `?`, or empty.
    pub fn to_query_string(&self) -> String {
        let params: Vec<String> = [("first_n", self.first_n), ("page_no", self.page_no)]
            .into_iter()
            .filter_map(|(key, value)| value.map(|v| format!("{key}={v}")))
            .collect();
        if params.is_empty() {
            String::new()
        } else {
            format!("?{}", params.join("&"))
        }
    }
}

/// Error body the server sends with every 4xx response.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorBody {
    pub error: String,
    pub code: String,
    #[serde(default)]
    pub fields: Vec<String>,
}
