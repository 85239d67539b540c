//! In-memory, insertion-ordered todo store.
//!
//! # Design
//! `TodoStore` owns every `Todo`; callers get clones back. Ids come from a
//! monotonic counter rather than `max(ids) + 1`, so an id is never handed out
//! twice in a process lifetime, even after the highest todo is deleted or the
//! store is emptied. The store itself is not synchronized: the server wraps
//! it in one `RwLock` (see [`SharedStore`]) so "allocate id, then append" is
//! atomic with respect to concurrent requests.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::error::{TodoError, TodoResult};
use crate::model::{Priority, Todo, TodoId, TodoUpdate};

/// The store as shared between handlers.
pub type SharedStore = Arc<RwLock<TodoStore>>;

/// Fields of a todo that is about to be inserted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTodo {
    pub name: String,
    pub description: String,
    pub priority: Priority,
}

#[derive(Debug, Clone)]
pub struct TodoStore {
    todos: Vec<Todo>,
    next_id: TodoId,
}

impl Default for TodoStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TodoStore {
    /// An empty store whose first todo gets id 1.
    pub fn new() -> Self {
        Self {
            todos: Vec::new(),
            next_id: 1,
        }
    }

    /// A store preloaded with `todos`, kept in the given order.
    ///
    /// The counter resumes after the largest seeded id.
    pub fn with_todos(todos: Vec<Todo>) -> Self {
        let next_id = todos.iter().map(|t| t.id).max().map_or(1, |max| max + 1);
        Self { todos, next_id }
    }

    /// A store holding the five sample todos (ids 1 to 5).
    pub fn with_samples() -> Self {
        Self::with_todos(Todo::samples())
    }

    pub fn into_shared(self) -> SharedStore {
        Arc::new(RwLock::new(self))
    }

    pub fn list_all(&self) -> &[Todo] {
        &self.todos
    }

    pub fn count(&self) -> usize {
        self.todos.len()
    }

    pub fn get(&self, id: TodoId) -> TodoResult<Todo> {
        self.todos
            .iter()
            .find(|t| t.id == id)
            .cloned()
            .ok_or(TodoError::NotFound { id })
    }

    /// Assign the next id to `candidate`, append it, and return the stored todo.
    pub fn insert(&mut self, candidate: NewTodo) -> Todo {
        let todo = Todo {
            id: self.next_id,
            name: candidate.name,
            description: candidate.description,
            priority: candidate.priority,
        };
        self.next_id += 1;
        self.todos.push(todo.clone());
        todo
    }

    /// Overwrite only the fields present in `changes`.
    pub fn update(&mut self, id: TodoId, changes: TodoUpdate) -> TodoResult<Todo> {
        let todo = self
            .todos
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(TodoError::NotFound { id })?;
        if let Some(name) = changes.name {
            todo.name = name;
        }
        if let Some(description) = changes.description {
            todo.description = description;
        }
        if let Some(priority) = changes.priority {
            todo.priority = priority;
        }
        Ok(todo.clone())
    }

    /// Remove the todo and return it. Remaining ids are untouched.
    pub fn delete(&mut self, id: TodoId) -> TodoResult<Todo> {
        let index = self
            .todos
            .iter()
            .position(|t| t.id == id)
            .ok_or(TodoError::NotFound { id })?;
        Ok(self.todos.remove(index))
    }
}
