//! Request handlers for `/todos`.
//!
//! Each handler validates its input before touching the store, then holds
//! the store lock for exactly one read or one mutation.

use axum::extract::rejection::{PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;

use crate::error::{TodoError, TodoResult};
use crate::model::{Page, Todo, TodoCreate, TodoId, TodoUpdate};
use crate::pagination::{paginate, PageRequest};
use crate::store::{NewTodo, SharedStore};
use crate::validation::ValidatedJson;

/// GET /todos?first_n=&page_no=
pub async fn list_todos(
    State(store): State<SharedStore>,
    query: Result<Query<PageRequest>, QueryRejection>,
) -> TodoResult<Json<Page>> {
    let Query(request) = query.map_err(|rejection| TodoError::InvalidPagination(rejection.body_text()))?;
    let store = store.read().await;
    let page = paginate(store.list_all(), request)?;
    tracing::debug!(
        page = page.current_page,
        page_size = page.page_size,
        total_items = page.total_items,
        "Listed todos"
    );
    Ok(Json(page))
}

/// Read the `{id}` segment.
///
/// Anything integer-shaped is a lookup: ids that cannot exist (negative or
/// past `u64::MAX`) are simply not found. Other text is a bad request.
fn todo_id(path: Result<Path<String>, PathRejection>) -> TodoResult<TodoId> {
    let Path(raw) = path.map_err(|rejection| TodoError::BadRequest(rejection.body_text()))?;
    if let Ok(id) = raw.parse::<TodoId>() {
        return Ok(id);
    }
    let digits = raw.strip_prefix('-').unwrap_or(&raw);
    if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(TodoError::UnknownId(raw));
    }
    Err(TodoError::BadRequest(format!("todo id must be an integer, got `{raw}`")))
}

/// GET /todos/{id}
pub async fn get_todo(
    State(store): State<SharedStore>,
    path: Result<Path<String>, PathRejection>,
) -> TodoResult<Json<Todo>> {
    let id = todo_id(path)?;
    let todo = store.read().await.get(id)?;
    Ok(Json(todo))
}

/// POST /todos
pub async fn create_todo(
    State(store): State<SharedStore>,
    ValidatedJson(input): ValidatedJson<TodoCreate>,
) -> TodoResult<(StatusCode, Json<Todo>)> {
    let todo = store.write().await.insert(NewTodo {
        name: input.name,
        description: input.description,
        priority: input.priority,
    });
    tracing::info!(todo_id = todo.id, "Todo created");
    Ok((StatusCode::CREATED, Json(todo)))
}

/// PUT /todos/{id}
///
/// Fields absent from the body keep their current values.
pub async fn update_todo(
    State(store): State<SharedStore>,
    path: Result<Path<String>, PathRejection>,
    ValidatedJson(input): ValidatedJson<TodoUpdate>,
) -> TodoResult<Json<Todo>> {
    let id = todo_id(path)?;
    let todo = store.write().await.update(id, input)?;
    tracing::info!(todo_id = id, "Todo updated");
    Ok(Json(todo))
}

/// DELETE /todos/{id}
pub async fn delete_todo(
    State(store): State<SharedStore>,
    path: Result<Path<String>, PathRejection>,
) -> TodoResult<Json<Todo>> {
    let id = todo_id(path)?;
    let todo = store.write().await.delete(id)?;
    tracing::info!(todo_id = id, "Todo deleted");
    Ok(Json(todo))
}

/// Health check response payload.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    /// Crate version from Cargo.toml.
    pub version: &'static str,
}

/// GET /health
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}
