use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use crate::model::TodoId;

/// Client-facing errors produced by the todo handlers.
///
/// Every variant is a client-input error. Validation and lookups run before
/// any store mutation, so returning one of these never leaves a partial write.
#[derive(Debug, thiserror::Error)]
pub enum TodoError {
    /// A create/update payload failed field validation.
    #[error("Validation failed: {message}")]
    Validation { fields: Vec<String>, message: String },

    /// No todo with the given id exists.
    #[error("Todo with id {id} not found")]
    NotFound { id: TodoId },

    /// The path id is an integer no todo could ever carry, such as `-1`.
    #[error("Todo with id {0} not found")]
    UnknownId(String),

    /// `first_n` or `page_no` is missing its lower bound or not an integer.
    #[error("Invalid pagination values: {0}")]
    InvalidPagination(String),

    /// The requested page lies beyond the last page.
    #[error("Page {page} not found, there are {total_pages} pages")]
    PageNotFound { page: i64, total_pages: usize },

    /// The request body is not well-formed JSON.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

/// Convenience type alias for handler return values.
pub type TodoResult<T> = Result<T, TodoError>;

impl TodoError {
    pub fn status(&self) -> StatusCode {
        match self {
            TodoError::Validation { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            TodoError::NotFound { .. } | TodoError::UnknownId(_) | TodoError::PageNotFound { .. } => {
                StatusCode::NOT_FOUND
            }
            TodoError::InvalidPagination(_) | TodoError::BadRequest(_) => StatusCode::BAD_REQUEST,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            TodoError::Validation { .. } => "VALIDATION_ERROR",
            TodoError::NotFound { .. } | TodoError::UnknownId(_) => "NOT_FOUND",
            TodoError::InvalidPagination(_) => "INVALID_PAGINATION",
            TodoError::PageNotFound { .. } => "PAGE_NOT_FOUND",
            TodoError::BadRequest(_) => "BAD_REQUEST",
        }
    }
}

impl IntoResponse for TodoError {
    fn into_response(self) -> Response {
        let status = self.status();
        tracing::debug!(status = status.as_u16(), error = %self, "Rejecting request");

        let body = match &self {
            TodoError::Validation { fields, .. } => json!({
                "error": self.to_string(),
                "code": self.code(),
                "fields": fields,
            }),
            _ => json!({
                "error": self.to_string(),
                "code": self.code(),
            }),
        };

        (status, axum::Json(body)).into_response()
    }
}
