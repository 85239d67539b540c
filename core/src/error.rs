//! Error types for the todo API client.
//!
//! # Design
//! Each client-error status the service documents gets a dedicated variant
//! carrying the server's message. Any other non-success status lands in
//! `HttpError` with the raw status code and body for debugging.

/// Errors returned by `TodoClient` parse methods.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The server returned 404: the todo or the requested page does not exist.
    #[error("not found: {message}")]
    NotFound { message: String },

    /// The server returned 400: bad pagination values or malformed JSON.
    #[error("bad request: {message}")]
    BadRequest { message: String },

    /// The server returned 422: the payload failed validation.
    #[error("validation failed on [{}]: {message}", fields.join(", "))]
    Validation { fields: Vec<String>, message: String },

    /// Any other unexpected status.
    #[error("HTTP {status}: {body}")]
    HttpError { status: u16, body: String },

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    DeserializationError(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    SerializationError(String),
}
