//! Payload validation for create and update requests.
//!
//! # Design
//! Two layers reject a payload. Deserialization catches missing required
//! fields, wrong JSON types and priorities outside `1..=3`; the `validator`
//! derive on the payload types then checks the name length. Both surface as
//! `TodoError::Validation` carrying the wire names of the offending fields.
//!
//! The body is first read as a generic JSON value, so syntax and content-type
//! problems stay `BadRequest`. The typed decode then runs through
//! `serde_path_to_error`, which reports the failing field as a path.

use axum::extract::{FromRequest, Request};
use axum::Json;
use serde::de::DeserializeOwned;
use validator::{Validate, ValidationErrors};

use crate::error::{TodoError, TodoResult};

/// JSON body extractor that only yields payloads which passed validation.
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = TodoError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(raw) = Json::<serde_json::Value>::from_request(req, state)
            .await
            .map_err(|rejection| TodoError::BadRequest(rejection.body_text()))?;
        let value = decode(raw)?;
        check(&value)?;
        Ok(ValidatedJson(value))
    }
}

/// Decode a JSON value into `T`, naming the field that failed.
pub fn decode<T: DeserializeOwned>(raw: serde_json::Value) -> TodoResult<T> {
    serde_path_to_error::deserialize(raw).map_err(|err| {
        let path = err.path().to_string();
        let detail = err.inner().to_string();
        let field = if path.is_empty() || path == "." {
            missing_field(&detail)
        } else {
            Some(path.clone())
        };
        let message = match &field {
            Some(field) if !detail.starts_with("missing field") => format!("{field}: {detail}"),
            _ => detail,
        };
        TodoError::Validation {
            fields: field.into_iter().collect(),
            message,
        }
    })
}

/// Run the derived field rules of `input`.
pub fn check<T: Validate>(input: &T) -> TodoResult<()> {
    input.validate().map_err(from_validation_errors)
}

fn from_validation_errors(errors: ValidationErrors) -> TodoError {
    let mut fields: Vec<String> = errors
        .field_errors()
        .keys()
        .map(|field| wire_name(field).to_string())
        .collect();
    fields.sort();
    fields.dedup();

    let mut messages: Vec<String> = errors
        .field_errors()
        .values()
        .flat_map(|errs| errs.iter())
        .filter_map(|err| err.message.as_ref().map(|m| m.to_string()))
        .collect();
    messages.sort();

    let message = if messages.is_empty() {
        format!("invalid fields: {}", fields.join(", "))
    } else {
        messages.join("; ")
    };

    TodoError::Validation { fields, message }
}

/// Map a Rust field name of the payload types onto its JSON name.
fn wire_name(field: &str) -> &str {
    match field {
        "name" => "todo_name",
        "description" => "todo_description",
        other => other,
    }
}

/// The field named by serde's "missing field `x`" wording.
fn missing_field(detail: &str) -> Option<String> {
    let rest = detail.strip_prefix("missing field `")?;
    let (field, _) = rest.split_once('`')?;
    Some(field.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Priority, TodoCreate, TodoUpdate};

    #[test]
    fn valid_create_passes() {
        let input = TodoCreate {
            name: "Laundry".to_string(),
            description: String::new(),
            priority: Priority::Medium,
        };
        assert!(check(&input).is_ok());
    }

    #[test]
    fn short_name_reports_wire_field_name() {
        let input = TodoCreate {
            name: "no".to_string(),
            description: "too short".to_string(),
            priority: Priority::Low,
        };
        match check(&input) {
            Err(TodoError::Validation { fields, message }) => {
                assert_eq!(fields, vec!["todo_name".to_string()]);
                assert!(message.contains("between 3 and 512"));
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn empty_update_passes() {
        assert!(check(&TodoUpdate::default()).is_ok());
    }

    #[test]
    fn decode_names_missing_field() {
        let raw = serde_json::json!({ "todo_name": "Laundry" });
        match decode::<TodoCreate>(raw) {
            Err(TodoError::Validation { fields, message }) => {
                assert_eq!(fields, vec!["todo_description".to_string()]);
                assert_eq!(message, "missing field `todo_description`");
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn decode_names_wrongly_typed_field_not_its_value() {
        let raw = serde_json::json!({ "todo_name": 5, "todo_description": "x" });
        match decode::<TodoCreate>(raw) {
            Err(TodoError::Validation { fields, message }) => {
                assert_eq!(fields, vec!["todo_name".to_string()]);
                assert!(message.starts_with("todo_name: invalid type"), "{message}");
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn decode_names_out_of_range_priority() {
        for priority in [0, 4, 300] {
            let raw = serde_json::json!({ "priority": priority });
            match decode::<TodoUpdate>(raw) {
                Err(TodoError::Validation { fields, .. }) => {
                    assert_eq!(fields, vec!["priority".to_string()], "priority={priority}");
                }
                other => panic!("expected validation error, got {other:?}"),
            }
        }
    }

    #[test]
    fn missing_field_ignores_other_wording() {
        assert_eq!(missing_field("invalid type: integer `5`, expected a string"), None);
        assert_eq!(missing_field("missing field `priority`").as_deref(), Some("priority"));
    }
}
