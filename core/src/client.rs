//! Stateless HTTP request builder and response parser for the todo API.
//!
//! # Design
//! `TodoClient` holds only a `base_url` and carries no mutable state between
//! calls. Each operation is split into a `build_*` method that produces an
//! `HttpRequest` and a `parse_*` method that consumes an `HttpResponse`.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{ErrorBody, Page, PageQuery, Todo, TodoCreate, TodoUpdate};

/// Synchronous, stateless client for the todo API.
#[derive(Debug, Clone)]
pub struct TodoClient {
    base_url: String,
}

impl TodoClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn build_list_todos(&self, query: &PageQuery) -> HttpRequest {
        self.request(HttpMethod::Get, format!("/todos{}", query.to_query_string()))
    }

    pub fn build_get_todo(&self, id: u64) -> HttpRequest {
        self.request(HttpMethod::Get, format!("/todos/{id}"))
    }

    pub fn build_create_todo(&self, input: &TodoCreate) -> Result<HttpRequest, ApiError> {
        self.json_request(HttpMethod::Post, "/todos".to_string(), input)
    }

    pub fn build_update_todo(&self, id: u64, input: &TodoUpdate) -> Result<HttpRequest, ApiError> {
        self.json_request(HttpMethod::Put, format!("/todos/{id}"), input)
    }

    pub fn build_delete_todo(&self, id: u64) -> HttpRequest {
        self.request(HttpMethod::Delete, format!("/todos/{id}"))
    }

    pub fn parse_list_todos(&self, response: HttpResponse) -> Result<Page, ApiError> {
        parse_json(response, 200)
    }

    pub fn parse_get_todo(&self, response: HttpResponse) -> Result<Todo, ApiError> {
        parse_json(response, 200)
    }

    pub fn parse_create_todo(&self, response: HttpResponse) -> Result<Todo, ApiError> {
        parse_json(response, 201)
    }

    pub fn parse_update_todo(&self, response: HttpResponse) -> Result<Todo, ApiError> {
        parse_json(response, 200)
    }

    /// The server answers a delete with the todo it removed.
    pub fn parse_delete_todo(&self, response: HttpResponse) -> Result<Todo, ApiError> {
        parse_json(response, 200)
    }

    fn request(&self, method: HttpMethod, path: String) -> HttpRequest {
        HttpRequest {
            method,
            url: format!("{}{path}", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    fn json_request<T: Serialize>(&self, method: HttpMethod, path: String, input: &T) -> Result<HttpRequest, ApiError> {
        let body = serde_json::to_string(input).map_err(|e| ApiError::SerializationError(e.to_string()))?;
        let mut request = self.request(method, path);
        request
            .headers
            .push(("content-type".to_string(), "application/json".to_string()));
        request.body = Some(body);
        Ok(request)
    }
}

fn parse_json<T: DeserializeOwned>(response: HttpResponse, expected: u16) -> Result<T, ApiError> {
    check_status(&response, expected)?;
    serde_json::from_str(&response.body).map_err(|e| ApiError::DeserializationError(e.to_string()))
}

/// Map non-success status codes to the appropriate `ApiError` variant.
fn check_status(response: &HttpResponse, expected: u16) -> Result<(), ApiError> {
    if response.status == expected {
        return Ok(());
    }

    let error_body: Option<ErrorBody> = serde_json::from_str(&response.body).ok();
    let message = error_body
        .as_ref()
        .map(|b| b.error.clone())
        .unwrap_or_else(|| response.body.clone());

    match response.status {
        404 => Err(ApiError::NotFound { message }),
        400 => Err(ApiError::BadRequest { message }),
        422 => Err(ApiError::Validation {
            fields: error_body.map(|b| b.fields).unwrap_or_default(),
            message,
        }),
        status => Err(ApiError::HttpError {
            status,
            body: response.body.clone(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Priority;

    fn client() -> TodoClient {
        TodoClient::new("http://localhost:3000")
    }

    const TODO_JSON: &str = r#"{"todo_id":1,"todo_name":"Sports","todo_description":"Go to the gym","priority":1}"#;

    #[test]
    fn build_list_todos_without_query() {
        let req = client().build_list_todos(&PageQuery::default());
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.url, "http://localhost:3000/todos");
        assert!(req.body.is_none());
        assert!(req.headers.is_empty());
    }

    #[test]
    fn build_list_todos_with_query() {
        let req = client().build_list_todos(&PageQuery::new(2, 3));
        assert_eq!(req.url, "http://localhost:3000/todos?first_n=2&page_no=3");

        let only_page = PageQuery {
            page_no: Some(2),
            ..PageQuery::default()
        };
        let req = client().build_list_todos(&only_page);
        assert_eq!(req.url, "http://localhost:3000/todos?page_no=2");
    }

    #[test]
    fn build_get_todo_produces_correct_request() {
        let req = client().build_get_todo(7);
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.url, "http://localhost:3000/todos/7");
        assert!(req.body.is_none());
    }

    #[test]
    fn build_create_todo_omits_missing_priority() {
        let input = TodoCreate {
            todo_name: "Buy milk".to_string(),
            todo_description: "Two litres".to_string(),
            priority: None,
        };
        let req = client().build_create_todo(&input).unwrap();
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(req.url, "http://localhost:3000/todos");
        assert_eq!(
            req.headers,
            vec![("content-type".to_string(), "application/json".to_string())]
        );
        let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body["todo_name"], "Buy milk");
        assert!(body.get("priority").is_none());
    }

    #[test]
    fn build_update_todo_sends_only_present_fields() {
        let input = TodoUpdate {
            priority: Some(Priority::High),
            ..TodoUpdate::default()
        };
        let req = client().build_update_todo(4, &input).unwrap();
        assert_eq!(req.method, HttpMethod::Put);
        assert_eq!(req.url, "http://localhost:3000/todos/4");
        let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body, serde_json::json!({ "priority": 1 }));
    }

    #[test]
    fn build_delete_todo_produces_correct_request() {
        let req = client().build_delete_todo(2);
        assert_eq!(req.method, HttpMethod::Delete);
        assert!(req.body.is_none());
    }

    #[test]
    fn parse_list_todos_success() {
        let body = format!(r#"{{"items":[{TODO_JSON}],"totalItems":5,"totalPages":5,"currentPage":1,"pageSize":1}}"#);
        let page = client().parse_list_todos(HttpResponse::new(200, body)).unwrap();
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.items[0].priority, Priority::High);
        assert_eq!(page.total_pages, 5);
    }

    #[test]
    fn parse_list_todos_page_not_found() {
        let body = r#"{"error":"Page 4 not found, there are 3 pages","code":"PAGE_NOT_FOUND"}"#;
        let err = client().parse_list_todos(HttpResponse::new(404, body)).unwrap_err();
        match err {
            ApiError::NotFound { message } => assert!(message.contains("Page 4")),
            other => panic!("expected NotFound, got {other:?}"),
        }
    }

    #[test]
    fn parse_list_todos_bad_pagination() {
        let body = r#"{"error":"Invalid pagination values","code":"INVALID_PAGINATION"}"#;
        let err = client().parse_list_todos(HttpResponse::new(400, body)).unwrap_err();
        assert!(matches!(err, ApiError::BadRequest { .. }));
    }

    #[test]
    fn parse_get_todo_not_found() {
        let err = client().parse_get_todo(HttpResponse::new(404, "")).unwrap_err();
        assert!(matches!(err, ApiError::NotFound { .. }));
    }

    #[test]
    fn parse_create_todo_success() {
        let todo = client().parse_create_todo(HttpResponse::new(201, TODO_JSON)).unwrap();
        assert_eq!(todo.todo_name, "Sports");
    }

    #[test]
    fn parse_create_todo_validation_error() {
        let body = r#"{"error":"Validation failed: too short","code":"VALIDATION_ERROR","fields":["todo_name"]}"#;
        let err = client().parse_create_todo(HttpResponse::new(422, body)).unwrap_err();
        match err {
            ApiError::Validation { fields, .. } => assert_eq!(fields, vec!["todo_name".to_string()]),
            other => panic!("expected Validation, got {other:?}"),
        }
    }

    #[test]
    fn parse_create_todo_wrong_status() {
        let err = client()
            .parse_create_todo(HttpResponse::new(500, "internal error"))
            .unwrap_err();
        assert!(matches!(err, ApiError::HttpError { status: 500, .. }));
    }

    #[test]
    fn parse_delete_todo_returns_removed_todo() {
        let todo = client().parse_delete_todo(HttpResponse::new(200, TODO_JSON)).unwrap();
        assert_eq!(todo.todo_id, 1);
    }

    #[test]
    fn trailing_slash_is_stripped() {
        let client = TodoClient::new("http://localhost:3000/");
        let req = client.build_get_todo(1);
        assert_eq!(req.url, "http://localhost:3000/todos/1");
    }

    #[test]
    fn parse_get_todo_bad_json() {
        let err = client().parse_get_todo(HttpResponse::new(200, "not json")).unwrap_err();
        assert!(matches!(err, ApiError::DeserializationError(_)));
    }

    #[test]
    fn parse_get_todo_rejects_unknown_priority() {
        let body = r#"{"todo_id":1,"todo_name":"Sports","todo_description":"Gym","priority":9}"#;
        let err = client().parse_get_todo(HttpResponse::new(200, body)).unwrap_err();
        assert!(matches!(err, ApiError::DeserializationError(_)));
    }
}
