//! Request builder, response parser and transport-backed API for `/todos`.
//!
//! `TodoClient` holds only a `base_url`. Each operation is split into a
//! `build_*` method that produces an `HttpRequest` and a `parse_*` method that
//! consumes an `HttpResponse`. `TodoApi` glues the two halves together around
//! a [`Transport`], one request per call, no retries.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse, Transport};
use crate::types::{NewTodo, Todo, TodoId};

/// Stateless client for the todo store.
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

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn build_list_todos(&self) -> HttpRequest {
        self.bodiless(HttpMethod::Get, format!("{}/todos", self.base_url))
    }

    pub fn build_get_todo(&self, id: TodoId) -> HttpRequest {
        self.bodiless(HttpMethod::Get, self.item_path(id))
    }

    pub fn build_create_todo(&self, draft: &NewTodo) -> Result<HttpRequest, ApiError> {
        json_request(HttpMethod::Post, format!("{}/todos", self.base_url), draft)
    }

    /// PUT the full todo; the store replaces the whole record.
    pub fn build_update_todo(&self, id: TodoId, todo: &Todo) -> Result<HttpRequest, ApiError> {
        json_request(HttpMethod::Put, self.item_path(id), todo)
    }

    pub fn build_delete_todo(&self, id: TodoId) -> HttpRequest {
        self.bodiless(HttpMethod::Delete, self.item_path(id))
    }

    pub fn parse_list_todos(&self, response: HttpResponse) -> Result<Vec<Todo>, ApiError> {
        parse_json(response)
    }

    pub fn parse_get_todo(&self, response: HttpResponse) -> Result<Todo, ApiError> {
        parse_json(response)
    }

    pub fn parse_create_todo(&self, response: HttpResponse) -> Result<Todo, ApiError> {
        parse_json(response)
    }

    pub fn parse_update_todo(&self, response: HttpResponse) -> Result<Todo, ApiError> {
        parse_json(response)
    }

    /// The store echoes the removed todo back.
    pub fn parse_delete_todo(&self, response: HttpResponse) -> Result<Todo, ApiError> {
        parse_json(response)
    }

    fn item_path(&self, id: TodoId) -> String {
        format!("{}/todos/{id}", self.base_url)
    }

    fn bodiless(&self, method: HttpMethod, path: String) -> HttpRequest {
        HttpRequest {
            method,
            path,
            headers: Vec::new(),
            body: None,
        }
    }
}

fn json_request<B: Serialize>(
    method: HttpMethod,
    path: String,
    body: &B,
) -> Result<HttpRequest, ApiError> {
    let body = serde_json::to_string(body).map_err(|e| ApiError::Serialization(e.to_string()))?;
    Ok(HttpRequest {
        method,
        path,
        headers: vec![("content-type".to_string(), "application/json".to_string())],
        body: Some(body),
    })
}

fn parse_json<T: DeserializeOwned>(response: HttpResponse) -> Result<T, ApiError> {
    check_status(&response)?;
    serde_json::from_str(&response.body).map_err(|e| ApiError::Deserialization(e.to_string()))
}

/// Map non-success status codes to the appropriate `ApiError` variant.
fn check_status(response: &HttpResponse) -> Result<(), ApiError> {
    if response.is_success() {
        return Ok(());
    }
    if response.status == 404 {
        return Err(ApiError::NotFound);
    }
    Err(ApiError::Server {
        status: response.status,
        body: response.body.clone(),
    })
}

/// The four store operations over a live transport.
#[derive(Debug, Clone)]
pub struct TodoApi<T> {
    client: TodoClient,
    transport: T,
}

impl<T: Transport> TodoApi<T> {
    pub fn new(client: TodoClient, transport: T) -> Self {
        Self { client, transport }
    }

    pub fn client(&self) -> &TodoClient {
        &self.client
    }

    pub fn list(&self) -> Result<Vec<Todo>, ApiError> {
        let response = self.send(self.client.build_list_todos())?;
        self.client.parse_list_todos(response)
    }

    pub fn get(&self, id: TodoId) -> Result<Todo, ApiError> {
        let response = self.send(self.client.build_get_todo(id))?;
        self.client.parse_get_todo(response)
    }

    pub fn create(&self, draft: &NewTodo) -> Result<Todo, ApiError> {
        let response = self.send(self.client.build_create_todo(draft)?)?;
        self.client.parse_create_todo(response)
    }

    pub fn update(&self, id: TodoId, todo: &Todo) -> Result<Todo, ApiError> {
        let response = self.send(self.client.build_update_todo(id, todo)?)?;
        self.client.parse_update_todo(response)
    }

    pub fn delete(&self, id: TodoId) -> Result<Todo, ApiError> {
        let response = self.send(self.client.build_delete_todo(id))?;
        self.client.parse_delete_todo(response)
    }

    fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        let method = request.method.as_str();
        let path = request.path.clone();
        let response = self.transport.execute(request)?;
        tracing::debug!(method, %path, status = response.status, "todo store responded");
        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;

    fn client() -> TodoClient {
        TodoClient::new("http://localhost:3000")
    }

    fn response(status: u16, body: &str) -> HttpResponse {
        HttpResponse {
            status,
            headers: Vec::new(),
            body: body.to_string(),
        }
    }

    #[test]
    fn build_list_todos_produces_correct_request() {
        let req = client().build_list_todos();
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.path, "http://localhost:3000/todos");
        assert!(req.body.is_none());
        assert!(req.headers.is_empty());
    }

    #[test]
    fn build_create_todo_sends_content_and_completed() {
        let req = client().build_create_todo(&NewTodo::new("Buy milk")).unwrap();
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(req.path, "http://localhost:3000/todos");
        assert_eq!(
            req.headers,
            vec![("content-type".to_string(), "application/json".to_string())]
        );
        let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body, serde_json::json!({"content": "Buy milk", "completed": false}));
    }

    #[test]
    fn build_update_todo_sends_full_todo() {
        let todo = Todo {
            id: 4,
            content: "Updated".to_string(),
            completed: true,
        };
        let req = client().build_update_todo(4, &todo).unwrap();
        assert_eq!(req.method, HttpMethod::Put);
        assert_eq!(req.path, "http://localhost:3000/todos/4");
        let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(
            body,
            serde_json::json!({"id": 4, "content": "Updated", "completed": true})
        );
    }

    #[test]
    fn build_delete_todo_produces_correct_request() {
        let req = client().build_delete_todo(3);
        assert_eq!(req.method, HttpMethod::Delete);
        assert_eq!(req.path, "http://localhost:3000/todos/3");
        assert!(req.body.is_none());
    }

    #[test]
    fn trailing_slash_is_stripped() {
        let client = TodoClient::new("http://localhost:3000/");
        assert_eq!(client.build_list_todos().path, "http://localhost:3000/todos");
    }

    #[test]
    fn parse_list_todos_success() {
        let todos = client()
            .parse_list_todos(response(200, r#"[{"id":1,"content":"eat lunch","completed":false}]"#))
            .unwrap();
        assert_eq!(todos.len(), 1);
        assert_eq!(todos[0].content, "eat lunch");
    }

    #[test]
    fn parse_create_todo_accepts_201() {
        let todo = client()
            .parse_create_todo(response(201, r#"{"id":9,"content":"New","completed":false}"#))
            .unwrap();
        assert_eq!(todo.id, 9);
    }

    #[test]
    fn parse_get_todo_not_found() {
        let err = client().parse_get_todo(response(404, "")).unwrap_err();
        assert_eq!(err, ApiError::NotFound);
    }

    #[test]
    fn parse_update_todo_server_error_keeps_status_and_body() {
        let err = client()
            .parse_update_todo(response(500, "internal error"))
            .unwrap_err();
        assert_eq!(
            err,
            ApiError::Server {
                status: 500,
                body: "internal error".to_string()
            }
        );
    }

    #[test]
    fn parse_delete_todo_returns_removed_item() {
        let todo = client()
            .parse_delete_todo(response(200, r#"{"id":3,"content":"gone","completed":true}"#))
            .unwrap();
        assert_eq!(todo.id, 3);
    }

    #[test]
    fn parse_delete_todo_rejects_empty_object() {
        let err = client().parse_delete_todo(response(200, "{}")).unwrap_err();
        assert!(matches!(err, ApiError::Deserialization(_)));
    }

    #[test]
    fn parse_list_todos_bad_json() {
        let err = client().parse_list_todos(response(200, "not json")).unwrap_err();
        assert!(matches!(err, ApiError::Deserialization(_)));
    }

    /// Records every request and answers with a fixed response.
    struct Canned {
        seen: RefCell<Vec<HttpRequest>>,
        answer: Result<HttpResponse, ApiError>,
    }

    impl Transport for Canned {
        fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
            self.seen.borrow_mut().push(request);
            self.answer.clone()
        }
    }

    #[test]
    fn api_issues_one_request_per_call() {
        let transport = Canned {
            seen: RefCell::new(Vec::new()),
            answer: Ok(response(200, r#"{"id":2,"content":"b","completed":false}"#)),
        };
        let api = TodoApi::new(client(), &transport);

        let todo = api.get(2).unwrap();

        assert_eq!(todo.id, 2);
        let seen = transport.seen.borrow();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].path, "http://localhost:3000/todos/2");
    }

    #[test]
    fn api_propagates_network_errors() {
        let transport = Canned {
            seen: RefCell::new(Vec::new()),
            answer: Err(ApiError::Network("connection refused".to_string())),
        };
        let api = TodoApi::new(client(), &transport);

        let err = api.list().unwrap_err();

        assert_eq!(err, ApiError::Network("connection refused".to_string()));
    }
}
