//! Test doubles for the transport, navigation and storage seams.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use crate::net::api::ApiClient;
use crate::net::error::TransportError;
use crate::net::transport::{HttpRequest, HttpResponse, Method, Transport};
use crate::net::types::Todo;
use crate::state::session::SessionStore;
use crate::util::navigation::Navigator;
use crate::util::storage::MemoryStorage;

pub const BASE_URL: &str = "http://api.test";

pub fn json_response(status: u16, body: serde_json::Value) -> Result<HttpResponse, TransportError> {
    Ok(HttpResponse { status, body: body.to_string() })
}

/// Replays queued responses in order and records every request.
#[derive(Default)]
pub struct ScriptedTransport {
    responses: Mutex<VecDeque<Result<HttpResponse, TransportError>>>,
    requests: Mutex<Vec<HttpRequest>>,
}

impl ScriptedTransport {
    pub fn new(responses: Vec<Result<HttpResponse, TransportError>>) -> Self {
        Self { responses: Mutex::new(responses.into()), requests: Mutex::default() }
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait::async_trait(?Send)]
impl Transport for ScriptedTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        self.requests.lock().unwrap().push(request);
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(TransportError::Network("no scripted response".to_owned())))
    }
}

/// Minimal in-memory todo service: assigns ids, requires a bearer token,
/// wraps payloads in `{ todos }` / `{ todo }`, and can be told to fail the
/// next request.
#[derive(Default)]
pub struct FakeTodoServer {
    todos: Mutex<Vec<Todo>>,
    next_id: AtomicU64,
    fail_next: Mutex<Option<u16>>,
    requests: Mutex<Vec<HttpRequest>>,
}

impl FakeTodoServer {
    pub fn with_todos(todos: Vec<Todo>) -> Self {
        Self { todos: Mutex::new(todos), ..Self::default() }
    }

    pub fn fail_next(&self, status: u16) {
        *self.fail_next.lock().unwrap() = Some(status);
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    fn handle(&self, request: &HttpRequest) -> HttpResponse {
        let reply = |status: u16, body: serde_json::Value| HttpResponse { status, body: body.to_string() };

        if let Some(status) = self.fail_next.lock().unwrap().take() {
            return reply(status, serde_json::json!({ "message": format!("forced {status}") }));
        }
        if request.header("Authorization").is_none() {
            return reply(401, serde_json::json!({ "message": "Not authorized" }));
        }

        let path = request.url.strip_prefix(BASE_URL).unwrap_or(&request.url);
        let body: serde_json::Value = request
            .body
            .as_deref()
            .map(|b| serde_json::from_str(b).unwrap())
            .unwrap_or_default();
        let mut todos = self.todos.lock().unwrap();

        match (request.method, path.strip_prefix("/todos")) {
            (Method::Get, Some("")) => reply(200, serde_json::json!({ "todos": &*todos })),
            (Method::Post, Some("")) => {
                let n = self.next_id.fetch_add(1, Ordering::Relaxed);
                let todo = Todo {
                    id: format!("srv-{n}"),
                    title: body["title"].as_str().unwrap_or_default().to_owned(),
                    completed: false,
                    created_at: Some("2024-03-05T10:15:00Z".to_owned()),
                };
                todos.push(todo.clone());
                reply(201, serde_json::json!({ "todo": todo }))
            }
            (Method::Patch, Some(rest)) => {
                let id = rest.trim_start_matches('/');
                let Some(todo) = todos.iter_mut().find(|t| t.id == id) else {
                    return reply(404, serde_json::json!({ "message": "Todo not found" }));
                };
                if let Some(title) = body["title"].as_str() {
                    todo.title = title.to_owned();
                }
                if let Some(done) = body["completed"].as_bool() {
                    todo.completed = done;
                }
                reply(200, serde_json::json!({ "todo": todo }))
            }
            (Method::Delete, Some(rest)) => {
                let id = rest.trim_start_matches('/');
                let before = todos.len();
                todos.retain(|t| t.id != id);
                if todos.len() == before {
                    reply(404, serde_json::json!({ "message": "Todo not found" }))
                } else {
                    reply(200, serde_json::json!({ "message": "deleted" }))
                }
            }
            _ => reply(404, serde_json::json!({ "message": "no route" })),
        }
    }
}

#[async_trait::async_trait(?Send)]
impl Transport for FakeTodoServer {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let response = self.handle(&request);
        self.requests.lock().unwrap().push(request);
        Ok(response)
    }
}

#[derive(Default)]
pub struct RecordingNavigator {
    visits: Mutex<Vec<String>>,
}

impl RecordingNavigator {
    pub fn visits(&self) -> Vec<String> {
        self.visits.lock().unwrap().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn hard_redirect(&self, path: &str) {
        self.visits.lock().unwrap().push(path.to_owned());
    }
}

pub struct Harness {
    pub api: ApiClient,
    pub storage: MemoryStorage,
    pub navigator: Arc<RecordingNavigator>,
}

impl Harness {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        let storage = MemoryStorage::new();
        let navigator = Arc::new(RecordingNavigator::default());
        let session = SessionStore::new(Arc::new(storage.clone()));
        let api = ApiClient::new(BASE_URL, transport, session, navigator.clone());
        Self { api, storage, navigator }
    }

    /// Same as [`Harness::new`] with a token already stored.
    pub fn signed_in(transport: Arc<dyn Transport>) -> Self {
        let harness = Self::new(transport);
        harness.api.session().save("tok-1", &crate::net::types::User::default());
        harness
    }
}

pub fn todo(id: &str, title: &str) -> Todo {
    Todo { id: id.to_owned(), title: title.to_owned(), completed: false, created_at: None }
}
