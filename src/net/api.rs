//! REST client for the todo service.
//!
//! SYSTEM CONTEXT
//! ==============
//! The single point of HTTP access. Two behaviors wrap every call:
//!
//! - outgoing: the stored bearer token, if any, is attached by
//!   [`ApiClient::build_request`]; nothing else adds headers.
//! - incoming: a `401` clears the session and hard-navigates to `/login`
//!   exactly once; a 2xx body is decoded into the caller's type; anything
//!   else becomes an [`ApiError`] carrying the server's `message`.
//!
//! DESIGN
//! ======
//! The session and navigator are injected at construction rather than looked
//! up globally, and `login`/`signup` never write the session themselves. The
//! auth flow in `state::auth` commits the session as an explicit second step.
//!
//! No retries, no request de-duplication, no caching.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::error::ApiError;
use super::transport::{HttpRequest, HttpResponse, Method, Transport};
use super::types::{
    AuthResponse, Credentials, ErrorBody, NewTodo, SignupRequest, Todo, TodoEnvelope, TodoList, TodoPatch, User,
};
use crate::state::session::SessionStore;
use crate::util::auth::LOGIN_PATH;
use crate::util::navigation::Navigator;

#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    transport: Arc<dyn Transport>,
    session: SessionStore,
    navigator: Arc<dyn Navigator>,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .field("session", &self.session)
            .finish_non_exhaustive()
    }
}

/// `Bearer <token>` for a present token, nothing otherwise.
pub fn bearer_header(token: Option<&str>) -> Option<String> {
    token.map(|t| format!("Bearer {t}"))
}

fn todo_path(id: &str) -> String {
    format!("/todos/{id}")
}

impl ApiClient {
    pub fn new(
        base_url: impl Into<String>,
        transport: Arc<dyn Transport>,
        session: SessionStore,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_owned();
        Self { base_url, transport, session, navigator }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    // =========================================================================
    // AUTH
    // =========================================================================

    /// `POST /auth/login`.
    ///
    /// # Errors
    ///
    /// Any transport, status or decode failure, normalized to [`ApiError`].
    pub async fn login(&self, credentials: &Credentials) -> Result<AuthResponse, ApiError> {
        let response: AuthResponse = self.call(Method::Post, "/auth/login", Some(credentials)).await?;
        validate_auth(response)
    }

    /// `POST /auth/signup`.
    ///
    /// # Errors
    ///
    /// Any transport, status or decode failure, normalized to [`ApiError`].
    pub async fn signup(&self, request: &SignupRequest) -> Result<AuthResponse, ApiError> {
        let response: AuthResponse = self.call(Method::Post, "/auth/signup", Some(request)).await?;
        validate_auth(response)
    }

    /// Forget the local session. No network call.
    pub fn logout(&self) {
        self.session.clear();
    }

    /// `GET /auth/profile`.
    ///
    /// # Errors
    ///
    /// Any transport, status or decode failure, normalized to [`ApiError`].
    pub async fn profile(&self) -> Result<User, ApiError> {
        self.call(Method::Get, "/auth/profile", None::<&()>).await
    }

    // =========================================================================
    // TODOS
    // =========================================================================

    /// `GET /todos`.
    ///
    /// # Errors
    ///
    /// Any transport, status or decode failure, normalized to [`ApiError`].
    pub async fn list_todos(&self) -> Result<Vec<Todo>, ApiError> {
        let list: TodoList = self.call(Method::Get, "/todos", None::<&()>).await?;
        Ok(list.todos)
    }

    /// `POST /todos`.
    ///
    /// # Errors
    ///
    /// Any transport, status or decode failure, normalized to [`ApiError`].
    pub async fn create_todo(&self, title: &str) -> Result<Todo, ApiError> {
        let created: TodoEnvelope = self.call(Method::Post, "/todos", Some(&NewTodo { title })).await?;
        Ok(created.todo)
    }

    /// `PATCH /todos/{id}`.
    ///
    /// # Errors
    ///
    /// Any transport, status or decode failure, normalized to [`ApiError`].
    pub async fn update_todo(&self, id: &str, patch: &TodoPatch) -> Result<Todo, ApiError> {
        let updated: TodoEnvelope = self.call(Method::Patch, &todo_path(id), Some(patch)).await?;
        Ok(updated.todo)
    }

    /// `DELETE /todos/{id}`. The response body is ignored.
    ///
    /// # Errors
    ///
    /// Any transport or status failure, normalized to [`ApiError`].
    pub async fn delete_todo(&self, id: &str) -> Result<(), ApiError> {
        self.exchange(Method::Delete, &todo_path(id), None::<&()>).await.map(|_| ())
    }

    // =========================================================================
    // INTERCEPTORS
    // =========================================================================

    /// Outgoing interceptor: the only place requests are assembled.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Decode`] if the body cannot be serialized.
    pub fn build_request<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<HttpRequest, ApiError> {
        let mut headers = vec![("Content-Type".to_owned(), "application/json".to_owned())];
        if let Some(value) = bearer_header(self.session.token().as_deref()) {
            headers.push(("Authorization".to_owned(), value));
        }
        let body = body
            .map(serde_json::to_string)
            .transpose()
            .map_err(|e| ApiError::Decode(e.to_string()))?;
        Ok(HttpRequest { method, url: format!("{}{path}", self.base_url), headers, body })
    }

    /// Incoming interceptor: classify a raw response.
    fn intercept(&self, response: HttpResponse) -> Result<HttpResponse, ApiError> {
        if response.status == 401 {
            log::warn!("401 from server; clearing session");
            self.session.clear();
            self.navigator.hard_redirect(LOGIN_PATH);
            return Err(ApiError::Unauthorized);
        }
        if response.is_success() {
            return Ok(response);
        }
        let message = serde_json::from_str::<ErrorBody>(&response.body).ok().and_then(|b| b.message);
        Err(ApiError::Server { status: response.status, message })
    }

    async fn exchange<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<HttpResponse, ApiError> {
        let request = self.build_request(method, path, body)?;
        log::debug!("{} {}", method.as_str(), request.url);
        let response = self.transport.send(request).await.map_err(|e| {
            log::warn!("{} {path} failed: {e}", method.as_str());
            ApiError::from(e)
        })?;
        self.intercept(response)
    }

    async fn call<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<T, ApiError> {
        let response = self.exchange(method, path, body).await?;
        serde_json::from_str(&response.body).map_err(|e| ApiError::Decode(e.to_string()))
    }
}

fn validate_auth(response: AuthResponse) -> Result<AuthResponse, ApiError> {
    if response.token.is_empty() {
        return Err(ApiError::Decode("auth response carried an empty token".to_owned()));
    }
    Ok(response)
}
