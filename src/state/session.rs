//! Persisted session: bearer token plus cached user record.
//!
//! SYSTEM CONTEXT
//! ==============
//! Written after a successful login/signup, cleared on logout or on any
//! `401`, read by the API client on every request and by the route guards on
//! every mount. There is no expiry tracking; the server decides validity.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::sync::Arc;

use crate::net::types::{AuthResponse, User};
use crate::util::storage::{KeyValueStore, LocalStorage};

pub const TOKEN_KEY: &str = "token";
pub const USER_KEY: &str = "user";

/// Snapshot of what the store currently holds.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Session {
    pub token: Option<String>,
    pub user: Option<User>,
}

/// Handle over the persisted key-value area. Clones share storage.
#[derive(Clone)]
pub struct SessionStore {
    storage: Arc<dyn KeyValueStore>,
}

impl std::fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionStore").field("has_token", &self.has_token()).finish()
    }
}

impl SessionStore {
    pub fn new(storage: Arc<dyn KeyValueStore>) -> Self {
        Self { storage }
    }

    /// Session backed by `window.localStorage`.
    pub fn browser() -> Self {
        Self::new(Arc::new(LocalStorage))
    }

    pub fn save(&self, token: &str, user: &User) {
        self.storage.set(TOKEN_KEY, token);
        match serde_json::to_string(user) {
            Ok(raw) => self.storage.set(USER_KEY, &raw),
            Err(e) => log::warn!("session user not persisted: {e}"),
        }
        log::debug!("session saved");
    }

    /// Replace the cached user, keeping the current token.
    pub fn save_user(&self, user: &User) {
        if let Ok(raw) = serde_json::to_string(user) {
            self.storage.set(USER_KEY, &raw);
        }
    }

    /// Drop both keys together.
    pub fn clear(&self) {
        self.storage.remove(TOKEN_KEY);
        self.storage.remove(USER_KEY);
        log::debug!("session cleared");
    }

    pub fn read(&self) -> Session {
        Session { token: self.token(), user: self.user() }
    }

    /// Stored token, treating an empty string as absent.
    pub fn token(&self) -> Option<String> {
        self.storage.get(TOKEN_KEY).filter(|t| !t.is_empty())
    }

    pub fn has_token(&self) -> bool {
        self.token().is_some()
    }

    fn user(&self) -> Option<User> {
        let raw = self.storage.get(USER_KEY)?;
        serde_json::from_str(&raw).ok()
    }
}

/// Persist a successful auth response and hand back the user for the
/// in-memory mirror.
pub fn commit(store: &SessionStore, response: AuthResponse) -> User {
    store.save(&response.token, &response.user);
    response.user
}
