//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! `AuthState` is the in-memory mirror of the persisted session, provided by
//! the root component. The flows below keep the network call and the session
//! commit as two visible steps: the API client only talks to the server, and
//! [`session::commit`] is what makes a successful login stick.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::api::ApiClient;
use crate::net::error::ApiError;
use crate::net::types::{Credentials, SignupRequest, User};
use crate::state::session::{self, Session};
use crate::util::cell::StateCell;

/// Authentication state tracking the current user and profile loading.
#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub user: Option<User>,
    pub loading: bool,
}

impl AuthState {
    /// Initial mirror at application start: a user only when both the token
    /// and the user record are stored.
    pub fn from_session(session: &Session) -> Self {
        let user = session.token.as_ref().and(session.user.clone());
        Self { user, loading: false }
    }

    pub fn display_name(&self) -> &str {
        self.user.as_ref().map_or("", |u| u.name.as_str())
    }

    /// Navbar greeting; hidden while the profile is still being fetched.
    pub fn greeting(&self) -> Option<String> {
        (!self.loading).then(|| format!("Welcome, {}!", self.display_name()))
    }
}

/// Log in, then commit the returned token and user to the session.
///
/// # Errors
///
/// Returns the normalized [`ApiError`]; the session is untouched on failure.
pub async fn sign_in(api: &ApiClient, credentials: &Credentials) -> Result<User, ApiError> {
    let response = api.login(credentials).await?;
    Ok(session::commit(api.session(), response))
}

/// Sign up, then commit the returned token and user to the session.
///
/// # Errors
///
/// Returns the normalized [`ApiError`]; the session is untouched on failure.
pub async fn sign_up(api: &ApiClient, request: &SignupRequest) -> Result<User, ApiError> {
    let response = api.signup(request).await?;
    Ok(session::commit(api.session(), response))
}

/// Fill in the cached user when a token exists without one.
///
/// # Errors
///
/// Returns the normalized [`ApiError`] from `GET /auth/profile`.
pub async fn refresh_profile(api: &ApiClient, auth: &impl StateCell<AuthState>) -> Result<(), ApiError> {
    auth.with_mut(|a| a.loading = true);
    let result = api.profile().await;
    match &result {
        Ok(user) => {
            api.session().save_user(user);
            auth.with_mut(|a| {
                a.user = Some(user.clone());
                a.loading = false;
            });
        }
        Err(_) => {
            auth.with_mut(|a| a.loading = false);
        }
    }
    result.map(|_| ())
}

/// Forget the session locally and in memory.
pub fn sign_out(api: &ApiClient, auth: &impl StateCell<AuthState>) {
    api.logout();
    auth.with_mut(|a| a.user = None);
}
