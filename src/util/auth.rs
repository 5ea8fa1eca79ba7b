//! Route-guard predicates.
//!
//! SYSTEM CONTEXT
//! ==============
//! Guards only look at whether a token is stored, never whether it is still
//! valid. A stale token is discovered on the next request, where the API
//! client's `401` handling takes over.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

pub const LOGIN_PATH: &str = "/login";
pub const SIGNUP_PATH: &str = "/signup";
pub const DASHBOARD_PATH: &str = "/dashboard";

/// What a guarded route should do on mount.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    Render,
    /// Navigate away, replacing the current history entry.
    Redirect(&'static str),
}

/// Protected screens: bounce to the login page when no token is stored.
pub fn require_auth(has_token: bool) -> GuardDecision {
    if has_token { GuardDecision::Render } else { GuardDecision::Redirect(LOGIN_PATH) }
}

/// Login/signup screens: skip straight to the dashboard when a token is stored.
pub fn require_guest(has_token: bool) -> GuardDecision {
    if has_token { GuardDecision::Redirect(DASHBOARD_PATH) } else { GuardDecision::Render }
}
