//! Client-side form validation for the login and signup screens.
//!
//! Invalid forms never reach the network: each validator either returns the
//! request payload ready to send or a per-field error set for inline display.
//! Rules are checked in order (required, length, composition) and only the
//! first failing rule per field is reported.

#[cfg(test)]
#[path = "validation_test.rs"]
mod validation_test;

use std::sync::LazyLock;

use regex::Regex;

use crate::net::types::{Credentials, SignupRequest};

pub const MIN_PASSWORD_LEN: usize = 6;
pub const PASSWORD_SYMBOLS: &str = "!@#$%^&*";

pub const NAME_REQUIRED: &str = "Name is required";
pub const EMAIL_REQUIRED: &str = "Email is required";
pub const EMAIL_INVALID: &str = "Invalid email address";
pub const PASSWORD_REQUIRED: &str = "Password is required";
pub const PASSWORD_TOO_SHORT: &str = "Must be at least 6 characters";
pub const PASSWORD_WEAK: &str = "Must include uppercase, lowercase, number, and special character";
pub const CONFIRM_REQUIRED: &str = "Please confirm your password";
pub const CONFIRM_MISMATCH: &str = "Passwords do not match";

static EMAIL_SHAPE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\S+@\S+$").expect("valid email regex"));

/// Raw login form input.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LoginErrors {
    pub email: Option<&'static str>,
    pub password: Option<&'static str>,
}

impl LoginErrors {
    pub fn is_empty(&self) -> bool {
        self.email.is_none() && self.password.is_none()
    }
}

/// Raw signup form input.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SignupForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub password_confirm: String,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SignupErrors {
    pub name: Option<&'static str>,
    pub email: Option<&'static str>,
    pub password: Option<&'static str>,
    pub password_confirm: Option<&'static str>,
}

impl SignupErrors {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.password.is_none() && self.password_confirm.is_none()
    }
}

pub fn check_email(email: &str) -> Option<&'static str> {
    if email.is_empty() {
        Some(EMAIL_REQUIRED)
    } else if !EMAIL_SHAPE.is_match(email) {
        Some(EMAIL_INVALID)
    } else {
        None
    }
}

/// Signup password rules: presence, minimum length, then character classes.
pub fn check_new_password(password: &str) -> Option<&'static str> {
    if password.is_empty() {
        return Some(PASSWORD_REQUIRED);
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Some(PASSWORD_TOO_SHORT);
    }
    let lower = password.chars().any(|c| c.is_ascii_lowercase());
    let upper = password.chars().any(|c| c.is_ascii_uppercase());
    let digit = password.chars().any(|c| c.is_ascii_digit());
    let symbol = password.chars().any(|c| PASSWORD_SYMBOLS.contains(c));
    if lower && upper && digit && symbol { None } else { Some(PASSWORD_WEAK) }
}

pub fn check_confirmation(password: &str, confirm: &str) -> Option<&'static str> {
    if confirm.is_empty() {
        Some(CONFIRM_REQUIRED)
    } else if confirm != password {
        Some(CONFIRM_MISMATCH)
    } else {
        None
    }
}

impl LoginForm {
    /// # Errors
    ///
    /// Returns the per-field messages when any field fails its rules.
    pub fn validate(&self) -> Result<Credentials, LoginErrors> {
        let errors = LoginErrors {
            email: check_email(&self.email),
            password: self.password.is_empty().then_some(PASSWORD_REQUIRED),
        };
        if !errors.is_empty() {
            return Err(errors);
        }
        Ok(Credentials { email: self.email.clone(), password: self.password.clone() })
    }
}

impl SignupForm {
    /// # Errors
    ///
    /// Returns the per-field messages when any field fails its rules.
    pub fn validate(&self) -> Result<SignupRequest, SignupErrors> {
        let errors = SignupErrors {
            name: self.name.trim().is_empty().then_some(NAME_REQUIRED),
            email: check_email(&self.email),
            password: check_new_password(&self.password),
            password_confirm: check_confirmation(&self.password, &self.password_confirm),
        };
        if !errors.is_empty() {
            return Err(errors);
        }
        Ok(SignupRequest {
            name: self.name.trim().to_owned(),
            email: self.email.clone(),
            password: self.password.clone(),
        })
    }
}
