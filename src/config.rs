//! Build-time configuration.
//!
//! A WASM bundle has no process environment at runtime, so the service
//! address is baked in when the bundle is built:
//!
//! - `TODO_API_URL`: base URL of the todo service, default
//!   `http://localhost:5000/api`. Blank values fall back to the default and
//!   trailing slashes are dropped.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

use crate::net::transport::REQUEST_TIMEOUT;

pub const DEFAULT_API_URL: &str = "http://localhost:5000/api";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub api_base_url: String,
    pub request_timeout: Duration,
}

impl AppConfig {
    pub fn from_build_env() -> Self {
        Self::resolve(option_env!("TODO_API_URL"))
    }

    pub fn resolve(api_url: Option<&str>) -> Self {
        let api_base_url = api_url
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .unwrap_or(DEFAULT_API_URL)
            .trim_end_matches('/')
            .to_string();
        Self { api_base_url, request_timeout: REQUEST_TIMEOUT }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::resolve(None)
    }
}
