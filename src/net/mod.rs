//! Networking modules for the todo REST service.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` is the only caller of `transport`; `types` defines the wire schema
//! and `error` the single error shape screens handle.

pub mod api;
pub mod error;
pub mod transport;
pub mod types;
