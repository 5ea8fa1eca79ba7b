//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`auth`, `session`, `todos`, `toast`) so
//! individual components can depend on small focused models.

pub mod auth;
pub mod session;
pub mod todos;
pub mod toast;
