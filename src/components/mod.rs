//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render layout chrome, forms and list rows while reading/writing
//! shared state from Leptos context providers.

pub mod auth_layout;
pub mod dashboard_layout;
pub mod form_field;
pub mod route_guard;
pub mod toaster;
pub mod todo_item;
pub mod todo_stats;
