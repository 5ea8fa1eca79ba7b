//! Dashboard todo list and its synchronization with the server.
//!
//! SYSTEM CONTEXT
//! ==============
//! `TodosState.items` is the only client-side copy of the server's list and
//! is never treated as authoritative. Every mutation is applied after the
//! server confirms it:
//!
//! - fetch: replace the whole list (empty on failure)
//! - create: append the server's item
//! - update: replace the item with the same id, in place
//! - delete: remove the item with that id
//!
//! DESIGN
//! ======
//! In-flight work is tracked per target (`fetching`, `creating`, and a set
//! of pending ids) rather than with one shared busy flag, so toggling one
//! item never blocks editing another, while a double-submit on the same item
//! is refused locally.
//!
//! [`TodoSync`] runs the request between the `begin_*` and `apply_*` halves
//! and discards results once its [`CancelToken`] is cancelled.

#[cfg(test)]
#[path = "todos_test.rs"]
mod todos_test;

use std::collections::HashSet;

use crate::net::api::ApiClient;
use crate::net::error::ApiError;
use crate::net::types::{Todo, TodoPatch};
use crate::state::toast::Notice;
use crate::util::cancel::CancelToken;
use crate::util::cell::StateCell;

pub const CREATED: &str = "Todo created!";
pub const UPDATED: &str = "Todo updated!";
pub const DELETED: &str = "Todo deleted!";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TodoStats {
    pub total: usize,
    pub completed: usize,
    pub remaining: usize,
}

#[derive(Clone, Debug, Default)]
pub struct TodosState {
    pub items: Vec<Todo>,
    pub fetching: bool,
    pub creating: bool,
    pub pending: HashSet<String>,
}

impl TodosState {
    pub fn get(&self, id: &str) -> Option<&Todo> {
        self.items.iter().find(|t| t.id == id)
    }

    pub fn is_pending(&self, id: &str) -> bool {
        self.pending.contains(id)
    }

    pub fn show_loading_placeholder(&self) -> bool {
        self.fetching && self.items.is_empty()
    }

    pub fn show_empty_state(&self) -> bool {
        !self.fetching && self.items.is_empty()
    }

    pub fn stats(&self) -> TodoStats {
        let total = self.items.len();
        let completed = self.items.iter().filter(|t| t.completed).count();
        TodoStats { total, completed, remaining: total - completed }
    }

    // =========================================================================
    // TRANSITIONS
    // =========================================================================

    pub fn begin_fetch(&mut self) {
        self.fetching = true;
    }

    /// Replace the list with the server's. Only failures produce a notice.
    pub fn apply_fetch(&mut self, result: Result<Vec<Todo>, ApiError>) -> Option<Notice> {
        self.fetching = false;
        match result {
            Ok(items) => {
                self.items = items;
                None
            }
            Err(e) => {
                self.items.clear();
                Some(Notice::error(e.user_message()))
            }
        }
    }

    /// Trimmed title to send, or `None` when the input is blank or a create
    /// is already in flight.
    pub fn begin_create(&mut self, raw_title: &str) -> Option<String> {
        let title = raw_title.trim();
        if title.is_empty() || self.creating {
            return None;
        }
        self.creating = true;
        Some(title.to_owned())
    }

    pub fn apply_create(&mut self, result: Result<Todo, ApiError>) -> Notice {
        self.creating = false;
        match result {
            Ok(todo) => {
                self.items.push(todo);
                Notice::success(CREATED)
            }
            Err(e) => Notice::error(e.user_message()),
        }
    }

    /// Mark `id` as in flight. Returns a snapshot of the item, or `None` if
    /// it is unknown or already pending.
    pub fn begin_mutation(&mut self, id: &str) -> Option<Todo> {
        if self.is_pending(id) {
            return None;
        }
        let snapshot = self.get(id)?.clone();
        self.pending.insert(id.to_owned());
        Some(snapshot)
    }

    pub fn apply_update(&mut self, id: &str, result: Result<Todo, ApiError>) -> Notice {
        self.pending.remove(id);
        match result {
            Ok(updated) => {
                if let Some(slot) = self.items.iter_mut().find(|t| t.id == id) {
                    *slot = updated;
                }
                Notice::success(UPDATED)
            }
            Err(e) => Notice::error(e.user_message()),
        }
    }

    pub fn apply_delete(&mut self, id: &str, result: Result<(), ApiError>) -> Notice {
        self.pending.remove(id);
        match result {
            Ok(()) => {
                self.items.retain(|t| t.id != id);
                Notice::success(DELETED)
            }
            Err(e) => Notice::error(e.user_message()),
        }
    }
}

/// In-progress rename of one item. Never persisted.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EditDraft {
    pub editing_id: Option<String>,
    pub text: String,
}

impl EditDraft {
    pub fn start(&mut self, todo: &Todo) {
        self.editing_id = Some(todo.id.clone());
        self.text.clone_from(&todo.title);
    }

    pub fn cancel(&mut self) {
        self.editing_id = None;
        self.text.clear();
    }

    pub fn is_editing(&self, id: &str) -> bool {
        self.editing_id.as_deref() == Some(id)
    }

    /// Close the draft and return `(id, trimmed title)`. A blank draft stays
    /// open and yields nothing.
    pub fn take(&mut self) -> Option<(String, String)> {
        let title = self.text.trim().to_owned();
        if title.is_empty() {
            return None;
        }
        let id = self.editing_id.take()?;
        self.text.clear();
        Some((id, title))
    }
}

/// Drives list operations against the API for one dashboard mount.
///
/// Every operation returns the notice to show, or `None` when nothing was
/// sent (rejected locally) or the result arrived after teardown.
#[derive(Clone, Debug)]
pub struct TodoSync<C> {
    api: ApiClient,
    state: C,
    scope: CancelToken,
}

impl<C: StateCell<TodosState>> TodoSync<C> {
    pub fn new(api: ApiClient, state: C, scope: CancelToken) -> Self {
        Self { api, state, scope }
    }

    fn finish<R>(&self, op: &str, f: impl FnOnce(&mut TodosState) -> R) -> Option<R> {
        if self.scope.is_cancelled() {
            log::debug!("{op} resolved after teardown; ignored");
            return None;
        }
        self.state.with_mut(f)
    }

    pub async fn fetch(&self) -> Option<Notice> {
        self.state.with_mut(TodosState::begin_fetch)?;
        let result = self.api.list_todos().await;
        self.finish("fetch", |s| s.apply_fetch(result)).flatten()
    }

    pub async fn create(&self, raw_title: &str) -> Option<Notice> {
        let title = self.state.with_mut(|s| s.begin_create(raw_title)).flatten()?;
        let result = self.api.create_todo(&title).await;
        self.finish("create", |s| s.apply_create(result))
    }

    pub async fn toggle(&self, id: &str) -> Option<Notice> {
        let current = self.state.with_mut(|s| s.begin_mutation(id)).flatten()?;
        let result = self.api.update_todo(id, &TodoPatch::completed(!current.completed)).await;
        self.finish("toggle", |s| s.apply_update(id, result))
    }

    pub async fn rename(&self, id: &str, raw_title: &str) -> Option<Notice> {
        let title = raw_title.trim();
        if title.is_empty() {
            return None;
        }
        self.state.with_mut(|s| s.begin_mutation(id)).flatten()?;
        let result = self.api.update_todo(id, &TodoPatch::title(title)).await;
        self.finish("rename", |s| s.apply_update(id, result))
    }

    /// Submit the open rename draft.
    ///
    /// The draft stays open, and nothing is sent, while its item has another
    /// request in flight or the text is blank.
    pub async fn save_draft(&self, draft: &impl StateCell<EditDraft>) -> Option<Notice> {
        let id = draft.with(|d| d.editing_id.clone()).flatten()?;
        if self.state.with(|s| s.is_pending(&id))? {
            log::debug!("rename of {id} deferred; item busy");
            return None;
        }
        let (id, title) = draft.with_mut(EditDraft::take).flatten()?;
        self.rename(&id, &title).await
    }

    pub async fn delete(&self, id: &str) -> Option<Notice> {
        self.state.with_mut(|s| s.begin_mutation(id)).flatten()?;
        let result = self.api.delete_todo(id).await;
        self.finish("delete", |s| s.apply_delete(id, result))
    }
}

/// The sync driver as wired into the live dashboard.
pub type LiveTodoSync = TodoSync<leptos::prelude::RwSignal<TodosState>>;
