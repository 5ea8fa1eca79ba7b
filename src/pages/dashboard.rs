//! Dashboard page: the signed-in user's todo list.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the authenticated landing route. The list is fetched once per
//! mount and then kept in step with the server through [`TodoSync`]; every
//! row action and the create form go through it.
//!
//! The mount owns a [`CancelToken`] that is cancelled on cleanup, so
//! requests still in flight when the user navigates away resolve into
//! nothing instead of writing to disposed signals or raising toasts.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;

use crate::components::dashboard_layout::DashboardLayout;
use crate::components::route_guard::RequireAuth;
use crate::components::todo_item::TodoItem;
use crate::components::todo_stats::TodoStatsRow;
use crate::components::toaster::notify;
use crate::net::api::ApiClient;
use crate::state::todos::{EditDraft, LiveTodoSync, TodoStats, TodoSync, TodosState};
use crate::state::toast::ToastState;
use crate::util::cancel::CancelToken;

/// Whether the create form may submit right now.
fn can_create(state: &TodosState, title: &str) -> bool {
    !state.creating && !title.trim().is_empty()
}

/// The counters row only appears once the list has something in it.
fn show_stats(stats: TodoStats) -> bool {
    stats.total > 0
}

fn add_button_label(creating: bool) -> &'static str {
    if creating { "Adding..." } else { "Add" }
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    view! {
        <RequireAuth>
            <DashboardLayout>
                <TodoBoard/>
            </DashboardLayout>
        </RequireAuth>
    }
}

#[component]
fn TodoBoard() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let toasts = expect_context::<RwSignal<ToastState>>();

    let todos = RwSignal::new(TodosState::default());
    let draft = RwSignal::new(EditDraft::default());
    let new_title = RwSignal::new(String::new());

    let scope = CancelToken::new();
    let sync: LiveTodoSync = TodoSync::new(api, todos, scope.clone());
    on_cleanup(move || scope.cancel());

    {
        let sync = sync.clone();
        leptos::task::spawn_local(async move {
            if let Some(notice) = sync.fetch().await {
                notify(toasts, notice);
            }
        });
    }

    let on_create = {
        let sync = sync.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            let title = new_title.get_untracked();
            let sync = sync.clone();
            leptos::task::spawn_local(async move {
                let Some(notice) = sync.create(&title).await else {
                    return;
                };
                if !notice.is_error() {
                    new_title.try_set(String::new());
                }
                notify(toasts, notice);
            });
        }
    };

    let creating = Signal::derive(move || todos.with(|s| s.creating));
    let stats = Signal::derive(move || todos.with(TodosState::stats));

    view! {
        <section class="todo-board">
            <form class="todo-create" on:submit=on_create>
                <input
                    class="form-control"
                    type="text"
                    placeholder="What needs to be done?"
                    prop:value=move || new_title.get()
                    on:input=move |ev| new_title.set(event_target_value(&ev))
                    disabled=move || creating.get()
                />
                <button
                    class="btn btn--primary"
                    type="submit"
                    disabled=move || !todos.with(|s| can_create(s, &new_title.get()))
                >
                    {move || add_button_label(creating.get())}
                </button>
            </form>

            <Show when=move || todos.with(TodosState::show_loading_placeholder)>
                <div class="todo-board__loading">"Loading your todos..."</div>
            </Show>
            <Show when=move || todos.with(TodosState::show_empty_state)>
                <div class="todo-board__empty">
                    <h3>"No todos yet"</h3>
                    <p class="text-muted">"Add your first todo above to get started."</p>
                </div>
            </Show>

            <div class="todo-list">
                <For
                    each=move || todos.with(|s| s.items.clone())
                    key=|todo| (todo.id.clone(), todo.title.clone(), todo.completed)
                    children=move |todo| {
                        view! {
                            <TodoItem
                                todo=todo
                                sync=sync.clone()
                                todos=todos
                                draft=draft
                                toasts=toasts
                            />
                        }
                    }
                />
            </div>

            <Show when=move || show_stats(stats.get())>
                <TodoStatsRow stats=stats/>
            </Show>
        </section>
    }
}
