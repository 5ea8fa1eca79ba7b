//! One row of the dashboard list: toggle, inline rename, delete.
//!
//! Rows are keyed on the item's visible fields, so a confirmed update
//! re-renders the row from the server's copy.

use leptos::prelude::*;

use crate::components::toaster::notify;
use crate::net::types::Todo;
use crate::state::todos::{EditDraft, LiveTodoSync, TodosState};
use crate::state::toast::ToastState;
use crate::util::date::created_label;

#[component]
pub fn TodoItem(
    todo: Todo,
    sync: LiveTodoSync,
    todos: RwSignal<TodosState>,
    draft: RwSignal<EditDraft>,
    toasts: RwSignal<ToastState>,
) -> impl IntoView {
    let id = todo.id.clone();
    let pending = Signal::derive({
        let id = id.clone();
        move || todos.with(|s| s.is_pending(&id))
    });
    let editing = Signal::derive({
        let id = id.clone();
        move || draft.with(|d| d.is_editing(&id))
    });

    let toggle = Callback::new({
        let sync = sync.clone();
        let id = id.clone();
        move |()| {
            let sync = sync.clone();
            let id = id.clone();
            leptos::task::spawn_local(async move {
                if let Some(notice) = sync.toggle(&id).await {
                    notify(toasts, notice);
                }
            });
        }
    });

    let remove = Callback::new({
        let sync = sync.clone();
        let id = id.clone();
        move |()| {
            let sync = sync.clone();
            let id = id.clone();
            leptos::task::spawn_local(async move {
                if let Some(notice) = sync.delete(&id).await {
                    notify(toasts, notice);
                }
            });
        }
    });

    let save = Callback::new(move |()| {
        let sync = sync.clone();
        leptos::task::spawn_local(async move {
            if let Some(notice) = sync.save_draft(&draft).await {
                notify(toasts, notice);
            }
        });
    });

    let start_edit = {
        let todo = todo.clone();
        move |_| draft.update(|d| d.start(&todo))
    };

    let title = todo.title.clone();
    let created = created_label(todo.created_at.as_deref());
    let title_class = if todo.completed { "todo-card__title completed" } else { "todo-card__title" };
    let toggle_icon = if todo.completed { "\u{2714}" } else { "\u{25cb}" };

    view! {
        <div class="todo-card">
            <button
                class="todo-card__toggle"
                title="Toggle complete"
                disabled=move || pending.get()
                on:click=move |_| toggle.run(())
            >
                {toggle_icon}
            </button>
            <div class="todo-card__body">
                <Show
                    when=move || editing.get()
                    fallback=move || {
                        view! {
                            <p class=title_class>{title.clone()}</p>
                            <small class="text-muted">{created.clone()}</small>
                        }
                    }
                >
                    <div class="todo-card__edit">
                        <input
                            class="form-control"
                            prop:value=move || draft.with(|d| d.text.clone())
                            on:input=move |ev| {
                                let text = event_target_value(&ev);
                                draft.update(|d| d.text = text);
                            }
                            on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                                if ev.key() == "Enter" {
                                    save.run(());
                                }
                            }
                        />
                        <button
                            class="btn btn--success"
                            disabled=move || pending.get()
                            on:click=move |_| save.run(())
                        >
                            "Save"
                        </button>
                        <button class="btn" on:click=move |_| draft.update(EditDraft::cancel)>
                            "Cancel"
                        </button>
                    </div>
                </Show>
            </div>
            <Show when=move || !editing.get()>
                <div class="todo-card__actions">
                    <button
                        class="btn btn--outline-primary"
                        title="Edit"
                        disabled=move || pending.get()
                        on:click=start_edit.clone()
                    >
                        "Edit"
                    </button>
                    <button
                        class="btn btn--outline-danger"
                        title="Delete"
                        disabled=move || pending.get()
                        on:click=move |_| remove.run(())
                    >
                        "Delete"
                    </button>
                </div>
            </Show>
        </div>
    }
}
