//! Toast stack in the top-right corner.

use leptos::prelude::*;

use crate::state::toast::{Notice, ToastKind, ToastState};

/// How long a toast stays up before it dismisses itself.
#[cfg(feature = "csr")]
const TOAST_TTL_MS: u32 = 4_000;

/// Show a notice and schedule its dismissal.
pub fn notify(toasts: RwSignal<ToastState>, notice: Notice) {
    let Some(id) = toasts.try_update(|t| t.push(notice)) else {
        return;
    };
    #[cfg(feature = "csr")]
    {
        gloo_timers::callback::Timeout::new(TOAST_TTL_MS, move || {
            toasts.try_update(|t| t.dismiss(id));
        })
        .forget();
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = id;
    }
}

#[component]
pub fn Toaster() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    view! {
        <div class="toaster">
            <For
                each=move || toasts.get().items
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    let class = match toast.notice.kind {
                        ToastKind::Success => "toast toast--success",
                        ToastKind::Error => "toast toast--error",
                    };
                    view! {
                        <div class=class role="status" on:click=move |_| toasts.update(|t| t.dismiss(id))>
                            {toast.notice.message}
                        </div>
                    }
                }
            />
        </div>
    }
}
