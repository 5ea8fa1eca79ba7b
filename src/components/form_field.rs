//! Labelled input with inline validation feedback.

use leptos::prelude::*;

#[component]
pub fn FormField(
    label: &'static str,
    input_type: &'static str,
    placeholder: &'static str,
    value: RwSignal<String>,
    error: Signal<Option<&'static str>>,
) -> impl IntoView {
    let input_class = move || {
        if error.get().is_some() { "form-control is-invalid" } else { "form-control" }
    };

    view! {
        <div class="form-group">
            <label class="form-label">{label}</label>
            <input
                class=input_class
                type=input_type
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
            <Show when=move || error.get().is_some()>
                <div class="invalid-feedback">{move || error.get().unwrap_or_default()}</div>
            </Show>
        </div>
    }
}
