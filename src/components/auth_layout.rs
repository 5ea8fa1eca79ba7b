//! Centered card shell shared by the login and signup screens.

use leptos::prelude::*;

#[component]
pub fn AuthLayout(title: &'static str, subtitle: &'static str, children: Children) -> impl IntoView {
    view! {
        <div class="auth-container">
            <div class="auth-card">
                <div class="auth-card__header">
                    <h2>{title}</h2>
                    <p class="text-muted">{subtitle}</p>
                </div>
                {children()}
            </div>
        </div>
    }
}
