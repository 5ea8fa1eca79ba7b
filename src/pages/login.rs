//! Login page: email + password against `POST /auth/login`.
//!
//! Validation runs on submit; after the first attempt the inline errors track
//! the fields as the user types. A rejected form sends nothing.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::components::auth_layout::AuthLayout;
use crate::components::form_field::FormField;
use crate::components::route_guard::RequireGuest;
use crate::components::toaster::notify;
use crate::net::api::ApiClient;
use crate::state::auth::{AuthState, sign_in};
use crate::state::toast::{Notice, ToastState};
use crate::util::auth::{DASHBOARD_PATH, SIGNUP_PATH};
use crate::util::validation::{LoginErrors, LoginForm};

/// Inline errors to show: none until the first submit attempt.
fn visible_errors(attempted: bool, form: &LoginForm) -> LoginErrors {
    if !attempted {
        return LoginErrors::default();
    }
    form.validate().err().unwrap_or_default()
}

fn submit_label(busy: bool) -> &'static str {
    if busy { "Signing in..." } else { "Sign In" }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    view! {
        <RequireGuest>
            <AuthLayout title="Welcome Back" subtitle="Sign in to manage your todos">
                <SignInForm/>
            </AuthLayout>
        </RequireGuest>
    }
}

#[component]
fn SignInForm() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let attempted = RwSignal::new(false);
    let busy = RwSignal::new(false);

    let form = move || LoginForm { email: email.get(), password: password.get() };
    let errors = Memo::new(move |_| visible_errors(attempted.get(), &form()));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        attempted.set(true);
        let credentials = match form().validate() {
            Ok(credentials) => credentials,
            Err(e) => {
                log::debug!("login form rejected: {e:?}");
                return;
            }
        };
        busy.set(true);
        let api = api.clone();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match sign_in(&api, &credentials).await {
                Ok(user) => {
                    auth.update(|a| a.user = Some(user));
                    navigate(DASHBOARD_PATH, NavigateOptions::default());
                }
                Err(e) => {
                    log::warn!("login failed: {e}");
                    notify(toasts, Notice::error(e.user_message()));
                    busy.try_set(false);
                }
            }
        });
    };

    view! {
        <form class="auth-form" novalidate=true on:submit=on_submit>
            <FormField
                label="Email"
                input_type="email"
                placeholder="you@example.com"
                value=email
                error=Signal::derive(move || errors.get().email)
            />
            <FormField
                label="Password"
                input_type="password"
                placeholder="Your password"
                value=password
                error=Signal::derive(move || errors.get().password)
            />
            <button class="btn btn--primary btn--block" type="submit" disabled=move || busy.get()>
                {move || submit_label(busy.get())}
            </button>
        </form>
        <p class="auth-card__footer">
            "Don't have an account? " <A href=SIGNUP_PATH>"Sign up"</A>
        </p>
    }
}
