//! Signup page: name, email, password and confirmation against
//! `POST /auth/signup`.

#[cfg(test)]
#[path = "signup_test.rs"]
mod signup_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::components::auth_layout::AuthLayout;
use crate::components::form_field::FormField;
use crate::components::route_guard::RequireGuest;
use crate::components::toaster::notify;
use crate::net::api::ApiClient;
use crate::state::auth::{AuthState, sign_up};
use crate::state::toast::{Notice, ToastState};
use crate::util::auth::{DASHBOARD_PATH, LOGIN_PATH};
use crate::util::validation::{SignupErrors, SignupForm};

fn visible_errors(attempted: bool, form: &SignupForm) -> SignupErrors {
    if !attempted {
        return SignupErrors::default();
    }
    form.validate().err().unwrap_or_default()
}

fn submit_label(busy: bool) -> &'static str {
    if busy { "Creating Account..." } else { "Create Account" }
}

#[component]
pub fn SignupPage() -> impl IntoView {
    view! {
        <RequireGuest>
            <AuthLayout title="Create Account" subtitle="Start organizing your todos">
                <RegisterForm/>
            </AuthLayout>
        </RequireGuest>
    }
}

#[component]
fn RegisterForm() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let navigate = use_navigate();

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let password_confirm = RwSignal::new(String::new());
    let attempted = RwSignal::new(false);
    let busy = RwSignal::new(false);

    let form = move || SignupForm {
        name: name.get(),
        email: email.get(),
        password: password.get(),
        password_confirm: password_confirm.get(),
    };
    let errors = Memo::new(move |_| visible_errors(attempted.get(), &form()));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        attempted.set(true);
        let request = match form().validate() {
            Ok(request) => request,
            Err(e) => {
                log::debug!("signup form rejected: {e:?}");
                return;
            }
        };
        busy.set(true);
        let api = api.clone();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match sign_up(&api, &request).await {
                Ok(user) => {
                    auth.update(|a| a.user = Some(user));
                    navigate(DASHBOARD_PATH, NavigateOptions::default());
                }
                Err(e) => {
                    log::warn!("signup failed: {e}");
                    notify(toasts, Notice::error(e.user_message()));
                    busy.try_set(false);
                }
            }
        });
    };

    view! {
        <form class="auth-form" novalidate=true on:submit=on_submit>
            <FormField
                label="Name"
                input_type="text"
                placeholder="Your name"
                value=name
                error=Signal::derive(move || errors.get().name)
            />
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
                placeholder="At least 6 characters"
                value=password
                error=Signal::derive(move || errors.get().password)
            />
            <FormField
                label="Confirm Password"
                input_type="password"
                placeholder="Repeat your password"
                value=password_confirm
                error=Signal::derive(move || errors.get().password_confirm)
            />
            <button class="btn btn--primary btn--block" type="submit" disabled=move || busy.get()>
                {move || submit_label(busy.get())}
            </button>
        </form>
        <p class="auth-card__footer">
            "Already have an account? " <A href=LOGIN_PATH>"Sign in"</A>
        </p>
    }
}
