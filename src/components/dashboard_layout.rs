//! Navbar and content shell for the protected area.
//!
//! SYSTEM CONTEXT
//! ==============
//! Owns the logout action and, when a token is stored without a cached user,
//! backfills the header name from `GET /auth/profile`.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::api::ApiClient;
use crate::state::auth::{AuthState, refresh_profile, sign_out};
use crate::util::auth::LOGIN_PATH;

#[component]
pub fn DashboardLayout(children: Children) -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    if auth.with_untracked(|a| a.user.is_none()) && api.session().has_token() {
        let api = api.clone();
        leptos::task::spawn_local(async move {
            if let Err(e) = refresh_profile(&api, &auth).await {
                log::warn!("profile refresh failed: {e}");
            }
        });
    }

    let on_logout = move |_| {
        sign_out(&api, &auth);
        navigate(LOGIN_PATH, NavigateOptions::default());
    };

    view! {
        <div class="todo-container">
            <nav class="navbar">
                <span class="navbar-brand">"Todo Dashboard"</span>
                <div class="navbar__actions">
                    <span class="navbar__welcome">
                        {move || auth.with(AuthState::greeting).unwrap_or_else(|| "Loading profile...".to_owned())}
                    </span>
                    <button class="btn btn--outline-danger" on:click=on_logout>
                        "Logout"
                    </button>
                </div>
            </nav>
            <main class="container">{children()}</main>
        </div>
    }
}
