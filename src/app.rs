//! Root application component with routing and context providers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Builds the single [`ApiClient`] for the session (browser storage, fetch
//! transport, hard-redirect navigator) and provides it as context together
//! with the auth mirror and the toast stack. Pages pull all three with
//! `expect_context`.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::components::{Redirect, Route, Router, Routes};
use leptos_router::{NavigateOptions, StaticSegment};

use crate::components::toaster::Toaster;
use crate::config::AppConfig;
use crate::net::api::ApiClient;
use crate::net::transport::FetchTransport;
use crate::pages::{dashboard::DashboardPage, login::LoginPage, signup::SignupPage};
use crate::state::auth::AuthState;
use crate::state::session::SessionStore;
use crate::state::toast::ToastState;
use crate::util::auth::DASHBOARD_PATH;
use crate::util::navigation::BrowserNavigator;

/// Wire the API client from build-time configuration.
pub fn build_api_client(config: &AppConfig) -> ApiClient {
    log::info!("api base url: {}", config.api_base_url);
    ApiClient::new(
        config.api_base_url.as_str(),
        Arc::new(FetchTransport::new(config.request_timeout)),
        SessionStore::browser(),
        Arc::new(BrowserNavigator),
    )
}

#[component]
fn RootRedirect() -> impl IntoView {
    let options = NavigateOptions { replace: true, ..NavigateOptions::default() };
    view! { <Redirect path=DASHBOARD_PATH options=options/> }
}

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let api = build_api_client(&AppConfig::from_build_env());
    let auth = RwSignal::new(AuthState::from_session(&api.session().read()));
    let toasts = RwSignal::new(ToastState::default());

    provide_context(api);
    provide_context(auth);
    provide_context(toasts);

    view! {
        <Title text="Todo Dashboard"/>

        <Router>
            <Toaster/>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=RootRedirect/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("signup") view=SignupPage/>
                <Route path=StaticSegment("dashboard") view=DashboardPage/>
            </Routes>
        </Router>
    }
}
