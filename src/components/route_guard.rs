//! Route-guard wrappers for protected and guest-only screens.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::Redirect;

use crate::net::api::ApiClient;
use crate::util::auth::{GuardDecision, require_auth, require_guest};

fn render_or_redirect(decision: GuardDecision, children: Children) -> AnyView {
    match decision {
        GuardDecision::Render => children().into_any(),
        GuardDecision::Redirect(path) => {
            let options = NavigateOptions { replace: true, ..NavigateOptions::default() };
            view! { <Redirect path=path options=options/> }.into_any()
        }
    }
}

/// Renders children only when a session token is stored.
#[component]
pub fn RequireAuth(children: Children) -> impl IntoView {
    let api = expect_context::<ApiClient>();
    render_or_redirect(require_auth(api.session().has_token()), children)
}

/// Renders children only when no session token is stored.
#[component]
pub fn RequireGuest(children: Children) -> impl IntoView {
    let api = expect_context::<ApiClient>();
    render_or_redirect(require_guest(api.session().has_token()), children)
}
