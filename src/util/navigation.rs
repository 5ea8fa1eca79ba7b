//! Full-page navigation.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every screen change goes through the Leptos router except one: when the
//! API client sees a `401`, it tears the whole application down by loading
//! `/login` from scratch. That single path lives behind [`Navigator`] so the
//! client can be exercised without a browser.

/// Performs a hard navigation that discards all in-memory application state.
pub trait Navigator: Send + Sync {
    fn hard_redirect(&self, path: &str);
}

/// Sets `window.location.href`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserNavigator;

impl Navigator for BrowserNavigator {
    fn hard_redirect(&self, path: &str) {
        #[cfg(feature = "csr")]
        {
            if let Some(window) = web_sys::window() {
                if window.location().set_href(path).is_err() {
                    log::warn!("hard redirect to {path} failed");
                }
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            log::debug!("hard redirect to {path} skipped outside the browser");
        }
    }
}
