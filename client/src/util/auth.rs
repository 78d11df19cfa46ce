//! Route guard decisions for private views.
//!
//! SYSTEM CONTEXT
//! ==============
//! Private routes (profile, booking, booking confirmation) must apply the
//! same rule: only an authenticated session gets through; everyone else is
//! sent to `/login` with the requested location remembered. The decision is
//! a plain value so the router layer performs the navigation and this module
//! stays free of rendering concerns.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos_router::NavigateOptions;

use crate::config::{DEFAULT_LANDING_PATH, LOGIN_PATH};
use crate::state::navigation::IntendedDestination;
use crate::state::session::Session;

/// Redirect to the sign-in entry point.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Redirect {
    pub to: &'static str,
    pub intended: IntendedDestination,
    /// Replace the current history entry so back-navigation skips the
    /// private URL.
    pub replace: bool,
}

impl Redirect {
    pub fn navigate_options(&self) -> NavigateOptions {
        NavigateOptions { replace: self.replace, ..NavigateOptions::default() }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    Allow,
    RedirectTo(Redirect),
}

/// Decide whether `requested` may render for `session`.
///
/// An in-flight sign-in counts as not signed in.
pub fn evaluate(session: &Session, requested: IntendedDestination) -> GuardDecision {
    if session.is_authenticated() {
        GuardDecision::Allow
    } else {
        GuardDecision::RedirectTo(Redirect { to: LOGIN_PATH, intended: requested, replace: true })
    }
}

/// Where to send the visitor after a successful sign-in.
///
/// Uses the remembered destination when it is a same-site path other than
/// the sign-in page itself, otherwise the default landing page.
pub fn post_sign_in_target(intended: Option<&IntendedDestination>) -> String {
    intended
        .filter(|dest| is_local_path(&dest.path) && dest.path != LOGIN_PATH)
        .map_or_else(|| DEFAULT_LANDING_PATH.to_owned(), IntendedDestination::href)
}

fn is_local_path(path: &str) -> bool {
    path.starts_with('/') && !path.starts_with("//") && !path.contains('\\')
}
