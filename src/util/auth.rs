//! Shared auth route guards.
//!
//! SYSTEM CONTEXT
//! ==============
//! The auth page sends signed-in visitors to their home route; the role home
//! pages send signed-out visitors back to `/`. Both wait for session restore.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::auth::AuthState;

pub const AUTH_ROUTE: &str = "/";

#[must_use]
pub fn should_redirect_unauth(state: &AuthState) -> bool {
    !state.loading && state.user.is_none()
}

/// Home route to leave the auth page for, once restore has finished.
#[must_use]
pub fn authenticated_landing(state: &AuthState) -> Option<&'static str> {
    if state.loading { None } else { state.landing_route() }
}

/// Redirect to the auth page whenever auth has loaded and no user is present.
pub fn install_unauth_redirect<F>(auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if auth.with(should_redirect_unauth) {
            navigate(AUTH_ROUTE, NavigateOptions::default());
        }
    });
}

/// Redirect a signed-in visitor to their role's home route.
pub fn install_authed_redirect<F>(auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if let Some(route) = auth.with(authenticated_landing) {
            navigate(route, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });
}
