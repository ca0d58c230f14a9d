//! Route guards: pure functions from session state to a routing decision.
//!
//! DESIGN
//! ======
//! Resolution is a one-way state machine, {Loading} -> {Authenticated,
//! Unauthenticated} -> {Authorized, Redirected}: a loading session always
//! defers (never redirects), and a resolved session maps to exactly one
//! terminal decision. No cycles, no retries.

#[cfg(test)]
#[path = "route_test.rs"]
mod tests;

use super::auth::AuthState;
use crate::net::types::Role;

/// Login entry point, also the redirect target for expired sessions.
pub const LOGIN_PATH: &str = "/login";
/// Default dashboard, the landing path for every authenticated role.
pub const DASHBOARD_PATH: &str = "/dashboard";

/// Terminal outcome of a route guard.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RouteDecision {
    /// Session not yet resolved: show a loading indicator, do not redirect.
    Loading,
    /// Render the requested content.
    Render,
    /// Send to the login page, preserving the originally requested path for
    /// post-login return.
    RedirectToLogin { from: String },
    /// Send to the default dashboard.
    RedirectToDashboard,
}

/// Guard for authenticated content. When `allowed_roles` is given, the
/// current role must be in the list; an excluded role lands on the default
/// dashboard rather than an error page.
#[must_use]
pub fn protected_route(
    state: &AuthState,
    allowed_roles: Option<&[Role]>,
    requested_path: &str,
) -> RouteDecision {
    if state.loading {
        return RouteDecision::Loading;
    }
    if !state.is_authenticated() {
        return RouteDecision::RedirectToLogin { from: requested_path.to_owned() };
    }
    if let Some(allowed) = allowed_roles {
        if !allowed.contains(&state.role()) {
            return RouteDecision::RedirectToDashboard;
        }
    }
    RouteDecision::Render
}

/// Guard for pre-auth content (login and register forms): an authenticated
/// user is sent to the dashboard instead.
#[must_use]
pub fn public_route(state: &AuthState) -> RouteDecision {
    if state.loading {
        return RouteDecision::Loading;
    }
    if state.is_authenticated() {
        return RouteDecision::RedirectToDashboard;
    }
    RouteDecision::Render
}
