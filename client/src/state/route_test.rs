use super::*;

use crate::net::types::User;

fn user_with_role(role: Role) -> User {
    User {
        id: 1,
        email: "user@example.com".into(),
        name: "Test User".into(),
        role,
        phone: None,
    }
}

fn authenticated(role: Role) -> AuthState {
    AuthState::resolved(Some(user_with_role(role)))
}

// =============================================================================
// protected_route
// =============================================================================

#[test]
fn loading_defers_without_redirect() {
    let decision = protected_route(&AuthState::loading(), None, "/appointments");
    assert_eq!(decision, RouteDecision::Loading);
}

#[test]
fn unauthenticated_redirects_to_login_with_requested_path() {
    let state = AuthState::resolved(None);
    let decision = protected_route(&state, None, "/medical-history");
    assert_eq!(
        decision,
        RouteDecision::RedirectToLogin { from: "/medical-history".into() }
    );
}

#[test]
fn authenticated_without_allow_list_renders() {
    let decision = protected_route(&authenticated(Role::Patient), None, "/dashboard");
    assert_eq!(decision, RouteDecision::Render);
}

#[test]
fn role_outside_allow_list_redirects_to_dashboard() {
    let decision = protected_route(
        &authenticated(Role::Patient),
        Some(&[Role::Doctor]),
        "/doctor/pending",
    );
    assert_eq!(decision, RouteDecision::RedirectToDashboard);
}

#[test]
fn role_in_allow_list_renders() {
    let decision = protected_route(
        &authenticated(Role::Doctor),
        Some(&[Role::Doctor, Role::Admin]),
        "/doctor/pending",
    );
    assert_eq!(decision, RouteDecision::Render);
}

#[test]
fn empty_allow_list_redirects_every_role() {
    for role in [Role::Patient, Role::Doctor, Role::Admin] {
        let decision = protected_route(&authenticated(role), Some(&[]), "/nowhere");
        assert_eq!(decision, RouteDecision::RedirectToDashboard);
    }
}

#[test]
fn loading_wins_over_role_check() {
    // A loading session defers even when an allow-list would exclude the
    // pre-auth default role.
    let decision = protected_route(&AuthState::loading(), Some(&[Role::Admin]), "/admin");
    assert_eq!(decision, RouteDecision::Loading);
}

// =============================================================================
// public_route
// =============================================================================

#[test]
fn public_loading_defers() {
    assert_eq!(public_route(&AuthState::loading()), RouteDecision::Loading);
}

#[test]
fn public_unauthenticated_renders() {
    assert_eq!(
        public_route(&AuthState::resolved(None)),
        RouteDecision::Render
    );
}

#[test]
fn public_authenticated_redirects_to_dashboard() {
    assert_eq!(
        public_route(&authenticated(Role::Admin)),
        RouteDecision::RedirectToDashboard
    );
}
