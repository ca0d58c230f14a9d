//! Authentication state snapshot consumed by route guards and surfaces.

use crate::net::types::{Role, User};

/// Session state as a value: the current user plus a loading flag that stays
/// set until the first resolution at application start.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    pub user: Option<User>,
    pub loading: bool,
}

impl AuthState {
    /// Initial state before the session has resolved.
    #[must_use]
    pub fn loading() -> Self {
        Self { user: None, loading: true }
    }

    /// Resolved state with the derived user, if any.
    #[must_use]
    pub fn resolved(user: Option<User>) -> Self {
        Self { user, loading: false }
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// Current role, defaulting to `patient` when unauthenticated. Pre-auth
    /// rendering only; authorization goes through the route guard.
    #[must_use]
    pub fn role(&self) -> Role {
        self.user.as_ref().map_or(Role::Patient, |user| user.role)
    }
}
