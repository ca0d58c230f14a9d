//! Session operations over the token store and API client.
//!
//! INVARIANT
//! =========
//! Exactly one of {stored access token valid, user = None} holds at any
//! time: the user is always re-derived from the token, and an expired or
//! malformed token is cleared the moment it is observed.

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;

use std::sync::{Arc, Mutex, PoisonError};

use super::claims;
use super::tokens::TokenStore;
use crate::net::api::{ApiClient, ApiError};
use crate::net::types::{AuthResponse, LoginRequest, RegisterRequest, Role, User};
use crate::state::auth::AuthState;

/// Authentication session: derives the current user from stored tokens and
/// exposes login, register, and logout.
pub struct AuthSession {
    api: ApiClient,
    store: Arc<dyn TokenStore>,
    /// Cached state for surfaces that render from it. Starts loading until
    /// the first `resolve`.
    state: Mutex<AuthState>,
}

impl AuthSession {
    #[must_use]
    pub fn new(api: ApiClient) -> Self {
        let store = api.token_store();
        Self { api, store, state: Mutex::new(AuthState::loading()) }
    }

    #[must_use]
    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    /// Snapshot of the cached session state.
    #[must_use]
    pub fn state(&self) -> AuthState {
        self.state
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Derive the session user from storage and cache the resolved state.
    /// Call once at startup and again after anything that changes tokens
    /// outside this session.
    pub fn resolve(&self) -> AuthState {
        let resolved = AuthState::resolved(self.current_user());
        *self.state.lock().unwrap_or_else(PoisonError::into_inner) = resolved.clone();
        resolved
    }

    /// The user carried by the stored access token, or `None` when no token
    /// is stored, it fails to decode, or it has expired. Invalid tokens are
    /// cleared as a side effect.
    #[must_use]
    pub fn current_user(&self) -> Option<User> {
        self.current_user_at(claims::now_secs())
    }

    fn current_user_at(&self, now_secs: u64) -> Option<User> {
        let token = self.store.access_token()?;
        match claims::decode_access_claims(&token) {
            Ok(decoded) if !decoded.is_expired_at(now_secs) => Some(decoded.to_user()),
            Ok(_) => {
                tracing::debug!("stored access token expired; clearing session");
                self.store.clear_tokens();
                None
            }
            Err(error) => {
                tracing::warn!(error = %error, "stored access token malformed; clearing session");
                self.store.clear_tokens();
                None
            }
        }
    }

    /// Authenticate with email and password, storing the returned pair.
    pub async fn login(&self, request: &LoginRequest) -> Result<User, ApiError> {
        let response: AuthResponse = self.api.post("/auth/login", request).await?;
        self.store
            .set_tokens(&response.tokens.access, &response.tokens.refresh);
        self.set_resolved(Some(response.user.clone()));
        Ok(response.user)
    }

    /// Create an account, storing the returned pair.
    pub async fn register(&self, request: &RegisterRequest) -> Result<User, ApiError> {
        let response: AuthResponse = self.api.post("/auth/register", request).await?;
        self.store
            .set_tokens(&response.tokens.access, &response.tokens.refresh);
        self.set_resolved(Some(response.user.clone()));
        Ok(response.user)
    }

    /// End the session locally. No server call is required; the backend only
    /// honors unexpired tokens it has signed.
    pub fn logout(&self) {
        self.store.clear_tokens();
        self.set_resolved(None);
    }

    /// True iff the current user is non-null.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.current_user().is_some()
    }

    /// Current role, defaulting to `patient` when unauthenticated. The
    /// default exists for pre-auth rendering only and must never feed an
    /// authorization decision.
    #[must_use]
    pub fn role(&self) -> Role {
        self.current_user().map_or(Role::Patient, |user| user.role)
    }

    fn set_resolved(&self, user: Option<User>) {
        *self.state.lock().unwrap_or_else(PoisonError::into_inner) = AuthState::resolved(user);
    }
}
