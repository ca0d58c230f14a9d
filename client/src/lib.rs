//! HealthIQ backend client: token-authenticated HTTP access with silent
//! single-flight refresh, session derivation from access-token claims, and
//! role-based route authorization.

pub mod auth;
pub mod config;
pub mod net;
pub mod state;

pub use auth::claims::{AccessClaims, ClaimsError, decode_access_claims};
pub use auth::session::AuthSession;
pub use auth::tokens::{FileTokenStore, MemoryTokenStore, TokenStore};
pub use config::ClientConfig;
pub use net::api::{ApiClient, ApiError};
pub use state::auth::AuthState;
pub use state::route::{DASHBOARD_PATH, LOGIN_PATH, RouteDecision, protected_route, public_route};
