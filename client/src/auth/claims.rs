//! Pure access-token claims decoding.
//!
//! Bytes in, claims or failure out: no network, no storage. The signature is
//! not checked client-side; the backend is the authority on every request,
//! and the client only reads claims for identity display and expiry.

#[cfg(test)]
#[path = "claims_test.rs"]
pub(crate) mod tests;

use std::time::{SystemTime, UNIX_EPOCH};

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use serde::{Deserialize, Serialize};

use crate::net::types::{Role, User};

/// Claims carried in the access token payload.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AccessClaims {
    /// Numeric account id (`user_id` claim).
    pub user_id: i64,
    pub email: String,
    pub name: String,
    pub role: Role,
    /// Expiry, seconds since the Unix epoch.
    pub exp: u64,
}

impl AccessClaims {
    /// Whether the token has expired as of `now_secs`.
    #[must_use]
    pub fn is_expired_at(&self, now_secs: u64) -> bool {
        self.exp <= now_secs
    }

    /// The user identity these claims describe.
    #[must_use]
    pub fn to_user(&self) -> User {
        User {
            id: self.user_id,
            email: self.email.clone(),
            name: self.name.clone(),
            role: self.role,
            phone: None,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ClaimsError {
    #[error("token is not a three-segment JWT")]
    Malformed,
    #[error("claims segment is not valid base64: {0}")]
    Encoding(#[from] base64::DecodeError),
    #[error("claims payload is not valid JSON: {0}")]
    Payload(#[from] serde_json::Error),
}

/// Decode the claims segment of a JWT-like access token.
pub fn decode_access_claims(token: &str) -> Result<AccessClaims, ClaimsError> {
    let mut segments = token.split('.');
    let (Some(_header), Some(payload), Some(_signature), None) =
        (segments.next(), segments.next(), segments.next(), segments.next())
    else {
        return Err(ClaimsError::Malformed);
    };

    let bytes = URL_SAFE_NO_PAD.decode(payload)?;
    Ok(serde_json::from_slice(&bytes)?)
}

/// Current wall-clock time in seconds since the Unix epoch.
#[must_use]
pub fn now_secs() -> u64 {
    let Ok(duration) = SystemTime::now().duration_since(UNIX_EPOCH) else {
        return 0;
    };
    duration.as_secs()
}
