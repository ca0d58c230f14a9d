//! Authentication: token persistence, claims decoding, session operations.

pub mod claims;
pub mod session;
pub mod tokens;
