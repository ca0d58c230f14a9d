//! Session state snapshots and route authorization.

pub mod auth;
pub mod route;
