//! Networking modules for the HealthIQ REST contract.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` owns the HTTP client and the 401 refresh-and-replay interceptor,
//! `refresh` coordinates the single-flight refresh, `types` defines the wire
//! schema, and the per-domain modules bind individual endpoints.

pub mod analytics;
pub mod api;
pub mod appointments;
pub mod doctor;
pub mod notifications;
pub mod patient;
pub mod refresh;
pub mod types;
