//! Appointment booking endpoints (patient side).

use super::api::{ApiClient, ApiError};
use super::types::{Appointment, BookAppointmentRequest};

/// Fallback slot when the patient does not pick a time.
const DEFAULT_TIME: &str = "10:00";

/// Book an appointment with a doctor. Time defaults to the morning slot and
/// the reason to an empty string, matching what the backend accepts.
pub async fn book(
    api: &ApiClient,
    doctor_id: i64,
    date: &str,
    time: Option<&str>,
    reason: Option<&str>,
) -> Result<Appointment, ApiError> {
    let request = BookAppointmentRequest {
        doctor_id,
        appointment_date: date.to_owned(),
        appointment_time: time.unwrap_or(DEFAULT_TIME).to_owned(),
        reason: reason.unwrap_or_default().to_owned(),
    };
    api.post("/appointment/book", &request).await
}

/// List the signed-in patient's appointments.
pub async fn list(api: &ApiClient) -> Result<Vec<Appointment>, ApiError> {
    api.get("/appointment/list").await
}

/// Cancel an appointment owned by the signed-in patient.
pub async fn cancel(api: &ApiClient, appointment_id: &str) -> Result<Appointment, ApiError> {
    api.post_empty(&format!("/appointment/{appointment_id}/cancel")).await
}
