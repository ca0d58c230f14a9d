//! Doctor endpoints: directory, record review, appointment management.

use serde_json::json;

use super::api::{ApiClient, ApiError};
use super::types::{
    Appointment, Doctor, MedicalRecord, PendingRecord, UpdateAppointmentRequest,
};

/// Optional directory filters for `/doctors`.
#[derive(Clone, Debug, Default)]
pub struct DoctorFilters {
    pub specialization: Option<String>,
    pub region: Option<String>,
}

impl DoctorFilters {
    fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut query = Vec::new();
        if let Some(specialization) = &self.specialization {
            query.push(("specialization", specialization.clone()));
        }
        if let Some(region) = &self.region {
            query.push(("region", region.clone()));
        }
        query
    }
}

/// List doctors, optionally filtered by specialization and region.
pub async fn list(api: &ApiClient, filters: &DoctorFilters) -> Result<Vec<Doctor>, ApiError> {
    api.get_query("/doctors", &filters.to_query()).await
}

/// Fetch a doctor's published bookable dates.
pub async fn available_slots(api: &ApiClient, doctor_id: &str) -> Result<Vec<String>, ApiError> {
    api.get(&format!("/doctors/{doctor_id}/slots")).await
}

/// List records awaiting this doctor's review.
pub async fn pending_records(api: &ApiClient) -> Result<Vec<PendingRecord>, ApiError> {
    api.get("/doctor/pending").await
}

/// Approve a pending record.
pub async fn approve_record(api: &ApiClient, record_id: &str) -> Result<MedicalRecord, ApiError> {
    api.post_empty(&format!("/doctor/approve/{record_id}")).await
}

/// Reject a pending record with optional notes for the patient.
pub async fn reject_record(
    api: &ApiClient,
    record_id: &str,
    notes: Option<&str>,
) -> Result<MedicalRecord, ApiError> {
    let body = json!({ "notes": notes.unwrap_or_default() });
    api.post(&format!("/doctor/reject/{record_id}"), &body).await
}

/// Read-only view of a patient's history for review context.
pub async fn patient_history(
    api: &ApiClient,
    patient_id: &str,
) -> Result<Vec<MedicalRecord>, ApiError> {
    api.get(&format!("/doctor/patient/{patient_id}/history")).await
}

/// List appointments booked with this doctor.
pub async fn appointments(api: &ApiClient) -> Result<Vec<Appointment>, ApiError> {
    api.get("/doctor/appointments").await
}

/// Confirm, cancel, or complete an appointment.
pub async fn update_appointment(
    api: &ApiClient,
    update: &UpdateAppointmentRequest,
) -> Result<Appointment, ApiError> {
    api.post("/doctor/appointment/update", update).await
}
