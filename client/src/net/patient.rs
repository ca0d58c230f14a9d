//! Patient endpoints: profile, medical history, dashboard.

use super::api::{ApiClient, ApiError};
use super::types::{
    CreateMedicalRecordRequest, MedicalRecord, PatientDashboardData, PatientProfile, ProfileUpdate,
};

/// Fetch the signed-in patient's profile.
pub async fn profile(api: &ApiClient) -> Result<PatientProfile, ApiError> {
    api.get("/patient/profile").await
}

/// Update profile fields; unset fields are left untouched server-side.
pub async fn update_profile(
    api: &ApiClient,
    update: &ProfileUpdate,
) -> Result<PatientProfile, ApiError> {
    api.put("/patient/profile", update).await
}

/// Fetch the patient's medical history, newest first.
pub async fn medical_history(api: &ApiClient) -> Result<Vec<MedicalRecord>, ApiError> {
    api.get("/patient/history").await
}

/// Submit a new medical record; it starts in pending status.
pub async fn add_medical_record(
    api: &ApiClient,
    record: &CreateMedicalRecordRequest,
) -> Result<MedicalRecord, ApiError> {
    api.post("/medical-record", record).await
}

/// Fetch the regional risk dashboard for the patient's home region.
pub async fn dashboard(api: &ApiClient) -> Result<PatientDashboardData, ApiError> {
    api.get("/patient/dashboard").await
}
