//! Wire DTOs for the HealthIQ backend contract.
//!
//! DESIGN
//! ======
//! These types mirror the backend's serializer output field-for-field so serde
//! round-trips stay lossless. Records, appointments, and notifications carry
//! string document ids; user references are numeric account ids.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

// =============================================================================
// USERS & AUTH
// =============================================================================

/// Account role carried in the access-token claims.
///
/// Closed set: dashboard dispatch and route authorization match on this enum
/// rather than comparing strings.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Patient,
    Doctor,
    Admin,
}

impl Role {
    /// Stable lowercase name as used on the wire.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Patient => "patient",
            Role::Doctor => "doctor",
            Role::Admin => "admin",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "patient" => Ok(Role::Patient),
            "doctor" => Ok(Role::Doctor),
            "admin" => Ok(Role::Admin),
            other => Err(format!("unknown role: {other}")),
        }
    }
}

/// An authenticated user as derived from access-token claims.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Numeric account identifier.
    pub id: i64,
    /// Login email.
    pub email: String,
    /// Display name.
    pub name: String,
    /// Account role.
    pub role: Role,
    /// Contact phone, if provided at registration.
    #[serde(default)]
    pub phone: Option<String>,
}

/// Access/refresh token pair returned by login and register.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AuthTokens {
    /// Short-lived bearer credential carrying the user claims.
    pub access: String,
    /// Long-lived opaque credential used only to mint new access tokens.
    pub refresh: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Registration payload. Optional demographics end up in the patient or
/// doctor profile server-side.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dob: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blood_group: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    pub password: String,
    /// Defaults to `patient` server-side when omitted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
}

/// Response envelope shared by `/auth/login` and `/auth/register`.
#[derive(Clone, Debug, Deserialize)]
pub struct AuthResponse {
    pub user: User,
    pub tokens: AuthTokens,
}

/// Response of `/auth/refresh`. Only the access token rotates.
#[derive(Clone, Debug, Deserialize)]
pub struct RefreshResponse {
    pub access: String,
}

/// Error body the backend returns on request failure: a message plus an
/// optional field-keyed validation map.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub errors: Option<HashMap<String, Vec<String>>>,
}

// =============================================================================
// PATIENT
// =============================================================================

/// Patient profile document.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PatientProfile {
    /// Profile document id.
    pub id: String,
    /// Owning account id.
    pub user_id: i64,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub dob: Option<String>,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub blood_group: Option<String>,
    #[serde(default)]
    pub region: Option<String>,
}

/// Partial profile update; only set fields are sent.
#[derive(Clone, Debug, Default, Serialize)]
pub struct ProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dob: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blood_group: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
}

/// Medical record approval state. Records start pending, are transitioned by
/// a doctor, and are never deleted client-side.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordStatus {
    Pending,
    Approved,
    Rejected,
}

/// A medical record document.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MedicalRecord {
    /// Record document id.
    pub id: String,
    /// Owning patient's account id.
    #[serde(default)]
    pub patient_id: Option<i64>,
    #[serde(default)]
    pub patient_name: Option<String>,
    pub diagnosis: String,
    pub medication: String,
    #[serde(default)]
    pub hospital: Option<String>,
    /// Visit date as reported by the patient.
    pub date: String,
    #[serde(default)]
    pub status: Option<RecordStatus>,
    #[serde(default)]
    pub doctor_notes: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CreateMedicalRecordRequest {
    pub diagnosis: String,
    pub medication: String,
    pub hospital: String,
    pub date: String,
}

/// A record awaiting doctor review, with patient context attached.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PendingRecord {
    pub id: String,
    #[serde(default)]
    pub patient_id: Option<i64>,
    pub patient_name: String,
    #[serde(default)]
    pub patient_region: Option<String>,
    pub diagnosis: String,
    pub medication: String,
    #[serde(default)]
    pub hospital: Option<String>,
    pub date: String,
    #[serde(default)]
    pub status: Option<RecordStatus>,
    #[serde(default)]
    pub created_at: Option<String>,
}

// =============================================================================
// DOCTORS & APPOINTMENTS
// =============================================================================

/// Doctor directory entry.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Doctor {
    /// Doctor profile document id.
    pub id: String,
    /// Owning account id.
    #[serde(default)]
    pub user_id: Option<i64>,
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub specialization: Option<String>,
    #[serde(default)]
    pub region: Option<String>,
    /// Bookable dates published by the doctor.
    #[serde(default)]
    pub available_dates: Vec<String>,
}

/// Appointment lifecycle state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppointmentStatus {
    Pending,
    Confirmed,
    Cancelled,
    Completed,
}

impl AppointmentStatus {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            AppointmentStatus::Pending => "pending",
            AppointmentStatus::Confirmed => "confirmed",
            AppointmentStatus::Cancelled => "cancelled",
            AppointmentStatus::Completed => "completed",
        }
    }
}

impl fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AppointmentStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pending" => Ok(AppointmentStatus::Pending),
            "confirmed" => Ok(AppointmentStatus::Confirmed),
            "cancelled" => Ok(AppointmentStatus::Cancelled),
            "completed" => Ok(AppointmentStatus::Completed),
            other => Err(format!("unknown appointment status: {other}")),
        }
    }
}

/// An appointment document.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Appointment {
    /// Appointment document id.
    pub id: String,
    #[serde(default)]
    pub patient_id: Option<i64>,
    #[serde(default)]
    pub patient_name: Option<String>,
    #[serde(default)]
    pub doctor_id: Option<i64>,
    #[serde(default)]
    pub doctor_name: Option<String>,
    pub appointment_date: String,
    #[serde(default)]
    pub appointment_time: Option<String>,
    #[serde(default)]
    pub reason: Option<String>,
    pub status: AppointmentStatus,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Booking request as accepted by `/appointment/book`.
#[derive(Clone, Debug, Serialize)]
pub struct BookAppointmentRequest {
    pub doctor_id: i64,
    pub appointment_date: String,
    pub appointment_time: String,
    pub reason: String,
}

/// Status transition applied by a doctor via `/doctor/appointment/update`.
#[derive(Clone, Debug, Serialize)]
pub struct UpdateAppointmentRequest {
    pub appointment_id: String,
    pub status: AppointmentStatus,
}

// =============================================================================
// ANALYTICS
// =============================================================================

/// Risk banding derived from the numeric score.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
    Critical,
}

/// Latest risk snapshot for one region.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RegionRisk {
    /// Stable region key (underscore form).
    #[serde(default)]
    pub region_id: Option<String>,
    /// Human-readable region name.
    pub region: String,
    pub risk_score: f64,
    pub risk_level: RiskLevel,
    #[serde(default)]
    pub total_cases: Option<i64>,
    #[serde(default)]
    pub growth_rate: Option<f64>,
    /// Whether the risk engine flagged an unusual case spike.
    #[serde(default)]
    pub is_anomaly: bool,
}

/// One point of a region risk trend (`/region/trend`, admin cases trend).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TrendPoint {
    pub date: String,
    /// Average risk score across the matched regions for this date.
    pub score: f64,
    #[serde(default)]
    pub cases: Option<i64>,
}

/// One point of the patient dashboard risk trend.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RiskTrendPoint {
    pub date: String,
    pub risk_score: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DiseaseDistribution {
    pub disease: String,
    pub count: i64,
    /// Share of all approved records, in percent.
    #[serde(default)]
    pub percentage: Option<f64>,
}

/// Environmental snapshot for one region.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EnvironmentalData {
    #[serde(default)]
    pub region_id: Option<String>,
    pub region: String,
    pub rainfall: f64,
    pub humidity: f64,
    #[serde(default)]
    pub temperature: Option<f64>,
    #[serde(default)]
    pub water_ph: Option<f64>,
    #[serde(default)]
    pub tds: Option<f64>,
    #[serde(default)]
    pub air_quality: Option<String>,
}

/// Water-quality line of the admin overview.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WaterQuality {
    pub region: String,
    pub ph: f64,
    pub tds: f64,
}

/// Weather block of the admin overview.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WeatherData {
    pub rainfall: f64,
    pub humidity: f64,
    #[serde(default)]
    pub temperature: Option<f64>,
    #[serde(default)]
    pub air_quality: Option<String>,
}

/// `/admin/risk-overview` payload.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AdminDashboardData {
    pub total_patients: i64,
    pub cases_today: i64,
    pub active_alerts: i64,
    pub avg_risk_score: f64,
    #[serde(default)]
    pub cases_trend: Vec<TrendPoint>,
    #[serde(default)]
    pub disease_distribution: Vec<DiseaseDistribution>,
    #[serde(default)]
    pub region_risks: Vec<RegionRisk>,
    #[serde(default)]
    pub water_quality: Vec<WaterQuality>,
    pub weather_data: WeatherData,
}

/// `/patient/dashboard` payload.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PatientDashboardData {
    pub risk_score: f64,
    pub risk_level: RiskLevel,
    pub rainfall: f64,
    pub humidity: f64,
    pub water_ph: f64,
    pub water_tds: f64,
    #[serde(default)]
    pub trends: Vec<RiskTrendPoint>,
    /// Recent risk notifications for the patient's region.
    #[serde(default)]
    pub alerts: Vec<Notification>,
    pub region: String,
}

// =============================================================================
// NOTIFICATIONS
// =============================================================================

/// Notification category.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationType {
    Risk,
    Appointment,
    Record,
    Info,
}

/// A notification document. Created server-side; the client only flips the
/// read flag.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    /// Notification document id.
    pub id: String,
    #[serde(default)]
    pub user_id: Option<i64>,
    #[serde(rename = "type")]
    pub kind: NotificationType,
    pub title: String,
    pub message: String,
    #[serde(default)]
    pub is_read: bool,
    #[serde(default)]
    pub created_at: Option<String>,
    /// Severity, present on risk notifications.
    #[serde(default)]
    pub level: Option<RiskLevel>,
}

/// `/notifications/unread-count` payload.
#[derive(Clone, Debug, Deserialize)]
pub struct UnreadCount {
    pub count: i64,
}
