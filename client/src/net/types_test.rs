use super::*;

// =============================================================================
// Role
// =============================================================================

#[test]
fn role_serializes_lowercase() {
    assert_eq!(serde_json::to_string(&Role::Patient).unwrap(), "\"patient\"");
    assert_eq!(serde_json::to_string(&Role::Doctor).unwrap(), "\"doctor\"");
    assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), "\"admin\"");
}

#[test]
fn role_parses_case_insensitively() {
    assert_eq!("Doctor".parse::<Role>().unwrap(), Role::Doctor);
    assert_eq!(" admin ".parse::<Role>().unwrap(), Role::Admin);
    assert!("nurse".parse::<Role>().is_err());
}

#[test]
fn role_rejects_unknown_wire_value() {
    assert!(serde_json::from_str::<Role>("\"superuser\"").is_err());
}

// =============================================================================
// auth payloads
// =============================================================================

#[test]
fn auth_response_decodes_login_envelope() {
    let body = r#"{
        "user": {"id": 3, "email": "a@b.c", "name": "A B", "role": "doctor", "phone": "123"},
        "tokens": {"access": "acc", "refresh": "ref"}
    }"#;
    let response: AuthResponse = serde_json::from_str(body).unwrap();
    assert_eq!(response.user.id, 3);
    assert_eq!(response.user.role, Role::Doctor);
    assert_eq!(response.tokens.access, "acc");
    assert_eq!(response.tokens.refresh, "ref");
}

#[test]
fn user_phone_defaults_to_none() {
    let body = r#"{"id": 1, "email": "a@b.c", "name": "A", "role": "patient"}"#;
    let user: User = serde_json::from_str(body).unwrap();
    assert_eq!(user.phone, None);
}

#[test]
fn register_request_omits_unset_optionals() {
    let request = RegisterRequest {
        name: "A".into(),
        email: "a@b.c".into(),
        password: "pw".into(),
        ..RegisterRequest::default()
    };
    let value = serde_json::to_value(&request).unwrap();
    let object = value.as_object().unwrap();
    assert!(!object.contains_key("phone"));
    assert!(!object.contains_key("role"));
    assert!(object.contains_key("password"));
}

#[test]
fn error_body_tolerates_missing_fields() {
    let body: ApiErrorBody = serde_json::from_str("{}").unwrap();
    assert!(body.message.is_none());
    assert!(body.errors.is_none());
}

// =============================================================================
// records
// =============================================================================

#[test]
fn medical_record_decodes_backend_document() {
    let body = r#"{
        "id": "665f1c2e9b1e8a0012345678",
        "patient_id": 7,
        "patient_name": "Ravi Kumar",
        "diagnosis": "Dengue",
        "medication": "Paracetamol",
        "hospital": "Apollo",
        "date": "2026-07-01",
        "status": "pending",
        "created_at": "2026-07-01T10:00:00Z"
    }"#;
    let record: MedicalRecord = serde_json::from_str(body).unwrap();
    assert_eq!(record.id, "665f1c2e9b1e8a0012345678");
    assert_eq!(record.patient_id, Some(7));
    assert_eq!(record.status, Some(RecordStatus::Pending));
    assert_eq!(record.doctor_notes, None);
}

#[test]
fn pending_record_requires_patient_name() {
    let body = r#"{
        "id": "x",
        "diagnosis": "Flu",
        "medication": "Rest",
        "date": "2026-07-01"
    }"#;
    assert!(serde_json::from_str::<PendingRecord>(body).is_err());
}

// =============================================================================
// appointments
// =============================================================================

#[test]
fn appointment_decodes_backend_document() {
    let body = r#"{
        "id": "665f1c2e9b1e8a0087654321",
        "patient_id": 7,
        "patient_name": "Ravi Kumar",
        "doctor_id": 12,
        "doctor_name": "Dr. Mehta",
        "appointment_date": "2026-08-10",
        "appointment_time": "10:00",
        "reason": "Fever",
        "status": "pending",
        "created_at": "2026-08-01T08:00:00Z"
    }"#;
    let appointment: Appointment = serde_json::from_str(body).unwrap();
    assert_eq!(appointment.doctor_id, Some(12));
    assert_eq!(appointment.status, AppointmentStatus::Pending);
    assert_eq!(appointment.appointment_time.as_deref(), Some("10:00"));
}

#[test]
fn appointment_status_parses_all_states() {
    for (text, status) in [
        ("pending", AppointmentStatus::Pending),
        ("confirmed", AppointmentStatus::Confirmed),
        ("cancelled", AppointmentStatus::Cancelled),
        ("completed", AppointmentStatus::Completed),
    ] {
        assert_eq!(text.parse::<AppointmentStatus>().unwrap(), status);
    }
    assert!("rescheduled".parse::<AppointmentStatus>().is_err());
}

#[test]
fn update_request_serializes_status_lowercase() {
    let request = UpdateAppointmentRequest {
        appointment_id: "abc".into(),
        status: AppointmentStatus::Confirmed,
    };
    let value = serde_json::to_value(&request).unwrap();
    assert_eq!(value["status"], "confirmed");
}

// =============================================================================
// analytics
// =============================================================================

#[test]
fn region_risk_decodes_with_integer_score() {
    let body = r#"{
        "region_id": "Chennai_South",
        "region": "Chennai South",
        "risk_score": 72,
        "risk_level": "high",
        "total_cases": 140,
        "growth_rate": 0.18,
        "is_anomaly": true
    }"#;
    let risk: RegionRisk = serde_json::from_str(body).unwrap();
    assert!((risk.risk_score - 72.0).abs() < f64::EPSILON);
    assert_eq!(risk.risk_level, RiskLevel::High);
    assert!(risk.is_anomaly);
}

#[test]
fn admin_dashboard_decodes_full_overview() {
    let body = r#"{
        "total_patients": 120,
        "cases_today": 4,
        "active_alerts": 2,
        "avg_risk_score": 55,
        "cases_trend": [{"date": "2026-08-01", "score": 50, "cases": 3}],
        "disease_distribution": [{"disease": "Dengue", "count": 9, "percentage": 45.0}],
        "region_risks": [],
        "water_quality": [{"region": "Chennai South", "ph": 7.1, "tds": 310.0}],
        "weather_data": {"rainfall": 45.0, "humidity": 78.0, "temperature": 32.0, "air_quality": "Good"}
    }"#;
    let dashboard: AdminDashboardData = serde_json::from_str(body).unwrap();
    assert_eq!(dashboard.total_patients, 120);
    assert_eq!(dashboard.cases_trend.len(), 1);
    assert_eq!(dashboard.water_quality[0].region, "Chennai South");
    assert_eq!(dashboard.weather_data.air_quality.as_deref(), Some("Good"));
}

#[test]
fn patient_dashboard_decodes_with_alert_notifications() {
    let body = r#"{
        "risk_score": 64,
        "risk_level": "high",
        "rainfall": 12.5,
        "humidity": 80.0,
        "water_ph": 7.2,
        "water_tds": 280.0,
        "trends": [{"date": "2026-08-01", "risk_score": 60}],
        "alerts": [{
            "id": "n1",
            "user_id": 7,
            "type": "risk",
            "title": "High health risk alert for Chennai South",
            "message": "Stay informed.",
            "is_read": false,
            "level": "high"
        }],
        "region": "Chennai_South"
    }"#;
    let dashboard: PatientDashboardData = serde_json::from_str(body).unwrap();
    assert_eq!(dashboard.risk_level, RiskLevel::High);
    assert_eq!(dashboard.alerts[0].kind, NotificationType::Risk);
    assert_eq!(dashboard.alerts[0].level, Some(RiskLevel::High));
}

// =============================================================================
// notifications
// =============================================================================

#[test]
fn notification_type_field_maps_to_kind() {
    let body = r#"{
        "id": "n2",
        "type": "appointment",
        "title": "New appointment request",
        "message": "Ravi has requested an appointment.",
        "is_read": false,
        "created_at": "2026-08-01T09:00:00Z"
    }"#;
    let notification: Notification = serde_json::from_str(body).unwrap();
    assert_eq!(notification.kind, NotificationType::Appointment);
    assert!(!notification.is_read);
    assert_eq!(notification.level, None);
}

#[test]
fn notification_serializes_kind_back_as_type() {
    let notification = Notification {
        id: "n3".into(),
        user_id: None,
        kind: NotificationType::Info,
        title: "t".into(),
        message: "m".into(),
        is_read: true,
        created_at: None,
        level: None,
    };
    let value = serde_json::to_value(&notification).unwrap();
    assert_eq!(value["type"], "info");
}
