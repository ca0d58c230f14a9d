use super::*;
use crate::auth::tokens::MemoryTokenStore;

fn test_client() -> ApiClient {
    ApiClient::new("http://localhost:8000/api/", Arc::new(MemoryTokenStore::new()))
}

// =============================================================================
// base url
// =============================================================================

#[test]
fn base_url_trailing_slash_is_trimmed() {
    let api = test_client();
    assert_eq!(api.base_url(), "http://localhost:8000/api");
}

#[test]
fn clones_share_one_token_store() {
    let api = test_client();
    let clone = api.clone();
    api.token_store().set_tokens("a", "r");
    assert_eq!(clone.token_store().access_token().as_deref(), Some("a"));
}

// =============================================================================
// error_from_response
// =============================================================================

#[test]
fn error_with_field_map_becomes_validation() {
    let body = r#"{"message":"Registration failed","errors":{"email":["Email already registered"]}}"#;
    match error_from_response(400, body) {
        ApiError::Validation { message, errors } => {
            assert_eq!(message, "Registration failed");
            assert_eq!(errors["email"], vec!["Email already registered"]);
        }
        other => panic!("expected validation error, got {other:?}"),
    }
}

#[test]
fn error_with_empty_field_map_becomes_status() {
    let body = r#"{"message":"Access denied","errors":{}}"#;
    match error_from_response(403, body) {
        ApiError::Status { status, message } => {
            assert_eq!(status, 403);
            assert_eq!(message, "Access denied");
        }
        other => panic!("expected status error, got {other:?}"),
    }
}

#[test]
fn error_without_message_keys_falls_back_to_body() {
    match error_from_response(502, "bad gateway") {
        ApiError::Status { status, message } => {
            assert_eq!(status, 502);
            assert_eq!(message, "bad gateway");
        }
        other => panic!("expected status error, got {other:?}"),
    }
}

#[test]
fn error_with_empty_body_reports_http_status() {
    match error_from_response(500, "") {
        ApiError::Status { status, message } => {
            assert_eq!(status, 500);
            assert_eq!(message, "HTTP 500");
        }
        other => panic!("expected status error, got {other:?}"),
    }
}

#[test]
fn validation_without_message_gets_default() {
    let body = r#"{"errors":{"date":["This field is required."]}}"#;
    match error_from_response(400, body) {
        ApiError::Validation { message, errors } => {
            assert_eq!(message, "validation failed");
            assert_eq!(errors["date"], vec!["This field is required."]);
        }
        other => panic!("expected validation error, got {other:?}"),
    }
}
