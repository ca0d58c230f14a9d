use super::*;

/// Assemble an unsigned JWT-like token around the given claims JSON.
pub(crate) fn encode_token(claims: &serde_json::Value) -> String {
    let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
    let payload = URL_SAFE_NO_PAD.encode(claims.to_string().as_bytes());
    format!("{header}.{payload}.signature")
}

pub(crate) fn patient_claims(exp: u64) -> serde_json::Value {
    serde_json::json!({
        "user_id": 7,
        "email": "ravi@example.com",
        "name": "Ravi Kumar",
        "role": "patient",
        "exp": exp,
    })
}

// =============================================================================
// decode_access_claims
// =============================================================================

#[test]
fn decodes_valid_token() {
    let token = encode_token(&patient_claims(2_000_000_000));
    let claims = decode_access_claims(&token).unwrap();
    assert_eq!(claims.user_id, 7);
    assert_eq!(claims.email, "ravi@example.com");
    assert_eq!(claims.name, "Ravi Kumar");
    assert_eq!(claims.role, Role::Patient);
    assert_eq!(claims.exp, 2_000_000_000);
}

#[test]
fn decodes_each_role() {
    for (value, role) in [
        ("patient", Role::Patient),
        ("doctor", Role::Doctor),
        ("admin", Role::Admin),
    ] {
        let mut claims = patient_claims(2_000_000_000);
        claims["role"] = serde_json::json!(value);
        let token = encode_token(&claims);
        assert_eq!(decode_access_claims(&token).unwrap().role, role);
    }
}

#[test]
fn rejects_token_without_three_segments() {
    assert!(matches!(
        decode_access_claims("only-one-segment"),
        Err(ClaimsError::Malformed)
    ));
    assert!(matches!(
        decode_access_claims("two.segments"),
        Err(ClaimsError::Malformed)
    ));
    assert!(matches!(
        decode_access_claims("a.b.c.d"),
        Err(ClaimsError::Malformed)
    ));
}

#[test]
fn rejects_invalid_base64_payload() {
    assert!(matches!(
        decode_access_claims("header.$$$not-base64$$$.sig"),
        Err(ClaimsError::Encoding(_))
    ));
}

#[test]
fn rejects_non_json_payload() {
    let payload = URL_SAFE_NO_PAD.encode(b"plain text");
    let token = format!("header.{payload}.sig");
    assert!(matches!(
        decode_access_claims(&token),
        Err(ClaimsError::Payload(_))
    ));
}

#[test]
fn rejects_claims_missing_role() {
    let claims = serde_json::json!({
        "user_id": 7,
        "email": "ravi@example.com",
        "name": "Ravi Kumar",
        "exp": 2_000_000_000u64,
    });
    let token = encode_token(&claims);
    assert!(matches!(
        decode_access_claims(&token),
        Err(ClaimsError::Payload(_))
    ));
}

// =============================================================================
// AccessClaims
// =============================================================================

#[test]
fn expiry_is_inclusive_at_the_boundary() {
    let token = encode_token(&patient_claims(1_000));
    let claims = decode_access_claims(&token).unwrap();
    assert!(claims.is_expired_at(1_000));
    assert!(claims.is_expired_at(1_001));
    assert!(!claims.is_expired_at(999));
}

#[test]
fn to_user_copies_identity_fields() {
    let token = encode_token(&patient_claims(2_000_000_000));
    let user = decode_access_claims(&token).unwrap().to_user();
    assert_eq!(user.id, 7);
    assert_eq!(user.email, "ravi@example.com");
    assert_eq!(user.name, "Ravi Kumar");
    assert_eq!(user.role, Role::Patient);
    assert_eq!(user.phone, None);
}
