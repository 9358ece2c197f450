use super::*;

#[test]
fn status_without_body_message_has_no_message() {
    let err = ApiError::Status { status: 500, message: None };
    assert_eq!(err.message(), None);
    assert_eq!(err.to_string(), "request failed with status 500");
}

#[test]
fn status_with_body_message_exposes_it() {
    let err = ApiError::Status { status: 401, message: Some("Token expired".to_owned()) };
    assert_eq!(err.message().as_deref(), Some("Token expired"));
}

#[test]
fn empty_transport_text_counts_as_no_message() {
    assert_eq!(ApiError::Transport("   ".to_owned()).message(), None);
    assert_eq!(
        ApiError::Transport("NetworkError when attempting to fetch resource.".to_owned())
            .message()
            .as_deref(),
        Some("NetworkError when attempting to fetch resource.")
    );
}

#[test]
fn unavailable_has_no_message() {
    assert_eq!(ApiError::Unavailable.message(), None);
}

#[test]
fn decode_error_message_is_its_display() {
    let err = ApiError::Decode("missing field `email`".to_owned());
    assert_eq!(err.message().as_deref(), Some("response decode failed: missing field `email`"));
}

// =============================================================
// normalize_error
// =============================================================

#[test]
fn normalize_error_none_stays_none() {
    assert_eq!(normalize_error(None, "Login failed"), None);
}

#[test]
fn normalize_error_uses_fallback_without_message() {
    let err = ApiError::Status { status: 502, message: None };
    assert_eq!(normalize_error(Some(&err), "Login failed").as_deref(), Some("Login failed"));
}

#[test]
fn normalize_error_prefers_underlying_message() {
    let err = ApiError::Status { status: 400, message: Some("Email taken".to_owned()) };
    assert_eq!(normalize_error(Some(&err), "Signup failed").as_deref(), Some("Email taken"));
}

// =============================================================
// error_body_message
// =============================================================

#[test]
fn error_body_message_reads_message_then_error() {
    assert_eq!(error_body_message(r#"{"message":"Bad token"}"#).as_deref(), Some("Bad token"));
    assert_eq!(error_body_message(r#"{"error":"Forbidden"}"#).as_deref(), Some("Forbidden"));
}

#[test]
fn error_body_message_ignores_non_json_and_blank() {
    assert_eq!(error_body_message("<html>502</html>"), None);
    assert_eq!(error_body_message(r#"{"message":""}"#), None);
    assert_eq!(error_body_message(r#"{"message":{"nested":true}}"#), None);
}
