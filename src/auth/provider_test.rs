use super::*;

#[test]
fn maps_known_identity_toolkit_errors() {
    assert_eq!(map_identity_toolkit_error("EMAIL_EXISTS"), EMAIL_ALREADY_IN_USE);
    assert_eq!(map_identity_toolkit_error("INVALID_PASSWORD"), "auth/wrong-password");
    assert_eq!(map_identity_toolkit_error("EMAIL_NOT_FOUND"), "auth/user-not-found");
    assert_eq!(
        map_identity_toolkit_error("TOO_MANY_ATTEMPTS_TRY_LATER"),
        "auth/too-many-requests"
    );
}

#[test]
fn detail_after_separator_is_ignored() {
    assert_eq!(
        map_identity_toolkit_error("WEAK_PASSWORD : Password should be at least 6 characters"),
        "auth/weak-password"
    );
}

#[test]
fn unknown_errors_are_internal() {
    assert_eq!(map_identity_toolkit_error("SOMETHING_NEW"), "auth/internal-error");
    assert_eq!(map_identity_toolkit_error(""), "auth/internal-error");
}

#[test]
fn provider_error_displays_message() {
    let err = ProviderError::with_code(EMAIL_ALREADY_IN_USE, "EMAIL_EXISTS");
    assert_eq!(err.to_string(), "EMAIL_EXISTS");
    assert_eq!(err.code(), Some(EMAIL_ALREADY_IN_USE));
    assert_eq!(ProviderError::new("boom").code(), None);
}
