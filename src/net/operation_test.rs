use super::*;

fn bound_as_query<O: QueryOperation>() -> (Method, &'static str) {
    (O::METHOD, O::PATH)
}

fn bound_as_mutation<O: MutationOperation>() -> (Method, &'static str) {
    (O::METHOD, O::PATH)
}

#[test]
fn every_backend_endpoint_is_declared_once() {
    let entries = [
        bound_as_query::<VerifyToken>(),
        bound_as_mutation::<SignUp>(),
        bound_as_mutation::<VerifySignUpProvider>(),
        bound_as_mutation::<ChangePassword>(),
        bound_as_query::<UserByFirebaseUid>(),
    ];
    assert_eq!(
        entries,
        [
            (Method::Post, "/auth/verify"),
            (Method::Post, "/auth/signup"),
            (Method::Post, "/auth/signup/verify"),
            (Method::Patch, "/auth/change-password"),
            (Method::Get, "/users/firebase/{firebaseUID}"),
        ]
    );
    for (i, a) in entries.iter().enumerate() {
        for b in &entries[i + 1..] {
            assert_ne!(a, b);
        }
    }
}

#[test]
fn fallback_errors_are_operation_specific() {
    assert_eq!(VerifyToken::FALLBACK_ERROR, "Login failed");
    assert_eq!(SignUp::FALLBACK_ERROR, "Signup failed");
    assert_eq!(VerifySignUpProvider::FALLBACK_ERROR, "Verification failed");
    assert_eq!(ChangePassword::FALLBACK_ERROR, "Password change failed");
    assert_eq!(UserByFirebaseUid::FALLBACK_ERROR, "Failed to fetch user by Firebase UID");
}

#[test]
fn method_renders_uppercase() {
    assert_eq!(Method::Patch.as_str(), "PATCH");
    assert_eq!(Method::Get.as_str(), "GET");
}

// =============================================================
// Path rendering
// =============================================================

#[test]
fn static_path_renders_unchanged() {
    assert_eq!(VerifyToken::path(&()).unwrap(), "/auth/verify");
}

#[test]
fn firebase_uid_is_substituted() {
    let params = FirebaseUidPath { firebase_uid: "AbC123xyz".to_owned() };
    assert_eq!(UserByFirebaseUid::path(&params).unwrap(), "/users/firebase/AbC123xyz");
}

#[test]
fn path_values_are_percent_encoded() {
    let params = FirebaseUidPath { firebase_uid: "a/b c?".to_owned() };
    assert_eq!(UserByFirebaseUid::path(&params).unwrap(), "/users/firebase/a%2Fb%20c%3F");
}

#[test]
fn missing_param_is_an_error() {
    assert_eq!(
        render_path("/users/{id}", &()),
        Err(ApiError::MissingPathParam("id".to_owned()))
    );
}

#[test]
fn unterminated_brace_is_an_error() {
    assert!(matches!(render_path("/users/{id", &()), Err(ApiError::MissingPathParam(_))));
}

#[test]
fn encode_keeps_unreserved_and_encodes_utf8() {
    let unreserved = FirebaseUidPath { firebase_uid: "a-b.c_d~e".to_owned() };
    assert_eq!(UserByFirebaseUid::path(&unreserved).unwrap(), "/users/firebase/a-b.c_d~e");
    let utf8 = FirebaseUidPath { firebase_uid: "é".to_owned() };
    assert_eq!(UserByFirebaseUid::path(&utf8).unwrap(), "/users/firebase/%C3%A9");
}
