use std::sync::Arc;

use futures::executor::block_on;
use leptos::reactive::owner::Owner;

use super::*;
use crate::net::error::ApiError;
use crate::net::schema::{ChangePasswordBody, SignUpBody};
use crate::net::transport::fake::FakeTransport;
use crate::state::auth::{Role, SessionUser};
use crate::util::task::test_pool::run_until_stalled;

const USER_JSON: &str = r#"{"_id":"u1","firebaseUID":"fb-1","email":"ada@school.edu","firstName":"Ada"}"#;

fn in_app<R>(fake: &Arc<FakeTransport>, auth: Option<AuthState>, f: impl FnOnce() -> R) -> R {
    let owner = Owner::new();
    owner.with(|| {
        provide_context(ApiClient::with_transport("https://api.test", fake.clone()));
        if let Some(auth) = auth {
            provide_context(RwSignal::new(auth));
        }
        f()
    })
}

fn sign_up_body() -> SignUpBody {
    SignUpBody {
        email: "ada@school.edu".to_owned(),
        password: "Passw0rd!".to_owned(),
        first_name: "Ada".to_owned(),
        last_name: "Lovelace".to_owned(),
    }
}

fn signed_in() -> AuthState {
    let mut state = AuthState::default();
    state.set_user(SessionUser {
        uid: "fb-1".to_owned(),
        email: "ada@school.edu".to_owned(),
        name: "Ada".to_owned(),
        role: Role::Teacher,
        avatar: String::new(),
        id_token: Some("id-token".to_owned()),
    });
    state
}

// =============================================================
// Mutations
// =============================================================

#[test]
fn signup_starts_idle() {
    let fake = FakeTransport::new();
    in_app(&fake, None, || {
        let signup = use_signup();
        assert!(signup.is_idle());
        assert_eq!(signup.status(), MutationStatus::Idle);
        assert!(signup.data().is_none());
        assert!(signup.error().is_none());
    });
}

#[test]
fn signup_success_passes_data_through() {
    let fake = FakeTransport::new();
    fake.reply(201, USER_JSON);
    in_app(&fake, None, || {
        let signup = use_signup();
        let created = block_on(signup.mutate_async(sign_up_body())).unwrap().unwrap();
        assert_eq!(created.firebase_uid, "fb-1");
        assert!(signup.is_success());
        assert_eq!(signup.data().map(|u| u.email), Some("ada@school.edu".to_owned()));
        assert!(signup.error().is_none());
    });
}

#[test]
fn signup_failure_without_message_uses_fallback() {
    let fake = FakeTransport::new();
    fake.reply(500, "");
    in_app(&fake, None, || {
        let signup = use_signup();
        let err = block_on(signup.mutate_async(sign_up_body())).unwrap_err();
        assert_eq!(err, "Signup failed");
        assert!(signup.is_error());
        assert_eq!(signup.error().as_deref(), Some("Signup failed"));
        assert!(signup.data().is_none());
    });
}

#[test]
fn change_password_failure_surfaces_server_message() {
    let fake = FakeTransport::new();
    fake.reply(400, r#"{"message":"Passwords do not match"}"#);
    in_app(&fake, Some(signed_in()), || {
        let change = use_change_password();
        let body = ChangePasswordBody {
            new_password: "N3w!passw".to_owned(),
            new_password_confirm: "other".to_owned(),
        };
        let err = block_on(change.mutate_async(body)).unwrap_err();
        assert_eq!(err, "Passwords do not match");
        assert_eq!(change.error().as_deref(), Some("Passwords do not match"));
    });
}

#[test]
fn change_password_with_empty_reply_succeeds() {
    let fake = FakeTransport::new();
    fake.reply(204, "");
    in_app(&fake, Some(signed_in()), || {
        let change = use_change_password();
        let body = ChangePasswordBody {
            new_password: "N3w!passw".to_owned(),
            new_password_confirm: "N3w!passw".to_owned(),
        };
        assert_eq!(block_on(change.mutate_async(body)), Ok(None));
        assert!(change.is_success());
        assert!(change.error().is_none());
        assert!(change.data().is_none());
    });
}

#[test]
fn mutate_settles_through_the_task_queue() {
    let fake = FakeTransport::new();
    fake.reply(201, USER_JSON);
    in_app(&fake, None, || {
        let signup = use_signup();
        signup.mutate(sign_up_body());
        assert!(signup.is_pending());
        run_until_stalled();
        assert!(signup.is_success());
        assert_eq!(signup.data().map(|u| u.firebase_uid), Some("fb-1".to_owned()));
    });
}

#[test]
fn mutation_sends_session_bearer() {
    let fake = FakeTransport::new();
    fake.reply(201, USER_JSON);
    in_app(&fake, Some(signed_in()), || {
        let verify = use_verify_sign_up_provider();
        let body = crate::net::schema::VerifySignUpProviderBody {
            first_name: "Ada".to_owned(),
            last_name: "Lovelace".to_owned(),
        };
        block_on(verify.mutate_async(body)).unwrap();
    });
    let sent = fake.sent();
    assert_eq!(sent[0].url, "https://api.test/auth/signup/verify");
    assert_eq!(sent[0].bearer.as_deref(), Some("id-token"));
}

#[test]
fn mutate_async_marks_pending_before_polling() {
    let fake = FakeTransport::new();
    fake.reply(201, USER_JSON);
    in_app(&fake, None, || {
        let signup = use_signup();
        let pending = signup.mutate_async(sign_up_body());
        assert!(signup.is_pending());
        block_on(pending).unwrap();
        assert!(signup.is_success());
    });
}

#[test]
fn reset_returns_to_idle_and_drops_in_flight_result() {
    let fake = FakeTransport::new();
    fake.reply(201, USER_JSON);
    in_app(&fake, None, || {
        let signup = use_signup();
        let pending = signup.mutate_async(sign_up_body());
        signup.reset();
        assert!(signup.is_idle());
        // The awaited caller still gets its answer; the hook state ignores it.
        assert!(block_on(pending).is_ok());
        assert!(signup.is_idle());
        assert!(signup.data().is_none());
    });
}

// =============================================================
// Queries
// =============================================================

#[test]
fn login_failure_without_message_is_login_failed() {
    let fake = FakeTransport::new();
    fake.fail(ApiError::Transport(String::new()));
    in_app(&fake, Some(signed_in()), || {
        let login = use_login();
        assert!(login.is_loading.get_untracked());
        run_until_stalled();
        assert!(!login.is_loading.get_untracked());
        assert!(login.data.get_untracked().is_none());
        assert_eq!(login.error.get_untracked().as_deref(), Some("Login failed"));
    });
    let sent = fake.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].url, "https://api.test/auth/verify");
    assert_eq!(sent[0].bearer.as_deref(), Some("id-token"));
}

#[test]
fn login_waits_for_a_session_user() {
    let fake = FakeTransport::new();
    in_app(&fake, Some(AuthState::default()), || {
        let login = use_login();
        assert!(!login.is_loading.get_untracked());
        login.refetch.run(());
        run_until_stalled();
        assert!(login.error.get_untracked().is_none());
    });
    assert!(fake.sent().is_empty());
}

#[test]
fn refetching_unchanged_backend_yields_same_data() {
    let fake = FakeTransport::new();
    fake.reply(200, USER_JSON);
    fake.reply(200, USER_JSON);
    in_app(&fake, Some(signed_in()), || {
        let user = use_user_by_firebase_uid(Signal::derive(|| "fb-1".to_owned()));
        assert!(user.is_loading.get_untracked());
        run_until_stalled();
        let first = user.data.get_untracked();

        user.refetch.run(());
        assert!(user.is_loading.get_untracked());
        run_until_stalled();
        let second = user.data.get_untracked();

        assert_eq!(first.as_ref().map(|u| u.firebase_uid.as_str()), Some("fb-1"));
        assert_eq!(first, second);
        assert!(user.error.get_untracked().is_none());
    });
    let sent = fake.sent();
    assert_eq!(sent.len(), 2);
    assert!(sent.iter().all(|r| r.url == "https://api.test/users/firebase/fb-1"));
}

#[test]
fn failed_refetch_keeps_last_user() {
    let fake = FakeTransport::new();
    fake.reply(200, USER_JSON);
    fake.reply(500, "");
    in_app(&fake, Some(signed_in()), || {
        let user = use_user_by_firebase_uid(Signal::derive(|| "fb-1".to_owned()));
        run_until_stalled();
        user.refetch.run(());
        run_until_stalled();
        assert!(user.data.get_untracked().is_some());
        assert_eq!(user.error.get_untracked().as_deref(), Some("Failed to fetch user by Firebase UID"));
    });
}

#[test]
fn user_lookup_waits_for_a_firebase_uid() {
    let fake = FakeTransport::new();
    in_app(&fake, None, || {
        let user = use_user_by_firebase_uid(Signal::derive(String::new));
        assert!(!user.is_loading.get_untracked());
        user.refetch.run(());
        run_until_stalled();
        assert!(user.data.get_untracked().is_none());
    });
    assert!(fake.sent().is_empty());
}

#[test]
fn session_client_without_auth_context_sends_no_bearer() {
    let fake = FakeTransport::new();
    in_app(&fake, None, || {
        let session = SessionClient::from_context();
        let client = session.current();
        assert!(!format!("{client:?}").contains("<redacted>"));
    });
}
