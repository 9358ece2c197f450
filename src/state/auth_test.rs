use super::*;

fn teacher() -> SessionUser {
    SessionUser {
        uid: "fb-9".to_owned(),
        email: "grace@school.edu".to_owned(),
        name: "Grace".to_owned(),
        role: Role::Teacher,
        avatar: String::new(),
        id_token: Some("tok".to_owned()),
    }
}

// =============================================================
// AuthState defaults
// =============================================================

#[test]
fn auth_state_default_no_user() {
    let state = AuthState::default();
    assert!(state.user.is_none());
    assert!(!state.is_authenticated());
}

#[test]
fn auth_state_default_loading_until_restored() {
    let state = AuthState::default();
    assert!(state.loading);
    assert_eq!(state.selected_role, Role::Student);
}

// =============================================================
// Transitions
// =============================================================

#[test]
fn set_user_authenticates_and_picks_landing() {
    let mut state = AuthState::default();
    state.set_user(teacher());
    assert!(state.is_authenticated());
    assert!(!state.loading);
    assert_eq!(state.landing_route(), Some("/teacher/home"));
    assert_eq!(state.id_token(), Some("tok"));
    assert_eq!(state.selected_role, Role::Teacher);
}

#[test]
fn restore_without_stored_user_stops_loading() {
    let mut state = AuthState::default();
    state.restore(None);
    assert!(!state.loading);
    assert!(state.user.is_none());
}

#[test]
fn restore_with_stored_user_signs_in() {
    let mut state = AuthState::default();
    state.restore(Some(teacher()));
    assert_eq!(state.landing_route(), Some("/teacher/home"));
}

#[test]
fn sign_out_clears_user() {
    let mut state = AuthState::default();
    state.set_user(teacher());
    state.sign_out();
    assert!(state.user.is_none());
    assert_eq!(state.landing_route(), None);
    assert_eq!(state.id_token(), None);
}

#[test]
fn set_user_role_only_changes_selection() {
    let mut state = AuthState::default();
    state.set_user_role(Role::Teacher);
    assert_eq!(state.selected_role, Role::Teacher);
    assert!(state.user.is_none());
}

// =============================================================
// Role
// =============================================================

#[test]
fn role_routes() {
    assert_eq!(Role::Student.home_route(), "/student/home");
    assert_eq!(Role::Teacher.home_route(), "/teacher/home");
}

#[test]
fn role_parses_lowercase_only() {
    assert_eq!("student".parse::<Role>(), Ok(Role::Student));
    assert_eq!("teacher".parse::<Role>(), Ok(Role::Teacher));
    assert_eq!("Teacher".parse::<Role>(), Err(UnknownRole("Teacher".to_owned())));
    assert!("admin".parse::<Role>().is_err());
}

#[test]
fn role_display_and_label() {
    assert_eq!(Role::Teacher.to_string(), "teacher");
    assert_eq!(Role::Teacher.label(), "Teacher");
}

#[test]
fn session_user_serde_uses_lowercase_role() {
    let json = serde_json::to_value(teacher()).unwrap();
    assert_eq!(json["role"], "teacher");
    let back: SessionUser = serde_json::from_value(json).unwrap();
    assert_eq!(back, teacher());
}

#[test]
fn session_user_without_token_decodes() {
    let user: SessionUser = serde_json::from_str(
        r#"{"uid":"u","email":"e@x.io","name":"N","role":"student","avatar":""}"#,
    )
    .unwrap();
    assert_eq!(user.id_token, None);
}
