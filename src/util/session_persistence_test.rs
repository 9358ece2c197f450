#![cfg(not(feature = "hydrate"))]

use super::*;
use crate::state::auth::Role;

fn ada() -> SessionUser {
    SessionUser {
        uid: "fb-1".to_owned(),
        email: "ada@school.edu".to_owned(),
        name: "Ada Lovelace".to_owned(),
        role: Role::Teacher,
        avatar: String::new(),
        id_token: Some("tok".to_owned()),
    }
}

#[test]
fn stored_record_reads_back() {
    let raw = encode(&ada()).unwrap();
    assert!(raw.contains(r#""role":"teacher""#));
    assert_eq!(decode(&raw), Some(ada()));
}

#[test]
fn record_without_token_still_decodes() {
    let raw = r#"{"uid":"u","email":"e@x.io","name":"N","role":"student","avatar":""}"#;
    let user = decode(raw).unwrap();
    assert_eq!(user.role, Role::Student);
    assert_eq!(user.id_token, None);
}

#[test]
fn malformed_record_is_no_session() {
    assert_eq!(decode(""), None);
    assert_eq!(decode("not json"), None);
    assert_eq!(decode(r#"{"uid":"u","role":"admin"}"#), None);
}

#[test]
fn storage_is_noop_off_browser() {
    save(&ada());
    assert_eq!(load(), None);
    clear();
}
