//! User lookup hooks.

use leptos::prelude::*;

use super::{QueryResult, use_query};
use crate::net::operation::{FirebaseUidPath, UserByFirebaseUid};
use crate::net::schema::UserByFirebaseUidResponse;

/// `GET /users/firebase/{firebaseUID}`; waits while `firebase_uid` is empty.
/// Error fallback: "Failed to fetch user by Firebase UID".
pub fn use_user_by_firebase_uid(firebase_uid: Signal<String>) -> QueryResult<UserByFirebaseUidResponse> {
    use_query::<UserByFirebaseUid>(move || {
        let firebase_uid = firebase_uid.get();
        (!firebase_uid.is_empty()).then_some(FirebaseUidPath { firebase_uid })
    })
}
