//! Auth endpoint hooks.

use leptos::prelude::*;

use super::{MutationHandle, QueryResult, use_mutation, use_query};
use crate::net::operation::{ChangePassword, SignUp, VerifySignUpProvider, VerifyToken};
use crate::net::schema::TokenVerificationResponse;
use crate::state::auth::AuthState;

/// `POST /auth/verify` as a query. Error fallback: "Login failed".
///
/// Waits for a session user, so a restored session is verified with its
/// token rather than anonymously.
pub fn use_login() -> QueryResult<TokenVerificationResponse> {
    let auth = use_context::<RwSignal<AuthState>>();
    use_query::<VerifyToken>(move || auth.is_some_and(|auth| auth.with(AuthState::is_authenticated)).then_some(()))
}

/// `POST /auth/signup`. Error fallback: "Signup failed".
pub fn use_signup() -> MutationHandle<SignUp> {
    use_mutation::<SignUp>()
}

/// `POST /auth/signup/verify`. Error fallback: "Verification failed".
pub fn use_verify_sign_up_provider() -> MutationHandle<VerifySignUpProvider> {
    use_mutation::<VerifySignUpProvider>()
}

/// `PATCH /auth/change-password`. Error fallback: "Password change failed".
pub fn use_change_password() -> MutationHandle<ChangePassword> {
    use_mutation::<ChangePassword>()
}
