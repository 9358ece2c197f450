//! Identity-provider seam.
//!
//! DESIGN
//! ======
//! The auth page only needs three calls and a uniform failure shape. The
//! browser uses [`crate::auth::firebase::FirebaseAuth`]; tests use an
//! in-memory provider.

#[cfg(test)]
#[path = "provider_test.rs"]
mod provider_test;

use async_trait::async_trait;

use crate::state::auth::Role;

pub const EMAIL_ALREADY_IN_USE: &str = "auth/email-already-in-use";

/// Account returned by a successful provider call.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProviderUser {
    pub uid: String,
    pub email: Option<String>,
    pub display_name: Option<String>,
    pub photo_url: Option<String>,
    pub id_token: Option<String>,
}

/// Provider failure. `code` is an `auth/...` code when the provider gave one.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct ProviderError {
    pub code: Option<String>,
    pub message: String,
}

impl ProviderError {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self { code: None, message: message.into() }
    }

    #[must_use]
    pub fn with_code(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self { code: Some(code.into()), message: message.into() }
    }

    #[must_use]
    pub fn code(&self) -> Option<&str> {
        self.code.as_deref()
    }
}

/// Sign-in and account creation against an external identity service.
///
/// The role is passed along for providers that record it; it never changes
/// which account is returned.
#[async_trait(?Send)]
pub trait IdentityProvider {
    async fn sign_in_with_google(&self, role: Role) -> Result<ProviderUser, ProviderError>;

    async fn sign_in_with_email(
        &self,
        email: &str,
        password: &str,
        role: Role,
    ) -> Result<ProviderUser, ProviderError>;

    async fn create_user_with_email(
        &self,
        email: &str,
        password: &str,
        full_name: &str,
    ) -> Result<ProviderUser, ProviderError>;
}

/// Map an Identity Toolkit error string to an `auth/...` code.
///
/// Messages may carry detail after ` : ` (`WEAK_PASSWORD : Password should
/// be at least 6 characters`); only the leading token is matched.
#[must_use]
pub fn map_identity_toolkit_error(message: &str) -> &'static str {
    let token = message.split(" : ").next().unwrap_or_default().trim();
    match token {
        "EMAIL_EXISTS" => EMAIL_ALREADY_IN_USE,
        "EMAIL_NOT_FOUND" => "auth/user-not-found",
        "INVALID_PASSWORD" => "auth/wrong-password",
        "INVALID_LOGIN_CREDENTIALS" => "auth/invalid-credential",
        "USER_DISABLED" => "auth/user-disabled",
        "WEAK_PASSWORD" => "auth/weak-password",
        "INVALID_EMAIL" => "auth/invalid-email",
        "TOO_MANY_ATTEMPTS_TRY_LATER" => "auth/too-many-requests",
        "INVALID_IDP_RESPONSE" => "auth/invalid-credential",
        "OPERATION_NOT_ALLOWED" => "auth/operation-not-allowed",
        _ => "auth/internal-error",
    }
}
