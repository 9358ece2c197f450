//! One auth attempt from button press to session user.
//!
//! DESIGN
//! ======
//! Each submit function validates first and returns before touching the
//! provider when the form is blocked. Provider failures are logged and
//! collapsed to the one sentence the page shows for that flow. Session
//! writes, persistence and navigation stay with the caller.

#[cfg(test)]
#[path = "submit_test.rs"]
mod submit_test;

use super::form::{AuthForm, FormErrors, check_sign_in, check_sign_up};
use super::provider::{EMAIL_ALREADY_IN_USE, IdentityProvider, ProviderError, ProviderUser};
use crate::state::auth::{Role, SessionUser};

pub const GOOGLE_FAILED: &str = "Failed to sign in with Google. Please try again.";
pub const EMAIL_SIGN_IN_FAILED: &str = "Invalid email or password. Please try again.";
pub const EMAIL_SIGN_UP_FAILED: &str = "Failed to create account. Please try again.";
pub const EMAIL_IN_USE: &str = "This email is already in use. Please try logging in instead.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthFlow {
    Google,
    EmailSignIn,
    EmailSignUp,
}

impl AuthFlow {
    /// Sentence shown in the page alert when this flow's provider call fails.
    #[must_use]
    pub fn failure_message(self, error: &ProviderError) -> &'static str {
        match self {
            Self::Google => GOOGLE_FAILED,
            Self::EmailSignIn => EMAIL_SIGN_IN_FAILED,
            Self::EmailSignUp if error.code() == Some(EMAIL_ALREADY_IN_USE) => EMAIL_IN_USE,
            Self::EmailSignUp => EMAIL_SIGN_UP_FAILED,
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Google => "Google Login Failed",
            Self::EmailSignIn => "Email Login Failed",
            Self::EmailSignUp => "Email Signup Failed",
        }
    }

    fn fail(self, error: &ProviderError) -> FormErrors {
        leptos::logging::error!("{}: {error} (code {:?})", self.label(), error.code());
        FormErrors::auth(self.failure_message(error))
    }
}

/// Session record for a provider account. `name` overrides the provider's
/// display name (sign-up uses the typed full name).
#[must_use]
pub fn session_user(user: ProviderUser, role: Role, name: Option<&str>) -> SessionUser {
    SessionUser {
        name: name.map_or_else(|| user.display_name.unwrap_or_default(), str::to_owned),
        email: user.email.unwrap_or_default(),
        avatar: user.photo_url.unwrap_or_default(),
        uid: user.uid,
        role,
        id_token: user.id_token,
    }
}

/// # Errors
///
/// Returns the Google failure sentence as an `auth` error.
pub async fn submit_google<P>(provider: &P, role: Role) -> Result<SessionUser, FormErrors>
where
    P: IdentityProvider + ?Sized,
{
    match provider.sign_in_with_google(role).await {
        Ok(user) => Ok(session_user(user, role, None)),
        Err(e) => Err(AuthFlow::Google.fail(&e)),
    }
}

/// # Errors
///
/// Returns field errors without calling the provider when the form is
/// invalid, otherwise the sign-in failure sentence.
pub async fn submit_email_sign_in<P>(provider: &P, form: &AuthForm, role: Role) -> Result<SessionUser, FormErrors>
where
    P: IdentityProvider + ?Sized,
{
    check_sign_in(form)?;
    match provider.sign_in_with_email(&form.email, &form.password, role).await {
        Ok(user) => Ok(session_user(user, role, None)),
        Err(e) => Err(AuthFlow::EmailSignIn.fail(&e)),
    }
}

/// # Errors
///
/// Returns field errors without calling the provider when validation,
/// confirmation or strength fails, otherwise the sign-up failure sentence.
pub async fn submit_email_sign_up<P>(provider: &P, form: &AuthForm, role: Role) -> Result<SessionUser, FormErrors>
where
    P: IdentityProvider + ?Sized,
{
    check_sign_up(form)?;
    match provider
        .create_user_with_email(&form.email, &form.password, &form.full_name)
        .await
    {
        Ok(user) => Ok(session_user(user, role, Some(&form.full_name))),
        Err(e) => Err(AuthFlow::EmailSignUp.fail(&e)),
    }
}
