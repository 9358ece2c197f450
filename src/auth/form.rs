//! Auth form model and synchronous validation.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use super::strength::{MIN_PASSWORD_LEN, MIN_SIGN_UP_STRENGTH, password_strength};

pub const EMAIL_REQUIRED: &str = "Email is required";
pub const EMAIL_INVALID: &str = "Invalid email format";
pub const PASSWORD_REQUIRED: &str = "Password is required";
pub const PASSWORD_TOO_SHORT: &str = "Password must be at least 8 characters";
pub const FULL_NAME_REQUIRED: &str = "Full name is required";
pub const PASSWORDS_MISMATCH: &str = "Passwords do not match";
pub const PASSWORD_TOO_WEAK: &str = "Please create a stronger password";

/// Which card the auth page shows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthMode {
    #[default]
    SignIn,
    SignUp,
}

impl AuthMode {
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::SignIn => Self::SignUp,
            Self::SignUp => Self::SignIn,
        }
    }
}

/// Current field values of the auth page.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthForm {
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub full_name: String,
}

/// Per-field messages plus the page-level `auth` alert.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormErrors {
    pub email: Option<String>,
    pub password: Option<String>,
    pub full_name: Option<String>,
    pub auth: Option<String>,
}

impl FormErrors {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.email.is_none() && self.password.is_none() && self.full_name.is_none() && self.auth.is_none()
    }

    /// Only a page-level alert.
    #[must_use]
    pub fn auth(message: &str) -> Self {
        Self { auth: Some(message.to_owned()), ..Self::default() }
    }

    /// Only a password-field message.
    #[must_use]
    pub fn password(message: &str) -> Self {
        Self { password: Some(message.to_owned()), ..Self::default() }
    }
}

/// Field validation for `mode`. Never sets `auth`.
#[must_use]
pub fn validate_form(form: &AuthForm, mode: AuthMode) -> FormErrors {
    let sign_up = mode == AuthMode::SignUp;
    let mut errors = FormErrors::default();

    if form.email.is_empty() {
        errors.email = Some(EMAIL_REQUIRED.to_owned());
    } else if !is_valid_email(&form.email) {
        errors.email = Some(EMAIL_INVALID.to_owned());
    }

    if form.password.is_empty() {
        errors.password = Some(PASSWORD_REQUIRED.to_owned());
    } else if sign_up && form.password.chars().count() < MIN_PASSWORD_LEN {
        errors.password = Some(PASSWORD_TOO_SHORT.to_owned());
    }

    if sign_up && form.full_name.is_empty() {
        errors.full_name = Some(FULL_NAME_REQUIRED.to_owned());
    }

    errors
}

/// Unanchored `\S+@\S+\.\S+`: some whitespace-free run holds an `@` with at
/// least one character before it, and after it at least one character, a
/// `.`, and at least one more character.
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    email.split_whitespace().any(|token| {
        let chars: Vec<char> = token.chars().collect();
        chars.iter().enumerate().any(|(at, &c)| {
            c == '@'
                && at > 0
                && chars
                    .iter()
                    .enumerate()
                    .any(|(dot, &d)| d == '.' && dot >= at + 2 && dot + 1 < chars.len())
        })
    })
}

/// An empty confirmation counts as matching (nothing typed yet).
#[must_use]
pub fn passwords_match(password: &str, confirm_password: &str) -> bool {
    confirm_password.is_empty() || password == confirm_password
}

/// Everything that must hold before a sign-in reaches the provider.
///
/// # Errors
///
/// Returns the field errors when validation fails.
pub fn check_sign_in(form: &AuthForm) -> Result<(), FormErrors> {
    let errors = validate_form(form, AuthMode::SignIn);
    if errors.is_empty() { Ok(()) } else { Err(errors) }
}

/// Everything that must hold before a sign-up reaches the provider:
/// field validation, matching confirmation, strength of at least 50.
///
/// # Errors
///
/// Returns the first failing stage's errors.
pub fn check_sign_up(form: &AuthForm) -> Result<(), FormErrors> {
    let errors = validate_form(form, AuthMode::SignUp);
    if !errors.is_empty() {
        return Err(errors);
    }
    if !passwords_match(&form.password, &form.confirm_password) {
        return Err(FormErrors::password(PASSWORDS_MISMATCH));
    }
    if password_strength(&form.password).value < MIN_SIGN_UP_STRENGTH {
        return Err(FormErrors::password(PASSWORD_TOO_WEAK));
    }
    Ok(())
}

/// Rules for a new password on the change-password form: the sign-up length,
/// match and strength requirements, with a required confirmation.
///
/// # Errors
///
/// Returns the message to show under the field.
pub fn check_new_password(password: &str, confirm_password: &str) -> Result<(), &'static str> {
    if password.is_empty() {
        return Err(PASSWORD_REQUIRED);
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(PASSWORD_TOO_SHORT);
    }
    if password != confirm_password {
        return Err(PASSWORDS_MISMATCH);
    }
    if password_strength(password).value < MIN_SIGN_UP_STRENGTH {
        return Err(PASSWORD_TOO_WEAK);
    }
    Ok(())
}
