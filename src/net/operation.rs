//! Static registry of backend operations.
//!
//! DESIGN
//! ======
//! Every endpoint the client calls is one zero-sized type implementing
//! [`Operation`]: method, path template, parameter/body/response types and the
//! sentence shown when a failure carries no message. The generic executor and
//! the hook layer are written once against the trait; adding an endpoint is a
//! new descriptor, never a new code path.
//!
//! [`QueryOperation`] and [`MutationOperation`] mark how the hook layer may
//! bind a descriptor, so a mutation cannot be wired up as a query.

#[cfg(test)]
#[path = "operation_test.rs"]
mod operation_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::error::ApiError;
use super::schema::{
    ChangePasswordBody, ChangePasswordResponse, SignUpBody, SignUpResponse, TokenVerificationResponse,
    UserByFirebaseUidResponse, VerifySignUpProviderBody,
};

/// HTTP method of an operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl Method {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
        }
    }
}

/// Values substituted into `{name}` segments of a path template.
pub trait PathParams {
    fn path_param(&self, name: &str) -> Option<&str>;
}

impl PathParams for () {
    fn path_param(&self, _name: &str) -> Option<&str> {
        None
    }
}

/// Path parameters of `GET /users/firebase/{firebaseUID}`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FirebaseUidPath {
    pub firebase_uid: String,
}

impl PathParams for FirebaseUidPath {
    fn path_param(&self, name: &str) -> Option<&str> {
        (name == "firebaseUID").then_some(self.firebase_uid.as_str())
    }
}

/// A statically declared backend endpoint.
pub trait Operation: 'static {
    const METHOD: Method;
    /// Path template relative to the API base URL, with `{name}` parameters.
    const PATH: &'static str;
    /// Shown when a failure carries no message of its own.
    const FALLBACK_ERROR: &'static str;

    type Params: PathParams + Clone + PartialEq + Send + Sync + 'static;
    type Body: Serialize + Clone + Send + Sync + 'static;
    type Response: DeserializeOwned + Clone + Send + Sync + 'static;

    /// Render the concrete request path for `params`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::MissingPathParam`] if the template names a parameter
    /// `params` does not provide.
    fn path(params: &Self::Params) -> Result<String, ApiError> {
        render_path(Self::PATH, params)
    }
}

/// Read-style operation, bound by `use_query`.
pub trait QueryOperation: Operation<Body = ()> {}

/// Write-style operation, bound by `use_mutation`; the request body is the
/// only input.
pub trait MutationOperation: Operation<Params = ()> {}

/// `POST /auth/verify`: verify the caller's identity token.
pub struct VerifyToken;

impl Operation for VerifyToken {
    const METHOD: Method = Method::Post;
    const PATH: &'static str = "/auth/verify";
    const FALLBACK_ERROR: &'static str = "Login failed";
    type Params = ();
    type Body = ();
    type Response = TokenVerificationResponse;
}

impl QueryOperation for VerifyToken {}

/// `POST /auth/signup`: create an email/password account.
pub struct SignUp;

impl Operation for SignUp {
    const METHOD: Method = Method::Post;
    const PATH: &'static str = "/auth/signup";
    const FALLBACK_ERROR: &'static str = "Signup failed";
    type Params = ();
    type Body = SignUpBody;
    type Response = SignUpResponse;
}

impl MutationOperation for SignUp {}

/// `POST /auth/signup/verify`: register a user who signed up through a provider.
pub struct VerifySignUpProvider;

impl Operation for VerifySignUpProvider {
    const METHOD: Method = Method::Post;
    const PATH: &'static str = "/auth/signup/verify";
    const FALLBACK_ERROR: &'static str = "Verification failed";
    type Params = ();
    type Body = VerifySignUpProviderBody;
    type Response = SignUpResponse;
}

impl MutationOperation for VerifySignUpProvider {}

/// `PATCH /auth/change-password`.
pub struct ChangePassword;

impl Operation for ChangePassword {
    const METHOD: Method = Method::Patch;
    const PATH: &'static str = "/auth/change-password";
    const FALLBACK_ERROR: &'static str = "Password change failed";
    type Params = ();
    type Body = ChangePasswordBody;
    type Response = ChangePasswordResponse;
}

impl MutationOperation for ChangePassword {}

/// `GET /users/firebase/{firebaseUID}`.
pub struct UserByFirebaseUid;

impl Operation for UserByFirebaseUid {
    const METHOD: Method = Method::Get;
    const PATH: &'static str = "/users/firebase/{firebaseUID}";
    const FALLBACK_ERROR: &'static str = "Failed to fetch user by Firebase UID";
    type Params = FirebaseUidPath;
    type Body = ();
    type Response = UserByFirebaseUidResponse;
}

impl QueryOperation for UserByFirebaseUid {}

/// Substitute `{name}` segments of `template` with percent-encoded values.
///
/// # Errors
///
/// Returns [`ApiError::MissingPathParam`] for a parameter `params` lacks, or
/// for an unterminated `{`.
pub fn render_path(template: &str, params: &impl PathParams) -> Result<String, ApiError> {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let close = after
            .find('}')
            .ok_or_else(|| ApiError::MissingPathParam(after.to_owned()))?;
        let name = &after[..close];
        let value = params
            .path_param(name)
            .ok_or_else(|| ApiError::MissingPathParam(name.to_owned()))?;
        out.push_str(&urlencoding::encode(value));
        rest = &after[close + 1..];
    }
    out.push_str(rest);
    Ok(out)
}
