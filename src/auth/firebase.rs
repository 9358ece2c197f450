//! Firebase Identity Toolkit provider.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser implementation of [`IdentityProvider`]. Email flows call the
//! Identity Toolkit REST API directly. Google sign-in asks the host page for
//! a Google ID token (`window.pollgenGoogleIdToken()`, which owns the OAuth
//! popup) and exchanges it through `accounts:signInWithIdp`.
//!
//! ERROR HANDLING
//! ==============
//! Identity Toolkit answers failures as `{"error": {"message": "EMAIL_EXISTS"}}`.
//! The message is mapped to an `auth/...` code; transport and decode failures
//! carry no code.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "firebase_test.rs"]
mod firebase_test;

use std::sync::Arc;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use super::provider::{IdentityProvider, ProviderError, ProviderUser, map_identity_toolkit_error};
use crate::net::operation::Method;
use crate::net::transport::{BrowserTransport, HttpRequest, Transport};
use crate::state::auth::Role;

const GOOGLE_PROVIDER_ID: &str = "google.com";

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PasswordRequest<'a> {
    email: &'a str,
    password: &'a str,
    return_secure_token: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct UpdateProfileRequest<'a> {
    id_token: &'a str,
    display_name: &'a str,
    return_secure_token: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct IdpRequest<'a> {
    post_body: String,
    request_uri: &'a str,
    return_idp_credential: bool,
    return_secure_token: bool,
}

/// Fields shared by every Identity Toolkit account response.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct AccountResponse {
    local_id: String,
    email: Option<String>,
    display_name: Option<String>,
    photo_url: Option<String>,
    id_token: Option<String>,
}

impl From<AccountResponse> for ProviderUser {
    fn from(r: AccountResponse) -> Self {
        Self {
            uid: r.local_id,
            email: r.email.filter(|s| !s.is_empty()),
            display_name: r.display_name.filter(|s| !s.is_empty()),
            photo_url: r.photo_url.filter(|s| !s.is_empty()),
            id_token: r.id_token,
        }
    }
}

#[derive(Deserialize)]
struct ErrorEnvelope {
    error: ErrorDetail,
}

#[derive(Deserialize)]
struct ErrorDetail {
    message: String,
}

#[derive(Clone)]
pub struct FirebaseAuth {
    identity_base_url: Arc<str>,
    api_key: Arc<str>,
    transport: Arc<dyn Transport + Send + Sync>,
}

impl std::fmt::Debug for FirebaseAuth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FirebaseAuth")
            .field("identity_base_url", &self.identity_base_url)
            .finish_non_exhaustive()
    }
}

impl FirebaseAuth {
    #[must_use]
    pub fn new(identity_base_url: &str, api_key: &str) -> Self {
        Self::with_transport(identity_base_url, api_key, Arc::new(BrowserTransport))
    }

    #[must_use]
    pub fn with_transport(identity_base_url: &str, api_key: &str, transport: Arc<dyn Transport + Send + Sync>) -> Self {
        Self {
            identity_base_url: Arc::from(identity_base_url.trim_end_matches('/')),
            api_key: Arc::from(api_key),
            transport,
        }
    }

    fn endpoint(&self, method: &str) -> String {
        format!("{}/v1/accounts:{method}?key={}", self.identity_base_url, urlencoding::encode(&self.api_key))
    }

    async fn call<B: Serialize, R: DeserializeOwned>(&self, method: &str, body: &B) -> Result<R, ProviderError> {
        let body = serde_json::to_string(body).map_err(|e| ProviderError::new(e.to_string()))?;
        let request = HttpRequest {
            method: Method::Post,
            url: self.endpoint(method),
            bearer: None,
            body: Some(body),
        };
        let response = self
            .transport
            .send(request)
            .await
            .map_err(|e| ProviderError::new(e.to_string()))?;
        if !response.is_success() {
            return Err(identity_toolkit_error(response.status, &response.body));
        }
        serde_json::from_str(&response.body).map_err(|e| ProviderError::new(e.to_string()))
    }

    /// Exchange a Google ID token for a Firebase account.
    ///
    /// # Errors
    ///
    /// Returns the mapped Identity Toolkit error on rejection.
    pub async fn exchange_google_id_token(&self, google_id_token: &str, request_uri: &str) -> Result<ProviderUser, ProviderError> {
        let request = IdpRequest {
            post_body: format!(
                "id_token={}&providerId={GOOGLE_PROVIDER_ID}",
                urlencoding::encode(google_id_token)
            ),
            request_uri,
            return_idp_credential: true,
            return_secure_token: true,
        };
        let account: AccountResponse = self.call("signInWithIdp", &request).await?;
        Ok(account.into())
    }
}

fn identity_toolkit_error(status: u16, body: &str) -> ProviderError {
    match serde_json::from_str::<ErrorEnvelope>(body) {
        Ok(envelope) => {
            let code = map_identity_toolkit_error(&envelope.error.message);
            ProviderError::with_code(code, envelope.error.message)
        }
        Err(_) => ProviderError::new(format!("identity request failed with status {status}")),
    }
}

#[async_trait(?Send)]
impl IdentityProvider for FirebaseAuth {
    async fn sign_in_with_google(&self, _role: Role) -> Result<ProviderUser, ProviderError> {
        let token = google_id_token().await?;
        self.exchange_google_id_token(&token, &page_origin()).await
    }

    async fn sign_in_with_email(&self, email: &str, password: &str, _role: Role) -> Result<ProviderUser, ProviderError> {
        let account: AccountResponse = self
            .call(
                "signInWithPassword",
                &PasswordRequest { email, password, return_secure_token: true },
            )
            .await?;
        Ok(account.into())
    }

    async fn create_user_with_email(&self, email: &str, password: &str, full_name: &str) -> Result<ProviderUser, ProviderError> {
        let created: AccountResponse = self
            .call("signUp", &PasswordRequest { email, password, return_secure_token: true })
            .await?;
        let Some(id_token) = created.id_token.clone() else {
            return Ok(created.into());
        };

        let update = UpdateProfileRequest {
            id_token: &id_token,
            display_name: full_name,
            return_secure_token: true,
        };
        match self.call::<_, AccountResponse>("update", &update).await {
            Ok(updated) => {
                let mut user = ProviderUser::from(updated);
                if user.uid.is_empty() {
                    user.uid.clone_from(&created.local_id);
                }
                if user.id_token.is_none() {
                    user.id_token = Some(id_token);
                }
                Ok(user)
            }
            // The account exists at this point; a failed profile update only loses the name.
            Err(e) => {
                leptos::logging::warn!("display name update failed: {e}");
                Ok(created.into())
            }
        }
    }
}

#[cfg(feature = "hydrate")]
mod js {
    use wasm_bindgen::prelude::*;

    #[wasm_bindgen]
    extern "C" {
        #[wasm_bindgen(catch, js_name = pollgenGoogleIdToken)]
        pub async fn pollgen_google_id_token() -> Result<JsValue, JsValue>;
    }
}

#[cfg(feature = "hydrate")]
async fn google_id_token() -> Result<String, ProviderError> {
    let value = js::pollgen_google_id_token()
        .await
        .map_err(|e| ProviderError::with_code("auth/popup-closed-by-user", format!("{e:?}")))?;
    value
        .as_string()
        .filter(|t| !t.is_empty())
        .ok_or_else(|| ProviderError::with_code("auth/internal-error", "Google sign-in returned no ID token"))
}

#[cfg(not(feature = "hydrate"))]
async fn google_id_token() -> Result<String, ProviderError> {
    Err(ProviderError::with_code("auth/operation-not-supported-in-this-environment", "Google sign-in needs a browser"))
}

#[cfg(feature = "hydrate")]
fn page_origin() -> String {
    web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_else(|| "http://localhost".to_owned())
}

#[cfg(not(feature = "hydrate"))]
fn page_origin() -> String {
    "http://localhost".to_owned()
}
