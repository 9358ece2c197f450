//! Generic executor for [`Operation`] descriptors.
//!
//! ERROR HANDLING
//! ==============
//! Every failure comes back as an [`ApiError`] value. Nothing here panics or
//! retries; the lifecycle layer decides what the UI shows.

#[cfg(test)]
#[path = "client_test.rs"]
mod client_test;

use std::sync::Arc;

use super::error::{ApiError, error_body_message};
use super::operation::Operation;
use super::transport::{BrowserTransport, HttpRequest, Transport};

/// The single configured API client: base URL, optional bearer, transport.
#[derive(Clone)]
pub struct ApiClient {
    base_url: Arc<str>,
    bearer: Option<String>,
    transport: Arc<dyn Transport + Send + Sync>,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .field("bearer", &self.bearer.as_ref().map(|_| "<redacted>"))
            .finish_non_exhaustive()
    }
}

impl ApiClient {
    /// Client over the browser `fetch` transport.
    #[must_use]
    pub fn new(base_url: &str) -> Self {
        Self::with_transport(base_url, Arc::new(BrowserTransport))
    }

    #[must_use]
    pub fn with_transport(base_url: &str, transport: Arc<dyn Transport + Send + Sync>) -> Self {
        Self {
            base_url: Arc::from(base_url.trim_end_matches('/')),
            bearer: None,
            transport,
        }
    }

    /// Copy of this client that authenticates with `token`.
    #[must_use]
    pub fn with_bearer(&self, token: Option<String>) -> Self {
        Self { bearer: token, ..self.clone() }
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for an already rendered path.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Perform operation `O` and decode its response.
    ///
    /// A 2xx reply with an empty body (e.g. `204 No Content`) succeeds with
    /// `None`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] when the path cannot be rendered, the body cannot
    /// be encoded, the transport fails, the status is not 2xx, or the response
    /// does not decode into `O::Response`.
    pub async fn execute<O: Operation>(&self, params: &O::Params, body: Option<&O::Body>) -> Result<Option<O::Response>, ApiError> {
        let request = self.build_request::<O>(params, body)?;
        let response = self.transport.send(request).await?;
        if !response.is_success() {
            return Err(ApiError::Status {
                status: response.status,
                message: error_body_message(&response.body),
            });
        }
        decode_body::<O::Response>(&response.body)
    }

    fn build_request<O: Operation>(&self, params: &O::Params, body: Option<&O::Body>) -> Result<HttpRequest, ApiError> {
        let path = O::path(params)?;
        let body = body
            .map(|b| serde_json::to_string(b).map_err(|e| ApiError::Encode(e.to_string())))
            .transpose()?;
        Ok(HttpRequest {
            method: O::METHOD,
            url: self.url(&path),
            bearer: self.bearer.clone(),
            body,
        })
    }
}

/// Decode a success body; an empty one carries no data.
fn decode_body<T: serde::de::DeserializeOwned>(body: &str) -> Result<Option<T>, ApiError> {
    if body.trim().is_empty() {
        return Ok(None);
    }
    serde_json::from_str(body)
        .map(Some)
        .map_err(|e| ApiError::Decode(e.to_string()))
}
