//! HTTP plumbing shared by every resource call.

use reqwest::{Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use store::SessionStore;

use crate::error::{extract_message, ApiError, Endpoint};

/// Client for the blog REST API.
///
/// Holds a handle onto the application's [`SessionStore`] and attaches the
/// current token, when there is one, to every request it sends. Cloning is
/// cheap: the underlying connection pool and session are shared.
#[derive(Clone, Debug)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    session: SessionStore,
}

impl ApiClient {
    /// `base_url` must be absolute, e.g. `http://localhost:8080/api`.
    pub fn new(base_url: impl Into<String>, session: SessionStore) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: reqwest::Client::new(),
            base_url,
            session,
        }
    }

    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    pub(crate) fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        let builder = self.http.request(method, url);
        match self.session.token() {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    /// Send `builder` and turn any non-2xx answer into an [`ApiError`].
    pub(crate) async fn send(
        &self,
        endpoint: Endpoint,
        builder: RequestBuilder,
    ) -> Result<Response, ApiError> {
        let response = builder.send().await?;
        let status = response.status();
        if status.is_success() {
            tracing::debug!(?endpoint, %status, "request succeeded");
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let message = extract_message(&body);
        tracing::debug!(?endpoint, %status, ?message, "request rejected");
        Err(ApiError::from_status(endpoint, status, message))
    }
}

/// Decode a success body that may or may not carry a `T`.
///
/// Mutations answer with either the saved resource or a bare
/// `{"message": ...}` acknowledgement. Both are success.
pub(crate) async fn decode_optional<T: DeserializeOwned>(
    response: Response,
) -> Result<Option<T>, ApiError> {
    let body = response.text().await?;
    Ok(serde_json::from_str(&body).ok())
}
