//! Login and registration.

use reqwest::Method;
use store::{LoginRequest, RegisterRequest, Session};

use crate::error::{ApiError, Endpoint};
use crate::ApiClient;

impl ApiClient {
    /// Exchange credentials for a session. Does not store it; the caller decides.
    pub async fn login(
        &self,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<Session, ApiError> {
        let body = LoginRequest {
            username: username.into(),
            password: password.into(),
        };
        let request = self.request(Method::POST, "/auth/login").json(&body);
        let response = self.send(Endpoint::Login, request).await?;
        Ok(response.json::<Session>().await?)
    }

    /// Create an account. The new user still has to log in.
    pub async fn register(&self, request: &RegisterRequest) -> Result<(), ApiError> {
        let builder = self.request(Method::POST, "/auth/register").json(request);
        self.send(Endpoint::Register, builder).await?;
        Ok(())
    }
}
