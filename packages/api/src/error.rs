//! Error taxonomy of the REST client.
//!
//! The backend reports failures through HTTP status codes plus an optional
//! JSON body of the form `{"message": "..."}`. [`ApiError::from_status`] maps a
//! status to a variant, taking into account which endpoint was called: the
//! same `400` means "bad credentials" on login but "not your article" on
//! update.

use reqwest::StatusCode;
use serde::Deserialize;

/// Backend call that produced a response. Drives status classification.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Endpoint {
    Login,
    Register,
    ListArticles,
    GetArticle,
    CreateArticle,
    UpdateArticle,
    DeleteArticle,
}

/// Failure of a backend call, carrying the server's message when it sent one.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("authentication failed{}", detail(.0))]
    Auth(Option<String>),
    #[error("invalid input{}", detail(.0))]
    Validation(Option<String>),
    #[error("not found{}", detail(.0))]
    NotFound(Option<String>),
    #[error("forbidden{}", detail(.0))]
    Forbidden(Option<String>),
    #[error("server returned {status}{}", detail(.message))]
    Server {
        status: u16,
        message: Option<String>,
    },
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
}

fn detail(message: &Option<String>) -> String {
    message
        .as_deref()
        .map(|m| format!(": {m}"))
        .unwrap_or_default()
}

impl ApiError {
    /// Classify a non-success response.
    pub fn from_status(endpoint: Endpoint, status: StatusCode, message: Option<String>) -> Self {
        use Endpoint::*;

        match (endpoint, status.as_u16()) {
            (Login, 400 | 401 | 403) | (_, 401) => ApiError::Auth(message),
            (_, 404) | (GetArticle, 403) => ApiError::NotFound(message),
            (UpdateArticle | DeleteArticle, 400 | 403) | (_, 403) => ApiError::Forbidden(message),
            (_, 400 | 409 | 422) => ApiError::Validation(message),
            (_, code) => ApiError::Server {
                status: code,
                message,
            },
        }
    }

    /// The message the server attached to the failure, if any.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Auth(message)
            | ApiError::Validation(message)
            | ApiError::NotFound(message)
            | ApiError::Forbidden(message)
            | ApiError::Server { message, .. } => message.as_deref(),
            ApiError::Transport(_) => None,
        }
    }

    /// Text for the user: the server's message verbatim, else `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        self.server_message().unwrap_or(fallback).to_string()
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::NotFound(_))
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
    error: Option<String>,
}

/// Pull a human-readable message out of an error response body.
pub(crate) fn extract_message(body: &str) -> Option<String> {
    let body = body.trim();
    if body.is_empty() {
        return None;
    }
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(parsed) => parsed
            .message
            .or(parsed.error)
            .filter(|m| !m.trim().is_empty()),
        Err(_) if body.starts_with('{') || body.starts_with('<') => None,
        Err(_) => Some(body.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify(endpoint: Endpoint, code: u16) -> ApiError {
        ApiError::from_status(endpoint, StatusCode::from_u16(code).unwrap(), None)
    }

    #[test]
    fn test_login_rejections_are_auth_errors() {
        for code in [400, 401, 403] {
            assert!(matches!(classify(Endpoint::Login, code), ApiError::Auth(_)));
        }
        assert!(matches!(classify(Endpoint::ListArticles, 401), ApiError::Auth(_)));
    }

    #[test]
    fn test_non_author_mutations_are_forbidden() {
        for endpoint in [Endpoint::UpdateArticle, Endpoint::DeleteArticle] {
            assert!(matches!(classify(endpoint, 400), ApiError::Forbidden(_)));
            assert!(matches!(classify(endpoint, 403), ApiError::Forbidden(_)));
            assert!(classify(endpoint, 404).is_not_found());
        }
    }

    #[test]
    fn test_invisible_article_is_not_found() {
        assert!(classify(Endpoint::GetArticle, 403).is_not_found());
        assert!(classify(Endpoint::GetArticle, 404).is_not_found());
    }

    #[test]
    fn test_bad_input_is_validation() {
        assert!(matches!(classify(Endpoint::Register, 400), ApiError::Validation(_)));
        assert!(matches!(classify(Endpoint::Register, 409), ApiError::Validation(_)));
        assert!(matches!(classify(Endpoint::CreateArticle, 422), ApiError::Validation(_)));
    }

    #[test]
    fn test_unexpected_status_is_server_error() {
        match classify(Endpoint::ListArticles, 503) {
            ApiError::Server { status, .. } => assert_eq!(status, 503),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_user_message_prefers_server_text() {
        let err = ApiError::Auth(Some("Bad credentials".to_string()));
        assert_eq!(err.user_message("Login failed"), "Bad credentials");
        assert_eq!(err.to_string(), "authentication failed: Bad credentials");

        let bare = ApiError::Auth(None);
        assert_eq!(bare.user_message("Login failed"), "Login failed");
        assert_eq!(bare.to_string(), "authentication failed");
    }

    #[test]
    fn test_extract_message() {
        assert_eq!(
            extract_message(r#"{"message":"Error: Username is already taken!"}"#).as_deref(),
            Some("Error: Username is already taken!")
        );
        assert_eq!(
            extract_message(r#"{"error":"Unauthorized","status":401}"#).as_deref(),
            Some("Unauthorized")
        );
        assert_eq!(extract_message("plain failure\n").as_deref(), Some("plain failure"));
        assert_eq!(extract_message(""), None);
        assert_eq!(extract_message(r#"{"message":""}"#), None);
        assert_eq!(extract_message("<html>oops</html>"), None);
    }
}
