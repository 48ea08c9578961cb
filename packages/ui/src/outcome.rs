//! What a form does once its backend call returns.

use api::ApiError;

/// Either leave the form with the call's value, or stay and show a message.
/// Staying never touches the typed fields.
#[derive(Debug, PartialEq)]
pub enum Outcome<T> {
    Proceed(T),
    Stay(String),
}

impl<T> Outcome<T> {
    /// Any `Ok` proceeds. An error stays, showing the server's message or
    /// `fallback` when it sent none.
    pub fn from_result(result: Result<T, ApiError>, fallback: &str) -> Self {
        match result {
            Ok(value) => Outcome::Proceed(value),
            Err(e) => {
                tracing::warn!("{fallback}: {e}");
                Outcome::Stay(e.user_message(fallback))
            }
        }
    }
}

/// Shown when saving fails without a server message.
pub const SAVE_FAILED: &str = "Failed to save article";
/// Shown when login fails without a server message.
pub const LOGIN_FAILED: &str = "Login failed";
/// Shown when registration fails without a server message.
pub const REGISTER_FAILED: &str = "Registration failed";
/// Shown when deletion fails without a server message.
pub const DELETE_FAILED: &str = "Failed to delete article";
