//! # Session store: who is logged in, and with which token
//!
//! [`SessionStore`] is the single source of truth for authentication on the
//! client. It keeps the current [`Session`] in memory and mirrors every change
//! into a [`SessionBackend`] so that a reload does not log the user out.
//!
//! A store is a cheap handle: clones share the same state. The UI keeps one
//! clone inside a signal and the API client keeps another, so a login performed
//! by a view is visible to the very next request.
//!
//! ## Lifecycle
//!
//! | Step | Method |
//! |------|--------|
//! | Application start | [`SessionStore::init`] restores whatever the backend persisted. |
//! | Login | [`SessionStore::set_auth`] records and persists user and token. |
//! | Logout | [`SessionStore::logout`] clears memory and backend. |
//!
//! There is no teardown beyond process exit and no expiry check; a stale token
//! is rejected by the backend.

use std::fmt;
use std::sync::{Arc, PoisonError, RwLock};

use crate::models::{Article, Session, User};

/// Persistence for the current session.
///
/// Implementations swallow their own errors: a backend that cannot read
/// reports no session, one that cannot write keeps the session in memory only.
pub trait SessionBackend: Send + Sync {
    fn load(&self) -> Option<Session>;
    fn save(&self, session: &Session);
    fn clear(&self);
}

/// Shared, persisted holder of the authenticated session.
#[derive(Clone)]
pub struct SessionStore {
    current: Arc<RwLock<Option<Session>>>,
    backend: Arc<dyn SessionBackend>,
}

impl SessionStore {
    /// Create a store on top of `backend`, restoring a persisted session if any.
    pub fn init(backend: impl SessionBackend + 'static) -> Self {
        let restored = backend.load().filter(|s| !s.token.is_empty());
        Self {
            current: Arc::new(RwLock::new(restored)),
            backend: Arc::new(backend),
        }
    }

    /// Record a freshly authenticated user and token.
    pub fn set_auth(&mut self, user: User, token: impl Into<String>) {
        let session = Session::new(user, token);
        self.backend.save(&session);
        *self.current.write().unwrap_or_else(PoisonError::into_inner) = Some(session);
    }

    /// Forget the user and token, in memory and in the backend.
    pub fn logout(&mut self) {
        self.backend.clear();
        *self.current.write().unwrap_or_else(PoisonError::into_inner) = None;
    }

    pub fn session(&self) -> Option<Session> {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn token(&self) -> Option<String> {
        self.session()
            .map(|s| s.token)
            .filter(|token| !token.is_empty())
    }

    pub fn user(&self) -> Option<User> {
        self.session().map(|s| s.user)
    }

    pub fn has_token(&self) -> bool {
        self.token().is_some()
    }

    /// Whether the logged-in user wrote `article`. False when logged out.
    pub fn is_author(&self, article: &Article) -> bool {
        self.user()
            .is_some_and(|user| article.is_authored_by(user.id))
    }
}

impl PartialEq for SessionStore {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.current, &other.current)
    }
}

impl fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Never print the token.
        f.debug_struct("SessionStore")
            .field("user", &self.user().map(|u| u.username))
            .field("has_token", &self.has_token())
            .finish()
    }
}
