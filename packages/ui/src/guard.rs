//! Route guard for protected views.

use dioxus::prelude::*;
use store::SessionStore;

use crate::auth::use_session;
use crate::Route;

/// Outcome of checking a navigation attempt against the session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Access {
    Granted,
    Denied,
}

impl Access {
    /// Token present means granted. Evaluated on every render, never cached.
    pub fn evaluate(session: &SessionStore) -> Self {
        if session.has_token() {
            Access::Granted
        } else {
            Access::Denied
        }
    }
}

/// Layout wrapping every protected route.
///
/// Without a token nothing below it renders and the history entry is replaced
/// by the login page, so "back" does not return to the blocked view.
#[component]
pub fn RequireAuth() -> Element {
    let session = use_session();
    let nav = use_navigator();

    let access = Access::evaluate(&session.read());
    match access {
        Access::Granted => rsx! {
            Outlet::<Route> {}
        },
        Access::Denied => {
            tracing::debug!("no session, redirecting to login");
            nav.replace(Route::Login {});
            rsx! {}
        }
    }
}
