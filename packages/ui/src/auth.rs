//! Session context and hooks for the UI.

use api::ApiClient;
use dioxus::prelude::*;
use store::SessionStore;

use crate::components::{Button, ButtonVariant};

/// Get the session signal.
/// Components reading it re-render when the user logs in or out.
pub fn use_session() -> Signal<SessionStore> {
    use_context::<Signal<SessionStore>>()
}

/// Get the API client. It shares the session, so requests carry the current token.
pub fn use_api() -> ApiClient {
    use_context::<ApiClient>()
}

/// Provider component that publishes the session and the API client.
/// Wrap your router with this component; the launcher builds `session` with
/// [`SessionStore::init`] on the platform's backend.
#[component]
pub fn AuthProvider(session: SessionStore, base_url: String, children: Element) -> Element {
    let store = use_context_provider(|| Signal::new(session.clone()));
    use_context_provider(|| ApiClient::new(base_url.clone(), store.peek().clone()));

    use_hook(|| match store.peek().user() {
        Some(user) => tracing::info!(username = %user.username, "restored session"),
        None => tracing::info!("no persisted session"),
    });

    rsx! {
        {children}
    }
}

/// Button to log out the current user.
///
/// Only clears the session; the route guard sends the user to the login page
/// on the re-render that follows.
#[component]
pub fn LogoutButton(
    #[props(default = "Logout".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
) -> Element {
    let mut session = use_session();

    let onclick = move |_: MouseEvent| {
        if let Some(user) = session.peek().user() {
            tracing::info!(username = %user.username, "logging out");
        }
        session.write().logout();
    };

    rsx! {
        Button {
            variant: ButtonVariant::Ghost,
            class: class,
            onclick: onclick,
            "{label}"
        }
    }
}
