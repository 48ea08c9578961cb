use dioxus::prelude::*;

use store::{ClientConfig, SessionStore};

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let session = use_hook(open_session);
    let base_url = use_hook(api_base_url);

    rsx! {
        document::Link { rel: "stylesheet", href: ui::BLOG_CSS }
        ui::AuthProvider {
            session,
            base_url,
            Router::<ui::Route> {}
        }
    }
}

/// Session persisted in the browser's localStorage.
#[cfg(target_arch = "wasm32")]
fn open_session() -> SessionStore {
    SessionStore::init(store::LocalStorageStore::new())
}

#[cfg(not(target_arch = "wasm32"))]
fn open_session() -> SessionStore {
    SessionStore::init(store::MemoryStore::new())
}

/// Backend address, baked in at build time through `BLOG_API_URL` and
/// resolved against the page origin when relative.
fn api_base_url() -> String {
    let config = ClientConfig::default().with_env_override(option_env!("BLOG_API_URL"));
    let base_url = config.resolve_base_url(page_origin().as_deref());
    tracing::info!(%base_url, "using backend");
    base_url
}

#[cfg(target_arch = "wasm32")]
fn page_origin() -> Option<String> {
    web_sys::window()?.location().origin().ok()
}

#[cfg(not(target_arch = "wasm32"))]
fn page_origin() -> Option<String> {
    None
}
