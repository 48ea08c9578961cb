use std::path::PathBuf;

use dioxus::prelude::*;

use store::config::BASE_URL_ENV;
use store::{ClientConfig, FileStore, SessionStore};

/// Directory name under the platform config and data directories.
const APP_DIR: &str = "blog-system";

fn main() {
    dotenvy::dotenv().ok();
    if let Err(e) = dioxus::logger::init(tracing::Level::INFO) {
        eprintln!("logger already initialised: {e}");
    }
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let session = use_hook(|| SessionStore::init(FileStore::new(data_dir())));
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

fn data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR)
}

/// `blog.toml` from the config directory, then `BLOG_API_URL` on top.
fn api_base_url() -> String {
    let config = load_config().with_env_override(std::env::var(BASE_URL_ENV).ok().as_deref());
    let base_url = config.resolve_base_url(None);
    tracing::info!(%base_url, "using backend");
    base_url
}

fn load_config() -> ClientConfig {
    let Some(dir) = dirs::config_dir() else {
        return ClientConfig::default();
    };
    let path = dir.join(APP_DIR).join(ClientConfig::filename());
    let Ok(raw) = std::fs::read_to_string(&path) else {
        return ClientConfig::default();
    };
    match ClientConfig::from_toml(&raw) {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!(path = %path.display(), "ignoring malformed config: {e}");
            ClientConfig::default()
        }
    }
}
