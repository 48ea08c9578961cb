//! # Client configuration: `blog.toml`
//!
//! The only thing the client needs to know about its environment is where the
//! backend lives. The address can come from three places, later ones winning:
//!
//! 1. the built-in default, [`DEFAULT_BASE_URL`] (`/api`, same origin as the page);
//! 2. an optional `blog.toml` file (desktop reads it from the config directory);
//! 3. the `BLOG_API_URL` environment variable ([`BASE_URL_ENV`]).
//!
//! ```toml
//! [api]
//! base_url = "https://blog.example.com/api"
//! ```
//!
//! A missing or empty file is equivalent to the default configuration.

use serde::{Deserialize, Serialize};

/// Environment variable overriding the backend address.
pub const BASE_URL_ENV: &str = "BLOG_API_URL";

/// Backend address used when nothing is configured.
pub const DEFAULT_BASE_URL: &str = "/api";

/// Origin prepended to a relative base URL when no page origin is known.
pub const DEFAULT_ORIGIN: &str = "http://localhost:8080";

/// Top-level configuration stored in `blog.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    #[serde(default)]
    pub api: ApiConfig,
}

/// Backend connection settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base address of the REST API. May be relative to the page origin.
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            api: ApiConfig {
                base_url: base_url.into(),
            },
        }
    }

    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "blog.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Replace the base URL with `value` when it is set and non-blank.
    pub fn with_env_override(mut self, value: Option<&str>) -> Self {
        if let Some(url) = value.map(str::trim).filter(|url| !url.is_empty()) {
            self.api.base_url = url.to_string();
        }
        self
    }

    /// Absolute base URL without a trailing slash.
    ///
    /// A relative base (`/api`) is joined onto `origin`, or onto
    /// [`DEFAULT_ORIGIN`] when the platform has no page origin.
    pub fn resolve_base_url(&self, origin: Option<&str>) -> String {
        let base = self.api.base_url.trim().trim_end_matches('/');
        if base.contains("://") {
            return base.to_string();
        }
        let origin = origin.unwrap_or(DEFAULT_ORIGIN).trim_end_matches('/');
        let path = base.trim_start_matches('/');
        if path.is_empty() {
            origin.to_string()
        } else {
            format!("{origin}/{path}")
        }
    }
}
