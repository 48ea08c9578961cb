//! # Browser `localStorage` session store
//!
//! [`LocalStorageStore`] is the [`SessionBackend`] used on the **web platform**.
//! The session is kept as one JSON string under [`SESSION_KEY`], so it survives
//! page reloads but stays scoped to the origin.
//!
//! The struct is zero-sized and looks the storage area up on every call:
//! `web_sys::Storage` is not `Send`, and the lookup is a cheap property read.
//! Any failure (storage disabled, quota exceeded, malformed JSON) degrades to
//! "no persisted session".

use web_sys::Storage;

use crate::models::Session;
use crate::session::SessionBackend;

/// Key of the persisted session in `window.localStorage`.
pub const SESSION_KEY: &str = "blog-session";

/// localStorage-backed SessionBackend for the web platform.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorageStore;

impl LocalStorageStore {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Option<Storage> {
        web_sys::window()?.local_storage().ok()?
    }
}

impl SessionBackend for LocalStorageStore {
    fn load(&self) -> Option<Session> {
        let raw = Self::storage()?.get_item(SESSION_KEY).ok()??;
        serde_json::from_str(&raw).ok()
    }

    fn save(&self, session: &Session) {
        let (Some(storage), Ok(raw)) = (Self::storage(), serde_json::to_string(session)) else {
            return;
        };
        let _ = storage.set_item(SESSION_KEY, &raw);
    }

    fn clear(&self) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(SESSION_KEY);
        }
    }
}
