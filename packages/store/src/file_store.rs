//! # Filesystem-backed session store
//!
//! [`FileStore`] persists the session as a small JSON document. It is used on
//! desktop to keep the user signed in across restarts.
//!
//! ## Layout
//!
//! ```text
//! <base_dir>/
//! └── session.json       # {"token": "...", "id": 1, "username": "...", ...}
//! ```
//!
//! ## Platform data directories
//!
//! Launchers obtain a platform-appropriate base with `dirs::data_dir()`:
//!
//! | Platform | Path |
//! |----------|------|
//! | macOS | `~/Library/Application Support/blog-system/` |
//! | Linux | `~/.local/share/blog-system/` |
//! | Windows | `C:\Users\<user>\AppData\Roaming\blog-system\` |

use std::path::PathBuf;

use crate::models::Session;
use crate::session::SessionBackend;

const SESSION_FILE: &str = "session.json";

/// Filesystem-backed SessionBackend for desktop persistence.
#[derive(Clone, Debug)]
pub struct FileStore {
    base: PathBuf,
}

impl FileStore {
    pub fn new(base: PathBuf) -> Self {
        Self { base }
    }

    fn session_path(&self) -> PathBuf {
        self.base.join(SESSION_FILE)
    }
}

impl SessionBackend for FileStore {
    fn load(&self) -> Option<Session> {
        let raw = std::fs::read_to_string(self.session_path()).ok()?;
        serde_json::from_str(&raw).ok()
    }

    fn save(&self, session: &Session) {
        let Ok(raw) = serde_json::to_string(session) else {
            return;
        };
        if std::fs::create_dir_all(&self.base).is_ok() {
            let _ = std::fs::write(self.session_path(), raw);
        }
    }

    fn clear(&self) {
        let _ = std::fs::remove_file(self.session_path());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::User;
    use crate::session::SessionStore;

    fn session() -> Session {
        Session::new(
            User {
                id: 4,
                username: "dave".to_string(),
                nickname: None,
                email: "dave@example.com".to_string(),
            },
            "file-token",
        )
    }

    #[test]
    fn test_missing_file_is_no_session() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("nested"));
        assert!(store.load().is_none());
    }

    #[test]
    fn test_save_creates_directory_and_roundtrips() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("blog-system"));

        store.save(&session());
        assert!(dir.path().join("blog-system").join(SESSION_FILE).exists());
        assert_eq!(store.load(), Some(session()));

        store.clear();
        assert!(store.load().is_none());
    }

    #[test]
    fn test_corrupt_file_is_no_session() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(SESSION_FILE), "{not json").unwrap();
        let store = FileStore::new(dir.path().to_path_buf());
        assert!(store.load().is_none());
    }

    #[test]
    fn test_store_restores_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let mut first = SessionStore::init(FileStore::new(dir.path().to_path_buf()));
        let s = session();
        first.set_auth(s.user.clone(), s.token.clone());

        let reloaded = SessionStore::init(FileStore::new(dir.path().to_path_buf()));
        assert_eq!(reloaded.session(), Some(s));
    }
}
