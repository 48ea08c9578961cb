pub mod config;
pub mod models;
pub mod session;

mod memory;
pub use memory::MemoryStore;

mod file_store;
pub use file_store::FileStore;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod local_storage;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use local_storage::{LocalStorageStore, SESSION_KEY};

pub use config::ClientConfig;
pub use models::{
    Article, ArticlePage, ArticleRequest, ArticleStatus, LoginRequest, RegisterRequest, Session,
    User,
};
pub use session::{SessionBackend, SessionStore};
