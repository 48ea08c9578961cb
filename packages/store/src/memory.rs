use std::sync::{Arc, Mutex, PoisonError};

use crate::models::Session;
use crate::session::SessionBackend;

/// In-memory SessionBackend for testing and as a fallback when nothing else is available.
///
/// Clones share the same slot, which lets tests simulate a reload by building a
/// second [`crate::SessionStore`] on a clone.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    slot: Arc<Mutex<Option<Session>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionBackend for MemoryStore {
    fn load(&self) -> Option<Session> {
        self.slot.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    fn save(&self, session: &Session) {
        *self.slot.lock().unwrap_or_else(PoisonError::into_inner) = Some(session.clone());
    }

    fn clear(&self) {
        self.slot.lock().unwrap_or_else(PoisonError::into_inner).take();
    }
}
