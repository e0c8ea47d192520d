use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use crate::session::SessionStore;

/// In-memory SessionStore for testing and native fallback.
///
/// Clones share the same slot, so a test can hold one handle while the
/// manager owns another. `clears` counts how often the record was wiped,
/// which lets tests pin down the forced-logout-once behavior.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    slot: Arc<Mutex<Option<String>>>,
    clears: Arc<AtomicUsize>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of times `clear` was called on a populated or empty slot.
    pub fn clears(&self) -> usize {
        self.clears.load(Ordering::SeqCst)
    }
}

impl MemoryStore {
    fn slot(&self) -> std::sync::MutexGuard<'_, Option<String>> {
        self.slot.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl SessionStore for MemoryStore {
    fn load(&self) -> Option<String> {
        self.slot().clone()
    }

    fn save(&self, raw: &str) {
        *self.slot() = Some(raw.to_string());
    }

    fn clear(&self) {
        *self.slot() = None;
        self.clears.fetch_add(1, Ordering::SeqCst);
    }
}
