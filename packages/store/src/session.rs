//! # Session manager — the single owner of authentication state
//!
//! [`SessionManager`] holds the in-memory session and keeps it in sync with a
//! [`SessionStore`] backend. The store persists one serialized
//! [`SessionRecord`](crate::SessionRecord) under a single key, so the profile
//! and the bearer token are always written and cleared together.
//!
//! Lifecycle: construct with a backend, call [`initialize`](SessionManager::initialize)
//! once on startup, then read state through the accessors. `initialize` sets the
//! `ready` flag exactly once, after the persisted record has been checked;
//! nothing should trust [`is_authenticated`](SessionManager::is_authenticated)
//! before [`is_ready`](SessionManager::is_ready) reports true.
//!
//! A corrupt persisted record (JSON that no longer parses) is treated as "no
//! session": the store is cleared and the manager comes up logged out. Nothing
//! here ever performs a network call.

use std::sync::Mutex;

use crate::models::{SessionRecord, UserProfile};

/// Synchronous key-less storage for the serialized session record.
///
/// Mirrors localStorage semantics: reads and writes complete immediately and
/// failures degrade to "no data". Implementations live in sibling modules
/// ([`crate::memory`], [`crate::local`]).
pub trait SessionStore: Send + Sync {
    fn load(&self) -> Option<String>;
    fn save(&self, raw: &str);
    fn clear(&self);
}

#[derive(Debug, Default)]
struct SessionState {
    record: Option<SessionRecord>,
    ready: bool,
}

/// Owns the current session. Intended to be shared behind an `Arc` and
/// injected into whatever needs it (auth context, API client), never read
/// from ambient globals.
pub struct SessionManager {
    store: Box<dyn SessionStore>,
    state: Mutex<SessionState>,
}

impl SessionManager {
    pub fn new(store: impl SessionStore + 'static) -> Self {
        Self {
            store: Box::new(store),
            state: Mutex::new(SessionState::default()),
        }
    }

    /// Restore the session from the persisted record, then mark the manager
    /// ready. Runs the check at most once; later calls are no-ops.
    pub fn initialize(&self) {
        let mut state = self.lock();
        if state.ready {
            return;
        }
        if let Some(raw) = self.store.load() {
            match serde_json::from_str::<SessionRecord>(&raw) {
                Ok(record) => state.record = Some(record),
                Err(err) => {
                    // Self-heal: a record we cannot parse is the same as none.
                    tracing::warn!("persisted session is corrupt, clearing: {err}");
                    self.store.clear();
                }
            }
        }
        state.ready = true;
    }

    /// True once [`initialize`](Self::initialize) has completed, whatever the
    /// outcome.
    pub fn is_ready(&self) -> bool {
        self.lock().ready
    }

    /// True iff a user profile is currently held in memory.
    pub fn is_authenticated(&self) -> bool {
        self.lock().record.is_some()
    }

    pub fn current_user(&self) -> Option<UserProfile> {
        self.lock().record.as_ref().map(|r| r.user.clone())
    }

    pub fn token(&self) -> Option<String> {
        self.lock().record.as_ref().map(|r| r.token.clone())
    }

    /// Store profile and token as one record and update the in-memory session
    /// in a single synchronous step.
    pub fn login(&self, user: UserProfile, token: String) {
        let record = SessionRecord { user, token };
        match serde_json::to_string(&record) {
            Ok(raw) => self.store.save(&raw),
            Err(err) => tracing::error!("failed to serialize session record: {err}"),
        }
        let mut state = self.lock();
        state.record = Some(record);
        state.ready = true;
    }

    /// Clear the persisted record and the in-memory session. Idempotent: when
    /// no session is held, the store is left untouched, so a burst of 401
    /// responses clears storage exactly once.
    pub fn logout(&self) {
        let mut state = self.lock();
        if state.record.is_none() {
            return;
        }
        state.record = None;
        self.store.clear();
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, SessionState> {
        // Single-threaded UI event loop; a poisoned lock means a panic already
        // happened elsewhere, so propagating the inner state is fine.
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryStore;
    use crate::models::UserRole;

    fn profile() -> UserProfile {
        UserProfile {
            id: 1,
            name: "A".to_string(),
            email: "a@x.com".to_string(),
            role: UserRole::Gestor,
        }
    }

    #[test]
    fn login_then_logout_round_trip() {
        let backing = MemoryStore::new();
        let session = SessionManager::new(backing.clone());
        session.initialize();

        assert!(!session.is_authenticated());

        session.login(profile(), "tok123".to_string());
        assert!(session.is_authenticated());
        assert_eq!(session.token().as_deref(), Some("tok123"));
        assert_eq!(session.current_user().map(|u| u.name), Some("A".to_string()));
        assert!(backing.load().is_some());

        session.logout();
        assert!(!session.is_authenticated());
        assert!(session.token().is_none());
        assert!(backing.load().is_none());
    }

    #[test]
    fn initialize_restores_persisted_record() {
        let backing = MemoryStore::new();
        {
            let session = SessionManager::new(backing.clone());
            session.initialize();
            session.login(profile(), "tok123".to_string());
        }

        // Fresh manager over the same backing store, as after a page reload.
        let session = SessionManager::new(backing.clone());
        assert!(!session.is_ready());
        session.initialize();
        assert!(session.is_ready());
        assert!(session.is_authenticated());
        assert_eq!(session.token().as_deref(), Some("tok123"));
    }

    #[test]
    fn corrupt_record_is_cleared_and_treated_as_logged_out() {
        let backing = MemoryStore::new();
        backing.save("{not json");

        let session = SessionManager::new(backing.clone());
        session.initialize();

        assert!(session.is_ready());
        assert!(!session.is_authenticated());
        assert!(backing.load().is_none(), "corrupt record must be cleared");
    }

    #[test]
    fn ready_is_set_even_when_store_is_empty() {
        let session = SessionManager::new(MemoryStore::new());
        assert!(!session.is_ready());
        session.initialize();
        assert!(session.is_ready());
        assert!(!session.is_authenticated());
    }

    #[test]
    fn logout_clears_storage_exactly_once() {
        let backing = MemoryStore::new();
        let session = SessionManager::new(backing.clone());
        session.initialize();
        session.login(profile(), "tok".to_string());

        session.logout();
        session.logout();
        session.logout();

        assert_eq!(backing.clears(), 1);
    }
}
