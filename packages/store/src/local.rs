//! localStorage-backed SessionStore for the web platform.
//!
//! The whole session lives under one key, so a login or logout is a single
//! `setItem`/`removeItem` and there is no window where the profile exists
//! without its token. Storage failures (private browsing, disabled storage)
//! degrade to "no session" instead of surfacing an error.

use crate::session::SessionStore;

const SESSION_KEY: &str = "ineng.session";

#[derive(Clone, Debug, Default)]
pub struct LocalStore;

impl LocalStore {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok()?
    }
}

impl SessionStore for LocalStore {
    fn load(&self) -> Option<String> {
        Self::storage()?.get_item(SESSION_KEY).ok()?
    }

    fn save(&self, raw: &str) {
        if let Some(storage) = Self::storage() {
            if storage.set_item(SESSION_KEY, raw).is_err() {
                tracing::warn!("failed to persist session to localStorage");
            }
        }
    }

    fn clear(&self) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(SESSION_KEY);
        }
    }
}
