//! Authentication context and hooks for the UI.
//!
//! [`AuthProvider`] owns the one [`SessionManager`] of the application and
//! mirrors it into a reactive [`AuthState`] signal. The manager, the signal
//! and the [`ApiClient`] built on top of it are all provided via context, so
//! any page reaches the same session through [`use_auth`] / [`use_api`].
//!
//! The persisted-session check is synchronous (localStorage), so the provider
//! initializes the manager during its first render; by the time any guarded
//! route renders, `ready` is already true and the gate cannot flicker to a
//! premature redirect.

use std::sync::Arc;

use api::ApiClient;
use dioxus::prelude::*;
use store::{SessionManager, UserProfile};

/// Reactive authentication state for the application.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AuthState {
    pub user: Option<UserProfile>,
    /// Whether the initial persisted-session check has completed.
    pub ready: bool,
}

/// Handle combining the reactive state with the session manager behind it.
/// Mutations go through here so the signal and the persisted record never
/// drift apart.
#[derive(Clone)]
pub struct AuthHandle {
    state: Signal<AuthState>,
    session: Arc<SessionManager>,
}

impl AuthHandle {
    pub fn is_ready(&self) -> bool {
        self.state.read().ready
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.read().user.is_some()
    }

    pub fn user(&self) -> Option<UserProfile> {
        self.state.read().user.clone()
    }

    /// Persist the session and publish the new state in one step.
    pub fn login(&mut self, user: UserProfile, token: String) {
        self.session.login(user.clone(), token);
        self.state.set(AuthState {
            user: Some(user),
            ready: true,
        });
    }

    /// Clear the session everywhere. Safe to call repeatedly; the manager
    /// only touches storage on the first call.
    pub fn logout(&mut self) {
        self.session.logout();
        self.state.set(AuthState {
            user: None,
            ready: true,
        });
    }
}

/// Get the current authentication handle.
pub fn use_auth() -> AuthHandle {
    use_context::<AuthHandle>()
}

/// Get the shared API client.
pub fn use_api() -> ApiClient {
    use_context::<ApiClient>()
}

#[cfg(all(target_arch = "wasm32", feature = "web"))]
fn default_store() -> store::LocalStore {
    store::LocalStore::new()
}

#[cfg(not(all(target_arch = "wasm32", feature = "web")))]
fn default_store() -> store::MemoryStore {
    store::MemoryStore::new()
}

/// Provider component that manages authentication state.
/// Wrap the router with this component to enable authentication.
#[component]
pub fn AuthProvider(children: Element) -> Element {
    let session = use_hook(|| {
        let session = Arc::new(SessionManager::new(default_store()));
        session.initialize();
        session
    });

    let state = use_signal({
        let session = session.clone();
        move || AuthState {
            user: session.current_user(),
            ready: session.is_ready(),
        }
    });

    let handle = use_hook(|| AuthHandle {
        state,
        session: session.clone(),
    });
    use_context_provider(|| handle);
    use_context_provider(|| ApiClient::new(session.clone()));

    rsx! {
        {children}
    }
}
