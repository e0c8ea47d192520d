//! Obra list state and creation. Listing is read-only in the current scope.

use api::{ApiClient, Obra};
use dioxus::prelude::*;

use crate::auth::{use_api, use_auth, AuthHandle};

#[derive(Clone)]
pub struct ObrasHandle {
    pub obras: Signal<Vec<Obra>>,
    pub loading: Signal<bool>,
    pub error: Signal<Option<String>>,
    api: ApiClient,
    auth: AuthHandle,
}

impl ObrasHandle {
    pub async fn refresh(&mut self) {
        self.loading.set(true);
        self.error.set(None);
        match self.api.list_obras().await {
            Ok(list) => self.obras.set(list),
            Err(err) => {
                tracing::error!("failed to load obras: {err}");
                self.error.set(Some(err.message()));
                if err.is_unauthorized() {
                    self.auth.logout();
                }
            }
        }
        self.loading.set(false);
    }
}

/// Obra list hook; fetches once on mount.
pub fn use_obras() -> ObrasHandle {
    let api = use_api();
    let auth = use_auth();
    let obras = use_signal(Vec::new);
    let loading = use_signal(|| true);
    let error = use_signal(|| None);

    let handle = ObrasHandle {
        obras,
        loading,
        error,
        api,
        auth,
    };

    {
        let mut handle = handle.clone();
        use_hook(move || {
            spawn(async move {
                handle.refresh().await;
            });
        });
    }

    handle
}
