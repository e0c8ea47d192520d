//! Client list state: fetch on mount, create/update/remove with refresh, and
//! the forced-logout path when the backend reports an expired session.

use api::{ApiClient, Cliente};
use dioxus::prelude::*;

use crate::auth::{use_api, use_auth, AuthHandle};

#[derive(Clone)]
pub struct ClientesHandle {
    pub clientes: Signal<Vec<Cliente>>,
    pub loading: Signal<bool>,
    pub error: Signal<Option<String>>,
    api: ApiClient,
    auth: AuthHandle,
}

impl ClientesHandle {
    /// Reload the list. A 401 here means the session expired: the API client
    /// has already cleared the persisted record, and publishing the logout on
    /// the auth signal makes the route guard redirect on the next render.
    pub async fn refresh(&mut self) {
        self.loading.set(true);
        self.error.set(None);
        match self.api.list_clientes().await {
            Ok(list) => self.clientes.set(list),
            Err(err) => {
                tracing::error!("failed to load clientes: {err}");
                self.error.set(Some(err.message()));
                if err.is_unauthorized() {
                    self.auth.logout();
                }
            }
        }
        self.loading.set(false);
    }

    /// Delete one client and reload. The error string is handed back so the
    /// page decides where to show it.
    pub async fn remove(&mut self, id: i64) -> Result<(), String> {
        match self.api.delete_cliente(id).await {
            Ok(()) => {
                self.refresh().await;
                Ok(())
            }
            Err(err) => {
                if err.is_unauthorized() {
                    self.auth.logout();
                }
                Err(err.message())
            }
        }
    }
}

/// Client list hook; fetches once on mount.
pub fn use_clientes() -> ClientesHandle {
    let api = use_api();
    let auth = use_auth();
    let clientes = use_signal(Vec::new);
    let loading = use_signal(|| true);
    let error = use_signal(|| None);

    let handle = ClientesHandle {
        clientes,
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
