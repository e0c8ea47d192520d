//! This crate contains all shared UI for the workspace: the auth context and
//! route guard, the per-entity form controllers, display formatters, list
//! hooks, and the basic components the pages are built from.

pub mod components;
pub mod format;
pub mod forms;

mod auth;
pub use auth::{use_api, use_auth, AuthHandle, AuthProvider, AuthState};

mod guard;
pub use guard::{gate_state, GateState, Protected};

mod menu;
pub use menu::{visible_entries, MenuEntry, MENU};

mod clientes;
pub use clientes::{use_clientes, ClientesHandle};

mod obras;
pub use obras::{use_obras, ObrasHandle};

mod navbar;
pub use navbar::Navbar;
