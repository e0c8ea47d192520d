//! # API crate — REST client and domain models
//!
//! Everything the frontends need to talk to the management backend:
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`models`] | Domain types (`Cliente`, `Obra`, auth payloads) and their mappings onto the backend's flat wire format |
//! | [`client`] | [`ApiClient`] — attaches the bearer token, speaks JSON (multipart for obra creation), centralizes the base URL |
//! | [`error`] | [`ApiError`] — the one error type every call returns |
//! | [`config`] | Base URL resolution (compile-time override, localhost default) |
//!
//! The client never owns authentication state; it borrows a shared
//! [`store::SessionManager`] and reads the token from it per request. A 401 on
//! a list fetch clears that session as a side effect, so the route guard
//! redirects on the next render.

pub mod client;
pub mod config;
pub mod error;
pub mod models;

pub use client::ApiClient;
pub use error::ApiError;
pub use models::auth::{
    ApiMessage, LoginPayload, LoginResponse, RegisterPayload, RequestResetPayload,
    ResetPasswordPayload,
};
pub use models::cliente::{Cliente, ClientePayload, Documento, TipoPessoa};
pub use models::obra::{FotoUpload, Obra, ObraDetalhe, ObraPayload, TipoObra, MAX_FOTOS};
