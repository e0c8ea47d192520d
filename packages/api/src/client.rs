//! # ApiClient — the one HTTP surface of the console
//!
//! Stateless except for the injected [`SessionManager`]: the bearer token is
//! read from it on every request and attached when present, so requests made
//! before login simply omit the header. All bodies are JSON except obra
//! creation, which is multipart (text fields plus photo file parts).
//!
//! A 401 on an authenticated list fetch means the token expired server-side;
//! the client clears the session as a side effect and the route guard
//! redirects on the next render. `SessionManager::logout` is idempotent, so a
//! burst of 401s wipes storage once.

use std::sync::Arc;

use reqwest::multipart;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use store::SessionManager;

use crate::config;
use crate::error::ApiError;
use crate::models::auth::{
    ApiMessage, LoginPayload, LoginResponse, RegisterPayload, RequestResetPayload,
    ResetPasswordPayload,
};
use crate::models::cliente::{Cliente, ClientePayload};
use crate::models::obra::{FotoUpload, Obra, ObraPayload, MAX_FOTOS};

#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
    session: Arc<SessionManager>,
}

/// `POST /clientes` and `PUT /clientes/:id` respond with `{ message, cliente }`.
#[derive(Debug, Deserialize)]
struct ClienteEnvelope {
    cliente: Cliente,
}

impl ApiClient {
    pub fn new(session: Arc<SessionManager>) -> Self {
        Self::with_base_url(config::base_url(), session)
    }

    pub fn with_base_url(base_url: impl Into<String>, session: Arc<SessionManager>) -> Self {
        Self {
            base_url: base_url.into(),
            http: reqwest::Client::new(),
            session,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn authorize(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match self.session.token() {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    fn forced_logout(&self) {
        if self.session.is_authenticated() {
            tracing::warn!("authenticated request returned 401, clearing session");
        }
        self.session.logout();
    }

    // --- auth -----------------------------------------------------------

    pub async fn login(&self, payload: &LoginPayload) -> Result<LoginResponse, ApiError> {
        self.post_json("/auth/login", payload).await
    }

    pub async fn register(&self, payload: &RegisterPayload) -> Result<ApiMessage, ApiError> {
        self.post_json("/auth/register", payload).await
    }

    pub async fn request_reset(
        &self,
        payload: &RequestResetPayload,
    ) -> Result<ApiMessage, ApiError> {
        self.post_json("/auth/request-reset", payload).await
    }

    pub async fn reset_password(
        &self,
        payload: &ResetPasswordPayload,
    ) -> Result<ApiMessage, ApiError> {
        self.post_json("/auth/reset-password", payload).await
    }

    // --- clientes -------------------------------------------------------

    pub async fn list_clientes(&self) -> Result<Vec<Cliente>, ApiError> {
        self.get_list("/clientes").await
    }

    pub async fn create_cliente(&self, payload: &ClientePayload) -> Result<Cliente, ApiError> {
        let envelope: ClienteEnvelope = self.post_json("/clientes", payload).await?;
        Ok(envelope.cliente)
    }

    pub async fn update_cliente(
        &self,
        id: i64,
        payload: &ClientePayload,
    ) -> Result<Cliente, ApiError> {
        let response = self
            .authorize(self.http.put(self.url(&format!("/clientes/{id}"))))
            .json(payload)
            .send()
            .await?;
        let envelope: ClienteEnvelope = decode(response).await?;
        Ok(envelope.cliente)
    }

    pub async fn delete_cliente(&self, id: i64) -> Result<(), ApiError> {
        let response = self
            .authorize(self.http.delete(self.url(&format!("/clientes/{id}"))))
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(error_for(response).await);
        }
        Ok(())
    }

    // --- obras ----------------------------------------------------------

    pub async fn list_obras(&self) -> Result<Vec<Obra>, ApiError> {
        self.get_list("/obras").await
    }

    /// Multipart creation: text fields plus up to [`MAX_FOTOS`] photo parts
    /// under the `fotos` key. The content type (with its boundary) is set by
    /// reqwest; it must not be forced to `multipart/form-data` manually.
    pub async fn create_obra(
        &self,
        payload: &ObraPayload,
        fotos: &[FotoUpload],
    ) -> Result<Obra, ApiError> {
        let mut form = multipart::Form::new();
        for (name, value) in payload.form_fields() {
            form = form.text(name, value);
        }
        for foto in fotos.iter().take(MAX_FOTOS) {
            let part = multipart::Part::bytes(foto.bytes.clone())
                .file_name(foto.file_name.clone())
                .mime_str(&foto.mime)?;
            form = form.part("fotos", part);
        }
        let response = self
            .authorize(self.http.post(self.url("/obras")))
            .multipart(form)
            .send()
            .await?;
        decode(response).await
    }

    // --- plumbing -------------------------------------------------------

    async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: serde::Serialize,
        T: DeserializeOwned,
    {
        let response = self
            .authorize(self.http.post(self.url(path)))
            .json(body)
            .send()
            .await?;
        decode(response).await
    }

    /// List fetch with the forced-logout side effect on 401.
    async fn get_list<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self.authorize(self.http.get(self.url(path))).send().await?;
        if response.status() == StatusCode::UNAUTHORIZED {
            self.forced_logout();
            return Err(ApiError::Unauthorized);
        }
        decode(response).await
    }
}

async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
    if !response.status().is_success() {
        return Err(error_for(response).await);
    }
    Ok(response.json::<T>().await?)
}

/// Build the form-level error for a non-2xx response: prefer the backend's
/// `error`/`message` field, fall back to a generic string with the status.
async fn error_for(response: reqwest::Response) -> ApiError {
    let status = response.status();
    if status == StatusCode::UNAUTHORIZED {
        return ApiError::Unauthorized;
    }
    let fallback = format!("Falha na API (HTTP {}).", status.as_u16());
    match response.json::<serde_json::Value>().await {
        Ok(body) => {
            let message = body
                .get("error")
                .and_then(|v| v.as_str())
                .or_else(|| body.get("message").and_then(|v| v.as_str()));
            ApiError::Api(message.map(str::to_string).unwrap_or(fallback))
        }
        Err(_) => ApiError::Api(fallback),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use store::{MemoryStore, UserProfile, UserRole};

    fn logged_in_client(backing: MemoryStore) -> ApiClient {
        let session = Arc::new(SessionManager::new(backing));
        session.initialize();
        session.login(
            UserProfile {
                id: 1,
                name: "A".to_string(),
                email: "a@x.com".to_string(),
                role: UserRole::Gestor,
            },
            "tok123".to_string(),
        );
        ApiClient::with_base_url("http://localhost:9", session)
    }

    #[test]
    fn forced_logout_clears_storage_exactly_once() {
        let backing = MemoryStore::new();
        let client = logged_in_client(backing.clone());

        // Simulates a retry loop where every attempt comes back 401.
        client.forced_logout();
        client.forced_logout();
        client.forced_logout();

        assert!(!client.session.is_authenticated());
        assert_eq!(backing.clears(), 1);
    }

    #[test]
    fn url_joins_base_and_path() {
        let client = logged_in_client(MemoryStore::new());
        assert_eq!(client.url("/clientes"), "http://localhost:9/clientes");
    }

    #[tokio::test]
    async fn invalid_photo_mime_fails_before_any_request() {
        use crate::models::obra::ObraDetalhe;

        let client = logged_in_client(MemoryStore::new());
        let payload = ObraPayload {
            nome_obra: "Edifício Central".to_string(),
            detalhe: ObraDetalhe::Construcao {
                cno: "123456789012".to_string(),
            },
            cliente_id: 3,
            endereco_completo: "Rua A, 1".to_string(),
            data_inicio: "2026-01-10".to_string(),
            previsao_entrega: "2027-06-30".to_string(),
        };
        let fotos = [FotoUpload {
            file_name: "a.jpg".to_string(),
            mime: "definitely not a mime type".to_string(),
            bytes: vec![1, 2, 3],
        }];

        // The bogus mime aborts multipart assembly; nothing hits the wire
        // (the base URL points at a closed port, so a sent request would
        // surface as a connect error instead).
        let err = client.create_obra(&payload, &fotos).await.unwrap_err();
        assert!(matches!(err, ApiError::Network(_)));
    }
}
