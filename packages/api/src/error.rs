//! Error taxonomy for API calls.
//!
//! Validation never reaches this layer (forms reject locally); everything
//! here is a transport failure, a non-2xx response, or an expired session.
//! Forms display exactly one string per failure, obtained from
//! [`ApiError::message`], so no raw error ever leaks into the UI.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// The backend rejected the bearer token (HTTP 401).
    #[error("sessão expirada")]
    Unauthorized,

    /// Non-2xx response with a server-supplied message.
    #[error("{0}")]
    Api(String),

    /// Transport failure or undecodable response body.
    #[error("falha de comunicação com a API")]
    Network(#[from] reqwest::Error),
}

impl ApiError {
    /// The single human-readable string a form shows as its banner. Prefers
    /// the server-supplied message, falls back to a generic one.
    pub fn message(&self) -> String {
        match self {
            ApiError::Unauthorized => "Sessão expirada. Faça login novamente.".to_string(),
            ApiError::Api(message) => message.clone(),
            ApiError::Network(_) => "Falha de comunicação com a API.".to_string(),
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized)
    }
}
