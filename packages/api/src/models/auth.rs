//! Authentication payloads. Write-only from the client's point of view —
//! nothing here is retained after the request completes (the login response
//! feeds the session manager and is then dropped).

use serde::{Deserialize, Serialize};
use store::{UserProfile, UserRole};

/// `POST /auth/login` body.
#[derive(Debug, Clone, Serialize)]
pub struct LoginPayload {
    pub email: String,
    pub password: String,
}

/// `POST /auth/login` response.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: UserProfile,
}

/// `POST /auth/register` body. `cpf` is digits-only, 11 characters.
#[derive(Debug, Clone, Serialize)]
pub struct RegisterPayload {
    pub name: String,
    pub cpf: String,
    pub email: String,
    pub password: String,
    pub role: UserRole,
}

/// `POST /auth/request-reset` body.
#[derive(Debug, Clone, Serialize)]
pub struct RequestResetPayload {
    pub email: String,
}

/// `POST /auth/reset-password` body, carrying the emailed token.
#[derive(Debug, Clone, Serialize)]
pub struct ResetPasswordPayload {
    pub email: String,
    pub token: String,
    #[serde(rename = "newPassword")]
    pub new_password: String,
}

/// Generic `{ message }` acknowledgement used by the auth endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiMessage {
    pub message: String,
}
