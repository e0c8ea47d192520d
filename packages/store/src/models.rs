//! Session data shared across the workspace.

use serde::{Deserialize, Serialize};

/// Role assigned by the backend. Admins see extra menu entries
/// (user registration); everything else is common to both roles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserRole {
    Admin,
    Gestor,
}

impl UserRole {
    pub fn is_admin(&self) -> bool {
        matches!(self, UserRole::Admin)
    }

    /// Label shown in the dashboard header.
    pub fn label(&self) -> &'static str {
        match self {
            UserRole::Admin => "Administrador",
            UserRole::Gestor => "Gestor",
        }
    }
}

/// Profile returned by the login endpoint and kept for the session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub role: UserRole,
}

/// The persisted session: profile and bearer token, written and cleared
/// as one record so they can never diverge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionRecord {
    pub user: UserProfile,
    pub token: String,
}
