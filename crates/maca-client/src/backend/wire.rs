use maca_core::UserProfile;

use serde::{Deserialize, Serialize};

/// Body of `POST /api/auth/register`.
#[derive(Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationRequest {
    pub email: String,
    pub password: String,
    pub company_name: String,
    pub company_type: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
}

/// Body of `POST /api/auth/login`.
#[derive(Clone, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Answer to register and login.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthResponse {
    #[serde(default)]
    pub token: Option<String>,
    pub user: UserProfile,
}

/// `{ "user": ... }` envelope used by `/api/auth/me` and the profile update.
#[derive(Debug, Deserialize)]
pub(crate) struct UserEnvelope {
    pub user: UserProfile,
}

#[derive(Serialize)]
pub(crate) struct CreateConversation<'a> {
    pub title: &'a str,
}

// Passwords stay out of logs.
impl std::fmt::Debug for RegistrationRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegistrationRequest")
            .field("email", &self.email)
            .field("company_name", &self.company_name)
            .field("company_type", &self.company_type)
            .finish_non_exhaustive()
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .finish_non_exhaustive()
    }
}
