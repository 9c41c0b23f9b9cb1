use crate::{AuthResponse, BackendResult, Credentials, RegistrationRequest};

use async_trait::async_trait;
use maca_core::{ChatMessage, Conversation, UserProfile};

/// Remote account, profile and chat-history service.
///
/// Every authenticated call takes the bearer token explicitly.
#[async_trait]
pub trait AccountBackend: Send + Sync {
    async fn register(&self, request: &RegistrationRequest) -> BackendResult<AuthResponse>;

    async fn login(&self, credentials: &Credentials) -> BackendResult<AuthResponse>;

    /// Profile behind `token`. Any refusal surfaces as an error, never `None`.
    async fn me(&self, token: &str) -> BackendResult<UserProfile>;

    /// Full-profile update; returns the stored echo.
    async fn update_profile(&self, token: &str, profile: &UserProfile) -> BackendResult<UserProfile>;

    async fn list_conversations(&self, token: &str) -> BackendResult<Vec<Conversation>>;

    async fn create_conversation(&self, token: &str, title: &str) -> BackendResult<Conversation>;

    async fn post_message(
        &self,
        token: &str,
        conversation_id: &str,
        message: &ChatMessage,
    ) -> BackendResult<()>;
}
