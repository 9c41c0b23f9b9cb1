use crate::backend::wire::{CreateConversation, UserEnvelope};
use crate::{
    AccountBackend, AuthResponse, BackendError, BackendResult, Credentials, RegistrationRequest,
};

use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use maca_config::BackendConfig;
use maca_core::{ChatMessage, Conversation, UserProfile};
use reqwest::{Client as ReqwestClient, Method, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;

const REGISTER_FAILED: &str = "Erro ao realizar cadastro.";
const LOGIN_FAILED: &str = "E-mail ou senha incorretos.";
const PROFILE_SAVE_FAILED: &str = "Não foi possível salvar os dados no servidor.";
const REQUEST_FAILED: &str = "Não foi possível concluir a solicitação.";

/// reqwest implementation of [`AccountBackend`]
pub struct HttpBackend {
    pub base_url: String,
    client: ReqwestClient,
}

impl HttpBackend {
    /// Create a new client
    ///
    /// # Arguments
    /// * `base_url` - Backend URL (e.g., "https://api.maca-art.com")
    /// * `timeout` - Per-request timeout
    pub fn new(base_url: &str, timeout: Duration) -> BackendResult<Self> {
        let client = ReqwestClient::builder().timeout(timeout).build()?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    pub fn from_config(config: &BackendConfig) -> BackendResult<Self> {
        Self::new(
            &config.base_url,
            Duration::from_secs(config.request_timeout_secs),
        )
    }

    /// Build a request with an optional bearer token
    fn request(&self, method: Method, path: &str, token: Option<&str>) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        let req = self.client.request(method, &url);

        match token {
            Some(token) => req.bearer_auth(token),
            None => req,
        }
    }

    /// Send and return the raw body of a 2xx answer.
    ///
    /// On bearer-authenticated calls 401/403 map to `Unauthorized`. Any other
    /// non-2xx (including a 401 for bad credentials at sign-in) becomes a
    /// validation error carrying the body's `message`, or `fallback_message`
    /// without one.
    async fn send(
        &self,
        req: reqwest::RequestBuilder,
        authenticated: bool,
        fallback_message: &str,
    ) -> BackendResult<String> {
        let response = req.send().await?;
        let status = response.status();
        let body = response.text().await?;
        debug!("backend answered {status}");

        if authenticated && (status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN) {
            return Err(BackendError::unauthorized());
        }

        if !status.is_success() {
            let message = serde_json::from_str::<Value>(&body)
                .ok()
                .and_then(|v| v.get("message").and_then(Value::as_str).map(String::from))
                .filter(|m| !m.trim().is_empty())
                .unwrap_or_else(|| fallback_message.to_string());
            return Err(BackendError::validation(message));
        }

        Ok(body)
    }

    async fn execute<T: DeserializeOwned>(
        &self,
        req: reqwest::RequestBuilder,
        authenticated: bool,
        fallback_message: &str,
    ) -> BackendResult<T> {
        let body = self.send(req, authenticated, fallback_message).await?;
        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait]
impl AccountBackend for HttpBackend {
    // =========================================================================
    // Auth
    // =========================================================================

    async fn register(&self, request: &RegistrationRequest) -> BackendResult<AuthResponse> {
        let req = self
            .request(Method::POST, "/api/auth/register", None)
            .json(request);
        self.execute(req, false, REGISTER_FAILED).await
    }

    async fn login(&self, credentials: &Credentials) -> BackendResult<AuthResponse> {
        let req = self
            .request(Method::POST, "/api/auth/login", None)
            .json(credentials);
        self.execute(req, false, LOGIN_FAILED).await
    }

    async fn me(&self, token: &str) -> BackendResult<UserProfile> {
        let req = self.request(Method::GET, "/api/auth/me", Some(token));
        let envelope: UserEnvelope = self.execute(req, true, REQUEST_FAILED).await?;
        Ok(envelope.user)
    }

    async fn update_profile(&self, token: &str, profile: &UserProfile) -> BackendResult<UserProfile> {
        let req = self
            .request(Method::PATCH, "/api/user/profile", Some(token))
            .json(profile);
        let envelope: UserEnvelope = self.execute(req, true, PROFILE_SAVE_FAILED).await?;
        Ok(envelope.user)
    }

    // =========================================================================
    // Chat history
    // =========================================================================

    async fn list_conversations(&self, token: &str) -> BackendResult<Vec<Conversation>> {
        let req = self.request(Method::GET, "/api/chats", Some(token));
        self.execute(req, true, REQUEST_FAILED).await
    }

    async fn create_conversation(&self, token: &str, title: &str) -> BackendResult<Conversation> {
        let req = self
            .request(Method::POST, "/api/chats", Some(token))
            .json(&CreateConversation { title });
        self.execute(req, true, REQUEST_FAILED).await
    }

    async fn post_message(
        &self,
        token: &str,
        conversation_id: &str,
        message: &ChatMessage,
    ) -> BackendResult<()> {
        let req = self
            .request(
                Method::POST,
                &format!("/api/chats/{}/messages", conversation_id),
                Some(token),
            )
            .json(message);
        self.send(req, true, REQUEST_FAILED).await?;
        Ok(())
    }
}
