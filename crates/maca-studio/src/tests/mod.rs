mod conversation_log;
mod studio;

use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use maca_client::{
    AccountBackend, AuthResponse, BackendError, BackendResult, ClassificationRequest, Credentials,
    GeneratedImage, GenerativeProvider, ProviderError, ProviderResult, RegistrationRequest,
    TextRequest, VideoJob, VideoJobStatus,
};
use maca_core::{ChatMessage, Conversation, UserProfile, guest_profile};

pub(crate) fn noon(day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, day, 12, 0, 0).unwrap()
}

pub(crate) fn profile(email: &str, credits: u32, reset: DateTime<Utc>) -> UserProfile {
    let mut profile = guest_profile(reset);
    profile.email = email.to_string();
    profile.company_name = "Pizzaria Bella".to_string();
    profile.company_type = "Restaurante".to_string();
    profile.daily_credits = credits;
    profile
}

// =========================================================================
// Account backend double
// =========================================================================

/// Scriptable backend that records every call.
#[derive(Default)]
pub(crate) struct MockBackend {
    pub offline: AtomicBool,
    pub reject_token: AtomicBool,
    pub fail_updates: AtomicBool,
    pub validation_message: Mutex<Option<String>>,
    pub remote_profile: Mutex<Option<UserProfile>>,
    pub conversations: Mutex<Vec<Conversation>>,
    pub created_titles: Mutex<Vec<String>>,
    pub posted: Mutex<Vec<(String, ChatMessage)>>,
    pub updates: Mutex<Vec<UserProfile>>,
    pub me_calls: AtomicUsize,
}

impl MockBackend {
    pub fn online(remote_profile: Option<UserProfile>) -> Arc<Self> {
        let backend = Self::default();
        *backend.remote_profile.lock().unwrap() = remote_profile;
        Arc::new(backend)
    }

    pub fn offline() -> Arc<Self> {
        let backend = Self::default();
        backend.offline.store(true, Ordering::SeqCst);
        Arc::new(backend)
    }

    fn check(&self) -> BackendResult<()> {
        if self.offline.load(Ordering::SeqCst) {
            return Err(BackendError::network("connection refused"));
        }
        if let Some(message) = self.validation_message.lock().unwrap().clone() {
            return Err(BackendError::validation(message));
        }
        Ok(())
    }

    fn check_token(&self) -> BackendResult<()> {
        self.check()?;
        if self.reject_token.load(Ordering::SeqCst) {
            return Err(BackendError::unauthorized());
        }
        Ok(())
    }

    fn auth_response(&self, email: &str) -> AuthResponse {
        let mut user = self
            .remote_profile
            .lock()
            .unwrap()
            .clone()
            .unwrap_or_else(|| profile(email, 10, noon(1)));
        user.email = email.to_string();
        AuthResponse {
            token: Some("tok-1".to_string()),
            user,
        }
    }
}

#[async_trait]
impl AccountBackend for MockBackend {
    async fn register(&self, request: &RegistrationRequest) -> BackendResult<AuthResponse> {
        self.check()?;
        Ok(self.auth_response(&request.email))
    }

    async fn login(&self, credentials: &Credentials) -> BackendResult<AuthResponse> {
        self.check()?;
        Ok(self.auth_response(&credentials.email))
    }

    async fn me(&self, _token: &str) -> BackendResult<UserProfile> {
        self.me_calls.fetch_add(1, Ordering::SeqCst);
        self.check_token()?;
        self.remote_profile
            .lock()
            .unwrap()
            .clone()
            .ok_or_else(BackendError::unauthorized)
    }

    async fn update_profile(&self, _token: &str, profile: &UserProfile) -> BackendResult<UserProfile> {
        self.check_token()?;
        if self.fail_updates.load(Ordering::SeqCst) {
            return Err(BackendError::network("timeout"));
        }
        self.updates.lock().unwrap().push(profile.clone());
        *self.remote_profile.lock().unwrap() = Some(profile.clone());
        Ok(profile.clone())
    }

    async fn list_conversations(&self, _token: &str) -> BackendResult<Vec<Conversation>> {
        self.check_token()?;
        Ok(self.conversations.lock().unwrap().clone())
    }

    async fn create_conversation(&self, _token: &str, title: &str) -> BackendResult<Conversation> {
        self.check_token()?;
        let mut titles = self.created_titles.lock().unwrap();
        titles.push(title.to_string());
        Ok(Conversation {
            id: format!("c-{}", titles.len()),
            title: title.to_string(),
            messages: Vec::new(),
            updated_at: None,
        })
    }

    async fn post_message(
        &self,
        _token: &str,
        conversation_id: &str,
        message: &ChatMessage,
    ) -> BackendResult<()> {
        self.check_token()?;
        self.posted
            .lock()
            .unwrap()
            .push((conversation_id.to_string(), message.clone()));
        Ok(())
    }
}

// =========================================================================
// Generative provider double
// =========================================================================

/// Provider double counting every call. Video polls answer from a script;
/// an exhausted script keeps answering `Pending`.
#[derive(Default)]
pub(crate) struct MockProvider {
    pub unavailable: AtomicBool,
    pub no_images: AtomicBool,
    pub classification: Mutex<Option<String>>,
    pub video_script: Mutex<VecDeque<VideoJobStatus>>,
    pub text_calls: AtomicUsize,
    pub image_calls: AtomicUsize,
    pub video_starts: AtomicUsize,
    pub video_polls: AtomicUsize,
    pub classify_calls: AtomicUsize,
    pub last_text_request: Mutex<Option<TextRequest>>,
    pub last_image_prompt: Mutex<Option<(String, String)>>,
    pub last_video_prompt: Mutex<Option<(String, String)>>,
}

impl MockProvider {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn unavailable() -> Arc<Self> {
        let provider = Self::default();
        provider.unavailable.store(true, Ordering::SeqCst);
        Arc::new(provider)
    }

    pub fn with_video_script(script: Vec<VideoJobStatus>) -> Arc<Self> {
        let provider = Self::default();
        *provider.video_script.lock().unwrap() = script.into();
        Arc::new(provider)
    }

    pub fn classifying(answer: &str) -> Arc<Self> {
        let provider = Self::default();
        *provider.classification.lock().unwrap() = Some(answer.to_string());
        Arc::new(provider)
    }

    pub fn total_calls(&self) -> usize {
        self.text_calls.load(Ordering::SeqCst)
            + self.image_calls.load(Ordering::SeqCst)
            + self.video_starts.load(Ordering::SeqCst)
            + self.video_polls.load(Ordering::SeqCst)
            + self.classify_calls.load(Ordering::SeqCst)
    }

    fn check(&self) -> ProviderResult<()> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(ProviderError::api(503, "unavailable"));
        }
        Ok(())
    }
}

#[async_trait]
impl GenerativeProvider for MockProvider {
    async fn complete_text(&self, request: &TextRequest) -> ProviderResult<String> {
        self.text_calls.fetch_add(1, Ordering::SeqCst);
        self.check()?;
        *self.last_text_request.lock().unwrap() = Some(request.clone());
        Ok("Legenda gerada".to_string())
    }

    async fn generate_image(
        &self,
        prompt: &str,
        aspect_ratio: &str,
    ) -> ProviderResult<Vec<GeneratedImage>> {
        self.image_calls.fetch_add(1, Ordering::SeqCst);
        self.check()?;
        *self.last_image_prompt.lock().unwrap() = Some((prompt.to_string(), aspect_ratio.to_string()));
        if self.no_images.load(Ordering::SeqCst) {
            return Ok(Vec::new());
        }
        Ok(vec![
            GeneratedImage {
                data: "AAAA".to_string(),
                mime_type: "image/png".to_string(),
            },
            GeneratedImage {
                data: "BBBB".to_string(),
                mime_type: "image/png".to_string(),
            },
        ])
    }

    async fn start_video_job(&self, prompt: &str, aspect_ratio: &str) -> ProviderResult<VideoJob> {
        self.video_starts.fetch_add(1, Ordering::SeqCst);
        self.check()?;
        *self.last_video_prompt.lock().unwrap() = Some((prompt.to_string(), aspect_ratio.to_string()));
        Ok(VideoJob {
            name: "operations/op-1".to_string(),
        })
    }

    async fn poll_video_job(&self, _job: &VideoJob) -> ProviderResult<VideoJobStatus> {
        self.video_polls.fetch_add(1, Ordering::SeqCst);
        self.check()?;
        Ok(self
            .video_script
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(VideoJobStatus::Pending))
    }

    async fn classify_payment(&self, _request: &ClassificationRequest) -> ProviderResult<String> {
        self.classify_calls.fetch_add(1, Ordering::SeqCst);
        self.check()?;
        self.classification
            .lock()
            .unwrap()
            .clone()
            .ok_or_else(|| ProviderError::malformed("no scripted answer"))
    }
}
