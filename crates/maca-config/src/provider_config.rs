use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_IMAGE_MODEL, DEFAULT_PROVIDER_API_BASE,
    DEFAULT_TEXT_MODEL, DEFAULT_VERIFICATION_MODEL, DEFAULT_VIDEO_MODEL,
};

use serde::Deserialize;

pub const MIN_PROVIDER_TIMEOUT_SECS: u64 = 5;
pub const MAX_PROVIDER_TIMEOUT_SECS: u64 = 300;
pub const DEFAULT_PROVIDER_TIMEOUT_SECS: u64 = 90;

/// Generative provider (Gemini REST API).
///
/// The API key is optional here: a missing key is reported by the provider
/// at call time, which lets payment verification fall back to its heuristic.
#[derive(Clone, Deserialize)]
#[serde(default)]
pub struct ProviderConfig {
    pub api_base: String,
    pub api_key: Option<String>,
    pub text_model: String,
    pub image_model: String,
    pub video_model: String,
    pub verification_model: String,
    pub request_timeout_secs: u64,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            api_base: String::from(DEFAULT_PROVIDER_API_BASE),
            api_key: None,
            text_model: String::from(DEFAULT_TEXT_MODEL),
            image_model: String::from(DEFAULT_IMAGE_MODEL),
            video_model: String::from(DEFAULT_VIDEO_MODEL),
            verification_model: String::from(DEFAULT_VERIFICATION_MODEL),
            request_timeout_secs: DEFAULT_PROVIDER_TIMEOUT_SECS,
        }
    }
}

// Never print the key.
impl std::fmt::Debug for ProviderConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderConfig")
            .field("api_base", &self.api_base)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("text_model", &self.text_model)
            .field("image_model", &self.image_model)
            .field("video_model", &self.video_model)
            .field("verification_model", &self.verification_model)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .finish()
    }
}

impl ProviderConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.api_base.trim().is_empty() {
            return Err(ConfigError::provider("provider.api_base cannot be empty"));
        }

        for (field, model) in [
            ("text_model", &self.text_model),
            ("image_model", &self.image_model),
            ("video_model", &self.video_model),
            ("verification_model", &self.verification_model),
        ] {
            if model.trim().is_empty() {
                return Err(ConfigError::provider(format!(
                    "provider.{field} cannot be empty"
                )));
            }
        }

        if self.request_timeout_secs < MIN_PROVIDER_TIMEOUT_SECS
            || self.request_timeout_secs > MAX_PROVIDER_TIMEOUT_SECS
        {
            return Err(ConfigError::provider(format!(
                "provider.request_timeout_secs must be {}-{}, got {}",
                MIN_PROVIDER_TIMEOUT_SECS, MAX_PROVIDER_TIMEOUT_SECS, self.request_timeout_secs
            )));
        }

        Ok(())
    }

    /// Whether a non-blank API key is configured.
    pub fn has_api_key(&self) -> bool {
        self.api_key
            .as_deref()
            .is_some_and(|key| !key.trim().is_empty())
    }
}
